use crate::frame::components::*;

#[derive(Clone, Debug)]
pub struct Beacon {
    pub header: ManagementHeader,
    pub timestamp: u64,
    pub beacon_interval: u16,
    pub capability_info: u16,
    pub elements: InformationElements,
}

impl Beacon {
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = self.header.encode();

        bytes.extend_from_slice(&self.timestamp.to_le_bytes());
        bytes.extend_from_slice(&self.beacon_interval.to_le_bytes());
        bytes.extend_from_slice(&self.capability_info.to_le_bytes());
        bytes.extend(self.elements.encode());

        bytes
    }
}

#[derive(Clone, Debug)]
pub struct ProbeRequest {
    pub header: ManagementHeader,
    pub elements: InformationElements,
}

impl ProbeRequest {
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = self.header.encode();
        bytes.extend(self.elements.encode());
        bytes
    }
}

/// A probe response shares the beacon's fixed-field layout; only the frame
/// subtype and the (unicast) receiver address differ.
#[derive(Clone, Debug)]
pub struct ProbeResponse {
    pub header: ManagementHeader,
    pub timestamp: u64,
    pub beacon_interval: u16,
    pub capability_info: u16,
    pub elements: InformationElements,
}

impl ProbeResponse {
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = self.header.encode();

        bytes.extend_from_slice(&self.timestamp.to_le_bytes());
        bytes.extend_from_slice(&self.beacon_interval.to_le_bytes());
        bytes.extend_from_slice(&self.capability_info.to_le_bytes());
        bytes.extend(self.elements.encode());

        bytes
    }
}
