use super::{FrameControl, MacAddress, SequenceControl};

/// Representation of a management frame header. This format is used by all
/// management frames.
///
/// Structure:
///
/// byte 0-1: [FrameControl] (already parsed when this struct is built)
/// byte 2-3: Duration. Always present.
/// byte 4-9: Address 1. The recipient station address.
/// byte 10-15: Address 2. The transmitter station address.
/// byte 16-21: Address 3. The BSSID.
/// byte 22-23: [SequenceControl].
///
/// For the frames a fake access point deals in, none of the DS flags are
/// set, so address 2 is the source and address 3 mirrors it.
#[derive(Clone, Debug)]
pub struct ManagementHeader {
    pub frame_control: FrameControl,
    pub duration: [u8; 2],
    pub address_1: MacAddress,
    pub address_2: MacAddress,
    pub address_3: MacAddress,
    pub sequence_control: SequenceControl,
}

impl ManagementHeader {
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(24);

        bytes.extend(self.frame_control.encode());
        bytes.extend(self.duration);
        bytes.extend(self.address_1.encode());
        bytes.extend(self.address_2.encode());
        bytes.extend(self.address_3.encode());
        bytes.extend(self.sequence_control.encode());

        bytes
    }
}
