#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FrameType {
    Management,
    Control,
    Data,
    Unknown,
}

/// Management frame subtypes.
///
/// Control and data frames are outside this crate's scope; their subtype
/// field maps to [FrameSubType::Unhandled] wholesale.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FrameSubType {
    AssociationRequest,
    AssociationResponse,
    ReassociationRequest,
    ReassociationResponse,
    ProbeRequest,
    ProbeResponse,
    TimingAdvertisement,
    Beacon,
    Atim,
    Disassociation,
    Authentication,
    Deauthentication,
    Action,
    ActionNoAck,
    Reserved,
    Unhandled,
}

impl FrameSubType {
    /// The 4-bit subtype value as transmitted in the frame control field.
    pub fn to_bytes(&self) -> u8 {
        match self {
            FrameSubType::AssociationRequest => 0,
            FrameSubType::AssociationResponse => 1,
            FrameSubType::ReassociationRequest => 2,
            FrameSubType::ReassociationResponse => 3,
            FrameSubType::ProbeRequest => 4,
            FrameSubType::ProbeResponse => 5,
            FrameSubType::TimingAdvertisement => 6,
            FrameSubType::Beacon => 8,
            FrameSubType::Atim => 9,
            FrameSubType::Disassociation => 10,
            FrameSubType::Authentication => 11,
            FrameSubType::Deauthentication => 12,
            FrameSubType::Action => 13,
            FrameSubType::ActionNoAck => 14,
            FrameSubType::Reserved => 7,
            FrameSubType::Unhandled => 15,
        }
    }
}
