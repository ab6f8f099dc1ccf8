mod elements;
mod frame_control;
mod header;
mod mac_address;
mod sequence_control;

pub use elements::{
    InformationElements, RsnAkmSuite, RsnCipherSuite, RsnInformation, SupportedRate,
    WpaAkmSuite, WpaCipherSuite, WpaInformation,
};
pub use frame_control::FrameControl;
pub use header::ManagementHeader;
pub use mac_address::MacAddress;
pub use sequence_control::SequenceControl;
