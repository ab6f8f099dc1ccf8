mod elements;
mod frame_control;
mod header;
mod sequence_control;

pub use elements::parse_information_elements;
pub use frame_control::parse_frame_control;
pub use header::parse_management_header;
pub use sequence_control::parse_sequence_control;
