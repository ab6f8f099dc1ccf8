/// Airframe's own [Error](error::Error) implementation
pub mod error;
/// The [Frame](frame::Frame) enum and the management frame structs.
pub mod frame;
/// Enums representing frame types and frame subtypes.
mod frame_types;
/// [nom] parsers for internal usage.
pub mod parsers;

use crate::error::Error;
use crate::parsers::*;

// Re-exports for user convenience
pub use crate::frame::Frame;
pub use crate::frame_types::*;

use crc::{Crc, CRC_32_ISO_HDLC};

// CRC algorithm for FCS verification
const CRC_32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Parse an IEEE 802.11 frame from raw bytes.
///
/// Only the management subtypes this crate models (Beacon, Probe Request,
/// Probe Response) produce a [Frame]; everything else is reported as
/// [Error::UnhandledFrameSubtype]. All reads are bounded by `input`.
pub fn parse_frame(input: &[u8], fcs_included: bool) -> Result<Frame, Error> {
    let input = if fcs_included {
        if input.len() < 4 {
            return Err(Error::Incomplete(
                "frame is shorter than its FCS".to_string(),
            ));
        }

        // Split the input into frame data and FCS
        let (frame_data, fcs_bytes) = input.split_at(input.len() - 4);

        // The FCS trails the frame as a little-endian CRC32 over the frame data.
        let crc = CRC_32.checksum(frame_data);
        let fcs = u32::from_le_bytes([fcs_bytes[0], fcs_bytes[1], fcs_bytes[2], fcs_bytes[3]]);

        if crc != fcs {
            return Err(Error::Failure(
                format!("FCS mismatch: calculated {crc:08x}, trailer {fcs:08x}"),
                frame_data.to_vec(),
            ));
        }

        frame_data
    } else {
        input
    };

    let (input, frame_control) = parse_frame_control(input)?;

    match frame_control.frame_subtype {
        FrameSubType::Beacon => parse_beacon(frame_control, input),
        FrameSubType::ProbeRequest => parse_probe_request(frame_control, input),
        FrameSubType::ProbeResponse => parse_probe_response(frame_control, input),
        _ => Err(Error::UnhandledFrameSubtype(frame_control, input.to_vec())),
    }
}
