use crate::frame_types::*;

#[inline]
/// Mini helper to check whether a bit is set or not.
fn flag_is_set(data: u8, bit: u8) -> bool {
    let mask = 1 << bit;
    (data & mask) > 0
}

/// The very first two bytes of every frame contain the FrameControl header.
///
/// First byte:
///
/// - **bit_0-1**: Protocol version. Until now, this has always been 0.
/// - **bit_2-3**: [FrameType]
/// - **bit_4-7**: [FrameSubType]
///
/// Second byte (Flags):
/// - **bit_0** `to_ds`: Set if the frame is destined for the distribution system.
/// - **bit_1** `from_ds`: Set if the frame comes from the distribution system.
/// - **bit_2** `more_frag`: Set if this frame is a fragment with more fragments to follow.
/// - **bit_3** `retry`: Set if this frame is a retransmission.
/// - **bit_4-7**: power management, more data, protected frame, order.
#[derive(Clone, Debug)]
pub struct FrameControl {
    pub protocol_version: u8,
    pub frame_type: FrameType,
    pub frame_subtype: FrameSubType,
    pub flags: u8,
}

impl FrameControl {
    pub fn to_ds(&self) -> bool {
        flag_is_set(self.flags, 0)
    }

    pub fn from_ds(&self) -> bool {
        flag_is_set(self.flags, 1)
    }

    pub fn retry(&self) -> bool {
        flag_is_set(self.flags, 3)
    }

    pub fn encode(&self) -> [u8; 2] {
        let protocol_version_bits = self.protocol_version & 0b11; // 2 bits
        let frame_type_bits = (self.frame_type as u8 & 0b11) << 2; // 2 bits
        let frame_subtype_bits = (self.frame_subtype.to_bytes() & 0b1111) << 4; // 4 bits

        let first_byte = frame_subtype_bits | frame_type_bits | protocol_version_bits;

        [first_byte, self.flags]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse_frame_control;

    #[test]
    /// A beacon's frame control on the wire starts with 0x80:
    /// subtype 8, type management, protocol version 0.
    fn test_beacon() {
        let bytes = [0b1000_0000, 0b0000_0000];
        let frame_control = parse_frame_control(&bytes).unwrap().1;

        assert!(matches!(frame_control.frame_type, FrameType::Management));
        assert!(matches!(frame_control.frame_subtype, FrameSubType::Beacon));
        assert_eq!(frame_control.encode(), bytes);
    }

    #[test]
    /// A probe request starts with 0x40 (subtype 4), a probe response
    /// with 0x50 (subtype 5).
    fn test_probe_subtypes() {
        let request = parse_frame_control(&[0x40, 0x00]).unwrap().1;
        assert!(matches!(
            request.frame_subtype,
            FrameSubType::ProbeRequest
        ));
        assert_eq!(request.encode(), [0x40, 0x00]);

        let response = parse_frame_control(&[0x50, 0x00]).unwrap().1;
        assert!(matches!(
            response.frame_subtype,
            FrameSubType::ProbeResponse
        ));
        assert_eq!(response.encode(), [0x50, 0x00]);
    }

    #[test]
    fn test_flags() {
        let frame_control = parse_frame_control(&[0x80, 0b0000_1011]).unwrap().1;
        assert!(frame_control.to_ds());
        assert!(frame_control.from_ds());
        assert!(frame_control.retry());
    }
}
