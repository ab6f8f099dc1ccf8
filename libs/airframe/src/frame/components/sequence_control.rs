#[derive(Clone, Debug)]
pub struct SequenceControl {
    /// The 4 bit fragment number from a sequence control field.
    pub fragment_number: u8,
    /// The 12 bit sequence number from a sequence control field.
    pub sequence_number: u16,
}

impl SequenceControl {
    pub fn encode(&self) -> [u8; 2] {
        // The sequence number occupies the upper 12 bits,
        // the fragment number the lower 4.
        let combined =
            ((self.sequence_number & 0x0FFF) << 4) | (self.fragment_number & 0x0F) as u16;

        combined.to_le_bytes()
    }
}
