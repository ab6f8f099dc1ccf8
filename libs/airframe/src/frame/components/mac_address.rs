use std::fmt;

/// This is our representation of a MAC address
///
/// ```
/// use airframe::frame::components::MacAddress;
///
/// let address = MacAddress([255, 255, 255, 255, 255, 255]);
/// assert!(address.is_broadcast());
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Copy, Hash, Ord, PartialOrd)]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    pub fn from_vec(vec: Vec<u8>) -> Option<MacAddress> {
        if vec.len() != 6 {
            return None;
        }
        let mut arr = [0u8; 6];
        arr.copy_from_slice(&vec);
        Some(MacAddress(arr))
    }

    pub fn broadcast() -> Self {
        MacAddress([255, 255, 255, 255, 255, 255])
    }

    pub fn zeroed() -> Self {
        MacAddress([0, 0, 0, 0, 0, 0])
    }

    /// Encode mac address for network.
    pub fn encode(&self) -> [u8; 6] {
        self.0
    }

    /// Check if this is a locally administered address (U/L bit set).
    pub fn is_private(&self) -> bool {
        self.0[0] & 0x02 != 0
    }

    /// Check whether this MAC addresses the whole network.
    pub fn is_broadcast(&self) -> bool {
        self.0 == [255, 255, 255, 255, 255, 255]
    }

    /// Check if this is a multicast address.
    pub fn is_mcast(&self) -> bool {
        self.0[0] % 2 == 1
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5],
        )
    }
}
