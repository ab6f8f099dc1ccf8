use airframe::frame::components::MacAddress;

/// Hard cap on configured networks; entries past this are dropped at load.
pub const MAX_SSIDS: usize = 100;
/// The standard's limit on SSID length in bytes.
pub const MAX_SSID_LEN: usize = 32;

/// One advertised network: up to 32 raw SSID bytes, stored byte-exact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SsidEntry {
    bytes: Vec<u8>,
}

impl SsidEntry {
    /// Build an entry from raw bytes, truncating anything past 32.
    pub fn new(mut bytes: Vec<u8>) -> Self {
        bytes.truncate(MAX_SSID_LEN);
        SsidEntry { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Lossy rendering for log output.
    pub fn display(&self) -> String {
        String::from_utf8_lossy(&self.bytes).to_string()
    }
}

/// The ordered, index-stable list of networks to impersonate, plus the
/// shared 5-byte MAC prefix every derived BSSID starts with.
///
/// Built once at startup; immutable afterwards. One physical radio plays
/// N access points by giving each SSID index its own BSSID suffix, so
/// listening clients see N distinct networks.
#[derive(Clone, Debug)]
pub struct SsidRegistry {
    entries: Vec<SsidEntry>,
    mac_prefix: [u8; 5],
}

impl SsidRegistry {
    pub fn new<I>(ssids: I, mac_prefix: [u8; 5]) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        let entries = ssids
            .into_iter()
            .take(MAX_SSIDS)
            .map(SsidEntry::new)
            .collect();

        SsidRegistry {
            entries,
            mac_prefix,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (usize, &SsidEntry)> {
        self.entries.iter().enumerate()
    }

    pub fn get(&self, index: usize) -> Option<&SsidEntry> {
        self.entries.get(index)
    }

    /// The BSSID a given SSID index transmits under: the shared prefix
    /// plus a per-index suffix. `0x10 + index` keeps the derived addresses
    /// clear of the radio's own suffix while staying deterministic.
    pub fn bssid_for(&self, index: usize) -> MacAddress {
        let mut mac = [0u8; 6];
        mac[..5].copy_from_slice(&self.mac_prefix);
        mac[5] = (0x10 + index) as u8;
        MacAddress(mac)
    }

}
