/// The tagged, length-prefixed information elements that trail the fixed
/// fields of a management frame.
///
/// Each element carries a one-byte id, a one-byte length and up to 255
/// payload bytes. Elements this library understands get their own typed
/// field; everything else is preserved verbatim in `other` under its
/// element id.
///
/// The SSID is kept as raw bytes, not a `String`: the standard allows any
/// octet string up to 32 bytes, and matching against probe requests has to
/// be byte-exact. A present-but-empty SSID is meaningful (it is the
/// wildcard in a probe request), which is why the field is
/// `Option<Vec<u8>>` rather than collapsing empty into `None`.
#[derive(Clone, Debug, Default)]
pub struct InformationElements {
    pub ssid: Option<Vec<u8>>,
    pub supported_rates: Vec<SupportedRate>,
    pub ds_parameter_set: Option<u8>,
    pub rsn: Option<RsnInformation>,
    pub wpa: Option<WpaInformation>,
    pub other: Vec<(u8, Vec<u8>)>,
}

impl InformationElements {
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        // SSID element (tag 0). Emitted first, as every real AP does.
        if let Some(ssid) = &self.ssid {
            bytes.push(0);
            bytes.push(ssid.len() as u8);
            bytes.extend_from_slice(ssid);
        }

        // Supported rates (tag 1). Rates are transmitted in 500 kbps units,
        // with the MSB marking a rate as part of the basic rate set.
        if !self.supported_rates.is_empty() {
            bytes.push(1);
            bytes.push(self.supported_rates.len() as u8);
            for rate in &self.supported_rates {
                bytes.push(rate.encode());
            }
        }

        // DS parameter set (tag 3): the current channel.
        if let Some(channel) = self.ds_parameter_set {
            bytes.push(3);
            bytes.push(1);
            bytes.push(channel);
        }

        // RSN information (tag 48).
        if let Some(rsn) = &self.rsn {
            let encoded = rsn.encode();
            bytes.push(48);
            bytes.push(encoded.len() as u8);
            bytes.extend(encoded);
        }

        // WPA1 rides in a vendor-specific element (tag 221); the
        // Microsoft OUI and type octet are part of the element body.
        if let Some(wpa) = &self.wpa {
            let encoded = wpa.encode();
            bytes.push(221);
            bytes.push(encoded.len() as u8);
            bytes.extend(encoded);
        }

        for (id, data) in &self.other {
            bytes.push(*id);
            bytes.push(data.len() as u8);
            bytes.extend(data);
        }

        bytes
    }

    /// The SSID as text for log output. Lossy on purpose.
    pub fn ssid_string(&self) -> String {
        match &self.ssid {
            Some(ssid) if ssid.is_empty() => "<wildcard>".to_string(),
            Some(ssid) => String::from_utf8_lossy(ssid).to_string(),
            None => "<none>".to_string(),
        }
    }

    /// True if this element set carries the zero-length SSID a station uses
    /// to ask for every network in range.
    pub fn has_wildcard_ssid(&self) -> bool {
        matches!(&self.ssid, Some(ssid) if ssid.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SupportedRate {
    pub mandatory: bool,
    /// Rate in Mbps.
    pub rate: f32,
}

impl SupportedRate {
    pub fn encode(&self) -> u8 {
        let rate_byte = (self.rate * 2.0) as u8;
        if self.mandatory {
            rate_byte | 0x80
        } else {
            rate_byte
        }
    }
}

/// The RSN element body (tag 48): WPA2/WPA3 cipher and AKM suite selectors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RsnInformation {
    pub version: u16,
    pub group_cipher_suite: RsnCipherSuite,
    pub pairwise_cipher_suites: Vec<RsnCipherSuite>,
    pub akm_suites: Vec<RsnAkmSuite>,
    pub capabilities: u16,
}

impl RsnInformation {
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        bytes.extend_from_slice(&self.version.to_le_bytes());
        bytes.extend(self.group_cipher_suite.encode());

        bytes.extend_from_slice(&(self.pairwise_cipher_suites.len() as u16).to_le_bytes());
        for suite in &self.pairwise_cipher_suites {
            bytes.extend(suite.encode());
        }

        bytes.extend_from_slice(&(self.akm_suites.len() as u16).to_le_bytes());
        for suite in &self.akm_suites {
            bytes.extend(suite.encode());
        }

        bytes.extend_from_slice(&self.capabilities.to_le_bytes());

        bytes
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum RsnCipherSuite {
    TKIP,
    #[default]
    CCMP,
    Unknown(Vec<u8>),
}

impl RsnCipherSuite {
    pub fn encode(&self) -> Vec<u8> {
        match self {
            RsnCipherSuite::TKIP => vec![0x00, 0x0F, 0xAC, 0x02],
            RsnCipherSuite::CCMP => vec![0x00, 0x0F, 0xAC, 0x04],
            RsnCipherSuite::Unknown(data) => data.clone(),
        }
    }

    pub fn from_selector(selector: &[u8]) -> Self {
        match selector {
            [0x00, 0x0F, 0xAC, 0x02] => RsnCipherSuite::TKIP,
            [0x00, 0x0F, 0xAC, 0x04] => RsnCipherSuite::CCMP,
            other => RsnCipherSuite::Unknown(other.to_vec()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum RsnAkmSuite {
    #[default]
    PSK,
    SAE,
    Unknown(Vec<u8>),
}

impl RsnAkmSuite {
    pub fn encode(&self) -> Vec<u8> {
        match self {
            RsnAkmSuite::PSK => vec![0x00, 0x0F, 0xAC, 0x02],
            RsnAkmSuite::SAE => vec![0x00, 0x0F, 0xAC, 0x08],
            RsnAkmSuite::Unknown(data) => data.clone(),
        }
    }

    pub fn from_selector(selector: &[u8]) -> Self {
        match selector {
            [0x00, 0x0F, 0xAC, 0x02] => RsnAkmSuite::PSK,
            [0x00, 0x0F, 0xAC, 0x08] => RsnAkmSuite::SAE,
            other => RsnAkmSuite::Unknown(other.to_vec()),
        }
    }
}

/// The WPA1 vendor element body: Microsoft OUI, type octet, then the same
/// version/cipher/AKM layout RSN uses (with OUI-spaced selectors and no
/// capability field).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WpaInformation {
    pub version: u16,
    pub multicast_cipher_suite: WpaCipherSuite,
    pub unicast_cipher_suites: Vec<WpaCipherSuite>,
    pub akm_suites: Vec<WpaAkmSuite>,
}

impl WpaInformation {
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        // Microsoft OUI + WPA type
        bytes.extend_from_slice(&[0x00, 0x50, 0xF2, 0x01]);

        bytes.extend_from_slice(&self.version.to_le_bytes());
        bytes.extend(self.multicast_cipher_suite.encode());

        bytes.extend_from_slice(&(self.unicast_cipher_suites.len() as u16).to_le_bytes());
        for suite in &self.unicast_cipher_suites {
            bytes.extend(suite.encode());
        }

        bytes.extend_from_slice(&(self.akm_suites.len() as u16).to_le_bytes());
        for suite in &self.akm_suites {
            bytes.extend(suite.encode());
        }

        bytes
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum WpaCipherSuite {
    Tkip,
    #[default]
    Ccmp,
    Unknown(Vec<u8>),
}

impl WpaCipherSuite {
    pub fn encode(&self) -> Vec<u8> {
        match self {
            WpaCipherSuite::Tkip => vec![0x00, 0x50, 0xF2, 0x02],
            WpaCipherSuite::Ccmp => vec![0x00, 0x50, 0xF2, 0x04],
            WpaCipherSuite::Unknown(data) => data.clone(),
        }
    }

    pub fn from_selector(selector: &[u8]) -> Self {
        match selector {
            [0x00, 0x50, 0xF2, 0x02] => WpaCipherSuite::Tkip,
            [0x00, 0x50, 0xF2, 0x04] => WpaCipherSuite::Ccmp,
            other => WpaCipherSuite::Unknown(other.to_vec()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum WpaAkmSuite {
    #[default]
    Psk,
    Eap,
    Unknown(Vec<u8>),
}

impl WpaAkmSuite {
    pub fn encode(&self) -> Vec<u8> {
        match self {
            WpaAkmSuite::Psk => vec![0x00, 0x50, 0xF2, 0x02],
            WpaAkmSuite::Eap => vec![0x00, 0x50, 0xF2, 0x01],
            WpaAkmSuite::Unknown(data) => data.clone(),
        }
    }

    pub fn from_selector(selector: &[u8]) -> Self {
        match selector {
            [0x00, 0x50, 0xF2, 0x02] => WpaAkmSuite::Psk,
            [0x00, 0x50, 0xF2, 0x01] => WpaAkmSuite::Eap,
            other => WpaAkmSuite::Unknown(other.to_vec()),
        }
    }
}
