use airframe::frame::components::{
    RsnAkmSuite, RsnCipherSuite, RsnInformation, WpaAkmSuite, WpaCipherSuite, WpaInformation,
};
use strum_macros::{Display, EnumString, FromRepr};

/// The advertised security posture of every fake access point.
///
/// Set once at startup from configuration. The ordinal values are the ones
/// accepted in the config file, which is why they are pinned with `repr`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, FromRepr)]
#[strum(serialize_all = "kebab-case")]
#[repr(u8)]
pub enum SecurityMode {
    /// Open network, no security element at all.
    Open = 0,
    /// WPA-PSK (TKIP), for legacy device compatibility.
    WpaTkip = 1,
    /// WPA-PSK (AES/CCMP).
    WpaAes = 2,
    /// WPA2-PSK (TKIP) compatibility mode.
    Wpa2Tkip = 3,
    /// WPA2-PSK (AES/CCMP), the default.
    Wpa2Aes = 4,
    /// WPA2-PSK (TKIP+AES), maximum compatibility.
    Wpa2Mixed = 5,
    /// WPA3-SAE.
    Wpa3 = 6,
    /// WPA2/WPA3 mixed mode.
    Wpa2Wpa3 = 7,
}

impl SecurityMode {
    pub fn from_ordinal(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// The RSN element body for this mode, if it advertises WPA2/WPA3.
    pub fn rsn(&self) -> Option<RsnInformation> {
        let (group, pairwise, akm) = match self {
            SecurityMode::Wpa2Tkip => (
                RsnCipherSuite::TKIP,
                vec![RsnCipherSuite::TKIP],
                vec![RsnAkmSuite::PSK],
            ),
            SecurityMode::Wpa2Aes => (
                RsnCipherSuite::CCMP,
                vec![RsnCipherSuite::CCMP],
                vec![RsnAkmSuite::PSK],
            ),
            SecurityMode::Wpa2Mixed => (
                RsnCipherSuite::TKIP,
                vec![RsnCipherSuite::TKIP, RsnCipherSuite::CCMP],
                vec![RsnAkmSuite::PSK],
            ),
            SecurityMode::Wpa3 => (
                RsnCipherSuite::CCMP,
                vec![RsnCipherSuite::CCMP],
                vec![RsnAkmSuite::SAE],
            ),
            SecurityMode::Wpa2Wpa3 => (
                RsnCipherSuite::CCMP,
                vec![RsnCipherSuite::CCMP],
                vec![RsnAkmSuite::PSK, RsnAkmSuite::SAE],
            ),
            _ => return None,
        };

        Some(RsnInformation {
            version: 1,
            group_cipher_suite: group,
            pairwise_cipher_suites: pairwise,
            akm_suites: akm,
            capabilities: 0,
        })
    }

    /// The WPA1 vendor element body for this mode, if it advertises WPA1.
    pub fn wpa(&self) -> Option<WpaInformation> {
        let cipher = match self {
            SecurityMode::WpaTkip => WpaCipherSuite::Tkip,
            SecurityMode::WpaAes => WpaCipherSuite::Ccmp,
            _ => return None,
        };

        Some(WpaInformation {
            version: 1,
            multicast_cipher_suite: cipher.clone(),
            unicast_cipher_suites: vec![cipher],
            akm_suites: vec![WpaAkmSuite::Psk],
        })
    }

    /// The complete security information element (tag and length octets
    /// included) this mode puts on the air, or `None` for open networks.
    pub fn information_element(&self) -> Option<Vec<u8>> {
        if let Some(rsn) = self.rsn() {
            let body = rsn.encode();
            let mut bytes = vec![48, body.len() as u8];
            bytes.extend(body);
            return Some(bytes);
        }
        if let Some(wpa) = self.wpa() {
            let body = wpa.encode();
            let mut bytes = vec![221, body.len() as u8];
            bytes.extend(body);
            return Some(bytes);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_open_has_no_element() {
        assert!(SecurityMode::Open.information_element().is_none());
        assert!(SecurityMode::Open.rsn().is_none());
        assert!(SecurityMode::Open.wpa().is_none());
    }

    #[test]
    fn test_wpa1_tkip_element_bytes() {
        let expected: Vec<u8> = vec![
            0xdd, 0x16, // Vendor Specific tag and length
            0x00, 0x50, 0xf2, 0x01, // Microsoft OUI + WPA type
            0x01, 0x00, // Version 1
            0x00, 0x50, 0xf2, 0x02, // Group cipher: TKIP
            0x01, 0x00, // Pairwise cipher count: 1
            0x00, 0x50, 0xf2, 0x02, // Pairwise cipher: TKIP
            0x01, 0x00, // AKM suite count: 1
            0x00, 0x50, 0xf2, 0x02, // AKM suite: PSK
        ];
        assert_eq!(SecurityMode::WpaTkip.information_element(), Some(expected));
    }

    #[test]
    fn test_wpa1_aes_element_bytes() {
        let expected: Vec<u8> = vec![
            0xdd, 0x16, 0x00, 0x50, 0xf2, 0x01, 0x01, 0x00, //
            0x00, 0x50, 0xf2, 0x04, // Group cipher: CCMP
            0x01, 0x00, 0x00, 0x50, 0xf2, 0x04, // Pairwise cipher: CCMP
            0x01, 0x00, 0x00, 0x50, 0xf2, 0x02, // AKM suite: PSK
        ];
        assert_eq!(SecurityMode::WpaAes.information_element(), Some(expected));
    }

    #[test]
    fn test_wpa2_tkip_element_bytes() {
        let expected: Vec<u8> = vec![
            0x30, 0x14, // RSN tag and length
            0x01, 0x00, // Version 1
            0x00, 0x0f, 0xac, 0x02, // Group cipher: TKIP
            0x01, 0x00, 0x00, 0x0f, 0xac, 0x02, // Pairwise cipher: TKIP
            0x01, 0x00, 0x00, 0x0f, 0xac, 0x02, // AKM suite: PSK
            0x00, 0x00, // RSN capabilities
        ];
        assert_eq!(SecurityMode::Wpa2Tkip.information_element(), Some(expected));
    }

    #[test]
    fn test_wpa2_aes_element_bytes() {
        let expected: Vec<u8> = vec![
            0x30, 0x14, 0x01, 0x00, //
            0x00, 0x0f, 0xac, 0x04, // Group cipher: CCMP
            0x01, 0x00, 0x00, 0x0f, 0xac, 0x04, // Pairwise cipher: CCMP
            0x01, 0x00, 0x00, 0x0f, 0xac, 0x02, // AKM suite: PSK
            0x00, 0x00,
        ];
        assert_eq!(SecurityMode::Wpa2Aes.information_element(), Some(expected));
    }

    #[test]
    fn test_wpa2_mixed_element_bytes() {
        let expected: Vec<u8> = vec![
            0x30, 0x18, 0x01, 0x00, //
            0x00, 0x0f, 0xac, 0x02, // Group cipher: TKIP
            0x02, 0x00, // Pairwise cipher count: 2
            0x00, 0x0f, 0xac, 0x02, // Pairwise cipher: TKIP
            0x00, 0x0f, 0xac, 0x04, // Pairwise cipher: CCMP
            0x01, 0x00, 0x00, 0x0f, 0xac, 0x02, // AKM suite: PSK
            0x00, 0x00,
        ];
        assert_eq!(SecurityMode::Wpa2Mixed.information_element(), Some(expected));
    }

    #[test]
    fn test_wpa3_element_bytes() {
        let expected: Vec<u8> = vec![
            0x30, 0x14, 0x01, 0x00, //
            0x00, 0x0f, 0xac, 0x04, // Group cipher: CCMP
            0x01, 0x00, 0x00, 0x0f, 0xac, 0x04, // Pairwise cipher: CCMP
            0x01, 0x00, 0x00, 0x0f, 0xac, 0x08, // AKM suite: SAE
            0x00, 0x00,
        ];
        assert_eq!(SecurityMode::Wpa3.information_element(), Some(expected));
    }

    #[test]
    fn test_wpa2_wpa3_mixed_element_bytes() {
        let expected: Vec<u8> = vec![
            0x30, 0x18, 0x01, 0x00, //
            0x00, 0x0f, 0xac, 0x04, // Group cipher: CCMP
            0x01, 0x00, 0x00, 0x0f, 0xac, 0x04, // Pairwise cipher: CCMP
            0x02, 0x00, // AKM suite count: 2
            0x00, 0x0f, 0xac, 0x02, // AKM suite: PSK (WPA2)
            0x00, 0x0f, 0xac, 0x08, // AKM suite: SAE (WPA3)
            0x00, 0x00,
        ];
        assert_eq!(SecurityMode::Wpa2Wpa3.information_element(), Some(expected));
    }

    #[test]
    /// The declared element length always matches the body that follows it.
    fn test_length_octet_matches_body() {
        for ordinal in 1..=7u8 {
            let mode = SecurityMode::from_ordinal(ordinal).unwrap();
            let element = mode.information_element().unwrap();
            assert_eq!(element[1] as usize, element.len() - 2, "{mode}");
        }
    }

    #[test]
    fn test_ordinals_and_names() {
        assert_eq!(SecurityMode::from_ordinal(4), Some(SecurityMode::Wpa2Aes));
        assert_eq!(SecurityMode::from_ordinal(8), None);
        assert_eq!(
            SecurityMode::from_str("wpa2-mixed").unwrap(),
            SecurityMode::Wpa2Mixed
        );
        assert_eq!(SecurityMode::Wpa3.to_string(), "wpa3");
    }
}
