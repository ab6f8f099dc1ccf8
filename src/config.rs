use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::registry::MAX_SSIDS;
use crate::security::SecurityMode;

/// Runtime configuration, normally read from a JSON file.
///
/// Every field carries a default so a partial (or absent, or broken) file
/// still yields something the tool can run with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Security mode ordinal (0=open .. 7=wpa2/wpa3 mixed).
    #[serde(default = "default_security")]
    pub security: u8,

    /// 2.4GHz channel the interface is pinned to.
    #[serde(default = "default_channel")]
    pub channel: u8,

    /// Target beacon interval in milliseconds.
    #[serde(default = "default_beacon_interval")]
    pub beacon_interval: u64,

    /// First five octets of every derived BSSID.
    #[serde(default = "default_mac_prefix")]
    pub mac_prefix: Vec<u8>,

    /// Networks to advertise, in index order.
    #[serde(default)]
    pub ssids: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            security: default_security(),
            channel: default_channel(),
            beacon_interval: default_beacon_interval(),
            mac_prefix: default_mac_prefix(),
            ssids: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        Ok(config)
    }

    /// The configured security mode. Unknown ordinals fall back to WPA2-AES
    /// so a typo in the config degrades to the default rather than aborting.
    pub fn security_mode(&self) -> SecurityMode {
        SecurityMode::from_ordinal(self.security).unwrap_or(SecurityMode::Wpa2Aes)
    }

    /// The 5-octet BSSID prefix. Short or overlong configured prefixes fall
    /// back to the default, with the locally-administered bit always forced
    /// on so we never collide with a real vendor OUI.
    pub fn bssid_prefix(&self) -> [u8; 5] {
        let mut prefix = [0u8; 5];
        if self.mac_prefix.len() == 5 {
            prefix.copy_from_slice(&self.mac_prefix);
        } else {
            prefix.copy_from_slice(&default_mac_prefix());
        }
        prefix[0] |= 0x02;
        prefix
    }

    /// SSIDs as raw byte vectors, capped to the registry limit.
    pub fn ssid_bytes(&self) -> Vec<Vec<u8>> {
        self.ssids
            .iter()
            .take(MAX_SSIDS)
            .map(|s| s.clone().into_bytes())
            .collect()
    }
}

fn default_security() -> u8 {
    4 // WPA2-AES
}

fn default_channel() -> u8 {
    6
}

fn default_beacon_interval() -> u64 {
    100
}

fn default_mac_prefix() -> Vec<u8> {
    vec![0x02, 0x11, 0x22, 0x33, 0x44]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.channel, 6);
        assert_eq!(config.beacon_interval, 100);
        assert_eq!(config.security_mode(), SecurityMode::Wpa2Aes);
        assert!(config.ssids.is_empty());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"ssids": ["one", "two"], "channel": 11}"#).unwrap();
        assert_eq!(config.channel, 11);
        assert_eq!(config.security, 4);
        assert_eq!(config.ssid_bytes(), vec![b"one".to_vec(), b"two".to_vec()]);
    }

    #[test]
    fn test_unknown_security_ordinal_falls_back() {
        let config: Config = serde_json::from_str(r#"{"security": 42}"#).unwrap();
        assert_eq!(config.security_mode(), SecurityMode::Wpa2Aes);
    }

    #[test]
    fn test_bad_mac_prefix_falls_back() {
        let config: Config = serde_json::from_str(r#"{"mac_prefix": [1, 2, 3]}"#).unwrap();
        assert_eq!(config.bssid_prefix(), [0x02, 0x11, 0x22, 0x33, 0x44]);
    }

    #[test]
    fn test_locally_administered_bit_forced() {
        let config: Config =
            serde_json::from_str(r#"{"mac_prefix": [0, 170, 187, 204, 221]}"#).unwrap();
        assert_eq!(config.bssid_prefix(), [0x02, 0xAA, 0xBB, 0xCC, 0xDD]);
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = Config::default();
        config.ssids = vec!["CoffeeShop".to_string()];
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.ssids, config.ssids);
    }
}
