// Thin wrappers around nl80211 interface operations.

use nl80211_ng::channels::WiFiBand;
use nl80211_ng::{get_interface_info_idx, set_interface_chan};

pub use nl80211_ng::{Interface, Nl80211};

pub trait InterfaceExt {
    fn name_as_string(&self) -> String;
}

impl InterfaceExt for Interface {
    fn name_as_string(&self) -> String {
        self.name
            .clone()
            .and_then(|n| String::from_utf8(n).ok())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Band(WiFiBand);

impl Band {
    pub const BAND_2_4_GHZ: Band = Band(WiFiBand::Band2GHz);

    #[allow(clippy::wrong_self_convention)]
    pub fn to_u8(&self) -> u8 {
        match self.0 {
            WiFiBand::Band2GHz => 0,
            WiFiBand::Band5GHz => 1,
            WiFiBand::Band6GHz => 2,
            WiFiBand::Band60GHz => 3,
            _ => 255,
        }
    }
}

pub fn get_nl80211() -> Result<Nl80211, String> {
    Nl80211::new().map_err(|e| e.to_string())
}

pub fn get_interface_info(ifindex: i32) -> Result<Interface, String> {
    get_interface_info_idx(ifindex as u32).map_err(|e| e.to_string())
}

pub fn set_interface_channel(ifindex: i32, channel: u8, band: Band) -> Result<(), String> {
    set_interface_chan(ifindex as u32, channel as u32, band.to_u8()).map_err(|e| e.to_string())
}
