use airframe::frame::components::{
    FrameControl, InformationElements, MacAddress, ManagementHeader, SequenceControl,
    SupportedRate,
};
use airframe::frame::{Beacon, ProbeResponse};
use airframe::{FrameSubType, FrameType};

use crate::security::SecurityMode;

/// Radiotap injection header asking the driver not to wait for ACKs.
/// A fake AP never retransmits; frames are fire-and-forget.
const RTH_NO_ACK: [u8; 10] = [
    0x00, 0x00, /* radiotap version and padding */
    0x0a, 0x00, /* radiotap header length */
    0x00, 0x80, 0x00, 0x00, /* bitmap */
    0x28, 0x00, /* tx flags */
];

/// The 802.11b/g rate set every fake network advertises. The four DSSS
/// rates are marked basic so even the oldest clients will associate.
const RATES: [SupportedRate; 8] = [
    SupportedRate {
        rate: 1.0,
        mandatory: true,
    },
    SupportedRate {
        rate: 2.0,
        mandatory: true,
    },
    SupportedRate {
        rate: 5.5,
        mandatory: true,
    },
    SupportedRate {
        rate: 11.0,
        mandatory: true,
    },
    SupportedRate {
        rate: 18.0,
        mandatory: false,
    },
    SupportedRate {
        rate: 24.0,
        mandatory: false,
    },
    SupportedRate {
        rate: 36.0,
        mandatory: false,
    },
    SupportedRate {
        rate: 54.0,
        mandatory: false,
    },
];

/// Capability field: ESS plus short-preamble and short-slot-time, privacy
/// bit clear. Clients learn the security posture from the RSN/WPA element,
/// not this field.
const CAPABILITY_INFO: u16 = 0x0031;

/// Advertised beacon interval in time units. Purely informational; the
/// scheduler decides when beacons actually go out.
const BEACON_INTERVAL_TU: u16 = 100;

fn elements_for(ssid: &[u8], mode: SecurityMode, channel: u8) -> InformationElements {
    InformationElements {
        ssid: Some(ssid.to_vec()),
        supported_rates: RATES.to_vec(),
        ds_parameter_set: Some(channel),
        rsn: mode.rsn(),
        wpa: mode.wpa(),
        other: Vec::new(),
    }
}

/// Build a complete beacon frame for one fake network, radiotap header
/// included, ready to write to the injection socket.
pub fn build_beacon(
    addr_rogue_ap: &MacAddress,
    ssid: &[u8],
    mode: SecurityMode,
    sequence: u16,
    channel: u8,
) -> Vec<u8> {
    let mut rth: Vec<u8> = RTH_NO_ACK.to_vec();

    let frame_control = FrameControl {
        protocol_version: 0,
        frame_type: FrameType::Management,
        frame_subtype: FrameSubType::Beacon,
        flags: 0u8,
    };

    let header = ManagementHeader {
        frame_control,
        duration: [0x00, 0x00],
        address_1: MacAddress::broadcast(),
        address_2: *addr_rogue_ap,
        address_3: *addr_rogue_ap,
        sequence_control: SequenceControl {
            fragment_number: 0u8,
            sequence_number: sequence,
        },
    };

    let frx = Beacon {
        header,
        timestamp: 0,
        beacon_interval: BEACON_INTERVAL_TU,
        capability_info: CAPABILITY_INFO,
        elements: elements_for(ssid, mode, channel),
    };
    rth.extend(frx.encode());
    rth
}

/// Build the unicast probe response for a station that asked after one of
/// our networks. Identical body to the beacon apart from subtype and
/// receiver address.
pub fn build_probe_response(
    addr_client: &MacAddress,
    addr_rogue_ap: &MacAddress,
    ssid: &[u8],
    mode: SecurityMode,
    sequence: u16,
    channel: u8,
) -> Vec<u8> {
    let mut rth: Vec<u8> = RTH_NO_ACK.to_vec();

    let frame_control = FrameControl {
        protocol_version: 0,
        frame_type: FrameType::Management,
        frame_subtype: FrameSubType::ProbeResponse,
        flags: 0u8,
    };

    let header = ManagementHeader {
        frame_control,
        duration: [0x00, 0x00],
        address_1: *addr_client,
        address_2: *addr_rogue_ap,
        address_3: *addr_rogue_ap,
        sequence_control: SequenceControl {
            fragment_number: 0u8,
            sequence_number: sequence,
        },
    };

    let frx = ProbeResponse {
        header,
        timestamp: 0,
        beacon_interval: BEACON_INTERVAL_TU,
        capability_info: CAPABILITY_INFO,
        elements: elements_for(ssid, mode, channel),
    };
    rth.extend(frx.encode());
    rth
}

#[cfg(test)]
mod tests {
    use super::*;
    use airframe::frame::components::{RsnAkmSuite, RsnCipherSuite};
    use airframe::Frame;

    const BSSID: MacAddress = MacAddress([0x02, 0x11, 0x22, 0x33, 0x44, 0x10]);
    const CLIENT: MacAddress = MacAddress([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);

    /// Strip the radiotap header and hand the 802.11 frame to the parser.
    fn parse(bytes: &[u8]) -> Frame {
        let rt_len = u16::from_le_bytes([bytes[2], bytes[3]]) as usize;
        airframe::parse_frame(&bytes[rt_len..], false).unwrap()
    }

    #[test]
    fn test_beacon_wire_layout() {
        let bytes = build_beacon(&BSSID, b"CoffeeShop", SecurityMode::Wpa2Aes, 7, 6);

        // Radiotap header first, then frame control 0x80 0x00.
        assert_eq!(&bytes[..10], &RTH_NO_ACK);
        assert_eq!(&bytes[10..12], &[0x80, 0x00]);

        match parse(&bytes) {
            Frame::Beacon(beacon) => {
                assert!(beacon.header.address_1.is_broadcast());
                assert_eq!(beacon.header.address_2, BSSID);
                assert_eq!(beacon.header.address_3, BSSID);
                assert_eq!(beacon.beacon_interval, 100);
                assert_eq!(beacon.capability_info, 0x0031);
                assert_eq!(beacon.elements.ssid.as_deref(), Some(&b"CoffeeShop"[..]));
                assert_eq!(beacon.elements.ds_parameter_set, Some(6));

                let rsn = beacon.elements.rsn.unwrap();
                assert_eq!(rsn.group_cipher_suite, RsnCipherSuite::CCMP);
                assert_eq!(rsn.akm_suites, vec![RsnAkmSuite::PSK]);
                assert!(beacon.elements.wpa.is_none());
            }
            other => panic!("expected beacon, got {:?}", other),
        }
    }

    #[test]
    fn test_beacon_rates_on_the_wire() {
        let bytes = build_beacon(&BSSID, b"x", SecurityMode::Open, 0, 1);
        let frame_body = &bytes[10 + 24 + 12..];

        // SSID element, then the rates element byte-for-byte.
        assert_eq!(&frame_body[..3], &[0x00, 0x01, b'x']);
        assert_eq!(
            &frame_body[3..13],
            &[0x01, 0x08, 0x82, 0x84, 0x8b, 0x96, 0x24, 0x30, 0x48, 0x6c]
        );
        assert_eq!(&frame_body[13..16], &[0x03, 0x01, 0x01]);
    }

    #[test]
    fn test_open_beacon_has_no_security_element() {
        let bytes = build_beacon(&BSSID, b"freenet", SecurityMode::Open, 0, 6);
        match parse(&bytes) {
            Frame::Beacon(beacon) => {
                assert!(beacon.elements.rsn.is_none());
                assert!(beacon.elements.wpa.is_none());
            }
            other => panic!("expected beacon, got {:?}", other),
        }
    }

    #[test]
    fn test_wpa1_beacon_carries_vendor_element() {
        let bytes = build_beacon(&BSSID, b"legacy", SecurityMode::WpaTkip, 0, 6);
        match parse(&bytes) {
            Frame::Beacon(beacon) => {
                assert!(beacon.elements.rsn.is_none());
                assert!(beacon.elements.wpa.is_some());
            }
            other => panic!("expected beacon, got {:?}", other),
        }
    }

    #[test]
    fn test_probe_response_is_unicast() {
        let bytes =
            build_probe_response(&CLIENT, &BSSID, b"CoffeeShop", SecurityMode::Wpa2Aes, 3, 6);

        assert_eq!(&bytes[10..12], &[0x50, 0x00]);

        match parse(&bytes) {
            Frame::ProbeResponse(resp) => {
                assert_eq!(resp.header.address_1, CLIENT);
                assert_eq!(resp.header.address_2, BSSID);
                assert_eq!(resp.header.address_3, BSSID);
                assert_eq!(resp.elements.ssid.as_deref(), Some(&b"CoffeeShop"[..]));
                assert_eq!(resp.capability_info, 0x0031);
            }
            other => panic!("expected probe response, got {:?}", other),
        }
    }

    #[test]
    /// Beacon and probe response bodies only differ in subtype and
    /// receiver; everything after the header matches.
    fn test_beacon_and_response_bodies_match() {
        let beacon = build_beacon(&BSSID, b"net", SecurityMode::Wpa3, 1, 11);
        let response = build_probe_response(&CLIENT, &BSSID, b"net", SecurityMode::Wpa3, 1, 11);

        // Skip radiotap (10) + management header (24).
        assert_eq!(&beacon[34..], &response[34..]);
    }
}
