use airframe::error::Error;
use airframe::frame::Frame;
use airframe::parse_frame;

use crc::{Crc, CRC_32_ISO_HDLC};

fn beacon_payload() -> Vec<u8> {
    let mut payload = vec![
        0x80, 0x00, // FrameControl
        0x00, 0x00, // Duration id
        255, 255, 255, 255, 255, 255, // First address (broadcast)
        0x02, 0x11, 0x22, 0x33, 0x44, 0x10, // Second address
        0x02, 0x11, 0x22, 0x33, 0x44, 0x10, // Third address
        0x00, 0x00, // SequenceControl
        0, 0, 0, 0, 0, 0, 0, 0, // Timestamp
        0x64, 0x00, // Beacon interval (100 TU)
        0x31, 0x00, // Capability info
    ];
    // SSID
    payload.extend_from_slice(&[0x00, 0x0a]);
    payload.extend_from_slice(b"CoffeeShop");
    // Supported rates
    payload.extend_from_slice(&[0x01, 0x08, 0x82, 0x84, 0x8b, 0x96, 0x24, 0x30, 0x48, 0x6c]);
    // DS parameter set: channel 6
    payload.extend_from_slice(&[0x03, 0x01, 0x06]);
    // RSN: WPA2-PSK (CCMP)
    payload.extend_from_slice(&[
        0x30, 0x14, //
        0x01, 0x00, //
        0x00, 0x0f, 0xac, 0x04, //
        0x01, 0x00, 0x00, 0x0f, 0xac, 0x04, //
        0x01, 0x00, 0x00, 0x0f, 0xac, 0x02, //
        0x00, 0x00,
    ]);
    payload
}

#[test]
fn test_beacon() {
    let frame = parse_frame(&beacon_payload(), false).expect("Payload should be valid");
    println!("{frame:?}");

    match frame {
        Frame::Beacon(beacon) => {
            assert!(beacon.header.address_1.is_broadcast());
            assert_eq!(beacon.beacon_interval, 100);
            assert_eq!(beacon.capability_info, 0x0031);
            assert_eq!(beacon.elements.ssid.as_deref(), Some(&b"CoffeeShop"[..]));
            assert_eq!(beacon.elements.ds_parameter_set, Some(6));
            assert_eq!(beacon.elements.supported_rates.len(), 8);
            assert!(beacon.elements.rsn.is_some());
        }
        other => panic!("expected beacon, got {other:?}"),
    }
}

#[test]
fn test_beacon_reencodes_to_same_bytes() {
    let payload = beacon_payload();
    let frame = parse_frame(&payload, false).expect("Payload should be valid");

    match frame {
        Frame::Beacon(beacon) => assert_eq!(beacon.encode(), payload),
        other => panic!("expected beacon, got {other:?}"),
    }
}

#[test]
fn test_directed_probe_request() {
    let payload = [
        0x40, 0x00, // FrameControl
        0x00, 0x00, // Duration id
        255, 255, 255, 255, 255, 255, // First address
        0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, // Second address
        255, 255, 255, 255, 255, 255, // Third address
        0x10, 0x00, // SequenceControl
        0x00, 0x06, b'C', b'o', b'f', b'f', b'e', b'e', // SSID element
        0x01, 0x04, 0x82, 0x84, 0x8b, 0x96, // Supported rates
    ];

    let frame = parse_frame(&payload, false).expect("Payload should be valid");
    match frame {
        Frame::ProbeRequest(request) => {
            assert_eq!(
                request.header.address_2.to_string(),
                "aa:bb:cc:dd:ee:ff"
            );
            assert_eq!(request.elements.ssid.as_deref(), Some(&b"Coffee"[..]));
            assert!(!request.elements.has_wildcard_ssid());
        }
        other => panic!("expected probe request, got {other:?}"),
    }
}

#[test]
fn test_wildcard_probe_request() {
    let payload = [
        0x40, 0x00, //
        0x00, 0x00, //
        255, 255, 255, 255, 255, 255, //
        0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, //
        255, 255, 255, 255, 255, 255, //
        0x10, 0x00, //
        0x00, 0x00, // Zero-length SSID element: the wildcard
    ];

    let frame = parse_frame(&payload, false).expect("Payload should be valid");
    match frame {
        Frame::ProbeRequest(request) => assert!(request.elements.has_wildcard_ssid()),
        other => panic!("expected probe request, got {other:?}"),
    }
}

#[test]
fn test_probe_response() {
    let mut payload = vec![
        0x50, 0x00, // FrameControl
        0x00, 0x00, //
        0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, // First address (the asking station)
        0x02, 0x11, 0x22, 0x33, 0x44, 0x11, // Second address
        0x02, 0x11, 0x22, 0x33, 0x44, 0x11, // Third address
        0x20, 0x00, //
        0, 0, 0, 0, 0, 0, 0, 0, // Timestamp
        0x64, 0x00, //
        0x31, 0x00, //
    ];
    payload.extend_from_slice(&[0x00, 0x04]);
    payload.extend_from_slice(b"nest");

    let frame = parse_frame(&payload, false).expect("Payload should be valid");
    match frame {
        Frame::ProbeResponse(response) => {
            assert_eq!(response.elements.ssid.as_deref(), Some(&b"nest"[..]));
            assert_eq!(response.header.address_2.0[5], 0x11);
        }
        other => panic!("expected probe response, got {other:?}"),
    }
}

#[test]
fn test_unhandled_subtype() {
    let payload = [
        0xc0, 0x00, // Deauthentication
        0x00, 0x00, //
        255, 255, 255, 255, 255, 255, //
        0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, //
        255, 255, 255, 255, 255, 255, //
        0x10, 0x00, //
        0x07, 0x00, // Reason code
    ];

    let result = parse_frame(&payload, false);
    assert!(matches!(result, Err(Error::UnhandledFrameSubtype(_, _))));
}

#[test]
fn test_fcs_verification() {
    let crc = Crc::<u32>::new(&CRC_32_ISO_HDLC);
    let payload = beacon_payload();

    let mut with_fcs = payload.clone();
    with_fcs.extend_from_slice(&crc.checksum(&payload).to_le_bytes());
    assert!(parse_frame(&with_fcs, true).is_ok());

    // Flip one payload bit: the trailer no longer matches.
    let mut corrupted = with_fcs.clone();
    corrupted[30] ^= 0x01;
    assert!(matches!(
        parse_frame(&corrupted, true),
        Err(Error::Failure(_, _))
    ));
}

#[test]
fn test_truncated_frame() {
    let payload = [0x80, 0x00, 0x00, 0x00, 255, 255];
    assert!(parse_frame(&payload, false).is_err());
}
