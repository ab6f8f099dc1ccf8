use nom::bytes::complete::take;
use nom::number::complete::u8 as get_u8;
use nom::sequence::tuple;
use nom::IResult;

use crate::frame::components::{
    InformationElements, RsnAkmSuite, RsnCipherSuite, RsnInformation, SupportedRate, WpaAkmSuite,
    WpaCipherSuite, WpaInformation,
};

/// Parse the variable-length element region of a management frame.
///
/// The general structure of the data looks like this:
///
/// 1 byte: Element id
/// 1 byte: Element length (up to 255 bytes)
/// $element_length bytes: Element data
///
/// Every read is bounded by the input slice: an element whose declared
/// length overruns the remaining input ends the scan, keeping whatever
/// parsed cleanly before it. Frames arrive straight off the radio and are
/// frequently truncated or corrupt, so an overrun here is routine, not
/// exceptional.
///
/// Note that a zero-length element is retained (an empty SSID element is
/// the wildcard in a probe request and must stay distinguishable from an
/// absent one).
pub fn parse_information_elements(mut input: &[u8]) -> IResult<&[u8], InformationElements> {
    let mut elements = InformationElements::default();

    while input.len() >= 2 {
        let (rest, (element_id, length)) = tuple((get_u8, get_u8))(input)?;
        if rest.len() < length as usize {
            // Truncated element: stop scanning, keep the slice untouched so
            // the caller can see where parsing gave up.
            log::trace!(
                "element {} declares {} bytes but only {} remain",
                element_id,
                length,
                rest.len()
            );
            break;
        }
        let (rest, data) = take(length)(rest)?;
        input = rest;

        match element_id {
            0 => elements.ssid = Some(data.to_vec()),
            1 => elements.supported_rates = parse_supported_rates(data),
            3 if !data.is_empty() => elements.ds_parameter_set = Some(data[0]),
            48 => {
                if let Ok(rsn) = parse_rsn_information(data) {
                    elements.rsn = Some(rsn);
                }
            }
            221 => {
                // Vendor-specific. WPA1 is the only vendor element we give a
                // typed home; the rest are kept raw.
                if data.len() >= 4 && data[0..4] == [0x00, 0x50, 0xF2, 0x01] {
                    if let Ok(wpa) = parse_wpa_information(&data[4..]) {
                        elements.wpa = Some(wpa);
                    }
                } else {
                    elements.other.push((element_id, data.to_vec()));
                }
            }
            _ => elements.other.push((element_id, data.to_vec())),
        }
    }

    Ok((input, elements))
}

fn parse_supported_rates(data: &[u8]) -> Vec<SupportedRate> {
    data.iter()
        .map(|&byte| SupportedRate {
            mandatory: byte & 0x80 != 0,
            rate: (byte & 0x7F) as f32 / 2.0,
        })
        .collect()
}

fn parse_rsn_information(data: &[u8]) -> Result<RsnInformation, &'static str> {
    if data.len() < 8 {
        return Err("RSN element too short");
    }

    let version = u16::from_le_bytes([data[0], data[1]]);
    let group_cipher_suite = RsnCipherSuite::from_selector(&data[2..6]);

    let pairwise_count = u16::from_le_bytes([data[6], data[7]]) as usize;
    let mut offset = 8;
    if data.len() < offset + 4 * pairwise_count + 2 {
        return Err("RSN element too short for pairwise cipher suites");
    }

    let mut pairwise_cipher_suites = Vec::with_capacity(pairwise_count);
    for _ in 0..pairwise_count {
        pairwise_cipher_suites.push(RsnCipherSuite::from_selector(&data[offset..offset + 4]));
        offset += 4;
    }

    let akm_count = u16::from_le_bytes([data[offset], data[offset + 1]]) as usize;
    offset += 2;
    if data.len() < offset + 4 * akm_count {
        return Err("RSN element too short for AKM suites");
    }

    let mut akm_suites = Vec::with_capacity(akm_count);
    for _ in 0..akm_count {
        akm_suites.push(RsnAkmSuite::from_selector(&data[offset..offset + 4]));
        offset += 4;
    }

    // The capability field is technically mandatory but absent in some
    // captures; treat a missing one as zero.
    let capabilities = if data.len() >= offset + 2 {
        u16::from_le_bytes([data[offset], data[offset + 1]])
    } else {
        0
    };

    Ok(RsnInformation {
        version,
        group_cipher_suite,
        pairwise_cipher_suites,
        akm_suites,
        capabilities,
    })
}

/// Parse the WPA1 vendor element body, after the Microsoft OUI and type
/// octet have been stripped by the caller.
fn parse_wpa_information(data: &[u8]) -> Result<WpaInformation, &'static str> {
    if data.len() < 8 {
        return Err("WPA element too short");
    }

    let version = u16::from_le_bytes([data[0], data[1]]);
    if version != 1 {
        return Err("Unsupported WPA version");
    }

    let multicast_cipher_suite = WpaCipherSuite::from_selector(&data[2..6]);

    let unicast_count = u16::from_le_bytes([data[6], data[7]]) as usize;
    let mut offset = 8;
    if data.len() < offset + 4 * unicast_count + 2 {
        return Err("WPA element too short for unicast cipher suites");
    }

    let mut unicast_cipher_suites = Vec::with_capacity(unicast_count);
    for _ in 0..unicast_count {
        unicast_cipher_suites.push(WpaCipherSuite::from_selector(&data[offset..offset + 4]));
        offset += 4;
    }

    let akm_count = u16::from_le_bytes([data[offset], data[offset + 1]]) as usize;
    offset += 2;
    if data.len() < offset + 4 * akm_count {
        return Err("WPA element too short for AKM suites");
    }

    let mut akm_suites = Vec::with_capacity(akm_count);
    for _ in 0..akm_count {
        akm_suites.push(WpaAkmSuite::from_selector(&data[offset..offset + 4]));
        offset += 4;
    }

    Ok(WpaInformation {
        version,
        multicast_cipher_suite,
        unicast_cipher_suites,
        akm_suites,
    })
}
