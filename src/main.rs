mod capture;
mod config;
mod interface;
mod rawsocks;
mod registry;
mod scheduler;
mod security;
mod status;
mod tx;

extern crate libc;
extern crate nix;

use std::io;
use std::os::fd::{AsRawFd, OwnedFd};
use std::process::exit;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use airframe::error::Error as FrameError;
use airframe::Frame;
use clap::Parser;
use libc::EXIT_FAILURE;
use nix::unistd::geteuid;
use radiotap::Radiotap;

use crate::capture::{ProbeCapture, ProbeSlot};
use crate::config::Config;
use crate::interface::{
    get_interface_info, get_nl80211, set_interface_channel, Band, InterfaceExt,
};
use crate::rawsocks::{open_socket_rx, open_socket_tx};
use crate::registry::SsidRegistry;
use crate::scheduler::{BeaconScheduler, SocketSink};
use crate::security::SecurityMode;
use crate::status::{MessageLog, MessageType, StatusMessage};

#[derive(Parser)]
#[command(name = "mirage")]
#[command(about = "Multi-SSID access point impersonation tool.", long_about = None)]
#[command(version)]
struct Arguments {
    #[arg(short, long)]
    /// Interface to use.
    interface: String,

    #[arg(short, long, default_value = "mirage.json")]
    /// JSON configuration file.
    config: String,

    #[arg(long)]
    /// Override the configured channel (1-14).
    channel: Option<u8>,

    #[arg(long)]
    /// Override the configured security mode (name or ordinal 0-7).
    security: Option<String>,

    #[arg(long)]
    /// Override the configured beacon interval in milliseconds.
    beacon_interval: Option<u64>,

    #[arg(long)]
    /// Override the configured BSSID prefix (five colon-separated hex octets).
    mac_prefix: Option<String>,

    #[arg(long)]
    /// Advertise an additional SSID, appended after the configured list.
    /// Repeatable.
    ssid: Vec<String>,
}

fn parse_mac_prefix(value: &str) -> Option<Vec<u8>> {
    let octets = value
        .split(':')
        .map(|part| u8::from_str_radix(part, 16))
        .collect::<Result<Vec<u8>, _>>()
        .ok()?;
    if octets.len() == 5 {
        Some(octets)
    } else {
        None
    }
}

fn parse_security(value: &str) -> Option<SecurityMode> {
    match value.parse::<u8>() {
        Ok(ordinal) => SecurityMode::from_ordinal(ordinal),
        Err(_) => SecurityMode::from_str(value).ok(),
    }
}

#[derive(Default)]
struct RxCounters {
    frames: u64,
    probes: u64,
    parse_errors: u64,
    read_errors: u64,
}

/// Non-blocking read from the capture socket. `Ok(None)` means nothing is
/// waiting right now.
fn read_packet(fd: &OwnedFd) -> Result<Option<Vec<u8>>, String> {
    let mut buffer = vec![0u8; 6000];
    let packet_len = unsafe {
        libc::read(
            fd.as_raw_fd(),
            buffer.as_mut_ptr() as *mut libc::c_void,
            buffer.len(),
        )
    };

    if packet_len < 0 {
        let error_code = io::Error::last_os_error();
        if error_code.kind() == io::ErrorKind::WouldBlock {
            return Ok(None);
        }
        return Err(error_code.to_string());
    }

    buffer.truncate(packet_len as usize);
    Ok(Some(buffer))
}

/// Strip the radiotap header, parse the frame and stash any answerable
/// probe request in the shared slot for the scheduler.
fn process_packet(packet: &[u8], slot: &ProbeSlot, rx: &mut RxCounters, log: &mut MessageLog) {
    let radiotap = match Radiotap::from_bytes(packet) {
        Ok(radiotap) => radiotap,
        Err(_) => {
            rx.parse_errors += 1;
            return;
        }
    };
    rx.frames += 1;

    let payload = packet.get(radiotap.header.length..).unwrap_or(&[]);
    let fcs = radiotap.flags.map_or(false, |flags| flags.fcs);

    match airframe::parse_frame(payload, fcs) {
        Ok(Frame::ProbeRequest(request)) => {
            if let Some(capture) = ProbeCapture::from_probe_request(&request) {
                // Directed requests are worth a line; wildcards are constant
                // background noise from every scanning device in range.
                if !capture.is_wildcard() {
                    log.add_message(StatusMessage::new(
                        MessageType::Info,
                        format!(
                            "Probe request from {} for {}",
                            capture.source,
                            String::from_utf8_lossy(capture.requested()),
                        ),
                    ));
                }
                slot.store(capture);
                rx.probes += 1;
            }
        }
        Ok(_) => {}
        // Anything that isn't a management subtype we model is routine
        // monitor-mode traffic, not an error.
        Err(FrameError::UnhandledFrameSubtype(..)) => {}
        Err(_) => rx.parse_errors += 1,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Arguments::parse();

    if !geteuid().is_root() {
        eprintln!("You need to run as root!");
        exit(EXIT_FAILURE);
    }

    let mut log = MessageLog::new(None);

    let mut config = match Config::load(&cli.config) {
        Ok(config) => {
            log.add_message(StatusMessage::new(
                MessageType::Info,
                format!("Loaded configuration from {}", cli.config),
            ));
            config
        }
        Err(e) => {
            log.add_message(StatusMessage::new(
                MessageType::Warning,
                format!("{e:#}; continuing with defaults"),
            ));
            Config::default()
        }
    };

    if let Some(channel) = cli.channel {
        config.channel = channel;
    }
    if let Some(interval) = cli.beacon_interval {
        config.beacon_interval = interval;
    }
    if let Some(ref security) = cli.security {
        match parse_security(security) {
            Some(mode) => config.security = mode as u8,
            None => log.add_message(StatusMessage::new(
                MessageType::Warning,
                format!(
                    "Unknown security mode {:?}, keeping {}",
                    security,
                    config.security_mode()
                ),
            )),
        }
    }
    if let Some(ref prefix) = cli.mac_prefix {
        match parse_mac_prefix(prefix) {
            Some(octets) => config.mac_prefix = octets,
            None => log.add_message(StatusMessage::new(
                MessageType::Warning,
                format!("Invalid MAC prefix {:?}, keeping configured value", prefix),
            )),
        }
    }
    config.ssids.extend(cli.ssid.iter().cloned());

    let mode = config.security_mode();
    let channel = if (1..=14).contains(&config.channel) {
        config.channel
    } else {
        log.add_message(StatusMessage::new(
            MessageType::Warning,
            format!("Channel {} out of range, using 6", config.channel),
        ));
        6
    };

    let registry = SsidRegistry::new(config.ssid_bytes(), config.bssid_prefix());
    if config.ssids.len() > registry.len() {
        log.add_message(StatusMessage::new(
            MessageType::Warning,
            format!(
                "{} SSIDs configured, keeping the first {}",
                config.ssids.len(),
                registry.len()
            ),
        ));
    }
    if registry.is_empty() {
        log.add_message(StatusMessage::new(
            MessageType::Warning,
            "No SSIDs configured; nothing will be transmitted.".to_string(),
        ));
    }
    for (index, entry) in registry.entries() {
        log.add_message(StatusMessage::new(
            MessageType::Info,
            format!(
                "[{}] {} -> {}",
                index,
                entry.display(),
                registry.bssid_for(index)
            ),
        ));
    }
    log.add_message(StatusMessage::new(
        MessageType::Info,
        format!(
            "Security: {} | Channel: {} | Beacon interval: {}ms",
            mode, channel, config.beacon_interval
        ),
    ));
    if let Some(element) = mode.information_element() {
        let hex = element
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect::<Vec<_>>()
            .join(" ");
        log.add_message(StatusMessage::new(
            MessageType::Info,
            format!("Security element: {}", hex),
        ));
    }

    // Interface bring-up.
    let mut netlink = match get_nl80211() {
        Ok(netlink) => netlink,
        Err(e) => {
            eprintln!("Cannot open nl80211: {}", e);
            exit(EXIT_FAILURE);
        }
    };

    let iface = match netlink
        .get_interfaces()
        .iter()
        .find(|&(_, iface)| iface.name_as_string() == cli.interface)
        .map(|(_, iface)| iface.clone())
    {
        Some(iface) => iface,
        None => {
            eprintln!("Interface {} not found", cli.interface);
            exit(EXIT_FAILURE);
        }
    };
    let idx = iface.index.unwrap() as i32;

    log.add_message(StatusMessage::new(
        MessageType::Info,
        format!("Setting {} down.", cli.interface),
    ));
    netlink.set_interface_down(idx as u32).ok();

    let active_monitor = iface
        .phy
        .clone()
        .and_then(|phy| phy.active_monitor)
        .unwrap_or(false);
    log.add_message(StatusMessage::new(
        MessageType::Info,
        format!("Setting {} to monitor mode.", cli.interface),
    ));
    netlink.set_interface_monitor(active_monitor, idx as u32).ok();

    log.add_message(StatusMessage::new(
        MessageType::Info,
        format!("Setting {} up.", cli.interface),
    ));
    netlink.set_interface_up(idx as u32).ok();

    if let Err(e) = set_interface_channel(idx, channel, Band::BAND_2_4_GHZ) {
        log.add_message(StatusMessage::new(
            MessageType::Error,
            format!("Failed to set channel {}: {}", channel, e),
        ));
    }
    thread::sleep(Duration::from_millis(500));

    if let Ok(updated) = get_interface_info(idx) {
        log.add_message(StatusMessage::new(
            MessageType::Info,
            format!("Interface ready:\n{}", updated.pretty_print()),
        ));
    }

    let rx_socket = open_socket_rx(idx).expect("Failed to open RX Socket.");
    let tx_socket = open_socket_tx(idx).expect("Failed to open TX Socket.");
    log.add_message(StatusMessage::new(
        MessageType::Info,
        format!(
            "Sockets Opened Rx: {} Tx: {}",
            rx_socket.as_raw_fd(),
            tx_socket.as_raw_fd()
        ),
    ));

    let slot = ProbeSlot::new();
    let mut scheduler = BeaconScheduler::new(
        registry,
        mode,
        channel,
        Duration::from_millis(config.beacon_interval),
        slot.clone(),
    );
    let mut sink = SocketSink::new(tx_socket);

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    log.add_message(StatusMessage::new(
        MessageType::Priority,
        "Starting...".to_string(),
    ));

    let mut rx = RxCounters::default();
    let mut last_status_time = Instant::now();
    let status_interval = Duration::from_secs(1);
    let mut last_beacons = 0u64;

    while running.load(Ordering::SeqCst) {
        // Drain waiting frames, bounded so a busy channel cannot starve
        // the transmit branches.
        for _ in 0..64 {
            match read_packet(&rx_socket) {
                Ok(Some(packet)) => process_packet(&packet, &slot, &mut rx, &mut log),
                Ok(None) => break,
                Err(e) => {
                    rx.read_errors += 1;
                    if rx.read_errors == 1 {
                        log.add_message(StatusMessage::new(
                            MessageType::Error,
                            format!("Error reading from socket: {}", e),
                        ));
                    }
                    break;
                }
            }
        }

        scheduler.tick(Instant::now(), &mut sink);

        if last_status_time.elapsed() >= status_interval {
            last_status_time = Instant::now();
            let counters = scheduler.counters();
            log.add_message(StatusMessage::new(
                MessageType::Info,
                format!(
                    "beacons: {} (+{}/s) | responses: {} | rx frames: {} | probes: {} | errors: {}",
                    counters.beacons_sent,
                    counters.beacons_sent - last_beacons,
                    counters.probe_responses_sent,
                    rx.frames,
                    rx.probes,
                    counters.send_errors + rx.read_errors + rx.parse_errors,
                ),
            ));
            last_beacons = counters.beacons_sent;
        }

        thread::sleep(Duration::from_millis(3));
    }

    // Put the interface back the way we found it.
    log.add_message(StatusMessage::new(
        MessageType::Info,
        format!("Setting {} down.", cli.interface),
    ));
    netlink.set_interface_down(idx as u32).ok();

    log.add_message(StatusMessage::new(
        MessageType::Info,
        format!("Setting {} to station mode.", cli.interface),
    ));
    netlink.set_interface_station(idx as u32).ok();
    netlink.set_interface_up(idx as u32).ok();

    let counters = scheduler.counters();
    log.add_message(StatusMessage::new(
        MessageType::Priority,
        format!(
            "Done. {} beacons, {} probe responses, {} frames seen.",
            counters.beacons_sent, counters.probe_responses_sent, rx.frames
        ),
    ));

    Ok(())
}
