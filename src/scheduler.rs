use std::io;
use std::os::fd::{AsRawFd, OwnedFd};
use std::thread::sleep;
use std::time::{Duration, Instant};

use crate::capture::ProbeSlot;
use crate::registry::SsidRegistry;
use crate::security::SecurityMode;
use crate::tx::{build_beacon, build_probe_response};

/// Floor between probe-response dispatch cycles. A scanning station can
/// emit dozens of requests a second; answering every one would starve the
/// beacon branch.
pub const PROBE_RESPONSE_MIN_INTERVAL: Duration = Duration::from_millis(50);

/// Where built frames go. The production sink is the injection socket;
/// tests substitute a buffer.
pub trait FrameSink {
    fn send(&mut self, frame: &[u8]) -> Result<(), String>;
}

pub struct SocketSink {
    fd: OwnedFd,
}

impl SocketSink {
    pub fn new(fd: OwnedFd) -> Self {
        SocketSink { fd }
    }
}

impl FrameSink for SocketSink {
    fn send(&mut self, frame: &[u8]) -> Result<(), String> {
        let bytes_written = unsafe {
            libc::write(
                self.fd.as_raw_fd(),
                frame.as_ptr() as *const libc::c_void,
                frame.len(),
            )
        };

        if bytes_written < 0 {
            let error_code = io::Error::last_os_error();
            return Err(error_code.to_string());
        }

        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Counters {
    pub beacons_sent: u64,
    pub probe_responses_sent: u64,
    pub send_errors: u64,
}

/// Drives both transmit paths from a single loop: periodic beacons for
/// every registered network, and probe responses for whatever request is
/// sitting in the slot. State is two timestamps plus the shared slot.
pub struct BeaconScheduler {
    registry: SsidRegistry,
    mode: SecurityMode,
    channel: u8,
    beacon_interval: Duration,
    slot: ProbeSlot,
    sequence: u16,
    last_beacon: Option<Instant>,
    last_probe_response: Option<Instant>,
    beacon_pause: Duration,
    response_pause: Duration,
    counters: Counters,
}

impl BeaconScheduler {
    pub fn new(
        registry: SsidRegistry,
        mode: SecurityMode,
        channel: u8,
        beacon_interval: Duration,
        slot: ProbeSlot,
    ) -> Self {
        BeaconScheduler {
            registry,
            mode,
            channel,
            beacon_interval,
            slot,
            sequence: 0,
            last_beacon: None,
            last_probe_response: None,
            // Brief pauses between back-to-back injections so the driver's
            // transmit queue keeps up.
            beacon_pause: Duration::from_millis(2),
            response_pause: Duration::from_millis(1),
            counters: Counters::default(),
        }
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Sequence numbers are 12 bits on the wire; hand them out in order and
    /// wrap at 4095 like a real AP.
    fn next_sequence(&mut self) -> u16 {
        let sequence = self.sequence;
        self.sequence = (self.sequence + 1) & 0x0FFF;
        sequence
    }

    fn transmit(&mut self, sink: &mut dyn FrameSink, frame: &[u8]) -> bool {
        match sink.send(frame) {
            Ok(()) => true,
            Err(_) => {
                // Fire-and-forget: a failed injection is counted for the
                // status line and otherwise dropped.
                self.counters.send_errors += 1;
                false
            }
        }
    }

    /// One pass of the scheduling loop. Answers a pending probe request
    /// first (they are time-sensitive: the station is listening right now),
    /// then sends the beacon round if the interval elapsed. Never blocks
    /// beyond the fixed inter-send pauses.
    pub fn tick(&mut self, now: Instant, sink: &mut dyn FrameSink) {
        self.probe_response_branch(now, sink);
        self.beacon_branch(now, sink);
    }

    fn probe_response_branch(&mut self, now: Instant, sink: &mut dyn FrameSink) {
        let eligible = match self.last_probe_response {
            Some(last) => now.duration_since(last) > PROBE_RESPONSE_MIN_INTERVAL,
            None => true,
        };
        if !eligible {
            return;
        }

        let capture = match self.slot.take() {
            Some(capture) => capture,
            None => return,
        };

        let mut sent = 0u64;
        for index in 0..self.registry.len() {
            let entry = match self.registry.get(index) {
                Some(entry) => entry.clone(),
                None => break,
            };
            if !capture.is_wildcard() && !capture.matches(entry.bytes()) {
                continue;
            }

            if sent > 0 && !self.response_pause.is_zero() {
                sleep(self.response_pause);
            }

            let bssid = self.registry.bssid_for(index);
            let sequence = self.next_sequence();
            let frame = build_probe_response(
                &capture.source,
                &bssid,
                entry.bytes(),
                self.mode,
                sequence,
                self.channel,
            );
            if self.transmit(sink, &frame) {
                self.counters.probe_responses_sent += 1;
                sent += 1;
            }
        }

        // The dispatch cycle is spent whether or not anything matched;
        // the next capture has to wait out the interval either way.
        self.last_probe_response = Some(now);
    }

    fn beacon_branch(&mut self, now: Instant, sink: &mut dyn FrameSink) {
        let due = match self.last_beacon {
            Some(last) => now.duration_since(last) > self.beacon_interval,
            None => true,
        };
        if !due {
            return;
        }

        for index in 0..self.registry.len() {
            let entry = match self.registry.get(index) {
                Some(entry) => entry.clone(),
                None => break,
            };

            if index > 0 && !self.beacon_pause.is_zero() {
                sleep(self.beacon_pause);
            }

            let bssid = self.registry.bssid_for(index);
            let sequence = self.next_sequence();
            let frame = build_beacon(&bssid, entry.bytes(), self.mode, sequence, self.channel);
            if self.transmit(sink, &frame) {
                self.counters.beacons_sent += 1;
            }
        }

        self.last_beacon = Some(now);
    }

    #[cfg(test)]
    fn without_pauses(mut self) -> Self {
        self.beacon_pause = Duration::ZERO;
        self.response_pause = Duration::ZERO;
        self
    }
}
