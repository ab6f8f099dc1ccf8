use std::sync::{Arc, Mutex};

use airframe::frame::components::MacAddress;
use airframe::frame::ProbeRequest;

use crate::registry::MAX_SSID_LEN;

/// What the listener hands the responder: who asked, and for what.
///
/// A wildcard request (zero-length SSID element) is kept distinct from a
/// request carrying no SSID element at all; the latter never produces a
/// capture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeCapture {
    pub source: MacAddress,
    requested: Vec<u8>,
}

impl ProbeCapture {
    /// Extract a capture from a parsed probe request. Returns `None` when
    /// the frame has no SSID element, which is not a request we can answer.
    pub fn from_probe_request(frame: &ProbeRequest) -> Option<Self> {
        let mut requested = frame.elements.ssid.clone()?;
        requested.truncate(MAX_SSID_LEN);
        Some(ProbeCapture {
            source: frame.header.address_2,
            requested,
        })
    }

    pub fn is_wildcard(&self) -> bool {
        self.requested.is_empty()
    }

    pub fn requested(&self) -> &[u8] {
        &self.requested
    }

    /// Does this capture ask for exactly the given SSID bytes?
    pub fn matches(&self, entry_bytes: &[u8]) -> bool {
        self.requested == entry_bytes
    }
}

/// The single-slot mailbox between the capture thread and the transmit
/// loop. The listener overwrites unconditionally and the responder takes
/// the slot empty, so only the most recent unanswered request survives a
/// busy burst. Holders keep the lock only long enough to swap the Option.
#[derive(Clone, Default)]
pub struct ProbeSlot {
    inner: Arc<Mutex<Option<ProbeCapture>>>,
}

impl ProbeSlot {
    pub fn new() -> Self {
        ProbeSlot::default()
    }

    /// Store a capture, replacing any unanswered one.
    pub fn store(&self, capture: ProbeCapture) {
        if let Ok(mut slot) = self.inner.lock() {
            *slot = Some(capture);
        }
    }

    /// Take the pending capture, leaving the slot empty.
    pub fn take(&self) -> Option<ProbeCapture> {
        match self.inner.lock() {
            Ok(mut slot) => slot.take(),
            Err(_) => None,
        }
    }
}
