/// Contains structs representing recurring sets of structured data.
/// For instance, MAC addresses, the management header, information elements.
pub mod components;

/// Management frame structs
mod management;

pub use management::*;

use crate::frame::components::MacAddress;

#[derive(Clone, Debug)]
/// The management frame payloads this library models.
/// Each variant is represented by its own struct.
pub enum Frame {
    Beacon(Beacon),
    ProbeRequest(ProbeRequest),
    ProbeResponse(ProbeResponse),
}

impl Frame {
    /// The transmitter address of the frame.
    pub fn src(&self) -> &MacAddress {
        match self {
            Frame::Beacon(inner) => &inner.header.address_2,
            Frame::ProbeRequest(inner) => &inner.header.address_2,
            Frame::ProbeResponse(inner) => &inner.header.address_2,
        }
    }

    /// The receiver address of the frame.
    /// A full `ff:ff:..` indicates an undirected broadcast.
    pub fn dest(&self) -> &MacAddress {
        match self {
            Frame::Beacon(inner) => &inner.header.address_1,
            Frame::ProbeRequest(inner) => &inner.header.address_1,
            Frame::ProbeResponse(inner) => &inner.header.address_1,
        }
    }
}
