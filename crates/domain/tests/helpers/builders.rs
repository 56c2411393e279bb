#![allow(dead_code)]
use ppdig_domain::{Endpoint, TlvSet, Transport};
use std::net::SocketAddr;

pub fn udp_endpoint(addr: &str) -> Endpoint {
    Endpoint::udp(addr.parse::<SocketAddr>().unwrap())
}

pub fn tcp_endpoint(addr: &str) -> Endpoint {
    Endpoint::new(addr.parse::<SocketAddr>().unwrap(), Transport::Tcp)
}

/// Source/destination pair as a client behind a load balancer would see it.
pub fn client_and_server() -> (Endpoint, Endpoint) {
    (
        udp_endpoint("198.51.100.23:49152"),
        udp_endpoint("203.0.113.53:53"),
    )
}

pub struct TlvSetBuilder {
    entries: Vec<(u8, Vec<u8>)>,
}

impl TlvSetBuilder {
    pub fn new() -> Self {
        Self { entries: vec![] }
    }

    pub fn entry(mut self, kind: u8, value: &str) -> Self {
        self.entries.push((kind, value.as_bytes().to_vec()));
        self
    }

    /// `count` entries with distinct types starting at `first`, each value naming its type.
    pub fn sequential(mut self, first: u8, count: usize) -> Self {
        for offset in 0..count {
            let kind = first.wrapping_add(offset as u8);
            self.entries
                .push((kind, format!("value-{}", kind).into_bytes()));
        }
        self
    }

    pub fn reversed(mut self) -> Self {
        self.entries.reverse();
        self
    }

    pub fn build(self) -> TlvSet {
        self.entries.into_iter().collect()
    }
}
