pub mod udp;

pub use udp::{UdpChannel, UdpConnector};
