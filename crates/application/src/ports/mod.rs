mod datagram_transport;
mod dns_codec;

pub use datagram_transport::{DatagramChannel, DatagramConnector};
pub use dns_codec::DnsCodec;

// Re-export for convenience
pub use ppdig_domain::{DnsAnswer, DnsQuery};
