pub mod codec;
pub mod transport;

pub use codec::{HickoryDnsCodec, MessageBuilder, RecordTypeMapper, ResponseParser};
pub use transport::udp::{UdpChannel, UdpConnector};
