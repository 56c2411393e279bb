use super::{MessageBuilder, ResponseParser};
use ppdig_application::ports::DnsCodec;
use ppdig_domain::{DnsAnswer, DnsQuery, DomainError};

/// [`DnsCodec`] backed by `hickory-proto`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HickoryDnsCodec;

impl HickoryDnsCodec {
    pub fn new() -> Self {
        Self
    }
}

impl DnsCodec for HickoryDnsCodec {
    fn encode_query(&self, query: &DnsQuery) -> Result<Vec<u8>, DomainError> {
        MessageBuilder::build_query(query)
    }

    fn decode_response(&self, bytes: &[u8]) -> Result<DnsAnswer, DomainError> {
        ResponseParser::parse(bytes)
    }
}
