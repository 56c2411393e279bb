use ppdig_domain::{DnsAnswer, DnsQuery, DomainError};

/// Turns a query into DNS wire bytes and wire bytes back into an answer.
pub trait DnsCodec: Send + Sync {
    /// Fails with [`DomainError::Encoding`].
    fn encode_query(&self, query: &DnsQuery) -> Result<Vec<u8>, DomainError>;

    /// Fails with [`DomainError::Decode`].
    fn decode_response(&self, bytes: &[u8]) -> Result<DnsAnswer, DomainError>;
}
