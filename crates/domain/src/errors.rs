use thiserror::Error;

/// Every failure a probe run can end with. One variant per stage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Failed to resolve DNS server: {0}")]
    Resolution(String),

    #[error("Failed to connect to DNS server: {0}")]
    Connection(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Failed to send query: {0}")]
    Transmit(String),

    #[error("Failed to read response: {0}")]
    Receive(String),

    #[error("Timed out after {timeout_ms}ms waiting for a response from {server}")]
    Timeout { server: String, timeout_ms: u64 },

    #[error("Failed to decode DNS response: {0}")]
    Decode(String),
}

impl DomainError {
    /// Short name of the stage that failed, used as a structured log field.
    pub fn stage(&self) -> &'static str {
        match self {
            DomainError::InvalidArguments(_) => "arguments",
            DomainError::Resolution(_) => "resolution",
            DomainError::Connection(_) => "connection",
            DomainError::Encoding(_) => "encoding",
            DomainError::Transmit(_) => "transmit",
            DomainError::Receive(_) => "receive",
            DomainError::Timeout { .. } => "timeout",
            DomainError::Decode(_) => "decode",
        }
    }
}
