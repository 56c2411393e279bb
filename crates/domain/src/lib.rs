//! ppdig Domain Layer
pub mod config;
pub mod dns_answer;
pub mod dns_query;
pub mod endpoint;
pub mod errors;
pub mod proxy_header;
pub mod query_type;
pub mod tlv;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, QueryConfig};
pub use dns_answer::{DnsAnswer, QuestionEntry, RecordEntry};
pub use dns_query::DnsQuery;
pub use endpoint::{Endpoint, Transport};
pub use errors::DomainError;
pub use proxy_header::{AddressFamily, Command, ProxyHeader, PROXY_V2_SIGNATURE};
pub use query_type::QueryType;
pub use tlv::{MetadataArg, TlvSet};
