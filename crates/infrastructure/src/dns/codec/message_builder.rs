//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use ppdig_domain::{DnsQuery, DomainError};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a DNS query message and serialize to wire format bytes
    ///
    /// Creates a standard recursive query with:
    /// - Random ID for request/response matching
    /// - RD (Recursion Desired) flag set
    /// - Single question section, class IN
    pub fn build_query(query: &DnsQuery) -> Result<Vec<u8>, DomainError> {
        let (_, bytes) = Self::build_query_with_id(query)?;
        Ok(bytes)
    }

    /// Build a query message and return both its ID and bytes
    pub fn build_query_with_id(query: &DnsQuery) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(&query.domain).map_err(|e| {
            DomainError::Encoding(format!("Invalid domain '{}': {}", query.domain, e))
        })?;

        let mut question = Query::new();
        question.set_name(name);
        question.set_query_type(RecordTypeMapper::to_hickory(&query.record_type));
        question.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(question);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Serialize a Message to wire format bytes
    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::Encoding(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
