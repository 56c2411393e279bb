use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::Record;
use ppdig_domain::{DnsAnswer, DomainError, QuestionEntry, RecordEntry};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsAnswer, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::Decode(format!(
                "Failed to parse DNS response ({} bytes): {}",
                response_bytes.len(),
                e
            ))
        })?;

        let rcode = message.response_code();

        let questions = message
            .queries()
            .iter()
            .map(|query| QuestionEntry {
                name: query.name().to_string(),
                class: query.query_class().to_string(),
                record_type: query.query_type().to_string(),
            })
            .collect();

        let answers: Vec<RecordEntry> = message.answers().iter().map(Self::record_entry).collect();
        let authority: Vec<RecordEntry> =
            message.name_servers().iter().map(Self::record_entry).collect();

        debug!(
            id = message.id(),
            rcode = ?rcode,
            answers = answers.len(),
            truncated = message.truncated(),
            authority = authority.len(),
            "DNS response parsed"
        );

        Ok(DnsAnswer {
            id: message.id(),
            response_code: Self::rcode_to_status(rcode),
            truncated: message.truncated(),
            recursion_available: message.recursion_available(),
            questions,
            answers,
            authority,
            additional_count: message.additionals().len(),
        })
    }

    fn record_entry(record: &Record) -> RecordEntry {
        RecordEntry {
            name: record.name().to_string(),
            ttl: record.ttl(),
            class: record.dns_class().to_string(),
            record_type: record.record_type().to_string(),
            data: record.data().to_string(),
        }
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
