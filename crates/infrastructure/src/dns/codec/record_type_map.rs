//! Mapping between `ppdig_domain::QueryType` and `hickory_proto::rr::RecordType`

use hickory_proto::rr::RecordType as HickoryRecordType;
use ppdig_domain::QueryType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain QueryType → hickory RecordType (for building queries)
    pub fn to_hickory(query_type: &QueryType) -> HickoryRecordType {
        match query_type {
            QueryType::A => HickoryRecordType::A,
            QueryType::AAAA => HickoryRecordType::AAAA,
            QueryType::MX => HickoryRecordType::MX,
        }
    }
}
