use ppdig_domain::{DnsQuery, QueryType};

#[test]
fn test_supported_types() {
    assert_eq!(QueryType::from_arg("A"), QueryType::A);
    assert_eq!(QueryType::from_arg("AAAA"), QueryType::AAAA);
    assert_eq!(QueryType::from_arg("MX"), QueryType::MX);
}

#[test]
fn test_case_insensitive() {
    assert_eq!(QueryType::from_arg("aaaa"), QueryType::AAAA);
    assert_eq!(QueryType::from_arg("mx"), QueryType::MX);
}

#[test]
fn test_unsupported_type_defaults_to_a() {
    assert_eq!(QueryType::parse("TXT"), None);
    assert_eq!(QueryType::from_arg("TXT"), QueryType::A);
    assert_eq!(QueryType::from_arg(""), QueryType::A);
    assert_eq!(QueryType::from_arg("CNAME"), QueryType::A);
}

#[test]
fn test_display() {
    assert_eq!(QueryType::AAAA.to_string(), "AAAA");
}

#[test]
fn test_query_is_fully_qualified() {
    let query = DnsQuery::new("example.com", QueryType::from_arg("TXT"));
    assert_eq!(&*query.domain, "example.com.");
    assert_eq!(query.record_type, QueryType::A);
}
