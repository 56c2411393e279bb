use super::QueryType;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    /// Always fully qualified (ends with `.`).
    pub domain: Arc<str>,
    pub record_type: QueryType,
}

impl DnsQuery {
    pub fn new(domain: &str, record_type: QueryType) -> Self {
        Self {
            domain: Self::fqdn(domain).into(),
            record_type,
        }
    }

    /// Append the root label separator when missing.
    pub fn fqdn(domain: &str) -> String {
        if domain.ends_with('.') {
            domain.to_string()
        } else {
            format!("{}.", domain)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fqdn_appends_dot() {
        assert_eq!(DnsQuery::fqdn("example.com"), "example.com.");
    }

    #[test]
    fn test_fqdn_keeps_existing_dot() {
        assert_eq!(DnsQuery::fqdn("example.com."), "example.com.");
    }

    #[test]
    fn test_root_stays_root() {
        assert_eq!(DnsQuery::fqdn("."), ".");
    }

    #[test]
    fn test_new_normalizes() {
        let query = DnsQuery::new("example.org", QueryType::MX);
        assert_eq!(&*query.domain, "example.org.");
        assert_eq!(query.record_type, QueryType::MX);
    }
}
