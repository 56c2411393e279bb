use ppdig_domain::{DomainError, MetadataArg, QueryType, TlvSet};
use tracing::warn;

/// Resolve the `type` positional, falling back to `A` for anything unsupported.
pub fn query_type(arg: &str) -> QueryType {
    QueryType::parse(arg).unwrap_or_else(|| {
        warn!(requested = %arg, "Unsupported query type, querying A instead");
        QueryType::default()
    })
}

/// Turn `key=value` arguments into TLVs.
///
/// Malformed arguments are skipped with a warning, or rejected when `strict`.
/// A repeated key keeps the last value.
pub fn collect_metadata(args: &[String], strict: bool) -> Result<TlvSet, DomainError> {
    let mut tlvs = TlvSet::new();

    for arg in args {
        match arg.parse::<MetadataArg>() {
            Ok(MetadataArg { key, value }) => {
                if tlvs.insert(key, value).is_some() {
                    warn!(key = key, "Metadata key given twice, keeping the last value");
                }
            }
            Err(reason) if strict => return Err(DomainError::InvalidArguments(reason)),
            Err(reason) => warn!(argument = %arg, "Skipping metadata: {}", reason),
        }
    }

    Ok(tlvs)
}
