use std::fmt;

/// Record types the probe can ask for.
///
/// Anything that is not one of these falls back to [`QueryType::A`]; see
/// [`QueryType::from_arg`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QueryType {
    #[default]
    A,
    AAAA,
    MX,
}

impl QueryType {
    /// Parse a command-line type argument (case-insensitive).
    ///
    /// Returns `None` for unsupported types so the caller can report the
    /// fallback before applying it.
    pub fn parse(arg: &str) -> Option<Self> {
        if arg.eq_ignore_ascii_case("A") {
            Some(QueryType::A)
        } else if arg.eq_ignore_ascii_case("AAAA") {
            Some(QueryType::AAAA)
        } else if arg.eq_ignore_ascii_case("MX") {
            Some(QueryType::MX)
        } else {
            None
        }
    }

    /// Parse a command-line type argument, defaulting to `A` for anything unsupported.
    pub fn from_arg(arg: &str) -> Self {
        Self::parse(arg).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::A => "A",
            QueryType::AAAA => "AAAA",
            QueryType::MX => "MX",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
