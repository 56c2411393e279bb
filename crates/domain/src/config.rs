mod errors;
mod logging;
mod query;
mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use query::QueryConfig;
pub use root::{CliOverrides, Config, DEFAULT_CONFIG_FILE};
