use thiserror::Error;

/// Validation and contract errors exposed by `quotedeck-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,

    #[error("page size must be greater than zero")]
    ZeroPageSize,
    #[error("page index is 1-based and must be greater than zero")]
    ZeroPageIndex,

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
}

/// Startup configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no API token configured; set QUOTEDECK_FINNHUB_API_KEY or FINNHUB_API_KEY")]
    MissingApiKey,

    #[error("invalid value '{value}' for {name}")]
    InvalidValue { name: &'static str, value: String },
}
