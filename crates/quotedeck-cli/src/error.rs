use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
///
/// Exit code 3 is reserved for a run where every requested symbol failed.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] quotedeck_core::ValidationError),

    #[error(transparent)]
    Config(#[from] quotedeck_core::ConfigError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Command(_) => 2,
            Self::Config(_) => 2,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotedeck_core::{ConfigError, ValidationError};

    #[test]
    fn exit_codes_by_category() {
        assert_eq!(CliError::from(ValidationError::EmptySymbol).exit_code(), 2);
        assert_eq!(CliError::from(ConfigError::MissingApiKey).exit_code(), 2);
        assert_eq!(
            CliError::from(std::io::Error::other("closed pipe")).exit_code(),
            10
        );
    }
}
