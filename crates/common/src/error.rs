//! Common error types and handling for svcacct

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for configuration and input parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid duration {input:?}: {reason}")]
    InvalidDuration { input: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn invalid_duration(input: &str, reason: impl Into<String>) -> Self {
        Error::InvalidDuration {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Get the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidDuration { .. } => "INVALID_DURATION",
            Error::Config(_) => "CONFIG_ERROR",
        }
    }
}
