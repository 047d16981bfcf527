//! Issuance errors
//!
//! Every error is fatal for the invocation that produced it. Validation
//! errors are raised before any key material is touched; signing errors
//! are raised while decoding the key or producing the token.

/// Missing or unusable input, detected before any cryptographic work
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("shared key required")]
    MissingSharedKey,

    #[error("email is required")]
    MissingEmail,

    #[error("aud is required")]
    MissingAudience,

    #[error("iss is required")]
    MissingIssuer,

    #[error("expiry must be a positive duration")]
    NonPositiveTimeToLive,
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingSharedKey => "MISSING_SHARED_KEY",
            ValidationError::MissingEmail => "MISSING_EMAIL",
            ValidationError::MissingAudience => "MISSING_AUDIENCE",
            ValidationError::MissingIssuer => "MISSING_ISSUER",
            ValidationError::NonPositiveTimeToLive => "INVALID_EXPIRY",
        }
    }
}

/// Failure while turning the shared key and claims into a token
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    #[error("shared key not base64: {0}")]
    KeyNotBase64(#[source] base64::DecodeError),

    #[error("bad shared key: {0}")]
    BadSharedKey(String),

    #[error("couldn't serialize claims: {0}")]
    Serialization(#[source] jsonwebtoken::errors::Error),

    #[error("couldn't sign jwt: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

impl SigningError {
    pub fn error_code(&self) -> &'static str {
        match self {
            SigningError::KeyNotBase64(_) => "MALFORMED_SHARED_KEY",
            SigningError::BadSharedKey(_) => "SIGNING_SETUP_ERROR",
            SigningError::Serialization(_) => "SERIALIZATION_ERROR",
            SigningError::Signing(_) => "SIGNING_ERROR",
        }
    }
}

/// Any failure of the build, validate, sign pipeline
#[derive(Debug, thiserror::Error)]
pub enum IssueError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Signing(#[from] SigningError),
}

impl IssueError {
    pub fn error_code(&self) -> &'static str {
        match self {
            IssueError::Validation(e) => e.error_code(),
            IssueError::Signing(e) => e.error_code(),
        }
    }
}
