//! HS256 token signing
//!
//! The shared key arrives base64-encoded (standard alphabet, padded). Its
//! decoded bytes are the HMAC key; they live only inside a
//! [`SigningContext`] and are zeroized when the context is dropped.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use zeroize::Zeroizing;

use crate::claims::ClaimSet;
use crate::error::SigningError;

/// Supported signing algorithms. Verifiers expect HS256, so it is the only one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SigningAlgorithm {
    #[default]
    Hs256,
}

impl SigningAlgorithm {
    fn jwt_algorithm(self) -> Algorithm {
        match self {
            SigningAlgorithm::Hs256 => Algorithm::HS256,
        }
    }
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigningAlgorithm::Hs256 => write!(f, "HS256"),
        }
    }
}

/// Key material and algorithm for a single signing call
pub struct SigningContext {
    algorithm: SigningAlgorithm,
    key: Zeroizing<Vec<u8>>,
}

impl SigningContext {
    /// Decode a base64 shared key into an HS256 context
    pub fn from_shared_key(shared_key: &str) -> Result<Self, SigningError> {
        let key = STANDARD
            .decode(shared_key)
            .map(Zeroizing::new)
            .map_err(SigningError::KeyNotBase64)?;

        Self::new(SigningAlgorithm::Hs256, key)
    }

    pub fn new(algorithm: SigningAlgorithm, key: Zeroizing<Vec<u8>>) -> Result<Self, SigningError> {
        if key.is_empty() {
            return Err(SigningError::BadSharedKey("key material is empty".to_string()));
        }

        Ok(Self { algorithm, key })
    }

    pub fn algorithm(&self) -> SigningAlgorithm {
        self.algorithm
    }

    /// Sign `claims`, consuming the context so the key is dropped afterwards
    pub fn sign(self, claims: &ClaimSet) -> Result<Token, SigningError> {
        let header = Header::new(self.algorithm.jwt_algorithm());
        let encoding_key = EncodingKey::from_secret(&self.key);

        let token = encode(&header, claims, &encoding_key).map_err(|e| match e.kind() {
            ErrorKind::Json(_) => SigningError::Serialization(e),
            _ => SigningError::Signing(e),
        })?;

        tracing::debug!(
            alg = %self.algorithm,
            email = %claims.email,
            exp = claims.expiry.timestamp(),
            "Service account token signed"
        );

        Ok(Token(token))
    }
}

impl fmt::Debug for SigningContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningContext")
            .field("algorithm", &self.algorithm)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// Compact JWS: `header.claims.signature`, each part base64url without padding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Sign `claims` with a base64-encoded shared key
pub fn sign(claims: &ClaimSet, shared_key: &str) -> Result<Token, SigningError> {
    SigningContext::from_shared_key(shared_key)?.sign(claims)
}
