//! Precondition checks run before signing

use crate::claims::ClaimSet;
use crate::error::ValidationError;

/// Check that the claims and shared key carry everything a token needs.
///
/// Checks run in a fixed order and stop at the first failure: shared key,
/// email, audience, issuer. "Empty" means zero-length; whitespace passes.
pub fn validate(claims: &ClaimSet, shared_key: &str) -> Result<(), ValidationError> {
    if shared_key.is_empty() {
        return Err(ValidationError::MissingSharedKey);
    }

    if claims.email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }

    if claims.audience.is_empty() {
        return Err(ValidationError::MissingAudience);
    }

    if claims.issuer.is_empty() {
        return Err(ValidationError::MissingIssuer);
    }

    tracing::debug!(email = %claims.email, iss = %claims.issuer, "Service account claims validated");
    Ok(())
}
