//! Build, validate, and sign in one call

use chrono::{DateTime, Utc};

use crate::attributes::RawAttributes;
use crate::builder::build;
use crate::claims::{ClaimSet, TimeToLive};
use crate::error::IssueError;
use crate::jwt::{sign, Token};
use crate::validate::validate;

/// A signed service account together with the claims it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub claims: ClaimSet,
    pub token: Token,
}

/// Issue a service account token as of `now`.
///
/// Validation runs before the shared key is decoded, so a missing field is
/// reported even when the key is malformed.
pub fn issue(
    attributes: RawAttributes,
    ttl: TimeToLive,
    now: DateTime<Utc>,
    shared_key: &str,
) -> Result<IssuedToken, IssueError> {
    let claims = build(attributes, ttl, now);
    validate(&claims, shared_key)?;
    let token = sign(&claims, shared_key)?;

    Ok(IssuedToken { claims, token })
}

/// Issue a service account token against the current wall-clock time
pub fn issue_now(
    attributes: RawAttributes,
    ttl: TimeToLive,
    shared_key: &str,
) -> Result<IssuedToken, IssueError> {
    issue(attributes, ttl, Utc::now(), shared_key)
}
