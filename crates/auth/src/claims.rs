//! Service account claim set and token lifetime

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::error::ValidationError;

/// Claims carried by a service account token.
///
/// Registered claims (RFC 7519) come first, followed by the custom identity
/// attributes. Optional attributes that are absent or empty are left out of
/// the serialized form entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimSet {
    /// Issuer
    #[serde(rename = "iss")]
    pub issuer: String,
    /// Subject (typically an opaque ID)
    #[serde(rename = "sub", skip_serializing_if = "is_absent")]
    pub subject: Option<String>,
    /// Audience, always serialized as an array
    #[serde(rename = "aud")]
    pub audience: Vec<String>,
    /// Expires at
    #[serde(rename = "exp", with = "chrono::serde::ts_seconds")]
    pub expiry: DateTime<Utc>,
    /// Not valid before
    #[serde(rename = "nbf", with = "chrono::serde::ts_seconds")]
    pub not_before: DateTime<Utc>,
    /// Issued at
    #[serde(rename = "iat", with = "chrono::serde::ts_seconds")]
    pub issued_at: DateTime<Utc>,
    /// Email
    pub email: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub impersonate_email: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub impersonate_groups: Vec<String>,
}

impl ClaimSet {
    /// Render the claims as indented JSON for display
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn is_absent(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// Strictly positive token lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeToLive(TimeDelta);

impl TimeToLive {
    pub fn new(duration: TimeDelta) -> Result<Self, ValidationError> {
        if duration <= TimeDelta::zero() {
            return Err(ValidationError::NonPositiveTimeToLive);
        }
        Ok(Self(duration))
    }

    pub fn as_duration(&self) -> TimeDelta {
        self.0
    }
}

impl Default for TimeToLive {
    fn default() -> Self {
        Self(TimeDelta::hours(1))
    }
}

impl TryFrom<TimeDelta> for TimeToLive {
    type Error = ValidationError;

    fn try_from(duration: TimeDelta) -> Result<Self, Self::Error> {
        Self::new(duration)
    }
}
