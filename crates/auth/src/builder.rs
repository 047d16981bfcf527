//! Claim construction from raw attributes

use chrono::{DateTime, Utc};

use crate::attributes::RawAttributes;
use crate::claims::{ClaimSet, TimeToLive};

/// Build a claim set issued at `now` and expiring `ttl` later.
///
/// Identity fields are copied through untouched. This never fails; an
/// expiry past the last representable instant saturates there.
pub fn build(attributes: RawAttributes, ttl: TimeToLive, now: DateTime<Utc>) -> ClaimSet {
    let expiry = now
        .checked_add_signed(ttl.as_duration())
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    tracing::debug!(
        email = %attributes.email,
        iss = %attributes.issuer,
        aud_count = attributes.audience.len(),
        exp = expiry.timestamp(),
        "Building service account claims"
    );

    ClaimSet {
        issuer: attributes.issuer,
        subject: attributes.subject,
        audience: attributes.audience,
        expiry,
        not_before: now,
        issued_at: now,
        email: attributes.email,
        groups: attributes.groups,
        user: attributes.user,
        impersonate_email: attributes.impersonate_email,
        impersonate_groups: attributes.impersonate_groups,
    }
}

/// Build a claim set against the current wall-clock time
pub fn build_now(attributes: RawAttributes, ttl: TimeToLive) -> ClaimSet {
    build(attributes, ttl, Utc::now())
}
