//! Common test utilities and fixtures for integration tests
//!
//! - Shared key and attribute fixtures
//! - Independent token verification (HMAC-SHA256 and a standard JWT verifier)

#![allow(dead_code)]

use base64::{
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
    Engine as _,
};
use hmac::{Hmac, Mac};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde_json::Value;
use sha2::Sha256;

use svcacct_auth::RawAttributes;

/// Raw key bytes used across tests: `k` repeated to a full SHA-256 block width
pub const KEY_BYTES: [u8; 32] = [b'k'; 32];

/// Base64 form of [`KEY_BYTES`] as an operator would supply it
pub fn shared_key() -> String {
    STANDARD.encode(KEY_BYTES)
}

/// Minimal attributes that pass validation
pub fn service_attributes() -> RawAttributes {
    RawAttributes {
        email: "svc@example.com".to_string(),
        issuer: "issuer.example.com".to_string(),
        audience: vec!["api.example.com".to_string()],
        ..RawAttributes::default()
    }
}

/// Attributes with every optional field populated
pub fn impersonating_attributes() -> RawAttributes {
    RawAttributes {
        subject: Some("3c9e2f0a-7b1d-4c55-9a53-0f1e2d3c4b5a".to_string()),
        user: Some("robot".to_string()),
        audience: vec![
            "httpbin.example.com".to_string(),
            "prometheus.example.com".to_string(),
        ],
        groups: vec!["admins@example.com".to_string(), "users@example.com".to_string()],
        impersonate_email: Some("alice@example.com".to_string()),
        impersonate_groups: vec!["finance@example.com".to_string()],
        ..service_attributes()
    }
}

/// Decoded pieces of a compact token
pub struct DecodedToken {
    pub header: Value,
    pub claims: Value,
    pub signing_input: String,
    pub signature: Vec<u8>,
}

pub fn split_token(token: &str) -> DecodedToken {
    let segments: Vec<&str> = token.split('.').collect();
    assert_eq!(segments.len(), 3, "token must have three segments");

    let decode_json = |segment: &str| -> Value {
        let bytes = URL_SAFE_NO_PAD
            .decode(segment)
            .expect("segment should be base64url without padding");
        serde_json::from_slice(&bytes).expect("segment should be JSON")
    };

    DecodedToken {
        header: decode_json(segments[0]),
        claims: decode_json(segments[1]),
        signing_input: format!("{}.{}", segments[0], segments[1]),
        signature: URL_SAFE_NO_PAD
            .decode(segments[2])
            .expect("signature should be base64url without padding"),
    }
}

/// Recompute the HMAC-SHA256 signature over `header.claims` and compare
pub fn hmac_verifies(token: &str, key: &[u8]) -> bool {
    let decoded = split_token(token);
    let mut mac = Hmac::<Sha256>::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(decoded.signing_input.as_bytes());
    mac.verify_slice(&decoded.signature).is_ok()
}

/// Verify with `jsonwebtoken` the way a relying party would
pub fn verify_as_relying_party(
    token: &str,
    key: &[u8],
    audience: &str,
    issuer: &str,
) -> jsonwebtoken::errors::Result<Value> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&[audience]);
    validation.set_issuer(&[issuer]);
    validation.set_required_spec_claims(&["exp", "nbf", "iss", "aud"]);
    validation.validate_nbf = true;

    decode::<Value>(token, &DecodingKey::from_secret(key), &validation)
        .map(|data| data.claims)
}
