//! Service account token issuance for svcacct
//!
//! Turns a set of identity attributes and a base64 shared key into a
//! canonical claim set and a compact HS256-signed JWT. The pipeline is
//! strictly linear: build the claims, validate them, sign them.

mod attributes;
mod builder;
mod claims;
mod error;
mod jwt;
mod pipeline;
mod validate;

pub use attributes::RawAttributes;
pub use builder::{build, build_now};
pub use claims::{ClaimSet, TimeToLive};
pub use error::{IssueError, SigningError, ValidationError};
pub use jwt::{sign, SigningAlgorithm, SigningContext, Token};
pub use pipeline::{issue, issue_now, IssuedToken};
pub use validate::validate;
