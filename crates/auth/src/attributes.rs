//! Raw identity attributes as collected by a front-end

/// Identity attributes exactly as the caller supplied them.
///
/// Nothing here has been validated. Required fields default to empty and
/// are checked later by [`validate`](crate::validate).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAttributes {
    pub email: String,
    pub issuer: String,
    pub subject: Option<String>,
    pub user: Option<String>,
    pub audience: Vec<String>,
    pub groups: Vec<String>,
    pub impersonate_email: Option<String>,
    pub impersonate_groups: Vec<String>,
}
