#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role name carried in a token's `roles` claim.
///
/// Roles are opaque strings. The course API issues Spring-style authorities
/// (`ROLE_ADMIN`) while route metadata names bare roles (`admin`), so
/// [`Role::matches`] compares without the `ROLE_` prefix and ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

const AUTHORITY_PREFIX: &str = "ROLE_";

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name without the authority prefix.
    pub fn bare(&self) -> &str {
        let raw = self.as_str();
        match raw.get(..AUTHORITY_PREFIX.len()) {
            Some(head) if head.eq_ignore_ascii_case(AUTHORITY_PREFIX) => &raw[AUTHORITY_PREFIX.len()..],
            _ => raw,
        }
    }

    /// True when this role names `wanted` (prefix- and case-insensitive).
    pub fn matches(&self, wanted: &str) -> bool {
        let wanted = Role::new(wanted.to_owned());
        self.bare().eq_ignore_ascii_case(wanted.bare())
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Role {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}
