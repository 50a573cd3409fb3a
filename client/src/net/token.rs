//! Unverified decoding of bearer-token payloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! The course API signs compact JWTs. The client never holds the signing key,
//! so it only base64url-decodes the payload segment to learn role and identity
//! hints for rendering and routing. Every protected request is re-checked by
//! the API, which is the actual trust boundary.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use thiserror::Error;

use crate::net::types::de_loose_string;
use crate::state::role::Role;

/// Why a token could not be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token must have three dot-separated segments")]
    Format,

    #[error("token payload is not valid base64url")]
    Base64,

    #[error("token payload is not a JSON object: {0}")]
    Json(String),

    #[error("token payload has no roles claim")]
    MissingRoles,
}

/// Claims the client reads from a token payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPayload {
    pub roles: Vec<Role>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub user_id: Option<String>,
    pub subject: Option<String>,
    pub issued_at: Option<i64>,
    pub expires_at: Option<i64>,
}

impl TokenPayload {
    /// True when an `exp` claim exists and `now_secs` is at or past it.
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.expires_at.is_some_and(|exp| now_secs >= exp)
    }
}

#[derive(Deserialize)]
struct RawPayload {
    roles: Option<Vec<Role>>,
    name: Option<String>,
    email: Option<String>,
    #[serde(rename = "userId", default, deserialize_with = "de_loose_string")]
    user_id: Option<String>,
    sub: Option<String>,
    iat: Option<i64>,
    exp: Option<i64>,
}

/// `token` with surrounding whitespace and any `Bearer ` prefix removed.
///
/// This is the form that gets stored and later sent back in the
/// `Authorization` header.
pub fn bare_token(token: &str) -> &str {
    let token = token.trim();
    token.strip_prefix("Bearer ").map_or(token, str::trim_start)
}

/// Decode the payload segment of `token` without checking its signature.
///
/// An optional `Bearer ` prefix is tolerated (see [`bare_token`]). Roles keep their first-seen
/// order with duplicates dropped.
///
/// # Errors
///
/// Returns a [`TokenError`] when the token is not three segments, the payload
/// is not base64url JSON, or it lacks a `roles` claim.
pub fn decode_payload(token: &str) -> Result<TokenPayload, TokenError> {
    let token = bare_token(token);

    let segments: Vec<&str> = token.split('.').collect();
    let [header, payload, _signature] = segments.as_slice() else {
        return Err(TokenError::Format);
    };
    if header.is_empty() || payload.is_empty() {
        return Err(TokenError::Format);
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| TokenError::Base64)?;
    let raw: RawPayload = serde_json::from_slice(&bytes).map_err(|e| TokenError::Json(e.to_string()))?;

    let mut roles: Vec<Role> = Vec::new();
    for role in raw.roles.ok_or(TokenError::MissingRoles)? {
        if !roles.contains(&role) {
            roles.push(role);
        }
    }

    Ok(TokenPayload {
        roles,
        name: raw.name,
        email: raw.email,
        user_id: raw.user_id,
        subject: raw.sub,
        issued_at: raw.iat,
        expires_at: raw.exp,
    })
}
