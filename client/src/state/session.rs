//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal<Session>` through context. The navigation
//! guard and identity-aware components read it; only [`Session::login`],
//! [`Session::logout`] and startup [`Session::rehydrate`] change it.
//!
//! The cookie and `localStorage` flag written here are the durable copy that
//! survives reloads. The in-memory value is the fast path within one page
//! lifetime. Decoded roles are a rendering hint only; the course API checks
//! the token on every protected request.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use thiserror::Error;

use super::persistence::SessionPersistence;
use super::role::Role;
use crate::config::RehydratePolicy;
use crate::net::token::{self, TokenError, TokenPayload};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("malformed token: {0}")]
    MalformedToken(#[from] TokenError),
}

/// Who is logged in, and with which roles.
///
/// Invariant: a logged-out session has no roles and no identity fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    is_logged_in: bool,
    roles: Vec<Role>,
    name: Option<String>,
    email: Option<String>,
    user_id: Option<String>,
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// True when any held role matches `role` (see [`Role::matches`]).
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.matches(role))
    }

    /// Display label: name, then email, then a generic fallback.
    pub fn display_name(&self) -> &str {
        self.name().or(self.email()).unwrap_or("Account")
    }

    /// Adopt `token` as the current credential.
    ///
    /// On success the bare token (no `Bearer ` prefix) goes to the auth cookie, the logged-in hint is
    /// set, and the decoded payload is returned so callers can branch on
    /// roles right away.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MalformedToken`] when the payload cannot be
    /// decoded. The session and persisted artifacts are left untouched.
    pub fn login(&mut self, token: &str, persistence: &dyn SessionPersistence) -> Result<TokenPayload, SessionError> {
        let payload = token::decode_payload(token)?;
        self.apply(&payload);
        persistence.mark_logged_in();
        persistence.store_token(token::bare_token(token));
        log::info!("session logged in with {} role(s)", self.roles.len());
        Ok(payload)
    }

    /// Reset to logged out and drop the cookie and hint. Idempotent.
    pub fn logout(&mut self, persistence: &dyn SessionPersistence) {
        let was_logged_in = self.is_logged_in;
        *self = Self::default();
        persistence.clear_logged_in();
        persistence.clear_token();
        if was_logged_in {
            log::info!("session logged out");
        }
    }

    /// Build the startup session.
    ///
    /// With [`RehydratePolicy::FromCookie`] a stored token that decodes and is
    /// not past its `exp` restores the session and rewrites the logged-in
    /// hint. Undecodable or expired tokens are cleared so the hint does not
    /// claim a login that no longer exists.
    pub fn rehydrate(persistence: &dyn SessionPersistence, policy: RehydratePolicy, now_secs: i64) -> Self {
        let mut session = Self::default();
        if policy == RehydratePolicy::Never {
            return session;
        }
        let Some(stored) = persistence.load_token() else {
            if persistence.is_marked_logged_in() {
                persistence.clear_logged_in();
            }
            return session;
        };
        match token::decode_payload(&stored) {
            Ok(payload) if !payload.is_expired(now_secs) => {
                session.apply(&payload);
                persistence.mark_logged_in();
                log::info!("session restored from cookie");
            }
            Ok(_) => {
                log::info!("stored token expired; starting logged out");
                session.logout(persistence);
            }
            Err(e) => {
                log::warn!("discarding stored token: {e}");
                session.logout(persistence);
            }
        }
        session
    }

    fn apply(&mut self, payload: &TokenPayload) {
        self.is_logged_in = true;
        self.roles.clone_from(&payload.roles);
        self.name.clone_from(&payload.name);
        self.email.clone_from(&payload.email);
        self.user_id.clone_from(&payload.user_id);
    }
}
