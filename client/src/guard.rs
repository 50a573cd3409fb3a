//! Navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route change is checked against the current [`Session`] before the
//! target page renders. [`evaluate`] is the pure policy; the Leptos glue in
//! [`install_navigation_guard`] re-runs it whenever the path or the session
//! changes and performs the redirect.
//!
//! The guard only shapes what the UI shows. The course API enforces access on
//! its own for every protected request.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::GuardConfig;
use crate::routes::{self, RouteMeta};
use crate::state::session::Session;

/// What to do with a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    Allow,
    RedirectToLogin,
    RedirectToHome,
    RedirectToAdminRoot,
}

impl NavigationOutcome {
    pub fn is_allow(self) -> bool {
        self == Self::Allow
    }

    /// Where to send the user, or `None` for [`NavigationOutcome::Allow`].
    pub fn redirect_path(self, config: &GuardConfig) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin => Some(&config.login_path),
            Self::RedirectToHome => Some(&config.home_path),
            Self::RedirectToAdminRoot => Some(&config.admin_prefix),
        }
    }
}

/// True when `path` is `prefix` or lies below it (`/admin`, `/admin/x`, but
/// not `/administrator`).
pub fn is_under_prefix(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
        None => false,
    }
}

/// Decide a navigation to `target_path` with access metadata `meta`.
///
/// 1. auth required and logged out: login;
/// 2. logged in: admins are kept inside the admin prefix, everyone else
///    is kept out of it;
/// 3. otherwise allow.
pub fn evaluate(target_path: &str, meta: &RouteMeta, session: &Session, config: &GuardConfig) -> NavigationOutcome {
    if meta.requires_auth && !session.is_logged_in() {
        return NavigationOutcome::RedirectToLogin;
    }
    if session.is_logged_in() {
        let is_admin = session.has_role(&config.admin_role);
        let in_admin_area = is_under_prefix(target_path, &config.admin_prefix);
        return match (is_admin, in_admin_area) {
            (true, false) => NavigationOutcome::RedirectToAdminRoot,
            (false, true) => NavigationOutcome::RedirectToHome,
            _ => NavigationOutcome::Allow,
        };
    }
    NavigationOutcome::Allow
}

/// [`evaluate`] with metadata looked up from the route table.
pub fn evaluate_path(target_path: &str, session: &Session, config: &GuardConfig) -> NavigationOutcome {
    evaluate(target_path, &routes::meta_for(target_path), session, config)
}

/// Live guard outcome for `pathname` under `session`.
///
/// Nothing is memoized: each read evaluates the policy against the current
/// path and session, so a login or logout re-decides the current location.
pub fn outcome_signal(pathname: Signal<String>, session: RwSignal<Session>, config: GuardConfig) -> Signal<NavigationOutcome> {
    Signal::derive(move || {
        let path = pathname.get();
        session.with(|s| evaluate_path(&path, s, &config))
    })
}

/// Wire the guard into the router. Must be called inside `<Router>`.
///
/// Returns the live outcome for the current location so views can hold back
/// rendering until a pending redirect has happened.
pub fn install_navigation_guard(session: RwSignal<Session>, config: GuardConfig) -> Signal<NavigationOutcome> {
    let pathname: Signal<String> = use_location().pathname.into();
    let outcome = outcome_signal(pathname, session, config.clone());

    let navigate = use_navigate();
    Effect::new(move || {
        let path = pathname.get();
        let result = outcome.get();
        if let Some(target) = result.redirect_path(&config) {
            if target != path {
                log::debug!("guard: {path} -> {target} ({result:?})");
                navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        }
    });

    outcome
}
