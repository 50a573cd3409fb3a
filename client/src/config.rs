//! Client configuration shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `ClientConfig` at the root. Session persistence, the
//! navigation guard and the REST helpers all read their names and paths from
//! it instead of hardcoding them, so tests can build isolated variants.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default REST base path. The host proxies `/api/*` to the course API.
pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_AUTH_COOKIE: &str = "authToken";
pub const DEFAULT_AUTH_COOKIE_DAYS: u32 = 1;
pub const DEFAULT_LOGGED_IN_KEY: &str = "isLoggedIn";
pub const DEFAULT_ADMIN_ROLE: &str = "admin";

/// Whether a fresh page load restores the session from the auth cookie.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RehydratePolicy {
    /// Every page load starts logged out.
    Never,
    /// Decode the `authToken` cookie before the first guard evaluation.
    #[default]
    FromCookie,
}

impl RehydratePolicy {
    /// Parse a policy name; accepts `never`/`off` and `cookie`/`from_cookie`/`on`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "never" | "off" | "false" | "0" => Some(Self::Never),
            "cookie" | "from_cookie" | "on" | "true" | "1" => Some(Self::FromCookie),
            _ => None,
        }
    }
}

/// Names of the durable artifacts written by the session store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersistenceConfig {
    pub cookie_name: String,
    pub cookie_days: u32,
    pub logged_in_key: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_AUTH_COOKIE.to_owned(),
            cookie_days: DEFAULT_AUTH_COOKIE_DAYS,
            logged_in_key: DEFAULT_LOGGED_IN_KEY.to_owned(),
        }
    }
}

impl PersistenceConfig {
    /// Cookie lifetime in seconds.
    pub fn cookie_max_age_secs(&self) -> u64 {
        u64::from(self.cookie_days) * 24 * 60 * 60
    }
}

/// Paths and role names the navigation guard redirects with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardConfig {
    pub login_path: String,
    pub home_path: String,
    pub admin_prefix: String,
    pub admin_role: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            login_path: "/login".to_owned(),
            home_path: "/".to_owned(),
            admin_prefix: "/admin".to_owned(),
            admin_role: DEFAULT_ADMIN_ROLE.to_owned(),
        }
    }
}

/// Root client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub rehydrate: RehydratePolicy,
    pub persistence: PersistenceConfig,
    pub guard: GuardConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: option_env!("COURSE_CATALOG_API_BASE")
                .unwrap_or(DEFAULT_API_BASE)
                .trim_end_matches('/')
                .to_owned(),
            rehydrate: option_env!("COURSE_CATALOG_REHYDRATE")
                .and_then(RehydratePolicy::parse)
                .unwrap_or_default(),
            persistence: PersistenceConfig::default(),
            guard: GuardConfig::default(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_owned();
        self
    }

    #[must_use]
    pub fn with_rehydrate(mut self, policy: RehydratePolicy) -> Self {
        self.rehydrate = policy;
        self
    }

    #[must_use]
    pub fn with_admin_role(mut self, role: impl Into<String>) -> Self {
        self.guard.admin_role = role.into();
        self
    }

    /// Join `path` onto the API base, inserting exactly one slash.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}
