//! Host configuration parsed from environment variables.

use std::net::IpAddr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid BIND_ADDR: {0}")]
    InvalidBindAddr(String),

    /// `CATALOG_API_URL` must be an absolute http(s) URL.
    #[error("invalid CATALOG_API_URL: {0}")]
    InvalidApiUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Upstream course API that `/api/*` is proxied to. `None` answers 503.
    pub api_url: Option<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            api_url: None,
        }
    }
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `CATALOG_API_URL`: upstream course API (trailing `/` trimmed)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_raw.clone()))?;
        let api_url = lookup("CATALOG_API_URL")
            .map(|raw| parse_api_url(&raw))
            .transpose()?
            .flatten();

        Ok(Self { bind_addr, port, api_url })
    }

    pub fn listen_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::new(self.bind_addr, self.port)
    }
}

/// Blank means unset.
fn parse_api_url(raw: &str) -> Result<Option<String>, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidApiUrl(raw.to_string()));
    }
    Ok(Some(trimmed.to_string()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
