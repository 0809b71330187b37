//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Overrides the Leptos `site-root` when set.
    pub site_root: Option<String>,
}

impl ServerConfig {
    /// Read `PORT` (default 3000) and `SITE_ROOT`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var("PORT").ok().as_deref(), std::env::var("SITE_ROOT").ok().as_deref())
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `port` is not a valid port.
    pub fn from_values(port: Option<&str>, site_root: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        let site_root = site_root
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);
        Ok(Self { port, site_root })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
