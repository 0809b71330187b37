//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so deploy-specific values are
//! baked in through `option_env!` and fall back to the production defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default REST API prefix, served from the same origin as the app.
pub const DEFAULT_API_BASE: &str = "/api";
/// Default external identity provider that performs the Google sign-in.
pub const DEFAULT_AUTH_URL: &str = "https://auth.emergentagent.com";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every REST endpoint (e.g. `/api` or `https://api.example.com/api`).
    pub api_base: String,
    /// Identity provider that receives the OAuth redirect.
    pub auth_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned(), auth_url: DEFAULT_AUTH_URL.to_owned() }
    }
}

impl ClientConfig {
    /// Build from `SEEKER_API_BASE` / `SEEKER_AUTH_URL` captured at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("SEEKER_API_BASE"), option_env!("SEEKER_AUTH_URL"))
    }

    fn from_values(api_base: Option<&str>, auth_url: Option<&str>) -> Self {
        let pick = |value: Option<&str>, default: &str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .trim_end_matches('/')
                .to_owned()
        };
        Self { api_base: pick(api_base, DEFAULT_API_BASE), auth_url: pick(auth_url, DEFAULT_AUTH_URL) }
    }

    /// Join `path` onto the API base with exactly one separating slash.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}
