//! OAuth handoff helpers: fragment marker detection and redirect URL
//! construction.
//!
//! SYSTEM CONTEXT
//! ==============
//! After Google sign-in the identity provider sends the browser back to
//! `<origin>/dashboard#session_id=<handoff>`. The app must notice that marker
//! before anything else touches the session, and the outbound redirect must
//! name the live origin or the provider refuses to send the user back.
//! [`provider_redirect_url`] is the only place that URL is built.

#[cfg(test)]
#[path = "oauth_test.rs"]
mod oauth_test;

use url::Url;

/// Fragment marker the identity provider appends on return.
pub const HANDOFF_MARKER: &str = "session_id=";
/// Path on our origin the provider returns to.
pub const CALLBACK_PATH: &str = "/dashboard";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OAuthError {
    #[error("invalid page origin: {0}")]
    InvalidOrigin(String),
    #[error("invalid identity provider url: {0}")]
    InvalidProviderUrl(String),
    #[error("not available on server")]
    Unavailable,
}

/// True when `fragment` carries an OAuth handoff.
#[must_use]
pub fn has_handoff_marker(fragment: &str) -> bool {
    fragment.contains(HANDOFF_MARKER)
}

/// The one-time handoff id from a `#session_id=...` fragment.
#[must_use]
pub fn handoff_token(fragment: &str) -> Option<String> {
    let params = fragment.trim_start_matches('#');
    url::form_urlencoded::parse(params.as_bytes())
        .find(|(key, _)| key == "session_id")
        .map(|(_, value)| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// `<origin>/dashboard` for the given page origin.
///
/// # Errors
///
/// Returns [`OAuthError::InvalidOrigin`] unless `origin` is an http(s) origin.
pub fn callback_url(origin: &str) -> Result<Url, OAuthError> {
    let parsed = Url::parse(origin).map_err(|_| OAuthError::InvalidOrigin(origin.to_owned()))?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(OAuthError::InvalidOrigin(origin.to_owned()));
    }
    parsed
        .join(CALLBACK_PATH)
        .map_err(|_| OAuthError::InvalidOrigin(origin.to_owned()))
}

/// Identity provider URL carrying our callback as the `redirect` parameter.
///
/// # Errors
///
/// Returns an [`OAuthError`] if either URL is malformed. There is no fallback
/// URL: a bad origin aborts the redirect.
pub fn provider_redirect_url(auth_url: &str, origin: &str) -> Result<Url, OAuthError> {
    let callback = callback_url(origin)?;
    let mut provider = Url::parse(auth_url).map_err(|_| OAuthError::InvalidProviderUrl(auth_url.to_owned()))?;
    provider.query_pairs_mut().append_pair("redirect", callback.as_str());
    Ok(provider)
}

/// Current `location.hash`, or empty outside the browser.
#[must_use]
pub fn current_fragment() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Send the whole page to the identity provider, built from the origin at
/// call time.
///
/// # Errors
///
/// Returns an [`OAuthError`] if the origin or provider URL is unusable, or
/// when called outside the browser.
pub fn redirect_to_provider(auth_url: &str) -> Result<(), OAuthError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(OAuthError::Unavailable)?;
        let origin = window.location().origin().map_err(|_| OAuthError::Unavailable)?;
        let target = provider_redirect_url(auth_url, &origin)?;
        window
            .location()
            .set_href(target.as_str())
            .map_err(|_| OAuthError::Unavailable)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth_url;
        Err(OAuthError::Unavailable)
    }
}

/// Drop the consumed handoff from the address bar without a reload.
pub fn clear_fragment() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let path = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&format!("{path}{search}")));
        }
    }
}
