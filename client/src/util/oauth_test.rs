use super::*;

// =============================================================
// Marker detection
// =============================================================

#[test]
fn marker_detected_in_fragment() {
    assert!(has_handoff_marker("#session_id=abc123"));
    assert!(has_handoff_marker("#foo=1&session_id=abc123"));
}

#[test]
fn marker_absent_in_plain_fragments() {
    assert!(!has_handoff_marker(""));
    assert!(!has_handoff_marker("#reviews"));
}

#[test]
fn handoff_token_extracts_value() {
    assert_eq!(handoff_token("#session_id=abc123"), Some("abc123".to_owned()));
    assert_eq!(handoff_token("#x=1&session_id=abc123&y=2"), Some("abc123".to_owned()));
}

#[test]
fn handoff_token_none_when_empty() {
    assert_eq!(handoff_token("#session_id="), None);
    assert_eq!(handoff_token("#reviews"), None);
}

// =============================================================
// Redirect URL construction
// =============================================================

#[test]
fn callback_url_uses_live_origin() {
    let url = callback_url("https://trips.example.com").unwrap();
    assert_eq!(url.as_str(), "https://trips.example.com/dashboard");
}

#[test]
fn callback_url_keeps_port() {
    let url = callback_url("http://localhost:3000").unwrap();
    assert_eq!(url.as_str(), "http://localhost:3000/dashboard");
}

#[test]
fn callback_url_rejects_opaque_origins() {
    assert_eq!(callback_url("null"), Err(OAuthError::InvalidOrigin("null".to_owned())));
    assert!(callback_url("file:///tmp/index.html").is_err());
}

#[test]
fn provider_redirect_url_encodes_callback() {
    let url = provider_redirect_url("https://auth.emergentagent.com", "https://trips.example.com").unwrap();
    assert_eq!(
        url.as_str(),
        "https://auth.emergentagent.com/?redirect=https%3A%2F%2Ftrips.example.com%2Fdashboard"
    );
}

#[test]
fn provider_redirect_url_follows_origin_changes() {
    let a = provider_redirect_url("https://id.test", "https://a.test").unwrap();
    let b = provider_redirect_url("https://id.test", "https://b.test").unwrap();
    assert_ne!(a, b);
}

#[test]
fn provider_redirect_url_has_no_fallback_for_bad_origin() {
    assert!(provider_redirect_url("https://id.test", "").is_err());
}

#[test]
fn provider_redirect_url_rejects_bad_provider() {
    assert_eq!(
        provider_redirect_url("not a url", "https://a.test"),
        Err(OAuthError::InvalidProviderUrl("not a url".to_owned()))
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_helpers_are_inert_off_browser() {
    assert_eq!(current_fragment(), "");
    assert_eq!(redirect_to_provider("https://id.test"), Err(OAuthError::Unavailable));
    clear_fragment();
}
