use super::*;

#[test]
fn from_status_401_without_detail_is_unauthorized() {
    assert_eq!(ApiError::from_status(401, None), ApiError::Unauthorized);
}

#[test]
fn from_status_401_naming_session_is_invalid_session() {
    let err = ApiError::from_status(401, Some("Session expired".to_owned()));
    assert_eq!(err, ApiError::InvalidSession("Session expired".to_owned()));
    assert!(err.is_session_rejection());
}

#[test]
fn from_status_401_bad_password_stays_unauthorized() {
    let err = ApiError::from_status(401, Some("Invalid email or password".to_owned()));
    assert_eq!(err, ApiError::Unauthorized);
}

#[test]
fn from_status_400_and_422_are_validation() {
    assert_eq!(
        ApiError::from_status(400, Some("Email already registered".to_owned())),
        ApiError::Validation("Email already registered".to_owned())
    );
    assert_eq!(ApiError::from_status(422, None), ApiError::Validation("request rejected".to_owned()));
}

#[test]
fn from_status_other_keeps_status() {
    let err = ApiError::from_status(503, None);
    assert_eq!(err, ApiError::Status { status: 503, detail: None });
    assert!(!err.is_session_rejection());
}

#[test]
fn network_error_is_not_session_rejection() {
    assert!(!ApiError::Network("offline".to_owned()).is_session_rejection());
}

#[test]
fn user_message_prefers_backend_detail() {
    let err = ApiError::Validation("Email already registered".to_owned());
    assert_eq!(err.user_message(), "Email already registered");
}

#[test]
fn parse_detail_reads_string_detail() {
    assert_eq!(parse_detail(r#"{"detail":"Invalid session"}"#), Some("Invalid session".to_owned()));
}

#[test]
fn parse_detail_reads_first_validation_issue() {
    let body = r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address"}]}"#;
    assert_eq!(parse_detail(body), Some("value is not a valid email address".to_owned()));
}

#[test]
fn parse_detail_none_for_non_json() {
    assert_eq!(parse_detail("<html>bad gateway</html>"), None);
}
