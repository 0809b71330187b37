use super::*;

#[test]
fn destination_after_callback_success_goes_to_role_dashboard() {
    assert_eq!(destination_after_callback(Some(UserRole::Client)), "/dashboard");
    assert_eq!(destination_after_callback(Some(UserRole::Host)), "/host/dashboard");
    assert_eq!(destination_after_callback(Some(UserRole::Admin)), "/admin");
}

#[test]
fn destination_after_callback_failure_goes_to_login_with_notice() {
    assert_eq!(destination_after_callback(None), "/login?error=oauth");
    assert_eq!(
        crate::pages::login::login_notice("oauth"),
        Some("Google sign-in failed. Please try again.")
    );
}
