use super::*;

#[test]
fn each_role_has_its_own_dashboard() {
    assert_eq!(dashboard_path(UserRole::Client), "/dashboard");
    assert_eq!(dashboard_path(UserRole::Host), "/host/dashboard");
    assert_eq!(dashboard_path(UserRole::Admin), "/admin");
    assert_eq!(dashboard_path(UserRole::Webdev), "/webdev");
}

#[test]
fn role_for_dashboard_inverts_dashboard_path() {
    for role in [UserRole::Client, UserRole::Host, UserRole::Admin, UserRole::Webdev] {
        assert_eq!(role_for_dashboard(dashboard_path(role)), Some(role));
    }
}

#[test]
fn role_for_dashboard_ignores_trailing_slash_and_unknown_paths() {
    assert_eq!(role_for_dashboard("/admin/"), Some(UserRole::Admin));
    assert_eq!(role_for_dashboard("/trips"), None);
}
