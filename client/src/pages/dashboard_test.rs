use super::*;

#[test]
fn role_redirect_none_on_own_dashboard() {
    assert_eq!(role_redirect("/dashboard", UserRole::Client), None);
    assert_eq!(role_redirect("/host/dashboard/", UserRole::Host), None);
    assert_eq!(role_redirect("/admin", UserRole::Admin), None);
}

#[test]
fn role_redirect_sends_to_own_dashboard() {
    assert_eq!(role_redirect("/dashboard", UserRole::Host), Some("/host/dashboard"));
    assert_eq!(role_redirect("/admin", UserRole::Client), Some("/dashboard"));
    assert_eq!(role_redirect("/webdev", UserRole::Admin), Some("/admin"));
}

#[test]
fn role_redirect_unknown_path_goes_home_dashboard() {
    assert_eq!(role_redirect("/elsewhere", UserRole::Webdev), Some("/webdev"));
}
