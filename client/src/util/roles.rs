//! Role-based dashboard routing.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use crate::net::types::UserRole;

/// Landing route for each role after sign-in.
#[must_use]
pub fn dashboard_path(role: UserRole) -> &'static str {
    match role {
        UserRole::Client => "/dashboard",
        UserRole::Host => "/host/dashboard",
        UserRole::Admin => "/admin",
        UserRole::Webdev => "/webdev",
    }
}

#[must_use]
pub fn dashboard_title(role: UserRole) -> &'static str {
    match role {
        UserRole::Client => "My Trips",
        UserRole::Host => "Host Dashboard",
        UserRole::Admin => "Admin Console",
        UserRole::Webdev => "Site Content",
    }
}

/// Role whose dashboard lives at `path`, if any.
#[must_use]
pub fn role_for_dashboard(path: &str) -> Option<UserRole> {
    [UserRole::Client, UserRole::Host, UserRole::Admin, UserRole::Webdev]
        .into_iter()
        .find(|role| dashboard_path(*role) == path.trim_end_matches('/'))
}
