//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthPhase, AuthState};
use crate::util::roles::dashboard_path;

/// True once bootstrap has finished without finding a user.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.phase() == AuthPhase::Unauthenticated
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Dashboard for a signed-in user; `None` while loading or signed out.
#[must_use]
pub fn signed_in_redirect(state: &AuthState) -> Option<&'static str> {
    match state.phase() {
        AuthPhase::Authenticated => state.user.as_ref().map(|u| dashboard_path(u.role)),
        AuthPhase::Bootstrapping | AuthPhase::Unauthenticated => None,
    }
}

/// Send already-signed-in visitors of the login/register forms to their dashboard.
pub fn install_signed_in_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = auth.with(signed_in_redirect) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
