//! OAuth callback handler rendered while a `session_id` handoff is pending.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` renders this page instead of the normal routes when the initial URL
//! fragment carries the handoff marker. The handoff token is read once,
//! exchanged once, and scrubbed from the address bar before routing resumes.

#[cfg(test)]
#[path = "auth_callback_test.rs"]
mod auth_callback_test;

use leptos::prelude::*;

use crate::net::types::UserRole;
use crate::util::roles::dashboard_path;

pub const CALLBACK_FAILURE_PATH: &str = "/login?error=oauth";

/// Where to send the browser once the exchange settles.
#[must_use]
pub fn destination_after_callback(role: Option<UserRole>) -> &'static str {
    role.map_or(CALLBACK_FAILURE_PATH, dashboard_path)
}

#[component]
pub fn AuthCallbackPage(#[prop(into)] on_done: Callback<()>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        use crate::state::auth::AuthController;
        use crate::util::oauth;

        let auth = expect_context::<AuthController>();
        let navigate = use_navigate();
        let handoff = oauth::handoff_token(&oauth::current_fragment());

        leptos::task::spawn_local(async move {
            let role = match handoff {
                Some(token) => match auth.complete_oauth_callback(&token).await {
                    Ok(resp) => Some(resp.user.role),
                    Err(e) => {
                        leptos::logging::warn!("oauth session exchange failed: {e}");
                        None
                    }
                },
                None => {
                    leptos::logging::warn!("oauth callback without a session id");
                    None
                }
            };
            oauth::clear_fragment();
            navigate(
                destination_after_callback(role),
                NavigateOptions { replace: true, ..NavigateOptions::default() },
            );
            on_done.run(());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = on_done;

    view! {
        <div class="auth-callback">
            <div class="auth-callback__spinner"></div>
            <p>"Completing sign in..."</p>
        </div>
    }
}
