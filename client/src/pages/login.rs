//! Login page supporting email + password and Google OAuth.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::AuthController;
use crate::util::auth::install_signed_in_redirect;
#[cfg(feature = "hydrate")]
use crate::util::roles::dashboard_path;

/// Trim the email and require both fields.
///
/// # Errors
///
/// Returns the message to show under the form.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Banner text for the `?error=` value set by the OAuth callback.
#[must_use]
pub fn login_notice(error: &str) -> Option<&'static str> {
    match error {
        "oauth" => Some("Google sign-in failed. Please try again."),
        "session" => Some("Your session has expired. Please sign in again."),
        _ => None,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthController>();
    let state = auth.state();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    install_signed_in_redirect(state, navigate.clone());

    let notice = move || query.with(|q| q.get("error")).and_then(|e| login_notice(&e));

    let auth_submit = auth.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let auth = auth_submit.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match auth.login(&email_value, &password_value).await {
                    Ok(resp) => navigate(dashboard_path(resp.user.role), NavigateOptions::default()),
                    Err(e) => info.set(e.user_message()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&auth_submit, &navigate, email_value, password_value);
    };

    let on_google = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if let Err(e) = auth.begin_oauth_redirect() {
            leptos::logging::warn!("google sign-in redirect failed: {e}");
            info.set(e.user_message());
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome back"</h1>
                <p class="login-card__subtitle">"Sign in to manage your adventures"</p>
                {move || notice().map(|text| view! { <p class="login-message login-message--notice">{text}</p> })}
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <button class="login-button login-button--google" on:click=on_google>
                    "Continue with Google"
                </button>
                <p class="login-card__footer">
                    "New here? " <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
