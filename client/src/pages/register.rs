//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Registration;
use crate::state::auth::AuthController;
use crate::util::auth::install_signed_in_redirect;
#[cfg(feature = "hydrate")]
use crate::util::roles::dashboard_path;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Validate the registration form.
///
/// # Errors
///
/// Returns the message to show under the form.
pub fn validate_registration_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<Registration, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(Registration { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<AuthController>();
    let navigate = use_navigate();
    install_signed_in_redirect(auth.state(), navigate.clone());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let auth_submit = auth.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = match validate_registration_input(&name.get(), &email.get(), &password.get(), &confirm.get()) {
            Ok(form) => form,
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
                match auth.register(&form.name, &form.email, &form.password).await {
                    Ok(resp) => navigate(dashboard_path(resp.user.role), NavigateOptions::default()),
                    Err(e) => info.set(e.user_message()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&auth_submit, &navigate, form);
    };

    let on_google = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if let Err(e) = auth.begin_oauth_redirect() {
            leptos::logging::warn!("google sign-in redirect failed: {e}");
            info.set(e.user_message());
        }
    };

    let input = move |kind: &'static str, placeholder: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create your account"</h1>
                <form class="login-form" on:submit=on_submit>
                    {input("text", "Full name", name)}
                    {input("email", "you@example.com", email)}
                    {input("password", "Password", password)}
                    {input("password", "Confirm password", confirm)}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <button class="login-button login-button--google" on:click=on_google>
                    "Sign up with Google"
                </button>
                <p class="login-card__footer">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
