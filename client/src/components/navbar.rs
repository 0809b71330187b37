//! Top navigation bar with sign-in entry point and the user menu.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::state::auth::{AuthController, AuthPhase, AuthState};
use crate::util::roles::dashboard_path;

/// Up to two uppercase initials for the avatar bubble.
#[must_use]
pub fn user_initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if initials.is_empty() { "?".to_owned() } else { initials }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<AuthController>();
    let state = auth.state();
    let menu_open = RwSignal::new(false);

    let on_logout = Callback::new(move |()| {
        menu_open.set(false);
        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                auth.logout().await;
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &auth;
    });

    let phase = Memo::new(move |_| state.with(AuthState::phase));
    let initials = move || state.get().user.map(|u| user_initials(&u.name)).unwrap_or_default();
    let dashboard_href = move || state.get().user.map_or("/dashboard", |u| dashboard_path(u.role));

    view! {
        <header class="navbar">
            <a href="/" class="navbar__brand">"Seeker Adventure"</a>
            <nav class="navbar__links">
                <a href="/trips">"Adventures"</a>
                <a href="/trips?activity_type=hiking">"Hiking"</a>
                <a href="/trips?activity_type=diving">"Diving"</a>
            </nav>
            <div class="navbar__auth">
                {move || match phase.get() {
                    AuthPhase::Bootstrapping => ().into_any(),
                    AuthPhase::Unauthenticated => {
                        view! { <a href="/login" class="navbar__signin">"Sign In"</a> }.into_any()
                    }
                    AuthPhase::Authenticated => view! {
                        <button
                            class="navbar__avatar"
                            on:click=move |_| menu_open.update(|open| *open = !*open)
                        >
                            {initials}
                        </button>
                        <Show when=move || menu_open.get()>
                            <div class="navbar__menu">
                                <a href=dashboard_href on:click=move |_| menu_open.set(false)>
                                    "Dashboard"
                                </a>
                                <button class="navbar__logout" on:click=move |_| on_logout.run(())>
                                    "Sign Out"
                                </button>
                            </div>
                        </Show>
                    }
                    .into_any(),
                }}
            </div>
        </header>
    }
}
