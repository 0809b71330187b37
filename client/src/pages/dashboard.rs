//! Role dashboards. One component serves all four dashboard routes and sends
//! users who land on another role's dashboard back to their own.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::UserRole;
use crate::state::auth::{AuthController, AuthState};
use crate::util::auth::install_unauth_redirect;
use crate::util::roles::{dashboard_path, dashboard_title, role_for_dashboard};

/// The dashboard to redirect to when `current_path` belongs to another role.
#[must_use]
pub fn role_redirect(current_path: &str, role: UserRole) -> Option<&'static str> {
    match role_for_dashboard(current_path) {
        Some(owner) if owner == role => None,
        _ => Some(dashboard_path(role)),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let controller = expect_context::<AuthController>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let location = use_location();

    install_unauth_redirect(auth, navigate.clone());

    Effect::new(move || {
        let Some(role) = auth.with(|a| a.user.as_ref().map(|u| u.role)) else {
            return;
        };
        if let Some(target) = role_redirect(&location.pathname.get(), role) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_logout = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let controller = controller.clone();
            leptos::task::spawn_local(async move {
                controller.logout().await;
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &controller;
    });

    let field = move |pick: fn(&crate::net::types::User) -> String| {
        move || auth.with(|a| a.user.as_ref().map(pick).unwrap_or_default())
    };

    view! {
        <Show
            when=move || auth.with(|a| a.user.is_some())
            fallback=|| view! { <p class="dashboard-page__status">"Loading..."</p> }
        >
            <section class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>{move || auth.with(|a| a.user.as_ref().map_or("Dashboard", |u| dashboard_title(u.role)))}</h1>
                    <button class="btn" on:click=move |_| on_logout.run(())>"Sign Out"</button>
                </header>
                <dl class="dashboard-page__profile">
                    <dt>"Name"</dt>
                    <dd>{field(|u| u.name.clone())}</dd>
                    <dt>"Email"</dt>
                    <dd>{field(|u| u.email.clone())}</dd>
                    <dt>"Client ID"</dt>
                    <dd>{field(|u| u.client_id.clone())}</dd>
                </dl>
                <a class="btn" href="/trips">"Browse adventures"</a>
            </section>
        </Show>
    }
}
