//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` is the composition root: it builds the single `AuthController`,
//! provides it (and the REST client) through context, and kicks off the
//! one-time auth bootstrap.
//!
//! DESIGN
//! ======
//! SSR cannot see the URL fragment, so the server and the hydration pass both
//! render the neutral `RouteGate::Resolving` shell. Right after hydration the
//! gate is resolved from the fragment in one step, and only then is the auth
//! bootstrap spawned. While a handoff is pending only the callback page
//! mounts, so the navbar, footer, and guarded routes never observe the
//! pre-exchange state.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    RouteList, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar};
use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::pages::{
    auth_callback::AuthCallbackPage, dashboard::DashboardPage, home::HomePage, login::LoginPage,
    register::RegisterPage, trips::TripsPage,
};
use crate::state::auth::AuthController;
use crate::state::route_gate::RouteGate;
use crate::state::session_store::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let api = HttpApi::new(config.clone());
    let auth = AuthController::new(api.clone(), SessionStore::browser(), config);

    provide_context(auth.clone());
    provide_context(auth.state());
    provide_context(api);

    let gate = RwSignal::new(RouteGate::initial(RouteList::is_generating()));

    #[cfg(feature = "hydrate")]
    {
        // Runs after hydration; the fragment is captured once for this load.
        Effect::new(move || {
            let fragment = crate::util::oauth::current_fragment();
            gate.set(RouteGate::from_fragment(&fragment));
            let auth = auth.clone();
            leptos::task::spawn_local(async move { auth.bootstrap(&fragment).await });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;

    let on_callback_done = Callback::new(move |()| gate.update(|g| *g = g.complete_callback()));

    view! {
        <Stylesheet id="leptos" href="/pkg/seeker.css"/>
        <Title text="Seeker Adventure"/>

        <Router>
            {move || match gate.get() {
                RouteGate::Resolving => view! { <div class="app-resolving"></div> }.into_any(),
                RouteGate::Callback => view! { <AuthCallbackPage on_done=on_callback_done/> }.into_any(),
                RouteGate::Routes => view! {
                    <Navbar/>
                    <main class="app-main">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=StaticSegment("") view=HomePage/>
                            <Route path=StaticSegment("trips") view=TripsPage/>
                            <Route path=StaticSegment("login") view=LoginPage/>
                            <Route path=StaticSegment("register") view=RegisterPage/>
                            <Route path=StaticSegment("dashboard") view=DashboardPage/>
                            <Route path=(StaticSegment("host"), StaticSegment("dashboard")) view=DashboardPage/>
                            <Route path=StaticSegment("admin") view=DashboardPage/>
                            <Route path=StaticSegment("webdev") view=DashboardPage/>
                        </Routes>
                    </main>
                    <Footer/>
                }
                .into_any(),
            }}
        </Router>
    }
}
