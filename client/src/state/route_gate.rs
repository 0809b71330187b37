//! Top-level render decision around the OAuth handoff.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server never sees the URL fragment, so SSR and the first hydration
//! pass both render [`RouteGate::Resolving`] (no chrome, no routes). Once
//! hydrated, the client resolves the gate from the fragment before the auth
//! bootstrap starts; a pending handoff mounts only the callback page until
//! the exchange settles.

#[cfg(test)]
#[path = "route_gate_test.rs"]
mod route_gate_test;

use crate::util::oauth;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RouteGate {
    /// Fragment not inspected yet; identical on server and client.
    #[default]
    Resolving,
    /// A `session_id=` handoff is being exchanged.
    Callback,
    /// Normal navbar, routes, and footer.
    Routes,
}

impl RouteGate {
    /// Render state for the first pass. Server route discovery must see the
    /// `<Routes>` tree, so it starts open; every real render starts resolving.
    #[must_use]
    pub fn initial(listing_routes: bool) -> Self {
        if listing_routes { Self::Routes } else { Self::Resolving }
    }

    #[must_use]
    pub fn from_fragment(fragment: &str) -> Self {
        if oauth::has_handoff_marker(fragment) { Self::Callback } else { Self::Routes }
    }

    /// The callback exchange finished (either way); routing resumes.
    #[must_use]
    pub fn complete_callback(self) -> Self {
        match self {
            Self::Callback => Self::Routes,
            other => other,
        }
    }

    #[must_use]
    pub fn shows_routes(self) -> bool {
        self == Self::Routes
    }
}
