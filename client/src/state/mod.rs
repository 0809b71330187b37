//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` owns the identity lifecycle; `session_store` is its private
//! persistence layer. `route_gate` decides what the app shell mounts while
//! an OAuth handoff is pending.

pub mod auth;
pub mod route_gate;
pub mod session_store;
