//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod auth_callback;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
pub mod trips;
