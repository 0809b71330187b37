//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and trip listings while reading identity
//! from the auth controller provided through Leptos context.

pub mod footer;
pub mod navbar;
pub mod search_bar;
pub mod trip_card;
