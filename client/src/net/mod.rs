//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls, `error` classifies failures, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
