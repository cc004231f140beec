//! Networking modules for the question and history endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and classifies failures; `types` re-exports
//! the shared wire schema from the `wire` crate.

pub mod api;
pub mod types;
