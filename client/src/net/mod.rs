//! Networking modules for the course API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `token` decodes the bearer token the API issues,
//! and `types` defines the shared wire schema.

pub mod api;
pub mod token;
pub mod types;
