//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the shared client with token interception, `api` the auth
//! endpoints (real and mocked), `types` the wire schema and `error` the
//! failure taxonomy.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
