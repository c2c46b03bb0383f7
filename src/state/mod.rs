//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the plain session data and its transitions; `session` is the
//! controller that sequences them around API calls and storage writes.

pub mod auth;
pub mod session;
