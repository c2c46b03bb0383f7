//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; auth writes go through the
//! shared `AuthController`, reads through the `AuthState` signal.

pub mod home;
pub mod login;
pub mod not_found;
