//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage,
//! navigation) from page and state logic to improve reuse and testability.

pub mod auth;
pub mod navigation;
pub mod session_token;
pub mod storage;
