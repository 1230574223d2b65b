//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, location,
//! session verification, notices) from page and component logic to improve
//! reuse and testability.

pub mod auth;
pub mod dialog;
pub mod location;
pub mod storage;
