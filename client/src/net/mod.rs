//! Networking modules for the portal's REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the injected HTTP client and its default credential, and
//! `types` defines the JSON payloads exchanged with the backend.

pub mod api;
pub mod types;
