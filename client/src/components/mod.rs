//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shell chrome and notice overlays while reading/writing
//! shared state from Leptos context providers.

pub mod notice_host;
pub mod shell_header;
