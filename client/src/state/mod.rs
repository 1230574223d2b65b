//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `ui` holds the shell/identity flags written by the session gate, and
//! `notice` holds pending dialogs and toasts. Both are provided as signals
//! from `App`.

pub mod notice;
pub mod ui;
