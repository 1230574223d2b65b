//! Shared UI state for the portal shell.
//!
//! DESIGN
//! ======
//! One record per tab, provided as `RwSignal<UiState>` from `App`. Views read
//! it freely, but writes go through the named operations below so the
//! "shell visible implies verified identity" rule has one owner.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::net::types::UserInfo;

/// Menu key selected when the shell first renders.
pub const DEFAULT_MENU_KEY: &str = "0";

/// Process-wide display and identity flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    /// Whether the authenticated shell is visible.
    pub show_index: bool,
    pub role: String,
    pub username: String,
    /// Active navigation menu keys.
    pub selected_index: Vec<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            show_index: false,
            role: String::new(),
            username: String::new(),
            selected_index: vec![DEFAULT_MENU_KEY.to_owned()],
        }
    }
}

impl UiState {
    /// Record a freshly verified identity and reveal the shell.
    pub fn record_identity(&mut self, user: &UserInfo) {
        self.show_index = true;
        self.role.clone_from(&user.role);
        self.username.clone_from(&user.username);
    }

    /// Forget the current identity (logout).
    pub fn clear_identity(&mut self) {
        self.show_index = false;
        self.role.clear();
        self.username.clear();
    }

    pub fn select_menu(&mut self, key: &str) {
        self.selected_index = vec![key.to_owned()];
    }

    pub fn is_authenticated(&self) -> bool {
        self.show_index
    }
}
