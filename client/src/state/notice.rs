//! Queue of modal dialogs and toast notifications awaiting display.
//!
//! SYSTEM CONTEXT
//! ==============
//! `util::dialog` pushes entries; `components::notice_host` renders them,
//! auto-dismisses timed ones, and acknowledges modals when OK is pressed.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Confirmation button label on modal dialogs.
pub const OK_LABEL: &str = "确定";

/// Display time for messages and notifications.
pub const NOTICE_DURATION_MS: u32 = 2_000;

/// Screen region a notice is drawn in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Center,
    Top,
    BottomLeft,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    ModalError,
    ModalSuccess,
    /// Plain info message at the top of the page.
    Message,
    Tip,
    ToastSuccess,
    ToastWarning,
    ToastError,
}

impl NoticeKind {
    pub fn is_modal(self) -> bool {
        matches!(self, Self::ModalError | Self::ModalSuccess)
    }

    /// Auto-dismiss delay; modals wait for the OK button.
    pub fn duration_ms(self) -> Option<u32> {
        if self.is_modal() { None } else { Some(NOTICE_DURATION_MS) }
    }

    pub fn placement(self) -> Placement {
        match self {
            Self::ModalError | Self::ModalSuccess => Placement::Center,
            Self::Message => Placement::Top,
            Self::Tip | Self::ToastSuccess | Self::ToastWarning | Self::ToastError => Placement::BottomLeft,
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::ModalError | Self::ToastError => "error",
            Self::ModalSuccess | Self::ToastSuccess => "success",
            Self::ToastWarning => "warning",
            Self::Message | Self::Tip => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
    /// Hash to navigate to once a success modal is acknowledged.
    pub ok_target: Option<String>,
}

/// Pending notices in insertion order.
#[derive(Clone, Debug, Default)]
pub struct NoticeQueue {
    next_id: u64,
    items: Vec<Notice>,
}

impl NoticeQueue {
    /// Enqueue a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>, ok_target: Option<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, kind, text: text.into(), ok_target });
        id
    }

    /// Remove a notice without acting on it. Returns whether it was present.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Remove a notice after its OK button was pressed, yielding the
    /// navigation target it carried.
    pub fn acknowledge(&mut self, id: u64) -> Option<String> {
        let pos = self.items.iter().position(|n| n.id == id)?;
        self.items.remove(pos).ok_target
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    pub fn in_placement(&self, placement: Placement) -> Vec<Notice> {
        self.items
            .iter()
            .filter(|n| n.kind.placement() == placement)
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
