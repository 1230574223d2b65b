//! Modal dialog and toast helpers.
//!
//! Thin wrappers that enqueue [`Notice`](crate::state::notice::Notice)
//! entries with fixed presentation: modals confirm with the `确定` label,
//! messages and notifications disappear after two seconds, and
//! notifications sit in the bottom-left corner.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeQueue};

/// Handle for raising notices from pages and event handlers.
#[derive(Clone, Copy, Debug)]
pub struct Dialogs {
    queue: RwSignal<NoticeQueue>,
}

impl Dialogs {
    pub fn new(queue: RwSignal<NoticeQueue>) -> Self {
        Self { queue }
    }

    /// Handle over the queue provided by `App`.
    pub fn from_context() -> Self {
        Self::new(expect_context::<RwSignal<NoticeQueue>>())
    }

    /// Error modal.
    pub fn show_err(&self, msg: &str) {
        self.push(NoticeKind::ModalError, msg, None);
    }

    /// Success modal; pressing OK navigates to `hash` when given.
    pub fn show_success(&self, msg: &str, hash: Option<&str>) {
        self.push(NoticeKind::ModalSuccess, msg, hash.map(str::to_owned));
    }

    /// Short info message.
    pub fn show_msg(&self, msg: &str) {
        self.push(NoticeKind::Message, msg, None);
    }

    pub fn tip(&self, msg: &str) {
        self.push(NoticeKind::Tip, msg, None);
    }

    pub fn toast_success(&self, msg: &str) {
        self.push(NoticeKind::ToastSuccess, msg, None);
    }

    pub fn toast_warning(&self, msg: &str) {
        self.push(NoticeKind::ToastWarning, msg, None);
    }

    pub fn toast_error(&self, msg: &str) {
        self.push(NoticeKind::ToastError, msg, None);
    }

    fn push(&self, kind: NoticeKind, msg: &str, ok_target: Option<String>) {
        self.queue.update(|queue| {
            queue.push(kind, msg, ok_target);
        });
    }
}
