//! User-visible notices produced by view logic and rendered as toasts.

use crate::components::{ToastOptions, Toasts};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// A transient message for the user. View logic returns these as plain data;
/// only the component layer turns them into toasts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Generic message for unexpected statuses and network failures.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

pub fn show_notice(toasts: &Toasts, notice: Notice) {
    match notice.kind {
        NoticeKind::Success => toasts.success(notice.message, ToastOptions::new()),
        NoticeKind::Error => toasts.error(notice.message, ToastOptions::new()),
        NoticeKind::Info => toasts.info(notice.message, ToastOptions::new()),
    }
}
