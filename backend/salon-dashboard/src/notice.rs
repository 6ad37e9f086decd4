use crate::DashboardError;

use serde::Serialize;

pub const ERROR_TITLE: &str = "Error";
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Error,
    Success,
}

/// Dismissible notification: a short title and a message, never a code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: NoticeKind::Error,
            title: ERROR_TITLE.to_string(),
            message: if message.trim().is_empty() {
                FALLBACK_MESSAGE.to_string()
            } else {
                message
            },
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn from_error(error: &DashboardError) -> Self {
        Self::error(error.user_message())
    }

    /// Single notice for a failed batch whose local changes were undone.
    pub fn reverted(cause: &DashboardError) -> Self {
        let detail = cause.user_message();
        let message = if detail.trim().is_empty() {
            "Your changes could not be saved and were reverted.".to_string()
        } else {
            format!("Your changes could not be saved and were reverted: {detail}")
        };
        Self::error(message)
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}
