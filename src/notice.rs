//! Transient notices
//!
//! Short non-blocking banners shown after user actions.

use std::time::Duration;
use uuid::Uuid;

/// Used when neither the notice nor the settings say otherwise.
pub const DEFAULT_NOTICE_TIMEOUT: Duration = Duration::from_millis(2800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Danger,
    Info,
}

impl NoticeKind {
    /// CSS modifier class for the banner
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "alert-success",
            NoticeKind::Warning => "alert-warning",
            NoticeKind::Danger => "alert-danger",
            NoticeKind::Info => "alert-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Distinguishes two notices with the same text so a stale timer
    /// never clears a newer banner
    pub id: Uuid,
    pub message: String,
    pub kind: NoticeKind,
    /// `None` uses the configured default
    pub timeout: Option<Duration>,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            timeout: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Danger, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, message)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// How long to show this notice given the configured default.
    pub fn duration_or(&self, default: Duration) -> Duration {
        self.timeout.unwrap_or(default)
    }
}
