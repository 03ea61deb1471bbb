//! Transient notifications
//!
//! Notices are the engine's only output channel: ephemeral messages with a
//! severity, an optional stable key for in-place replacement, and an
//! optional auto-dismiss hint for the presentation layer. The
//! [`NoticeBoard`] keeps the latest notice per key (last-writer-wins) and
//! mirrors every notice to the log.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Loading,
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Info => "info",
            NoticeKind::Loading => "loading",
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// One transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// Stable slot key; a keyed notice replaces the previous notice under
    /// the same key. Unkeyed notices are standalone.
    pub key: Option<&'static str>,
    /// Presentation hint: how long to keep the notice on screen
    pub dismiss_after: Option<Duration>,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, text)
    }

    pub fn loading(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Loading, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, text)
    }

    fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            key: None,
            dismiss_after: None,
        }
    }

    /// Attach a stable slot key
    pub fn with_key(mut self, key: &'static str) -> Self {
        self.key = Some(key);
        self
    }

    /// Attach an auto-dismiss hint
    pub fn with_dismiss(mut self, after: Duration) -> Self {
        self.dismiss_after = Some(after);
        self
    }
}

/// Sink for notices. Implementations must be callable from timer tasks,
/// so publishing is synchronous and must not block.
pub trait Notifier: Send + Sync {
    fn publish(&self, notice: Notice);
}

/// Default notifier: logs every notice and keeps the latest notice per
/// key. Concurrent progress runs sharing a key overwrite each other here,
/// which is exactly the visible behavior being simulated.
#[derive(Default)]
pub struct NoticeBoard {
    slots: Mutex<HashMap<&'static str, Notice>>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest notice published under `key`, if any
    pub fn latest(&self, key: &str) -> Option<Notice> {
        match self.slots.lock() {
            Ok(slots) => slots.get(key).cloned(),
            Err(poisoned) => poisoned.into_inner().get(key).cloned(),
        }
    }
}

impl Notifier for NoticeBoard {
    fn publish(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Error => log::error!("[{}] {}", notice.kind.as_str(), notice.text),
            _ => log::info!("[{}] {}", notice.kind.as_str(), notice.text),
        }

        if let Some(key) = notice.key {
            match self.slots.lock() {
                Ok(mut slots) => {
                    slots.insert(key, notice);
                }
                Err(poisoned) => {
                    poisoned.into_inner().insert(key, notice);
                }
            }
        }
    }
}
