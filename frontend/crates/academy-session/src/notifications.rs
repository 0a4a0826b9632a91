//! Transient user notifications raised by mutations.

use std::sync::{Arc, Mutex, MutexGuard};

use log::{info, warn};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Collects notifications until the front-end drains and shows them.
#[derive(Clone, Default)]
pub struct Notifier {
    pending: Arc<Mutex<Vec<Notification>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self, message: impl Into<String>) {
        let message = message.into();
        info!("{message}");
        self.push(NotificationLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        warn!("{message}");
        self.push(NotificationLevel::Error, message);
    }

    /// Take all pending notifications, oldest first
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.lock())
    }

    fn push(&self, level: NotificationLevel, message: String) {
        self.lock().push(Notification { level, message });
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        // Recover from poisoning
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}
