//! Thread-safe toast queue.
//!
//! Hooks push toasts from Tokio tasks; the UI thread drains the queue into
//! `egui-notify` each frame and draws persistent loading toasts itself.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::core::service::{Notifier, ToastId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedToast {
    pub level: ToastLevel,
    pub message: String,
}

/// Toast that stays until dismissed by code or by its close button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingToast {
    pub id: ToastId,
    pub message: String,
}

#[derive(Default)]
pub struct NotificationCenter {
    queue: Mutex<VecDeque<QueuedToast>>,
    loading: Mutex<Vec<LoadingToast>>,
    next_id: AtomicU64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every queued toast, oldest first
    pub fn drain(&self) -> Vec<QueuedToast> {
        self.queue.lock().drain(..).collect()
    }

    /// Loading toasts still on screen
    pub fn active_loading(&self) -> Vec<LoadingToast> {
        self.loading.lock().clone()
    }

    fn push(&self, level: ToastLevel, message: &str) {
        self.queue.lock().push_back(QueuedToast {
            level,
            message: message.to_string(),
        });
    }
}

impl Notifier for NotificationCenter {
    fn loading(&self, message: &str) -> ToastId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.loading.lock().push(LoadingToast {
            id,
            message: message.to_string(),
        });
        id
    }

    fn success(&self, message: &str) {
        self.push(ToastLevel::Success, message);
    }

    fn info(&self, message: &str) {
        self.push(ToastLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.push(ToastLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.push(ToastLevel::Error, message);
    }

    fn dismiss(&self, id: ToastId) {
        self.loading.lock().retain(|toast| toast.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order() {
        let center = NotificationCenter::new();
        center.info("first");
        center.error("second");

        let drained = center.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].level, ToastLevel::Info);
        assert_eq!(drained[1].message, "second");
        assert!(center.drain().is_empty());
    }

    #[test]
    fn test_loading_until_dismissed() {
        let center = NotificationCenter::new();
        let first = center.loading("Submitted deposit for 1 USDC");
        let second = center.loading("Submitted redeem for 2 USDC");
        assert_ne!(first, second);

        center.dismiss(first);
        let active = center.active_loading();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, second);

        // Unknown ids are ignored
        center.dismiss(999);
        assert_eq!(center.active_loading().len(), 1);
    }
}
