//! Toast notifications
//!
//! [`NotificationQueue`] holds what is on screen; the Leptos container in
//! `ui::notifications` renders it and drives the dismiss timers.

use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// Maximum number of toasts shown at once
pub const MAX_NOTIFICATIONS: usize = 5;

/// Auto-dismiss delay for non-error toasts
pub const DEFAULT_DISMISS_MS: u32 = 5000;

/// Duration of the slide-out animation before a toast is removed
pub const EXIT_ANIMATION_MS: u32 = 300;

/// Key that closes every visible toast
pub const DISMISS_KEY: &str = "Escape";

pub fn is_dismiss_key(key: &str) -> bool {
    key == DISMISS_KEY
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
            NotificationKind::Warning => "notification-warning",
            NotificationKind::Info => "notification-info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✓",
            NotificationKind::Error => "✕",
            NotificationKind::Warning => "!",
            NotificationKind::Info => "i",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    /// `None` keeps the toast until the visitor closes it
    pub auto_dismiss_ms: Option<u32>,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            auto_dismiss_ms: Some(DEFAULT_DISMISS_MS),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            auto_dismiss_ms: None, // closed manually
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Warning,
            message: message.into(),
            auto_dismiss_ms: Some(DEFAULT_DISMISS_MS),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
            auto_dismiss_ms: Some(DEFAULT_DISMISS_MS),
        }
    }

    /// Override the auto-dismiss delay (errors stay sticky)
    pub fn dismiss_after(mut self, ms: u32) -> Self {
        if self.kind != NotificationKind::Error {
            self.auto_dismiss_ms = Some(ms);
        }
        self
    }
}

/// Notification with unique id for tracking
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationItem {
    pub id: u64,
    pub notification: Notification,
}

/// Bounded FIFO of visible toasts
///
/// A toast is closed in two steps: [`begin_exit`](Self::begin_exit) starts
/// its slide-out, [`dismiss`](Self::dismiss) removes it afterwards.
#[derive(Clone, Debug)]
pub struct NotificationQueue {
    items: VecDeque<NotificationItem>,
    exiting: HashSet<u64>,
    next_id: u64,
    capacity: usize,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::with_capacity(MAX_NOTIFICATIONS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::new(),
            exiting: HashSet::new(),
            next_id: 0,
            capacity: capacity.max(1),
        }
    }

    /// Add a toast, dropping the oldest when over capacity. Returns its id.
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push_back(NotificationItem { id, notification });

        while self.items.len() > self.capacity {
            if let Some(evicted) = self.items.pop_front() {
                self.exiting.remove(&evicted.id);
            }
        }
        id
    }

    /// Start closing a toast. Returns `false` if it is gone or already closing.
    pub fn begin_exit(&mut self, id: u64) -> bool {
        self.items.iter().any(|i| i.id == id) && self.exiting.insert(id)
    }

    /// Start closing every toast that is not closing yet; returns their ids
    pub fn begin_exit_all(&mut self) -> Vec<u64> {
        let ids: Vec<u64> = self
            .items
            .iter()
            .map(|i| i.id)
            .filter(|id| !self.exiting.contains(id))
            .collect();
        self.exiting.extend(ids.iter().copied());
        ids
    }

    pub fn is_exiting(&self, id: u64) -> bool {
        self.exiting.contains(&id)
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        self.exiting.remove(&id);
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.exiting.clear();
    }

    pub fn items(&self) -> impl Iterator<Item = &NotificationItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_defaults() {
        assert_eq!(Notification::success("ok").auto_dismiss_ms, Some(5000));
        assert_eq!(Notification::info("fyi").auto_dismiss_ms, Some(5000));
        assert_eq!(Notification::error("bad").auto_dismiss_ms, None);
        assert_eq!(Notification::error("bad").dismiss_after(10).auto_dismiss_ms, None);
        assert_eq!(Notification::warning("hm").dismiss_after(10).auto_dismiss_ms, Some(10));
    }

    #[test]
    fn test_queue_drops_oldest() {
        let mut queue = NotificationQueue::new();
        for n in 0..7 {
            queue.push(Notification::info(format!("#{n}")));
        }
        assert_eq!(queue.len(), MAX_NOTIFICATIONS);
        let first = queue.items().next().unwrap();
        assert_eq!(first.id, 2);
        assert_eq!(first.notification.message, "#2");
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut queue = NotificationQueue::new();
        let a = queue.push(Notification::success("a"));
        let b = queue.push(Notification::error("b"));

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.items().map(|i| i.id).collect::<Vec<_>>(), vec![b]);

        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_escape_closes_every_open_toast() {
        let mut queue = NotificationQueue::new();
        let a = queue.push(Notification::success("saved"));
        let b = queue.push(Notification::error("failed"));
        let c = queue.push(Notification::info("fyi"));

        assert!(queue.begin_exit(a));
        assert!(is_dismiss_key("Escape"));
        assert!(!is_dismiss_key("Enter"));

        // `a` is already sliding out
        assert_eq!(queue.begin_exit_all(), vec![b, c]);
        assert!(queue.begin_exit_all().is_empty());
        assert!(queue.is_exiting(b));

        for id in [a, b, c] {
            queue.dismiss(id);
        }
        assert!(queue.is_empty());
        assert!(!queue.is_exiting(b));
    }

    #[test]
    fn test_begin_exit_only_once() {
        let mut queue = NotificationQueue::new();
        let id = queue.push(Notification::warning("careful"));

        assert!(queue.begin_exit(id));
        assert!(!queue.begin_exit(id));
        assert!(!queue.begin_exit(id + 1));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_value(Notification::warning("careful")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "warning", "message": "careful", "auto_dismiss_ms": 5000})
        );
    }
}
