//! Toast notifications
//!
//! `NotificationManager` is provided as context; any component can push a
//! toast with `use_notifications().success(..)`. The container renders the
//! queue, runs the dismiss timers and closes every toast on Escape.

#[cfg(feature = "csr")]
use crate::core::notification::EXIT_ANIMATION_MS;
use crate::core::notification::{Notification, NotificationItem, NotificationQueue};
use leptos::prelude::*;

/// Handle to the visible toasts
#[derive(Clone, Copy)]
pub struct NotificationManager {
    queue: RwSignal<NotificationQueue>,
    dismiss_ms: u32,
}

impl NotificationManager {
    pub fn new(max_visible: usize, dismiss_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::with_capacity(max_visible)),
            dismiss_ms,
        }
    }

    pub fn queue(&self) -> RwSignal<NotificationQueue> {
        self.queue
    }

    /// Add a notification
    pub fn notify(&self, notification: Notification) {
        let notification = notification.dismiss_after(self.dismiss_ms);
        self.queue.update(|q| {
            q.push(notification);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(Notification::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(Notification::error(message));
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.notify(Notification::warning(message));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(Notification::info(message));
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    /// Slide a toast out, then remove it. No-op if it is already closing.
    pub fn close(&self, id: u64) {
        if self.queue.try_update(|q| q.begin_exit(id)).unwrap_or(false) {
            self.remove_after_exit(vec![id]);
        }
    }

    /// Slide out every visible toast
    pub fn close_all(&self) {
        let ids = self.queue.try_update(|q| q.begin_exit_all()).unwrap_or_default();
        if !ids.is_empty() {
            self.remove_after_exit(ids);
        }
    }

    pub fn is_exiting(&self, id: u64) -> bool {
        self.queue.with(|q| q.is_exiting(id))
    }

    fn remove_after_exit(&self, ids: Vec<u64>) {
        let queue = self.queue;
        let remove = move || {
            queue.try_update(|q| {
                for id in &ids {
                    q.dismiss(*id);
                }
            });
        };
        #[cfg(feature = "csr")]
        gloo_timers::callback::Timeout::new(EXIT_ANIMATION_MS, remove).forget();
        #[cfg(not(feature = "csr"))]
        remove();
    }

    pub fn clear(&self) {
        self.queue.update(|q| q.clear());
    }
}

pub fn provide_notifications(max_visible: usize, dismiss_ms: u32) -> NotificationManager {
    let manager = NotificationManager::new(max_visible, dismiss_ms);
    provide_context(manager);
    manager
}

pub fn use_notifications() -> NotificationManager {
    use_context::<NotificationManager>().expect("NotificationManager not provided")
}

/// Fixed container in the top right corner
#[component]
pub fn NotificationsContainer() -> impl IntoView {
    let manager = use_notifications();

    #[cfg(feature = "csr")]
    {
        use crate::core::notification::is_dismiss_key;
        use leptos::ev::keydown;

        let handle = window_event_listener(keydown, move |ev| {
            if is_dismiss_key(&ev.key()) {
                manager.close_all();
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div class="notification-stack" aria-live="polite">
            <For
                each=move || manager.queue().with(|q| q.items().cloned().collect::<Vec<_>>())
                key=|item| item.id
                children=move |item| view! { <NotificationToast item=item manager=manager /> }
            />
        </div>
    }
}

#[component]
fn NotificationToast(item: NotificationItem, manager: NotificationManager) -> impl IntoView {
    let id = item.id;
    let notification = item.notification;

    #[cfg(feature = "csr")]
    {
        if let Some(ms) = notification.auto_dismiss_ms {
            gloo_timers::callback::Timeout::new(ms, move || manager.close(id)).forget();
        }
    }

    let class = format!("notification {}", notification.kind.css_class());

    view! {
        <div class=class class:show=move || !manager.is_exiting(id) role="status">
            <div class="notification-content">
                <div class="notification-icon">{notification.kind.icon()}</div>
                <div class="notification-message">{notification.message}</div>
                <button class="notification-close" aria-label="Close notification" on:click=move |_| manager.close(id)>
                    "×"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_close_all_removes_every_toast() {
        Owner::new().with(|| {
            let manager = NotificationManager::new(5, 4000);
            manager.success("saved");
            manager.error("failed");
            assert_eq!(manager.queue().with(|q| q.len()), 2);

            // without a browser the slide-out is skipped
            manager.close_all();
            assert!(manager.queue().with(|q| q.is_empty()));
        });
    }

    #[test]
    fn test_close_ignores_unknown_toast() {
        Owner::new().with(|| {
            let manager = NotificationManager::new(5, 4000);
            manager.info("fyi");
            manager.close(42);
            assert_eq!(manager.queue().with(|q| q.len()), 1);
            assert!(!manager.is_exiting(0));
        });
    }
}
