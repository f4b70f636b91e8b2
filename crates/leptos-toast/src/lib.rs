//! Leptos Toast Utilities
//!
//! Transient notifications for Leptos. Toasts are pushed onto a queue held in
//! signals, dismiss themselves after a timeout, and can be closed by hand.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Most toasts shown at once; the oldest go first
const MAX_VISIBLE: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
}

/// Visible toasts, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Add a toast and return its id
    pub fn push(&mut self, title: String, description: String) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.push(Toast { id, title, description });

        if self.toasts.len() > MAX_VISIBLE {
            let overflow = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove a toast; false if it was already gone
    pub fn dismiss(&mut self, id: u32) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Toast queue signals
#[derive(Clone, Copy)]
pub struct ToastSignals {
    pub queue_read: ReadSignal<ToastQueue>,
    pub queue_write: WriteSignal<ToastQueue>,
}

pub fn create_toast_signals() -> ToastSignals {
    let (queue_read, queue_write) = signal(ToastQueue::default());
    ToastSignals { queue_read, queue_write }
}

/// Show a toast that closes itself after `duration_ms`
pub fn show_toast(
    toasts: &ToastSignals,
    title: impl Into<String>,
    description: impl Into<String>,
    duration_ms: u32,
) -> u32 {
    let title = title.into();
    let description = description.into();
    let mut id = 0;
    toasts.queue_write.update(|queue| {
        id = queue.push(title, description);
    });

    let write = toasts.queue_write;
    Timeout::new(duration_ms, move || {
        // The host may be gone by now
        let _ = write.try_update(|queue| queue.dismiss(id));
    })
    .forget();

    id
}

pub fn dismiss_toast(toasts: &ToastSignals, id: u32) {
    toasts.queue_write.update(|queue| {
        queue.dismiss(id);
    });
}

/// Renders the current toasts in a fixed stack
#[component]
pub fn ToastHost(toasts: ToastSignals) -> impl IntoView {
    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.queue_read.get().toasts().to_vec()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast">
                            <div class="toast-body">
                                <strong class="toast-title">{toast.title}</strong>
                                <p class="toast-description">{toast.description}</p>
                            </div>
                            <button
                                class="toast-close"
                                aria-label="Fechar"
                                on:click=move |_| dismiss_toast(&toasts, id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(queue: &mut ToastQueue, title: &str) -> u32 {
        queue.push(title.to_string(), String::new())
    }

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        assert_eq!(push(&mut queue, "a"), 0);
        assert_eq!(push(&mut queue, "b"), 1);
        assert_eq!(queue.toasts().len(), 2);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::default();
        let first = push(&mut queue, "a");
        let second = push(&mut queue, "b");

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.toasts()[0].id, second);
        assert!(queue.dismiss(second));
        assert!(queue.toasts().is_empty());
    }

    #[test]
    fn test_oldest_dropped_when_full() {
        let mut queue = ToastQueue::default();
        for i in 0..(MAX_VISIBLE + 2) {
            push(&mut queue, &i.to_string());
        }

        assert_eq!(queue.toasts().len(), MAX_VISIBLE);
        assert_eq!(queue.toasts()[0].title, "2");
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut queue = ToastQueue::default();
        let first = push(&mut queue, "a");
        queue.dismiss(first);
        assert_ne!(push(&mut queue, "b"), first);
    }
}
