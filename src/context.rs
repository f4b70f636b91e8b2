//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use budget_core::{Notice, Notifier};
use leptos::prelude::*;
use leptos_toast::{show_toast, ToastSignals};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Toast queue the notices are pushed onto
    toasts: ToastSignals,
    /// How long each notice stays up
    notice_duration_ms: u32,
}

impl AppContext {
    pub fn new(toasts: ToastSignals, notice_duration_ms: u32) -> Self {
        Self {
            toasts,
            notice_duration_ms,
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Notices become auto-dismissing toasts
impl Notifier for AppContext {
    fn notify(&self, notice: Notice) {
        show_toast(
            &self.toasts,
            notice.title,
            notice.description,
            self.notice_duration_ms,
        );
    }
}
