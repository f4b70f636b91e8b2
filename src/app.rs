//! OrçaAqui Frontend App
//!
//! Root component: sets up the store and context, then lays out the page.

use budget_core::AppConfig;
use leptos::prelude::*;
use leptos_toast::{create_toast_signals, ToastHost};
use reactive_stores::Store;

use crate::components::Logo;
use crate::context::AppContext;
use crate::home::Home;
use crate::store::BudgetState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let toasts = create_toast_signals();

    // Provide context to all children
    provide_context(Store::new(BudgetState::default()));
    provide_context(AppContext::new(toasts, config.notice_duration_ms));

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&config.page_title);
    }

    view! {
        <div class="app-layout">
            <Logo />
            <Home />
        </div>
        <ToastHost toasts=toasts />
    }
}
