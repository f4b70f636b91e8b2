//! Logo Component

use leptos::prelude::*;

/// `m.` wordmark linking back to the page root
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <a href="/" class="logo">
            "m"<span class="logo-dot">"."</span>
        </a>
    }
}
