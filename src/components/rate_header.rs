//! Rate Header Component
//!
//! Card header with the hourly rate input.

use budget_core::RateStatus;
use leptos::prelude::*;

use crate::store::{store_set_rate, use_budget_store, BudgetStateStoreFields};

#[component]
pub fn RateHeader() -> impl IntoView {
    let store = use_budget_store();

    let is_invalid = move || matches!(store.calculator().read().rate_status(), RateStatus::Invalid(_));

    view! {
        <header class="budget-card-header">
            <span class="rate-label">"Valor por hora 👉🏻"</span>
            <div class="input-group">
                <span class="input-addon" aria-hidden="true">"🕒"</span>
                <input
                    type="text"
                    inputmode="numeric"
                    class=move || if is_invalid() { "rate-input invalid" } else { "rate-input" }
                    aria-invalid=move || if is_invalid() { "true" } else { "false" }
                    prop:value=move || store.calculator().read().rate().to_string()
                    on:input=move |ev| store_set_rate(&store, event_target_value(&ev))
                />
            </div>
        </header>
    }
}
