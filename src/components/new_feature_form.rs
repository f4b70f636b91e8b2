//! New Feature Form Component
//!
//! Name and hours inputs with the `+` button. Submitting runs the
//! calculator's checks; rejections show up as toasts.

use budget_core::Phase;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{
    store_set_pending_hours, store_set_pending_name, store_submit_feature, use_budget_store,
    BudgetStateStoreFields,
};

#[component]
pub fn NewFeatureForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_budget_store();

    let create_feature = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_submit_feature(&store, &ctx);
    };

    let form_class = move || match store.calculator().read().phase() {
        Phase::Idle => "new-feature-form",
        Phase::Editing => "new-feature-form editing",
    };

    view! {
        <form class=form_class on:submit=create_feature>
            <input
                type="text"
                class="feature-name-input"
                placeholder="Digite o nome da feature"
                prop:value=move || store.calculator().read().pending_name().to_string()
                on:input=move |ev| store_set_pending_name(&store, event_target_value(&ev))
            />
            <input
                type="number"
                class="feature-hours-input"
                placeholder="Horas"
                min="0"
                step="1"
                prop:value=move || store.calculator().read().pending_hours().to_string()
                on:input=move |ev| store_set_pending_hours(&store, event_target_value(&ev))
            />
            <button type="submit" class="add-btn">"+"</button>
        </form>
    }
}
