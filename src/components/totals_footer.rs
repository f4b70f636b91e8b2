//! Totals Footer Component

use leptos::prelude::*;

use crate::store::{use_budget_store, BudgetStateStoreFields};

/// "Total de HH:00 horas com o orçamento de R$ X." recomputed on each change
#[component]
pub fn TotalsFooter() -> impl IntoView {
    let store = use_budget_store();
    let totals = move || store.calculator().read().totals();

    view! {
        <footer class="budget-card-footer">
            <span>
                "Total de "
                <strong class="total">{move || totals().hours_display()}</strong>
                " horas com o orçamento de "
                <strong class="total">{move || format!("{}.", totals().value_display())}</strong>
            </span>
        </footer>
    }
}
