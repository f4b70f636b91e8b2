//! Budget State Store
//!
//! Uses Leptos reactive_stores so the page re-renders whatever reads the
//! calculator whenever one of the helpers below writes to it.

use budget_core::{Calculator, Feature, Notifier};
use leptos::prelude::*;
use reactive_stores::Store;

/// Page state; one per mounted page
#[derive(Clone, Debug, Default, Store)]
pub struct BudgetState {
    pub calculator: Calculator,
}

/// Type alias for the store
pub type BudgetStore = Store<BudgetState>;

/// Get the budget store from context
pub fn use_budget_store() -> BudgetStore {
    expect_context::<BudgetStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_rate(store: &BudgetStore, rate: String) {
    store.calculator().write().set_rate(rate);
}

pub fn store_set_pending_name(store: &BudgetStore, name: String) {
    store.calculator().write().set_pending_name(name);
}

pub fn store_set_pending_hours(store: &BudgetStore, hours: String) {
    store.calculator().write().set_pending_hours(hours);
}

/// Commit the pending feature, reporting rejections to `notifier`
pub fn store_submit_feature<N: Notifier + ?Sized>(store: &BudgetStore, notifier: &N) -> bool {
    store.calculator().write().submit_feature(notifier)
}

/// Remove a feature by position (no-op if out of range)
pub fn store_remove_feature(store: &BudgetStore, index: usize) -> Option<Feature> {
    store.calculator().write().remove_feature(index)
}
