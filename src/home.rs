//! Home Page
//!
//! The budget card: rate in the header, feature form and list in the body,
//! totals in the footer.

use budget_core::{Feature, FeatureList};
use leptos::prelude::*;

use crate::components::{FeatureRow, NewFeatureForm, RateHeader, TotalsFooter};
use crate::store::{store_remove_feature, use_budget_store, BudgetStateStoreFields};

/// Rows keyed by `(position, feature)`; a row is rebuilt only when its
/// position or contents change
fn feature_rows(features: &FeatureList) -> Vec<(usize, Feature)> {
    features.iter().cloned().enumerate().collect()
}

#[component]
pub fn Home() -> impl IntoView {
    let store = use_budget_store();

    // Typing in the inputs writes the calculator too; only list changes pass this memo
    let rows = Memo::new(move |_| feature_rows(store.calculator().read().features()));

    let on_remove = Callback::new(move |index: usize| {
        store_remove_feature(&store, index);
    });

    view! {
        <section class="budget-card">
            <RateHeader />

            <div class="budget-card-body">
                <NewFeatureForm />

                <div class="feature-list">
                    <For
                        each=move || rows.get()
                        key=|row: &(usize, Feature)| row.clone()
                        children=move |(index, feature): (usize, Feature)| {
                            view! { <FeatureRow index=index feature=feature on_remove=on_remove /> }
                        }
                    />
                </div>
            </div>

            <TotalsFooter />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_keys_before_removed_row_are_stable() {
        let mut features: FeatureList = ["a", "b", "c"]
            .iter()
            .map(|name| Feature::new(*name, 1))
            .collect();
        let before = feature_rows(&features);

        features.remove(1);
        let after = feature_rows(&features);

        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], (1, Feature::new("c", 1)));
        assert!(!before.contains(&after[1]));
    }

    #[test]
    fn test_row_keys_ignore_pending_input() {
        let mut calc = budget_core::Calculator::new();
        calc.set_pending_name("Login");
        calc.set_pending_hours("4");
        calc.try_add_feature().unwrap();
        let before = feature_rows(calc.features());

        calc.set_pending_name("Log");
        calc.set_rate("50");

        assert_eq!(feature_rows(calc.features()), before);
    }
}
