//! Feature Row Component

use budget_core::{format_decimal, Feature};
use leptos::prelude::*;

/// One committed feature with its remove button
///
/// # Arguments
/// * `index` - Position in the list, passed back to `on_remove`
/// * `feature` - The feature shown in this row
/// * `on_remove` - Called with `index` when the trash button is clicked
#[component]
pub fn FeatureRow(
    index: usize,
    feature: Feature,
    #[prop(into)] on_remove: Callback<usize>,
) -> impl IntoView {
    let label = format!(
        "{} - {} horas",
        feature.name(),
        format_decimal(f64::from(feature.hours()))
    );

    view! {
        <div class="feature-row">
            <span class="feature-label">{label}</span>
            <button
                type="button"
                class="remove-btn"
                aria-label="Remover feature"
                on:click=move |_| on_remove.run(index)
            >
                "🗑"
            </button>
        </div>
    }
}
