//! UI Components
//!
//! Pieces of the budget page.

mod feature_row;
mod logo;
mod new_feature_form;
mod rate_header;
mod totals_footer;

pub use feature_row::FeatureRow;
pub use logo::Logo;
pub use new_feature_form::NewFeatureForm;
pub use rate_header::RateHeader;
pub use totals_footer::TotalsFooter;
