//! Budget Core
//!
//! Everything the budget page computes, without any rendering:
//! - [`FeatureList`]: ordered list of named work items with estimated hours
//! - [`Calculator`]: the page state container (rate, pending inputs, features)
//! - [`format`]: pt-BR currency and decimal formatting
//! - [`Notifier`]: seam for the transient notifications raised on bad input

pub mod calculator;
pub mod config;
pub mod feature;
pub mod format;
pub mod notice;
pub mod parse;


pub use calculator::{Calculator, Phase, RateStatus, Totals, ValidationError};
pub use config::AppConfig;
pub use feature::{Feature, FeatureList};
pub use format::{format_currency, format_decimal, format_hours_clock};
pub use notice::{Notice, Notifier};
pub use parse::{parse_hours, parse_rate, ParseError};
