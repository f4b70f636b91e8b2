//! Calculator State
//!
//! Everything the budget page holds: the hourly rate, the two pending inputs
//! for the next feature, and the committed features. Totals are never
//! stored; they are derived from the current state on every call.

use thiserror::Error;

use crate::feature::{Feature, FeatureList};
use crate::format::{format_currency, format_hours_clock};
use crate::notice::{Notice, Notifier};
use crate::parse::{parse_hours, parse_rate, ParseError};

/// Why a pending feature was not added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("feature name is missing")]
    MissingName,
    #[error("feature hours are missing")]
    MissingHours,
    #[error("feature hours are invalid: {0}")]
    InvalidHours(ParseError),
}

impl ValidationError {
    /// User-facing notice for this error
    pub fn notice(&self) -> Notice {
        match self {
            Self::MissingName => Notice::new(
                "Digite um nome",
                "Antes de inserir, define um nome para sua feature!",
            ),
            Self::MissingHours => Notice::new(
                "Digite as horas",
                "Antes de inserir, define quanto tempo gastará para concluir!",
            ),
            Self::InvalidHours(_) => Notice::new(
                "Horas inválidas",
                "Informe as horas como um número inteiro, sem sinais ou casas decimais!",
            ),
        }
    }
}

/// Whether the user is in the middle of typing a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Editing,
}

/// Interpretation of the rate field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateStatus {
    Empty,
    Valid(u32),
    Invalid(ParseError),
}

impl RateStatus {
    /// Rate used for the total value; anything unusable counts as zero
    pub fn effective(&self) -> u32 {
        match self {
            Self::Valid(rate) => *rate,
            Self::Empty | Self::Invalid(_) => 0,
        }
    }
}

/// Derived totals for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub hours: u64,
    pub value: u64,
}

impl Totals {
    pub fn hours_display(&self) -> String {
        format_hours_clock(self.hours)
    }

    pub fn value_display(&self) -> String {
        format_currency(self.value as f64)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    rate: String,
    pending_name: String,
    pending_hours: String,
    features: FeatureList,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rate(&self) -> &str {
        &self.rate
    }

    pub fn set_rate(&mut self, rate: impl Into<String>) {
        self.rate = rate.into();
    }

    pub fn pending_name(&self) -> &str {
        &self.pending_name
    }

    pub fn set_pending_name(&mut self, name: impl Into<String>) {
        self.pending_name = name.into();
    }

    pub fn pending_hours(&self) -> &str {
        &self.pending_hours
    }

    pub fn set_pending_hours(&mut self, hours: impl Into<String>) {
        self.pending_hours = hours.into();
    }

    pub fn features(&self) -> &FeatureList {
        &self.features
    }

    pub fn phase(&self) -> Phase {
        if self.pending_name.is_empty() && self.pending_hours.is_empty() {
            Phase::Idle
        } else {
            Phase::Editing
        }
    }

    pub fn rate_status(&self) -> RateStatus {
        match parse_rate(&self.rate) {
            Ok(rate) => RateStatus::Valid(rate),
            Err(ParseError::Empty) => RateStatus::Empty,
            Err(e) => RateStatus::Invalid(e),
        }
    }

    /// Commit the pending name/hours as a new feature.
    ///
    /// Checks run in order: name, then hours present, then hours parse.
    /// On failure nothing changes. On success the pending fields are
    /// cleared and the rate is left alone.
    pub fn try_add_feature(&mut self) -> Result<Feature, ValidationError> {
        if self.pending_name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let hours = match parse_hours(&self.pending_hours) {
            Ok(hours) => hours,
            Err(ParseError::Empty) => return Err(ValidationError::MissingHours),
            Err(e) => return Err(ValidationError::InvalidHours(e)),
        };

        let feature = Feature::new(self.pending_name.as_str(), hours);
        log::debug!("Adding feature {:?} ({}h)", feature.name(), feature.hours());
        self.features.push(feature.clone());
        self.pending_name.clear();
        self.pending_hours.clear();

        Ok(feature)
    }

    /// Like [`Self::try_add_feature`], but reports a rejection to `notifier`.
    /// Returns whether a feature was added.
    pub fn submit_feature<N: Notifier + ?Sized>(&mut self, notifier: &N) -> bool {
        match self.try_add_feature() {
            Ok(_) => true,
            Err(e) => {
                log::info!("Rejected feature input: {}", e);
                notifier.notify(e.notice());
                false
            }
        }
    }

    /// Remove the feature at `index`; out-of-range is a silent no-op
    pub fn remove_feature(&mut self, index: usize) -> Option<Feature> {
        let removed = self.features.remove(index);
        match &removed {
            Some(feature) => log::debug!("Removed feature #{} {:?}", index, feature.name()),
            None => log::debug!("Ignoring removal of missing feature #{}", index),
        }
        removed
    }

    pub fn total_hours(&self) -> u64 {
        self.features.total_hours()
    }

    /// Total hours times the rate, saturating
    pub fn total_value(&self) -> u64 {
        self.total_hours()
            .saturating_mul(u64::from(self.rate_status().effective()))
    }

    pub fn totals(&self) -> Totals {
        Totals {
            hours: self.total_hours(),
            value: self.total_value(),
        }
    }
}
