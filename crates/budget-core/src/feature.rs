//! Feature Models
//!
//! A feature is one line of the budget: a name and the hours it should take.

use serde::{Deserialize, Serialize};

/// A named work item with its estimated hour cost
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feature {
    name: String,
    hours: u32,
}

impl Feature {
    pub fn new(name: impl Into<String>, hours: u32) -> Self {
        Self {
            name: name.into(),
            hours,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }
}

/// Features in insertion order. Names are not required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureList {
    items: Vec<Feature>,
}

impl FeatureList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, feature: Feature) {
        self.items.push(feature);
    }

    /// Remove the feature at `index`, keeping the order of the rest.
    /// Out-of-range indices leave the list untouched.
    pub fn remove(&mut self, index: usize) -> Option<Feature> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn to_vec(&self) -> Vec<Feature> {
        self.items.clone()
    }

    /// Sum of all hours (0 when empty)
    pub fn total_hours(&self) -> u64 {
        self.items.iter().map(|f| u64::from(f.hours)).sum()
    }
}

impl FromIterator<Feature> for FeatureList {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: &[(&str, u32)]) -> FeatureList {
        entries
            .iter()
            .map(|(name, hours)| Feature::new(*name, *hours))
            .collect()
    }

    #[test]
    fn test_total_hours_empty() {
        assert_eq!(FeatureList::new().total_hours(), 0);
    }

    #[test]
    fn test_total_hours_does_not_overflow_u32() {
        let features = list(&[("a", u32::MAX), ("b", u32::MAX)]);
        assert_eq!(features.total_hours(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut features = list(&[("a", 1), ("b", 2), ("c", 3), ("d", 4)]);

        let removed = features.remove(1);

        assert_eq!(removed, Some(Feature::new("b", 2)));
        let names: Vec<&str> = features.iter().map(Feature::name).collect();
        assert_eq!(names, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut features = list(&[("a", 1)]);
        assert_eq!(features.remove(1), None);
        assert_eq!(features.remove(usize::MAX), None);
        assert_eq!(features.len(), 1);
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let features = list(&[("Login", 3), ("Login", 5)]);
        assert_eq!(features.len(), 2);
        assert_eq!(features.total_hours(), 8);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let features = list(&[("Login", 3)]);
        let json = serde_json::to_string(&features).unwrap();
        assert_eq!(json, r#"[{"name":"Login","hours":3}]"#);
    }
}
