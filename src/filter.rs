//! Catalog filtering.
//!
//! A `FilterState` composes three predicates: name substring, series
//! membership, and catalog-number range. Empty parts match everything.

use crate::numeric::parse_leading_int;
use crate::pet::Pet;
use serde::{Deserialize, Serialize};

/// Catalog-number bounds as typed by the user.
///
/// Bounds that do not start with an integer are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkNoRange {
    pub min: String,
    pub max: String,
}

impl MarkNoRange {
    pub fn contains(&self, mark_number: i64) -> bool {
        let above_min = parse_leading_int(&self.min).map_or(true, |min| mark_number >= min);
        let below_max = parse_leading_int(&self.max).map_or(true, |max| mark_number <= max);
        above_min && below_max
    }
}

/// The active catalog filters.
///
/// # Examples
///
/// ```rust
/// use petstat::FilterState;
///
/// let mut filter = FilterState::default();
/// assert!(!filter.is_active());
///
/// filter.name = "spark".to_string();
/// filter.toggle_series("Electric", true);
/// filter.mark_no_range.max = "100".to_string();
/// assert!(filter.is_active());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub name: String,
    pub series: Vec<String>,
    pub mark_no_range: MarkNoRange,
}

impl FilterState {
    /// Whether `pet` passes every filter.
    pub fn matches(&self, pet: &Pet) -> bool {
        self.matches_name(pet) && self.matches_series(pet) && self.matches_mark_no(pet)
    }

    fn matches_name(&self, pet: &Pet) -> bool {
        self.name.is_empty() || pet.name.to_lowercase().contains(&self.name.to_lowercase())
    }

    fn matches_series(&self, pet: &Pet) -> bool {
        self.series.is_empty()
            || pet
                .series_list()
                .iter()
                .any(|s| self.series.iter().any(|wanted| wanted == s))
    }

    // A pet without a parseable catalog number is never excluded by the range.
    fn matches_mark_no(&self, pet: &Pet) -> bool {
        pet.mark_number()
            .map_or(true, |n| self.mark_no_range.contains(n))
    }

    /// Add (`on == true`) or remove a series from the selection.
    pub fn toggle_series(&mut self, series: &str, on: bool) {
        if on {
            if !self.series.iter().any(|s| s == series) {
                self.series.push(series.to_string());
            }
        } else {
            self.series.retain(|s| s != series);
        }
    }

    /// Whether any filter would exclude something.
    pub fn is_active(&self) -> bool {
        !self.name.is_empty()
            || !self.series.is_empty()
            || parse_leading_int(&self.mark_no_range.min).is_some()
            || parse_leading_int(&self.mark_no_range.max).is_some()
    }
}
