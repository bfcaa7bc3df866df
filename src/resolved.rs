//! Calculation results module.
//!
//! Contains `CalcResult`, the computed value of one attribute with all
//! thirteen enhancement tiers and a breakdown of the steps that produced
//! it, and `StatSheet`, the six results for one pet.

use crate::numeric::StatValue;
use crate::stat_kind::StatKind;
use crate::tier::{TierLevel, TierSelection};
use serde::{Deserialize, Serialize};

/// A computed attribute with its tier table and breakdown.
///
/// Results are plain data: cheap to clone, serializable, and never
/// persisted by the crate itself.
///
/// # Examples
///
/// ```rust
/// use petstat::{BuildConfig, StatCalculator, StatKind, TierLevel};
///
/// let result = StatCalculator::compute(100, &BuildConfig::default(), StatKind::Speed);
/// assert_eq!(result.tier(TierLevel::BASELINE), result.base);
/// assert_eq!(result.tiers().count(), 13);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalcResult {
    pub kind: StatKind,

    /// The computed value at tier 0.
    pub base: StatValue,

    /// Values for every tier, indexed by `TierLevel::index`.
    pub tiered: [StatValue; TierLevel::COUNT],

    /// `(step description, value after step)` in application order.
    pub breakdown: Vec<(String, StatValue)>,
}

impl CalcResult {
    /// Create a result whose every tier equals `base`; the calculator fills the rest.
    pub fn new(kind: StatKind, base: StatValue) -> Self {
        Self {
            kind,
            base,
            tiered: [base; TierLevel::COUNT],
            breakdown: Vec::new(),
        }
    }

    pub fn tier(&self, level: TierLevel) -> StatValue {
        self.tiered[level.index()]
    }

    /// All tiers in ascending order.
    pub fn tiers(&self) -> impl Iterator<Item = (TierLevel, StatValue)> + '_ {
        TierLevel::ALL.into_iter().map(|level| (level, self.tier(level)))
    }

    /// Only the tiers in `selection`, ascending.
    pub fn selected<'a>(
        &'a self,
        selection: &'a TierSelection,
    ) -> impl Iterator<Item = (TierLevel, StatValue)> + 'a {
        selection.iter().map(|level| (level, self.tier(level)))
    }

    /// Append a step to the breakdown.
    pub fn add_step(&mut self, description: impl Into<String>, value: StatValue) {
        self.breakdown.push((description.into(), value));
    }
}

/// The six computed attributes of one record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatSheet {
    results: [CalcResult; 6],
}

impl StatSheet {
    /// Build by computing each kind in `StatKind::ALL` order.
    pub fn from_fn(mut compute: impl FnMut(StatKind) -> CalcResult) -> Self {
        Self {
            results: StatKind::ALL.map(|kind| compute(kind)),
        }
    }

    pub fn get(&self, kind: StatKind) -> &CalcResult {
        &self.results[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalcResult> {
        self.results.iter()
    }

    /// Sum of the computed bases.
    pub fn total(&self) -> StatValue {
        self.results
            .iter()
            .map(|r| r.base)
            .fold(0, StatValue::saturating_add)
    }
}
