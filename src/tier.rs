//! Enhancement tiers.
//!
//! A tier is a buff or debuff step in `[-6, 6]` applied on top of a
//! computed stat. `TierSelection` is the subset of tiers a table shows;
//! it only affects presentation, never which tiers are computed.

use crate::error::StatError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// An enhancement tier in `[-6, 6]`. Zero is the unmodified baseline.
///
/// # Examples
///
/// ```rust
/// use petstat::TierLevel;
///
/// let tier = TierLevel::new(2).unwrap();
/// assert_eq!(tier.to_string(), "+2");
/// assert!(TierLevel::new(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TierLevel(i8);

impl TierLevel {
    pub const MIN: TierLevel = TierLevel(-6);
    pub const MAX: TierLevel = TierLevel(6);
    pub const BASELINE: TierLevel = TierLevel(0);

    /// Number of tiers in the range.
    pub const COUNT: usize = 13;

    /// Every tier in ascending order.
    pub const ALL: [TierLevel; 13] = [
        TierLevel(-6),
        TierLevel(-5),
        TierLevel(-4),
        TierLevel(-3),
        TierLevel(-2),
        TierLevel(-1),
        TierLevel(0),
        TierLevel(1),
        TierLevel(2),
        TierLevel(3),
        TierLevel(4),
        TierLevel(5),
        TierLevel(6),
    ];

    /// Create a tier, rejecting values outside `[-6, 6]`.
    pub fn new(level: i64) -> Result<Self, StatError> {
        if (Self::MIN.0 as i64..=Self::MAX.0 as i64).contains(&level) {
            Ok(Self(level as i8))
        } else {
            Err(StatError::InvalidTier(level))
        }
    }

    pub fn value(self) -> i8 {
        self.0
    }

    /// Position of this tier in `ALL` (0 for -6, 12 for +6).
    pub fn index(self) -> usize {
        (self.0 - Self::MIN.0) as usize
    }

    pub fn is_baseline(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<i64> for TierLevel {
    type Error = StatError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<TierLevel> for i64 {
    fn from(tier: TierLevel) -> Self {
        tier.0 as i64
    }
}

impl fmt::Display for TierLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// The tiers a table displays, always iterated in ascending order.
///
/// # Examples
///
/// ```rust
/// use petstat::{TierLevel, TierSelection};
///
/// let mut selection = TierSelection::common();
/// selection.toggle(TierLevel::MAX, true);
/// let shown: Vec<i8> = selection.iter().map(|t| t.value()).collect();
/// assert_eq!(shown, vec![-1, 0, 1, 2, 6]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierSelection(BTreeSet<TierLevel>);

impl TierSelection {
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// The usual preview range: `-1, 0, +1, +2`.
    pub fn common() -> Self {
        Self::from_levels([-1, 0, 1, 2].into_iter().map(TierLevel))
    }

    pub fn all() -> Self {
        Self::from_levels(TierLevel::ALL)
    }

    pub fn from_levels(levels: impl IntoIterator<Item = TierLevel>) -> Self {
        Self(levels.into_iter().collect())
    }

    /// Add (`on == true`) or remove a tier.
    pub fn toggle(&mut self, level: TierLevel, on: bool) {
        if on {
            self.0.insert(level);
        } else {
            self.0.remove(&level);
        }
    }

    pub fn contains(&self, level: TierLevel) -> bool {
        self.0.contains(&level)
    }

    pub fn iter(&self) -> impl Iterator<Item = TierLevel> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for TierSelection {
    fn default() -> Self {
        Self::common()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_range() {
        assert!(TierLevel::new(-6).is_ok());
        assert!(TierLevel::new(6).is_ok());
        assert_eq!(TierLevel::new(-7), Err(StatError::InvalidTier(-7)));
    }

    #[test]
    fn test_tier_index() {
        assert_eq!(TierLevel::MIN.index(), 0);
        assert_eq!(TierLevel::BASELINE.index(), 6);
        assert_eq!(TierLevel::MAX.index(), 12);
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(TierLevel::MAX.to_string(), "+6");
        assert_eq!(TierLevel::BASELINE.to_string(), "0");
        assert_eq!(TierLevel::MIN.to_string(), "-6");
    }

    #[test]
    fn test_selection_presets() {
        assert_eq!(TierSelection::all().len(), 13);
        assert!(TierSelection::empty().is_empty());
        assert_eq!(TierSelection::default(), TierSelection::common());
    }

    #[test]
    fn test_selection_toggle_keeps_order() {
        let mut selection = TierSelection::empty();
        selection.toggle(TierLevel::MAX, true);
        selection.toggle(TierLevel::MIN, true);
        selection.toggle(TierLevel::BASELINE, true);
        selection.toggle(TierLevel::BASELINE, false);
        let shown: Vec<TierLevel> = selection.iter().collect();
        assert_eq!(shown, vec![TierLevel::MIN, TierLevel::MAX]);
    }

    #[test]
    fn test_selection_serde_rejects_out_of_range() {
        let parsed: TierSelection = serde_json::from_str("[2, -1]").unwrap();
        assert_eq!(parsed.len(), 2);
        assert!(serde_json::from_str::<TierSelection>("[9]").is_err());
    }
}
