//! Stat sources module.
//!
//! A source supplies the raw base value of each attribute. The calculator
//! only reads base values through this trait, so any record carrying the
//! six attributes (a dataset pet, a hand-built stat line) can be computed.

use crate::numeric::StatValue;
use crate::stat_kind::StatKind;
use serde::{Deserialize, Serialize};

/// Trait for records that provide base attribute values.
///
/// # Examples
///
/// ```rust
/// use petstat::{BaseStats, StatKind, StatSource};
///
/// let stats = BaseStats::new([95, 120, 80, 60, 70, 110]);
/// assert_eq!(stats.base_value(StatKind::Speed), 110);
/// assert_eq!(stats.total(), 535);
/// ```
pub trait StatSource {
    /// The raw base value of `kind`.
    fn base_value(&self, kind: StatKind) -> StatValue;

    /// Sum of all six base values.
    fn total(&self) -> StatValue {
        StatKind::ALL
            .into_iter()
            .map(|kind| self.base_value(kind))
            .fold(0, StatValue::saturating_add)
    }
}

/// A plain stat line, indexed in `StatKind::ALL` order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub vitality: StatValue,
    pub physical_attack: StatValue,
    pub physical_defense: StatValue,
    pub special_attack: StatValue,
    pub special_defense: StatValue,
    pub speed: StatValue,
}

impl BaseStats {
    /// Build from values in `StatKind::ALL` order.
    pub fn new(values: [StatValue; 6]) -> Self {
        let [vitality, physical_attack, physical_defense, special_attack, special_defense, speed] =
            values;
        Self {
            vitality,
            physical_attack,
            physical_defense,
            special_attack,
            special_defense,
            speed,
        }
    }

    /// The same value for every kind.
    pub fn uniform(value: StatValue) -> Self {
        Self::new([value; 6])
    }
}

impl StatSource for BaseStats {
    fn base_value(&self, kind: StatKind) -> StatValue {
        match kind {
            StatKind::Vitality => self.vitality,
            StatKind::PhysicalAttack => self.physical_attack,
            StatKind::PhysicalDefense => self.physical_defense,
            StatKind::SpecialAttack => self.special_attack,
            StatKind::SpecialDefense => self.special_defense,
            StatKind::Speed => self.speed,
        }
    }
}
