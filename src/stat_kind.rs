//! Stat kind module.
//!
//! Provides the `StatKind` type, the closed set of six attributes every
//! pet carries. All per-attribute data (labels, dataset keys, icons) hangs
//! off this one enum, so nothing that affects calculation is keyed by string.

use crate::error::StatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six attribute dimensions of a pet.
///
/// Serializes as its snake_case name. Deserialization also accepts the
/// dataset key (`"jingli"`, `"gongji"`, ...).
///
/// # Examples
///
/// ```rust
/// use petstat::StatKind;
///
/// let speed: StatKind = "sudu".parse().unwrap();
/// assert_eq!(speed, StatKind::Speed);
/// assert_eq!(speed.label(), "Speed");
/// assert_eq!(StatKind::ALL.len(), 6);
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    #[serde(alias = "jingli")]
    Vitality,
    #[serde(alias = "gongji")]
    PhysicalAttack,
    #[serde(alias = "fangyu")]
    PhysicalDefense,
    #[serde(alias = "mougong")]
    SpecialAttack,
    #[serde(alias = "moufang")]
    SpecialDefense,
    #[serde(alias = "sudu")]
    Speed,
}

struct KindInfo {
    name: &'static str,
    key: &'static str,
    label: &'static str,
    icon: &'static str,
}

static KIND_TABLE: [KindInfo; 6] = [
    KindInfo {
        name: "vitality",
        key: "jingli",
        label: "Vitality",
        icon: "heart",
    },
    KindInfo {
        name: "physical_attack",
        key: "gongji",
        label: "Attack",
        icon: "swords",
    },
    KindInfo {
        name: "physical_defense",
        key: "fangyu",
        label: "Defense",
        icon: "shield",
    },
    KindInfo {
        name: "special_attack",
        key: "mougong",
        label: "Sp. Attack",
        icon: "zap",
    },
    KindInfo {
        name: "special_defense",
        key: "moufang",
        label: "Sp. Defense",
        icon: "shield-plus",
    },
    KindInfo {
        name: "speed",
        key: "sudu",
        label: "Speed",
        icon: "send-horizontal",
    },
];

impl StatKind {
    /// All kinds in display order.
    pub const ALL: [StatKind; 6] = [
        StatKind::Vitality,
        StatKind::PhysicalAttack,
        StatKind::PhysicalDefense,
        StatKind::SpecialAttack,
        StatKind::SpecialDefense,
        StatKind::Speed,
    ];

    /// Stable position of this kind in `ALL`.
    pub const fn index(self) -> usize {
        match self {
            StatKind::Vitality => 0,
            StatKind::PhysicalAttack => 1,
            StatKind::PhysicalDefense => 2,
            StatKind::SpecialAttack => 3,
            StatKind::SpecialDefense => 4,
            StatKind::Speed => 5,
        }
    }

    fn info(self) -> &'static KindInfo {
        &KIND_TABLE[self.index()]
    }

    /// The snake_case name used in serialized configs.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// The field name of this attribute in the pet dataset.
    pub fn dataset_key(self) -> &'static str {
        self.info().key
    }

    /// Human-readable column label.
    pub fn label(self) -> &'static str {
        self.info().label
    }

    /// Icon reference for table cells.
    pub fn icon(self) -> &'static str {
        self.info().icon
    }

    /// Flat offset added after level scaling: +10 for vitality, +5 otherwise.
    pub fn level_offset(self) -> u32 {
        match self {
            StatKind::Vitality => 10,
            _ => 5,
        }
    }
}

impl FromStr for StatKind {
    type Err = StatError;

    /// Parse from either the snake_case name or the dataset key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s || kind.dataset_key() == s)
            .ok_or_else(|| StatError::UnknownStat(s.to_string()))
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, kind) in StatKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_parse_name_and_key() {
        assert_eq!("physical_attack".parse::<StatKind>().unwrap(), StatKind::PhysicalAttack);
        assert_eq!("gongji".parse::<StatKind>().unwrap(), StatKind::PhysicalAttack);
        assert_eq!(
            "mana".parse::<StatKind>(),
            Err(StatError::UnknownStat("mana".to_string()))
        );
    }

    #[test]
    fn test_serde_accepts_dataset_key() {
        let kind: StatKind = serde_json::from_str("\"moufang\"").unwrap();
        assert_eq!(kind, StatKind::SpecialDefense);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"special_defense\"");
    }

    #[test]
    fn test_level_offset() {
        assert_eq!(StatKind::Vitality.level_offset(), 10);
        assert_eq!(StatKind::Speed.level_offset(), 5);
    }
}
