//! Nature catalog.
//!
//! A nature boosts one attribute by 10% and reduces another by 10%, or
//! does nothing. The catalog is fixed: five balanced natures followed by
//! four natures per boosted attribute. Vitality is never touched.

use crate::error::StatError;
use crate::stat_kind::StatKind;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A named personality trait from the fixed catalog.
///
/// Serializes as its name; deserialization looks the name up in [`NATURES`].
///
/// # Examples
///
/// ```rust
/// use petstat::{Nature, StatKind};
///
/// let nature = Nature::by_name("勇敢").unwrap();
/// assert_eq!(nature.boost(), Some(StatKind::PhysicalAttack));
/// assert_eq!(nature.reduce(), Some(StatKind::Speed));
/// assert_eq!(nature.description(), "Attack +10% Speed -10%");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nature {
    name: &'static str,
    modifier: Option<(StatKind, StatKind)>,
}

const fn balanced(name: &'static str) -> Nature {
    Nature {
        name,
        modifier: None,
    }
}

const fn shifted(name: &'static str, boost: StatKind, reduce: StatKind) -> Nature {
    Nature {
        name,
        modifier: Some((boost, reduce)),
    }
}

use crate::stat_kind::StatKind::{PhysicalAttack as Atk, PhysicalDefense as Def};
use crate::stat_kind::StatKind::{SpecialAttack as SpA, SpecialDefense as SpD, Speed as Spe};

/// The full nature catalog in display order.
pub const NATURES: [Nature; 25] = [
    balanced("坦率"),
    balanced("害羞"),
    balanced("认真"),
    balanced("实干"),
    balanced("浮躁"),
    shifted("孤僻", Atk, Def),
    shifted("固执", Atk, SpA),
    shifted("调皮", Atk, SpD),
    shifted("勇敢", Atk, Spe),
    shifted("大胆", Def, Atk),
    shifted("淘气", Def, SpA),
    shifted("无虑", Def, SpD),
    shifted("悠闲", Def, Spe),
    shifted("保守", SpA, Atk),
    shifted("稳重", SpA, Def),
    shifted("马虎", SpA, SpD),
    shifted("冷静", SpA, Spe),
    shifted("沉着", SpD, Atk),
    shifted("温顺", SpD, Def),
    shifted("慎重", SpD, SpA),
    shifted("狂妄", SpD, Spe),
    shifted("胆小", Spe, Atk),
    shifted("急躁", Spe, Def),
    shifted("开朗", Spe, SpA),
    shifted("天真", Spe, SpD),
];

impl Nature {
    /// Look a nature up by its catalog name.
    pub fn by_name(name: &str) -> Result<Nature, StatError> {
        NATURES
            .iter()
            .copied()
            .find(|nature| nature.name == name)
            .ok_or_else(|| StatError::UnknownNature(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn boost(&self) -> Option<StatKind> {
        self.modifier.map(|(boost, _)| boost)
    }

    pub fn reduce(&self) -> Option<StatKind> {
        self.modifier.map(|(_, reduce)| reduce)
    }

    pub fn is_balanced(&self) -> bool {
        self.modifier.is_none()
    }

    /// Multiplier this nature applies to `kind`, if any.
    ///
    /// Vitality always yields `None`.
    pub fn factor_for(&self, kind: StatKind) -> Option<f64> {
        if kind == StatKind::Vitality {
            return None;
        }
        match self.modifier {
            Some((boost, _)) if boost == kind => Some(1.1),
            Some((_, reduce)) if reduce == kind => Some(0.9),
            _ => None,
        }
    }

    /// Short description such as `"Attack +10% Defense -10%"`.
    pub fn description(&self) -> String {
        match self.modifier {
            Some((boost, reduce)) => format!("{} +10% {} -10%", boost.label(), reduce.label()),
            None => String::from("No effect"),
        }
    }
}

impl Default for Nature {
    fn default() -> Self {
        NATURES[0]
    }
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Serialize for Nature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.name.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Nature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Nature::by_name(&name).map_err(serde::de::Error::custom)
    }
}

/// A display group of natures sharing the same boosted attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct NatureGroup {
    /// `None` for the balanced group.
    pub boost: Option<StatKind>,
    pub label: String,
    pub natures: Vec<Nature>,
}

/// Natures grouped for a picker: balanced first, then one group per boosted kind.
pub fn nature_groups() -> Vec<NatureGroup> {
    let mut groups = vec![NatureGroup {
        boost: None,
        label: String::from("Balanced"),
        natures: NATURES.iter().copied().filter(Nature::is_balanced).collect(),
    }];
    for kind in StatKind::ALL.into_iter().filter(|k| *k != StatKind::Vitality) {
        groups.push(NatureGroup {
            boost: Some(kind),
            label: format!("{} boost", kind.label()),
            natures: NATURES
                .iter()
                .copied()
                .filter(|n| n.boost() == Some(kind))
                .collect(),
        });
    }
    groups
}
