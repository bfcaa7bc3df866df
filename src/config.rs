//! Build configuration for stat calculation.
//!
//! `BuildConfig` is the one input the calculator reads besides the base
//! value. Every way of constructing or changing it clamps into the game's
//! ranges, so the calculator never sees out-of-range values:
//!
//! | field | range |
//! |-------|-------|
//! | level | 1..=100 |
//! | effort | 0..=255 |
//! | individual value | 0..=31 |
//!
//! Text setters mirror what a form field would send: they parse a leading
//! integer and fall back to the field's floor when nothing parses.

use crate::error::StatError;
use crate::nature::Nature;
use crate::numeric::parse_leading_int;
use crate::stat_kind::StatKind;
use crate::tier::TierSelection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 100;
pub const MAX_EFFORT: u8 = 255;
pub const MAX_IV: u8 = 31;

fn clamp_to(value: i64, min: u8, max: u8) -> u8 {
    value.clamp(min as i64, max as i64) as u8
}

/// Individual values for all six kinds, each in `0..=31`.
///
/// Serializes as a map from stat kind to value. Kinds missing from a
/// serialized map default to 31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<StatKind, i64>", into = "BTreeMap<StatKind, i64>")]
pub struct IndividualValues([u8; 6]);

impl IndividualValues {
    /// Every kind at the same value (clamped).
    pub fn uniform(value: i64) -> Self {
        Self([clamp_to(value, 0, MAX_IV); 6])
    }

    pub fn get(&self, kind: StatKind) -> u8 {
        self.0[kind.index()]
    }

    /// Set one kind, clamping into `0..=31`.
    pub fn set(&mut self, kind: StatKind, value: i64) {
        self.0[kind.index()] = clamp_to(value, 0, MAX_IV);
    }
}

impl Default for IndividualValues {
    fn default() -> Self {
        Self([MAX_IV; 6])
    }
}

impl From<BTreeMap<StatKind, i64>> for IndividualValues {
    fn from(map: BTreeMap<StatKind, i64>) -> Self {
        let mut ivs = Self::default();
        for (kind, value) in map {
            ivs.set(kind, value);
        }
        ivs
    }
}

impl From<IndividualValues> for BTreeMap<StatKind, i64> {
    fn from(ivs: IndividualValues) -> Self {
        StatKind::ALL
            .into_iter()
            .map(|kind| (kind, ivs.get(kind) as i64))
            .collect()
    }
}

/// The character-build settings applied to every computed stat.
///
/// # Examples
///
/// ```rust
/// use petstat::{BuildConfig, StatKind};
///
/// let mut config = BuildConfig::default();
/// assert_eq!(config.level(), 100);
/// assert!(config.guardian());
///
/// config.set_level_input("abc");
/// assert_eq!(config.level(), 1);
///
/// config.set_effort(999);
/// assert_eq!(config.effort(), 255);
///
/// config.set_iv(StatKind::Speed, -4);
/// assert_eq!(config.iv(StatKind::Speed), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBuildConfig", into = "RawBuildConfig")]
pub struct BuildConfig {
    level: u8,
    guardian: bool,
    effort: u8,
    nature: Nature,
    individual_values: IndividualValues,
    tier_selection: TierSelection,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            level: MAX_LEVEL,
            guardian: true,
            effort: MAX_EFFORT,
            nature: Nature::default(),
            individual_values: IndividualValues::default(),
            tier_selection: TierSelection::common(),
        }
    }
}

impl BuildConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn guardian(&self) -> bool {
        self.guardian
    }

    pub fn effort(&self) -> u8 {
        self.effort
    }

    pub fn nature(&self) -> Nature {
        self.nature
    }

    pub fn iv(&self, kind: StatKind) -> u8 {
        self.individual_values.get(kind)
    }

    pub fn individual_values(&self) -> &IndividualValues {
        &self.individual_values
    }

    pub fn tier_selection(&self) -> &TierSelection {
        &self.tier_selection
    }

    pub fn tier_selection_mut(&mut self) -> &mut TierSelection {
        &mut self.tier_selection
    }

    pub fn set_level(&mut self, level: i64) {
        self.level = clamp_to(level, MIN_LEVEL, MAX_LEVEL);
    }

    /// Set the level from form text; unparseable or zero input becomes 1.
    pub fn set_level_input(&mut self, input: &str) {
        match parse_leading_int(input) {
            Some(level) if level != 0 => self.set_level(level),
            _ => self.level = MIN_LEVEL,
        }
    }

    pub fn set_guardian(&mut self, guardian: bool) {
        self.guardian = guardian;
    }

    pub fn set_effort(&mut self, effort: i64) {
        self.effort = clamp_to(effort, 0, MAX_EFFORT);
    }

    /// Set effort from form text; unparseable input becomes 0.
    pub fn set_effort_input(&mut self, input: &str) {
        self.set_effort(parse_leading_int(input).unwrap_or(0));
    }

    pub fn set_nature(&mut self, nature: Nature) {
        self.nature = nature;
    }

    pub fn set_nature_by_name(&mut self, name: &str) -> Result<(), StatError> {
        self.nature = Nature::by_name(name)?;
        Ok(())
    }

    pub fn set_iv(&mut self, kind: StatKind, value: i64) {
        self.individual_values.set(kind, value);
    }

    /// Set one IV from form text; unparseable input becomes 0.
    pub fn set_iv_input(&mut self, kind: StatKind, input: &str) {
        self.set_iv(kind, parse_leading_int(input).unwrap_or(0));
    }

    /// Raise every IV to 31.
    pub fn max_all_ivs(&mut self) {
        self.individual_values = IndividualValues::default();
    }

    pub fn set_tier_selection(&mut self, selection: TierSelection) {
        self.tier_selection = selection;
    }

    pub fn with_level(mut self, level: i64) -> Self {
        self.set_level(level);
        self
    }

    pub fn with_guardian(mut self, guardian: bool) -> Self {
        self.guardian = guardian;
        self
    }

    pub fn with_effort(mut self, effort: i64) -> Self {
        self.set_effort(effort);
        self
    }

    pub fn with_nature(mut self, nature: Nature) -> Self {
        self.nature = nature;
        self
    }

    pub fn with_individual_values(mut self, ivs: IndividualValues) -> Self {
        self.individual_values = ivs;
        self
    }
}

/// Unchecked wire form of `BuildConfig`; converting clamps every field.
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct RawBuildConfig {
    level: i64,
    guardian: bool,
    effort: i64,
    nature: Nature,
    individual_values: IndividualValues,
    tier_selection: TierSelection,
}

impl Default for RawBuildConfig {
    fn default() -> Self {
        BuildConfig::default().into()
    }
}

impl From<RawBuildConfig> for BuildConfig {
    fn from(raw: RawBuildConfig) -> Self {
        Self {
            level: clamp_to(raw.level, MIN_LEVEL, MAX_LEVEL),
            guardian: raw.guardian,
            effort: clamp_to(raw.effort, 0, MAX_EFFORT),
            nature: raw.nature,
            individual_values: raw.individual_values,
            tier_selection: raw.tier_selection,
        }
    }
}

impl From<BuildConfig> for RawBuildConfig {
    fn from(config: BuildConfig) -> Self {
        Self {
            level: config.level as i64,
            guardian: config.guardian,
            effort: config.effort as i64,
            nature: config.nature,
            individual_values: config.individual_values,
            tier_selection: config.tier_selection,
        }
    }
}
