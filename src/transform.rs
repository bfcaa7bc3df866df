//! Stat transforms module.
//!
//! Transforms modify the pre-nature value produced by level growth.
//! Each transform belongs to a phase and transforms are applied in phase
//! order, so the nature multiplier (and its floor) always runs before
//! the guardian bonus is added.

use crate::config::BuildConfig;
use crate::nature::Nature;
use crate::numeric::{floor_scale, StatValue};
use crate::stat_kind::StatKind;

/// Flat bonus granted by an active guardian to every stat except speed.
pub const GUARDIAN_BONUS: StatValue = 50;

/// Phase for transform application order.
///
/// # Examples
///
/// ```rust
/// use petstat::transform::TransformPhase;
///
/// assert!(TransformPhase::Nature < TransformPhase::Guardian);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransformPhase {
    /// Nature multiplier, floored immediately.
    Nature,

    /// Flat guardian bonus, added after every multiplier.
    Guardian,
}

/// A step applied to a stat after level growth.
pub trait StatTransform: Send + Sync {
    fn phase(&self) -> TransformPhase;

    /// Apply the transform to the current value.
    fn apply(&self, input: StatValue) -> StatValue;

    /// Human-readable description for the breakdown.
    fn description(&self) -> String;
}

/// Nature multiplier (×1.1 or ×0.9), floored once.
///
/// # Examples
///
/// ```rust
/// use petstat::transform::{NatureTransform, StatTransform};
///
/// let boost = NatureTransform::new(1.1);
/// assert_eq!(boost.apply(299), 328);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NatureTransform {
    factor: f64,
}

impl NatureTransform {
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    /// The transform `nature` implies for `kind`, if it touches that kind.
    pub fn for_kind(nature: &Nature, kind: StatKind) -> Option<Self> {
        nature.factor_for(kind).map(Self::new)
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl StatTransform for NatureTransform {
    fn phase(&self) -> TransformPhase {
        TransformPhase::Nature
    }

    fn apply(&self, input: StatValue) -> StatValue {
        floor_scale(input, self.factor)
    }

    fn description(&self) -> String {
        format!("Nature x{:.1}", self.factor)
    }
}

/// Flat guardian bonus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardianTransform {
    bonus: StatValue,
}

impl GuardianTransform {
    pub fn new(bonus: StatValue) -> Self {
        Self { bonus }
    }

    /// The guardian bonus for `kind`, if the guardian is active and `kind` is not speed.
    pub fn for_kind(config: &BuildConfig, kind: StatKind) -> Option<Self> {
        (config.guardian() && kind != StatKind::Speed).then(|| Self::new(GUARDIAN_BONUS))
    }

    pub fn bonus(&self) -> StatValue {
        self.bonus
    }
}

impl StatTransform for GuardianTransform {
    fn phase(&self) -> TransformPhase {
        TransformPhase::Guardian
    }

    fn apply(&self, input: StatValue) -> StatValue {
        input.saturating_add(self.bonus)
    }

    fn description(&self) -> String {
        format!("Guardian +{}", self.bonus)
    }
}

/// Every transform that applies to `kind` under `config`, in phase order.
pub fn transforms_for(config: &BuildConfig, kind: StatKind) -> Vec<Box<dyn StatTransform>> {
    let mut transforms: Vec<Box<dyn StatTransform>> = Vec::with_capacity(2);
    if let Some(guardian) = GuardianTransform::for_kind(config, kind) {
        transforms.push(Box::new(guardian));
    }
    if let Some(nature) = NatureTransform::for_kind(&config.nature(), kind) {
        transforms.push(Box::new(nature));
    }
    transforms.sort_by_key(|t| t.phase());
    transforms
}
