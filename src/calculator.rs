//! The attribute calculator.
//!
//! `StatCalculator` maps a base value and a `BuildConfig` to a computed
//! stat. The order of operations is fixed and rounding-sensitive:
//!
//! ```text
//! growth   floor((base*2 + iv + floor(effort/4)) * level / 100) + offset
//! nature   floor(value * 1.1 | 0.9)     (never for vitality)
//! guardian value + 50                   (never for speed)
//! tiers    floor(base * (t/2 + 1))  /  floor(base / (|t|/2 + 1))
//! ```
//!
//! The guardian bonus is added after the nature floor; swapping the two
//! changes the result whenever nature applies.

use crate::config::BuildConfig;
use crate::numeric::{floor_ratio, StatValue};
use crate::resolved::{CalcResult, StatSheet};
use crate::source::StatSource;
use crate::stat_kind::StatKind;
use crate::tier::TierLevel;
use crate::transform::transforms_for;

/// Stateless stat calculator.
///
/// # Examples
///
/// ```rust
/// use petstat::{BuildConfig, Nature, StatCalculator, StatKind, TierLevel};
///
/// let config = BuildConfig::default()
///     .with_effort(252)
///     .with_nature(Nature::by_name("孤僻").unwrap());
///
/// let result = StatCalculator::compute(100, &config, StatKind::PhysicalAttack);
/// assert_eq!(result.base, 378);
/// assert_eq!(result.tier(TierLevel::new(2).unwrap()), 756);
/// assert_eq!(result.tier(TierLevel::new(-2).unwrap()), 189);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StatCalculator;

impl StatCalculator {
    /// Compute the final value and every tier for one attribute.
    pub fn compute(base_value: StatValue, config: &BuildConfig, kind: StatKind) -> CalcResult {
        let growth = Self::pre_nature(base_value, config, kind);
        let mut result = CalcResult::new(kind, growth);
        result.add_step(format!("Level {} growth", config.level()), growth);

        for transform in transforms_for(config, kind) {
            let value = transform.apply(result.base);
            result.base = value;
            result.add_step(transform.description(), value);
        }

        for level in TierLevel::ALL {
            result.tiered[level.index()] = Self::enhance(result.base, level);
        }
        result
    }

    /// Compute all six attributes of `source`.
    pub fn compute_sheet(source: &impl StatSource, config: &BuildConfig) -> StatSheet {
        StatSheet::from_fn(|kind| Self::compute(source.base_value(kind), config, kind))
    }

    /// Level growth with the flat offset, before nature and guardian.
    pub fn pre_nature(base_value: StatValue, config: &BuildConfig, kind: StatKind) -> StatValue {
        let effort_bonus = config.effort() as u64 / 4;
        let invested = base_value as u64 * 2 + config.iv(kind) as u64 + effort_bonus;
        let grown = invested * config.level() as u64 / 100 + kind.level_offset() as u64;
        StatValue::try_from(grown).unwrap_or(StatValue::MAX)
    }

    /// Value of `base` at enhancement tier `level`.
    ///
    /// Positive tiers multiply by `(t + 2) / 2`, negative tiers divide by
    /// `(|t| + 2) / 2`; both are floored once, exactly.
    pub fn enhance(base: StatValue, level: TierLevel) -> StatValue {
        let t = level.value();
        match t {
            0 => base,
            t if t > 0 => floor_ratio(base, t as u64 + 2, 2),
            t => floor_ratio(base, 2, t.unsigned_abs() as u64 + 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nature::Nature;
    use crate::source::BaseStats;

    fn tier(level: i64) -> TierLevel {
        TierLevel::new(level).unwrap()
    }

    #[test]
    fn test_pre_nature_growth() {
        let config = BuildConfig::default().with_effort(252);
        assert_eq!(StatCalculator::pre_nature(100, &config, StatKind::Speed), 299);
        assert_eq!(StatCalculator::pre_nature(100, &config, StatKind::Vitality), 304);
    }

    #[test]
    fn test_pre_nature_floors_level_scaling() {
        // (50*2 + 31 + 63) * 50 / 100 = 97
        let config = BuildConfig::default().with_effort(252).with_level(50);
        assert_eq!(StatCalculator::pre_nature(50, &config, StatKind::Speed), 102);
        // (10*2 + 0 + 0) * 1 / 100 = 0.2 -> 0
        let low = BuildConfig::default()
            .with_effort(0)
            .with_level(1)
            .with_individual_values(crate::config::IndividualValues::uniform(0));
        assert_eq!(StatCalculator::pre_nature(10, &low, StatKind::Speed), 5);
        assert_eq!(StatCalculator::pre_nature(10, &low, StatKind::Vitality), 10);
    }

    #[test]
    fn test_enhance_table() {
        assert_eq!(StatCalculator::enhance(378, tier(0)), 378);
        assert_eq!(StatCalculator::enhance(378, tier(1)), 567);
        assert_eq!(StatCalculator::enhance(378, tier(2)), 756);
        assert_eq!(StatCalculator::enhance(378, tier(6)), 1512);
        assert_eq!(StatCalculator::enhance(378, tier(-1)), 252);
        assert_eq!(StatCalculator::enhance(378, tier(-2)), 189);
        assert_eq!(StatCalculator::enhance(378, tier(-3)), 151);
        assert_eq!(StatCalculator::enhance(378, tier(-6)), 94);
    }

    #[test]
    fn test_compute_breakdown() {
        let config = BuildConfig::default()
            .with_effort(252)
            .with_nature(Nature::by_name("孤僻").unwrap());
        let result = StatCalculator::compute(100, &config, StatKind::PhysicalAttack);
        let values: Vec<_> = result.breakdown.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![299, 328, 378]);
        assert_eq!(result.breakdown[0].0, "Level 100 growth");
    }

    #[test]
    fn test_compute_sheet() {
        let config = BuildConfig::default().with_effort(252).with_guardian(false);
        let sheet = StatCalculator::compute_sheet(&BaseStats::uniform(100), &config);
        assert_eq!(sheet.get(StatKind::Vitality).base, 304);
        assert_eq!(sheet.get(StatKind::Speed).base, 299);
    }
}
