//! Stat resolver module.
//!
//! Provides `StatResolver`, a memoizing front for `StatCalculator`. It owns
//! the current `BuildConfig` and caches results by `(base value, kind)`.
//! Any config change invalidates the whole cache, since every cached value
//! depends on it.

use crate::calculator::StatCalculator;
use crate::config::BuildConfig;
use crate::numeric::StatValue;
use crate::resolved::{CalcResult, StatSheet};
use crate::source::StatSource;
use crate::stat_kind::StatKind;
use std::collections::HashMap;

/// Caches calculator results for one build configuration.
///
/// # Examples
///
/// ```rust
/// use petstat::{BuildConfig, StatKind, StatResolver};
///
/// let mut resolver = StatResolver::new(BuildConfig::default());
/// let first = resolver.resolve(100, StatKind::Speed);
/// assert_eq!(resolver.cached_len(), 1);
///
/// resolver.update_config(|config| config.set_level(50));
/// assert_eq!(resolver.cached_len(), 0);
/// assert!(resolver.resolve(100, StatKind::Speed).base < first.base);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatResolver {
    config: BuildConfig,
    cache: HashMap<(StatValue, StatKind), CalcResult>,
}

impl StatResolver {
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            cache: HashMap::new(),
        }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Resolve one attribute, computing it only on a cache miss.
    pub fn resolve(&mut self, base_value: StatValue, kind: StatKind) -> CalcResult {
        let config = &self.config;
        self.cache
            .entry((base_value, kind))
            .or_insert_with(|| StatCalculator::compute(base_value, config, kind))
            .clone()
    }

    /// Resolve all six attributes of `source`.
    pub fn resolve_sheet(&mut self, source: &impl StatSource) -> StatSheet {
        StatSheet::from_fn(|kind| self.resolve(source.base_value(kind), kind))
    }

    /// Change the config in place and drop every cached result.
    pub fn update_config(&mut self, update: impl FnOnce(&mut BuildConfig)) {
        update(&mut self.config);
        self.invalidate();
    }

    pub fn set_config(&mut self, config: BuildConfig) {
        self.config = config;
        self.invalidate();
    }

    pub fn invalidate(&mut self) {
        tracing::trace!(entries = self.cache.len(), "invalidating stat cache");
        self.cache.clear();
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}
