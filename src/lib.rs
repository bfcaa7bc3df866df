//! # petstat - Deterministic Pet Attribute Calculator
//!
//! Computes final pet attributes from catalog base values and a character
//! build, together with the thirteen enhancement tiers of every attribute.
//! Around the calculator sit the pieces a pet table needs: catalog loading,
//! filtering, view state, and CSV export.
//!
//! ## Core Concepts
//!
//! ### Stat Pipeline
//!
//! ```text
//! [StatSource] → growth → [StatTransform by phase] → CalcResult (base + tiers)
//! ```
//!
//! 1. **Growth** scales the base value by level, IV and effort
//! 2. **Transforms** apply the nature multiplier, then the guardian bonus
//! 3. **CalcResult** holds the final value, every tier and a breakdown
//!
//! The order in step 2 matters: the nature multiplier is floored before
//! the flat guardian bonus is added.
//!
//! ## Example
//!
//! ```rust
//! use petstat::*;
//!
//! let config = BuildConfig::default()
//!     .with_effort(252)
//!     .with_nature(Nature::by_name("孤僻").unwrap());
//!
//! let attack = StatCalculator::compute(100, &config, StatKind::PhysicalAttack);
//! assert_eq!(attack.base, 378);
//!
//! let speed = StatCalculator::compute(100, &config, StatKind::Speed);
//! assert_eq!(speed.base, 299);
//! assert_eq!(speed.tier(TierLevel::MAX), 1196);
//! ```
//!
//! ## Modules
//!
//! - [`stat_kind`] - The six attribute kinds
//! - [`nature`] - Nature catalog
//! - [`tier`] - Enhancement tiers and tier selection
//! - [`config`] - Build configuration with input sanitizing
//! - [`transform`] - Nature and guardian steps
//! - [`calculator`] - The pure calculator
//! - [`resolver`] - Memoizing resolver
//! - [`resolved`] - Calculation results
//! - [`source`] - Base value sources
//! - [`pet`], [`catalog`], [`filter`] - Dataset access and filtering
//! - [`view`] - Column visibility, pagination, row selection
//! - [`export`] - CSV export and read-back
//! - [`error`] - Error types

pub mod calculator;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod nature;
pub mod numeric;
pub mod pet;
pub mod resolved;
pub mod resolver;
pub mod source;
pub mod stat_kind;
pub mod tier;
pub mod transform;
pub mod view;

// Re-export main types for convenience
pub use calculator::StatCalculator;
pub use config::{BuildConfig, IndividualValues};
pub use error::StatError;
pub use nature::{nature_groups, Nature, NatureGroup, NATURES};
pub use resolved::{CalcResult, StatSheet};
pub use resolver::StatResolver;
pub use stat_kind::StatKind;
pub use tier::{TierLevel, TierSelection};

pub use source::{BaseStats, StatSource};
pub use transform::{GuardianTransform, NatureTransform, StatTransform, TransformPhase};

pub use numeric::StatValue;

// Table-side re-exports
pub use catalog::PetCatalog;
pub use export::{export_rows, read_export, rows_to_export, ExportColumn, ExportLayout, ExportedTable};
pub use filter::{FilterState, MarkNoRange};
pub use pet::Pet;
pub use view::{page_range, Column, ColumnVisibility, PageItem, Pagination, RowSelection};
