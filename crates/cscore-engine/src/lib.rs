//! Profile scoring engine: turns stored creator signals and cached AI
//! judgments into a composite quality score with six weighted category
//! breakdowns.
//!
//! The engine owns the formulas, weights, tier tables, and degradation
//! policies. It reads signals through the [`stores`] traits, consults the
//! insight provider through the [`cache::InsightGate`], and never persists
//! anything itself.

pub mod aggregate;
pub mod cache;
pub mod categories;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod insight;
pub mod report;
pub mod signals;
pub mod stats;
pub mod stores;
pub mod tiers;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

pub use engine::ScoringEngine;
pub use error::EngineError;
pub use report::{Category, CategoryScore, Grade, ProfileScoreReport};
