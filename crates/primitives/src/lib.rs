//! Core types for contraction editing: operators and contractions.

/// Contraction pairs and the validated contraction sequence.
pub mod contraction;
/// Operator identities, categories, and per-category counts.
pub mod operator;

pub use contraction::{Contraction, ContractionError, Contractions};
pub use operator::{Category, Operator, OperatorCounts, OperatorId, rebuild};
