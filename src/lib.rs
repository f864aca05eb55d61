//! Dominance-based rough set primitives.
//!
//! Provides the building blocks that rule induction and classification
//! under the Dominance-based Rough Set Approach (DRSA) depend on:
//!
//! - **Ternary logic**: [`logic::TernaryLogicValue`], the three-valued
//!   result of every dominance comparison.
//! - **Evaluation fields**: [`field::EvaluationField`], per-attribute values
//!   with gain/cost/none preference and missing-value semantics.
//! - **Decisions**: simple and composite decisions with the dominance
//!   relation, plus [`decision::DecisionDistribution`] for class counts.
//! - **Dominance cones**: positive/negative (inverse) dominance cones for
//!   every object of a [`dominance::DecisionTable`], and the rough-set
//!   approximations of decision-class unions derived from them.
//! - **Rule characteristics**: contingency-table based quality and
//!   confirmation measures of decision rules, computed lazily and cached.
//! - **RuleML measures** (feature `ruleml`): reading and writing the
//!   `<evaluation>` elements that carry rule characteristics.
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem. It
//! does not grow or prune rules and does not read data files; attribute
//! parsing, rule induction and cross-validation are defined by consumers
//! at higher layers.

pub mod decision;
pub mod dominance;
pub mod error;
pub mod field;
pub mod logic;
#[cfg(feature = "ruleml")]
pub mod ruleml;
pub mod rules;

pub use error::{Error, Result};
