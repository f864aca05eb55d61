//! Attribute evaluations and their preference-aware comparisons.
//!
//! A minimal value layer: integer, real and enumerated evaluations tagged
//! with a preference type, plus the "unknown" value under two missing-value
//! semantics. Every comparison returns a [`TernaryLogicValue`].
//!
//! # Key Components
//!
//! - [`EvaluationField`]: one object's value on one attribute
//! - [`Dominance`]: the comparison trait shared by fields, decisions and
//!   condition profiles
//!
//! # References
//!
//! - Greco, Matarazzo & Słowiński (2001), "Rough sets theory for multicriteria
//!   decision analysis"
//! - Błaszczyński, Słowiński & Szeląg (2011), "Sequential covering rule
//!   induction algorithm for variable consistency rough set approaches"
//!   (missing-value semantics mv2 and mv1.5)
//!
//! [`TernaryLogicValue`]: crate::logic::TernaryLogicValue

mod evaluation;
mod types;

pub use evaluation::EvaluationField;
pub use types::{AttributePreferenceType, Dominance, FieldValue, MissingValueSemantics};
