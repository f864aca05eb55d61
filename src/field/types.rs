//! Core types for evaluation fields.

use crate::logic::TernaryLogicValue;
use std::sync::Arc;

/// Direction of preference on an attribute's value set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributePreferenceType {
    /// Higher values are better.
    Gain,
    /// Lower values are better.
    Cost,
    /// Values are nominal; only equality is meaningful.
    #[default]
    None,
}

/// How an unknown evaluation compares with other evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MissingValueSemantics {
    /// Unknown is comparable with, and equal to, anything on either side.
    #[default]
    Mv2,
    /// Unknown on the left side matches anything; a known value never
    /// matches an unknown one on the right side.
    Mv15,
}

/// Raw value carried by an [`EvaluationField`](super::EvaluationField).
#[derive(Debug, Clone)]
pub enum FieldValue {
    Integer(i64),
    Real(f64),
    /// Position in an ordered domain of labels.
    Enumeration { index: usize, domain: Arc<[String]> },
    Unknown(MissingValueSemantics),
}

impl FieldValue {
    pub fn is_unknown(&self) -> bool {
        matches!(self, FieldValue::Unknown(_))
    }
}

/// Preference-aware comparison returning three-valued results.
///
/// Implemented by single evaluations, by decisions, and by rows of
/// condition evaluations. `a.is_at_least_as_good_as(b)` reads "a dominates b".
pub trait Dominance {
    fn is_at_least_as_good_as(&self, other: &Self) -> TernaryLogicValue;

    fn is_at_most_as_good_as(&self, other: &Self) -> TernaryLogicValue;

    fn is_equal_to(&self, other: &Self) -> TernaryLogicValue;
}
