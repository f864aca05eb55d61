//! The decision enum.

use super::composite::CompositeDecision;
use super::simple::SimpleDecision;
use crate::error::DecisionError;
use crate::field::{Dominance, EvaluationField};
use crate::logic::TernaryLogicValue;
use std::fmt;

/// Immutable summary of one object's evaluations on the decision
/// attributes.
///
/// Decisions of different variants, or over different attribute index
/// sets, are uncomparable under all three relations.
///
/// # Examples
///
/// ```
/// use u_drsa::decision::Decision;
/// use u_drsa::field::{AttributePreferenceType, Dominance, EvaluationField};
/// use u_drsa::logic::TernaryLogicValue;
///
/// let good = Decision::simple(EvaluationField::integer(3, AttributePreferenceType::Gain), 0);
/// let bad = Decision::simple(EvaluationField::integer(1, AttributePreferenceType::Gain), 0);
///
/// assert_eq!(good.is_at_least_as_good_as(&bad), TernaryLogicValue::True);
/// assert_eq!(bad.is_at_most_as_good_as(&good), TernaryLogicValue::True);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Decision {
    Simple(SimpleDecision),
    Composite(CompositeDecision),
}

impl Decision {
    pub fn simple(evaluation: EvaluationField, attribute_index: usize) -> Self {
        Decision::Simple(SimpleDecision::new(evaluation, attribute_index))
    }

    /// Builds a composite decision. See [`CompositeDecision::new`].
    pub fn composite(
        evaluations: Vec<EvaluationField>,
        attribute_indices: &[usize],
    ) -> Result<Self, DecisionError> {
        CompositeDecision::new(evaluations, attribute_indices).map(Decision::Composite)
    }

    /// Attribute indices in ascending order.
    pub fn attribute_indices(&self) -> Vec<usize> {
        match self {
            Decision::Simple(d) => vec![d.attribute_index()],
            Decision::Composite(d) => d.attribute_indices().collect(),
        }
    }

    pub fn evaluation(&self, attribute_index: usize) -> Option<&EvaluationField> {
        match self {
            Decision::Simple(d) if d.attribute_index() == attribute_index => Some(d.evaluation()),
            Decision::Simple(_) => None,
            Decision::Composite(d) => d.evaluation(attribute_index),
        }
    }

    pub fn has_no_missing_evaluation(&self) -> bool {
        match self {
            Decision::Simple(d) => !d.evaluation().is_unknown(),
            Decision::Composite(d) => d.has_no_missing_evaluation(),
        }
    }
}

impl Dominance for Decision {
    fn is_at_least_as_good_as(&self, other: &Self) -> TernaryLogicValue {
        match (self, other) {
            (Decision::Simple(a), Decision::Simple(b)) => a.is_at_least_as_good_as(b),
            (Decision::Composite(a), Decision::Composite(b)) => a.is_at_least_as_good_as(b),
            _ => TernaryLogicValue::Uncomparable,
        }
    }

    fn is_at_most_as_good_as(&self, other: &Self) -> TernaryLogicValue {
        match (self, other) {
            (Decision::Simple(a), Decision::Simple(b)) => a.is_at_most_as_good_as(b),
            (Decision::Composite(a), Decision::Composite(b)) => a.is_at_most_as_good_as(b),
            _ => TernaryLogicValue::Uncomparable,
        }
    }

    fn is_equal_to(&self, other: &Self) -> TernaryLogicValue {
        match (self, other) {
            (Decision::Simple(a), Decision::Simple(b)) => a.is_equal_to(b),
            (Decision::Composite(a), Decision::Composite(b)) => a.is_equal_to(b),
            _ => TernaryLogicValue::Uncomparable,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Simple(d) => fmt::Display::fmt(d, f),
            Decision::Composite(d) => fmt::Display::fmt(d, f),
        }
    }
}
