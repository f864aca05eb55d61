//! Decision over a single attribute.

use crate::field::{Dominance, EvaluationField};
use crate::logic::TernaryLogicValue;
use std::fmt;

/// One `(attribute index, evaluation)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleDecision {
    attribute_index: usize,
    evaluation: EvaluationField,
}

impl SimpleDecision {
    pub fn new(evaluation: EvaluationField, attribute_index: usize) -> Self {
        Self {
            attribute_index,
            evaluation,
        }
    }

    pub fn attribute_index(&self) -> usize {
        self.attribute_index
    }

    pub fn evaluation(&self) -> &EvaluationField {
        &self.evaluation
    }

    fn compare(
        &self,
        other: &Self,
        relation: fn(&EvaluationField, &EvaluationField) -> TernaryLogicValue,
    ) -> TernaryLogicValue {
        if self.attribute_index != other.attribute_index {
            return TernaryLogicValue::Uncomparable;
        }
        relation(&self.evaluation, &other.evaluation)
    }
}

impl Dominance for SimpleDecision {
    fn is_at_least_as_good_as(&self, other: &Self) -> TernaryLogicValue {
        self.compare(other, EvaluationField::is_at_least_as_good_as)
    }

    fn is_at_most_as_good_as(&self, other: &Self) -> TernaryLogicValue {
        self.compare(other, EvaluationField::is_at_most_as_good_as)
    }

    fn is_equal_to(&self, other: &Self) -> TernaryLogicValue {
        self.compare(other, EvaluationField::is_equal_to)
    }
}

impl fmt::Display for SimpleDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a{}={}", self.attribute_index, self.evaluation)
    }
}
