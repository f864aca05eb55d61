//! Decision table: condition evaluations and decisions of all objects.

use crate::decision::{Decision, DecisionDistribution};
use crate::error::TableError;
use crate::field::{Dominance, EvaluationField};
use crate::logic::TernaryLogicValue;

/// Immutable snapshot of the objects analysed.
///
/// Row `i` holds object `i`'s evaluations on the active condition
/// attributes; `decisions[i]` is its decision. Every row has the same
/// width.
#[derive(Debug, Clone, Default)]
pub struct DecisionTable {
    conditions: Vec<Vec<EvaluationField>>,
    decisions: Vec<Decision>,
}

impl DecisionTable {
    /// Creates a table.
    ///
    /// # Errors
    ///
    /// - [`TableError::DecisionCountMismatch`] if the number of decisions
    ///   differs from the number of rows
    /// - [`TableError::RaggedRow`] if rows differ in width
    pub fn new(
        conditions: Vec<Vec<EvaluationField>>,
        decisions: Vec<Decision>,
    ) -> Result<Self, TableError> {
        if conditions.len() != decisions.len() {
            return Err(TableError::DecisionCountMismatch {
                objects: conditions.len(),
                decisions: decisions.len(),
            });
        }
        if let Some(first) = conditions.first() {
            let expected = first.len();
            if let Some((object, row)) = conditions
                .iter()
                .enumerate()
                .find(|(_, row)| row.len() != expected)
            {
                return Err(TableError::RaggedRow {
                    object,
                    expected,
                    found: row.len(),
                });
            }
        }
        Ok(Self {
            conditions,
            decisions,
        })
    }

    pub fn object_count(&self) -> usize {
        self.decisions.len()
    }

    /// Number of condition attributes (0 for an empty table).
    pub fn attribute_count(&self) -> usize {
        self.conditions.first().map_or(0, Vec::len)
    }

    pub fn condition_profile(&self, object: usize) -> Option<ConditionProfile<'_>> {
        self.conditions.get(object).map(|row| ConditionProfile(row))
    }

    pub fn decision(&self, object: usize) -> Option<&Decision> {
        self.decisions.get(object)
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    /// Global class sizes.
    pub fn decision_distribution(&self) -> DecisionDistribution {
        DecisionDistribution::from_decisions(&self.decisions)
    }
}

/// Borrowed row of condition evaluations.
///
/// One profile dominates another if it is at least as good on every
/// attribute, combined with three-valued AND. Rows of different width are
/// uncomparable.
#[derive(Debug, Clone, Copy)]
pub struct ConditionProfile<'a>(pub &'a [EvaluationField]);

impl ConditionProfile<'_> {
    fn compare(
        &self,
        other: &Self,
        relation: fn(&EvaluationField, &EvaluationField) -> TernaryLogicValue,
    ) -> TernaryLogicValue {
        if self.0.len() != other.0.len() {
            return TernaryLogicValue::Uncomparable;
        }
        TernaryLogicValue::all(self.0.iter().zip(other.0).map(|(a, b)| relation(a, b)))
    }
}

impl Dominance for ConditionProfile<'_> {
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
