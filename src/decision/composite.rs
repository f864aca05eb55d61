//! Decision over several attributes compared jointly.

use crate::error::DecisionError;
use crate::field::{Dominance, EvaluationField};
use crate::logic::TernaryLogicValue;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Two or more `(attribute index, evaluation)` pairs with distinct indices.
///
/// Pairs are kept sorted by attribute index so that comparison, equality
/// and hashing do not depend on construction order. The construction
/// order is remembered for display only.
///
/// Dominance is the three-valued conjunction of the per-attribute
/// comparisons: one `False` makes the whole result `False`, otherwise one
/// `Uncomparable` makes it `Uncomparable`.
#[derive(Debug, Clone)]
pub struct CompositeDecision {
    /// Sorted by attribute index.
    pairs: Vec<(usize, EvaluationField)>,
    display_order: Vec<usize>,
}

impl CompositeDecision {
    /// Creates a composite decision from parallel slices of evaluations and
    /// attribute indices.
    ///
    /// # Errors
    ///
    /// - [`DecisionError::MismatchedLength`] when the slices differ in length
    /// - [`DecisionError::TooFewEvaluations`] when fewer than two pairs are given
    /// - [`DecisionError::DuplicateAttribute`] when an attribute index repeats
    pub fn new(
        evaluations: Vec<EvaluationField>,
        attribute_indices: &[usize],
    ) -> Result<Self, DecisionError> {
        if evaluations.len() != attribute_indices.len() {
            return Err(DecisionError::MismatchedLength {
                evaluations: evaluations.len(),
                attributes: attribute_indices.len(),
            });
        }
        if evaluations.len() < 2 {
            return Err(DecisionError::TooFewEvaluations(evaluations.len()));
        }

        let mut pairs: Vec<(usize, EvaluationField)> = attribute_indices
            .iter()
            .copied()
            .zip(evaluations)
            .collect();
        pairs.sort_by_key(|(index, _)| *index);
        if let Some(window) = pairs.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(DecisionError::DuplicateAttribute(window[0].0));
        }

        Ok(Self {
            pairs,
            display_order: attribute_indices.to_vec(),
        })
    }

    /// Attribute indices in ascending order.
    pub fn attribute_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.pairs.iter().map(|(index, _)| *index)
    }

    pub fn evaluation(&self, attribute_index: usize) -> Option<&EvaluationField> {
        self.pairs
            .binary_search_by_key(&attribute_index, |(index, _)| *index)
            .ok()
            .map(|pos| &self.pairs[pos].1)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always `false`; a composite decision holds at least two pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn has_no_missing_evaluation(&self) -> bool {
        self.pairs.iter().all(|(_, evaluation)| !evaluation.is_unknown())
    }

    fn same_attributes(&self, other: &Self) -> bool {
        self.pairs.len() == other.pairs.len()
            && self
                .pairs
                .iter()
                .zip(&other.pairs)
                .all(|((a, _), (b, _))| a == b)
    }

    fn compare(
        &self,
        other: &Self,
        relation: fn(&EvaluationField, &EvaluationField) -> TernaryLogicValue,
    ) -> TernaryLogicValue {
        if !self.same_attributes(other) {
            return TernaryLogicValue::Uncomparable;
        }
        TernaryLogicValue::all(
            self.pairs
                .iter()
                .zip(&other.pairs)
                .map(|((_, mine), (_, theirs))| relation(mine, theirs)),
        )
    }
}

impl Dominance for CompositeDecision {
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

impl PartialEq for CompositeDecision {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl Eq for CompositeDecision {}

impl Hash for CompositeDecision {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pairs.hash(state);
    }
}

impl fmt::Display for CompositeDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, index) in self.display_order.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match self.evaluation(*index) {
                Some(evaluation) => write!(f, "a{index}={evaluation}")?,
                None => write!(f, "a{index}=?")?,
            }
        }
        f.write_str("}")
    }
}
