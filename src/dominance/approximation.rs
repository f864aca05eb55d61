//! Unions of decision classes and their rough-set approximations.

use super::config::ApproximationConfig;
use super::cones::DominanceCones;
use super::table::DecisionTable;
use crate::decision::{Decision, DecisionDistribution};
use crate::error::{Error, TableError};
use crate::field::Dominance;
use crate::logic::TernaryLogicValue;

/// Direction of a union of decision classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnionType {
    /// Objects whose decision is at least as good as the limit.
    AtLeast,
    /// Objects whose decision is at most as good as the limit.
    AtMost,
}

/// Upward or downward union of decision classes.
///
/// A decision is *positive* for the union when the relation to the
/// limiting decision is `True`, *negative* when it is `False`, and
/// *neutral* when the two decisions are uncomparable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Union {
    pub union_type: UnionType,
    pub limiting_decision: Decision,
}

/// Objects of a table split by their relation to a union.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnionClassification {
    pub positive: Vec<usize>,
    pub negative: Vec<usize>,
    pub neutral: Vec<usize>,
}

impl Union {
    pub fn at_least(limiting_decision: Decision) -> Self {
        Self {
            union_type: UnionType::AtLeast,
            limiting_decision,
        }
    }

    pub fn at_most(limiting_decision: Decision) -> Self {
        Self {
            union_type: UnionType::AtMost,
            limiting_decision,
        }
    }

    /// Relation of `decision` to this union.
    pub fn membership(&self, decision: &Decision) -> TernaryLogicValue {
        match self.union_type {
            UnionType::AtLeast => decision.is_at_least_as_good_as(&self.limiting_decision),
            UnionType::AtMost => decision.is_at_most_as_good_as(&self.limiting_decision),
        }
    }

    pub fn classify(&self, table: &DecisionTable) -> UnionClassification {
        let mut classification = UnionClassification::default();
        for (object, decision) in table.decisions().iter().enumerate() {
            match self.membership(decision) {
                TernaryLogicValue::True => classification.positive.push(object),
                TernaryLogicValue::False => classification.negative.push(object),
                TernaryLogicValue::Uncomparable => classification.neutral.push(object),
            }
        }
        classification
    }

    /// Cone used for consistency: objects dominating `x` for an upward
    /// union, objects dominated by `x` for a downward one.
    fn consistency_cone<'a>(
        &self,
        cones: &'a DominanceCones,
        object: usize,
    ) -> Option<&'a DecisionDistribution> {
        match self.union_type {
            UnionType::AtLeast => cones.positive_d_cone(object),
            UnionType::AtMost => cones.negative_d_cone(object),
        }
    }

    /// Opposite cone, used for the upper approximation.
    fn reach_cone<'a>(
        &self,
        cones: &'a DominanceCones,
        object: usize,
    ) -> Option<&'a DecisionDistribution> {
        match self.union_type {
            UnionType::AtLeast => cones.negative_d_cone(object),
            UnionType::AtMost => cones.positive_d_cone(object),
        }
    }
}

/// Lower and upper approximation of a union.
///
/// With threshold `t`, a positive object `y` is in the lower approximation
/// when its ε-consistency
///
/// ```text
/// ε(y) = |cone(y) ∩ negative| / |negative|
/// ```
///
/// does not exceed `t` (ε is 0 when the union has no negative objects).
/// An object is in the upper approximation when its opposite cone
/// contains at least one positive decision. The boundary is
/// `upper \ lower`.
#[derive(Debug, Clone, PartialEq)]
pub struct Approximations {
    pub classification: UnionClassification,
    pub lower: Vec<usize>,
    pub upper: Vec<usize>,
    pub boundary: Vec<usize>,
    /// ε-consistency of each positive object, aligned with
    /// `classification.positive`.
    pub epsilons: Vec<f64>,
}

impl Approximations {
    /// Computes the approximations of `union` over `table`.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if `config` does not validate
    /// - [`TableError::ConeCountMismatch`] if `cones` was built for a
    ///   different table
    pub fn calculate(
        table: &DecisionTable,
        cones: &DominanceCones,
        union: &Union,
        config: &ApproximationConfig,
    ) -> Result<Self, Error> {
        config.validate().map_err(Error::Config)?;
        if cones.object_count() != table.object_count() {
            return Err(TableError::ConeCountMismatch {
                objects: table.object_count(),
                cones: cones.object_count(),
            }
            .into());
        }

        let classification = union.classify(table);
        let negative_count = classification.negative.len();

        let mut lower = Vec::new();
        let mut epsilons = Vec::with_capacity(classification.positive.len());
        for &object in &classification.positive {
            let inconsistent = union
                .consistency_cone(cones, object)
                .map_or(0, |cone| cone.count_where(|d| union.membership(d).is_false()));
            let epsilon = if negative_count == 0 {
                0.0
            } else {
                inconsistent as f64 / negative_count as f64
            };
            if epsilon <= config.consistency_threshold {
                lower.push(object);
            }
            epsilons.push(epsilon);
        }

        let upper: Vec<usize> = (0..table.object_count())
            .filter(|&object| {
                union
                    .reach_cone(cones, object)
                    .is_some_and(|cone| cone.count_where(|d| union.membership(d).is_true()) > 0)
            })
            .collect();

        let boundary = upper
            .iter()
            .copied()
            .filter(|object| lower.binary_search(object).is_err())
            .collect();

        tracing::debug!(
            union = ?union.union_type,
            lower = lower.len(),
            upper = upper.len(),
            "union approximated"
        );

        Ok(Self {
            classification,
            lower,
            upper,
            boundary,
            epsilons,
        })
    }

    /// Accuracy of approximation `|lower| / |upper|` (1 for an empty upper
    /// approximation).
    pub fn accuracy(&self) -> f64 {
        if self.upper.is_empty() {
            1.0
        } else {
            self.lower.len() as f64 / self.upper.len() as f64
        }
    }
}
