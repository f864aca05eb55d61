//! Dominance cone construction.

use super::config::ConeConfig;
use super::table::DecisionTable;
use crate::decision::DecisionDistribution;
use crate::field::Dominance;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Decision distributions of the four dominance cones of every object.
///
/// For objects `x` and `y` with condition rows `r(x)`, `r(y)`:
///
/// | cone | `y` belongs when |
/// |---|---|
/// | positive D-cone of `x` | `r(y) ≥ r(x)` (y dominates x) |
/// | negative D-cone of `x` | `r(y) ≤ r(x)` (x dominates y) |
/// | positive inverse D-cone of `x` | `r(x) ≤ r(y)` |
/// | negative inverse D-cone of `x` | `r(x) ≥ r(y)` |
///
/// The inverse cones evaluate the relation from `x`'s side. They coincide
/// with the plain cones unless the table holds unknown values under an
/// asymmetric missing-value semantics.
///
/// Every object belongs to its own positive and negative D-cones.
///
/// # Examples
///
/// ```
/// use u_drsa::decision::Decision;
/// use u_drsa::dominance::{ConeConfig, DecisionTable, DominanceCones};
/// use u_drsa::field::{AttributePreferenceType::Gain, EvaluationField};
///
/// let class = |v| Decision::simple(EvaluationField::integer(v, Gain), 1);
/// let table = DecisionTable::new(
///     vec![
///         vec![EvaluationField::integer(1, Gain)],
///         vec![EvaluationField::integer(2, Gain)],
///     ],
///     vec![class(1), class(2)],
/// )
/// .unwrap();
///
/// let cones = DominanceCones::calculate(&table, &ConeConfig::default());
/// assert_eq!(cones.positive_d_cone(0).unwrap().total(), 2);
/// assert_eq!(cones.negative_d_cone(0).unwrap().total(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DominanceCones {
    positive: Vec<DecisionDistribution>,
    negative: Vec<DecisionDistribution>,
    positive_inverse: Vec<DecisionDistribution>,
    negative_inverse: Vec<DecisionDistribution>,
}

/// The four cones of one object.
#[derive(Default)]
struct ObjectCones {
    positive: DecisionDistribution,
    negative: DecisionDistribution,
    positive_inverse: DecisionDistribution,
    negative_inverse: DecisionDistribution,
}

impl DominanceCones {
    /// Builds the cones of every object in `table`.
    ///
    /// Pure function of the table: rerun it after the table changes.
    /// Cost is `O(n² · m)` for `n` objects and `m` condition attributes.
    pub fn calculate(table: &DecisionTable, config: &ConeConfig) -> Self {
        let n = table.object_count();
        tracing::debug!(
            objects = n,
            attributes = table.attribute_count(),
            parallel = config.parallel,
            "calculating dominance cones"
        );

        let per_object = Self::calculate_all(table, config.parallel);

        let mut cones = Self {
            positive: Vec::with_capacity(n),
            negative: Vec::with_capacity(n),
            positive_inverse: Vec::with_capacity(n),
            negative_inverse: Vec::with_capacity(n),
        };
        for object in per_object {
            cones.positive.push(object.positive);
            cones.negative.push(object.negative);
            cones.positive_inverse.push(object.positive_inverse);
            cones.negative_inverse.push(object.negative_inverse);
        }

        tracing::debug!(objects = n, "dominance cones calculated");
        cones
    }

    #[cfg(feature = "parallel")]
    fn calculate_all(table: &DecisionTable, parallel: bool) -> Vec<ObjectCones> {
        let n = table.object_count();
        if parallel {
            (0..n)
                .into_par_iter()
                .map(|x| Self::cones_of(table, x))
                .collect()
        } else {
            (0..n).map(|x| Self::cones_of(table, x)).collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn calculate_all(table: &DecisionTable, _parallel: bool) -> Vec<ObjectCones> {
        (0..table.object_count())
            .map(|x| Self::cones_of(table, x))
            .collect()
    }

    fn cones_of(table: &DecisionTable, x: usize) -> ObjectCones {
        let mut cones = ObjectCones::default();
        let Some(reference) = table.condition_profile(x) else {
            return cones;
        };

        for (y, decision) in table.decisions().iter().enumerate() {
            let Some(other) = table.condition_profile(y) else {
                continue;
            };
            if other.is_at_least_as_good_as(&reference).is_true() {
                cones.positive.increase_count(decision);
            }
            if other.is_at_most_as_good_as(&reference).is_true() {
                cones.negative.increase_count(decision);
            }
            if reference.is_at_most_as_good_as(&other).is_true() {
                cones.positive_inverse.increase_count(decision);
            }
            if reference.is_at_least_as_good_as(&other).is_true() {
                cones.negative_inverse.increase_count(decision);
            }
        }
        cones
    }

    /// Number of objects covered.
    pub fn object_count(&self) -> usize {
        self.positive.len()
    }

    /// Decisions of objects dominating `object`.
    pub fn positive_d_cone(&self, object: usize) -> Option<&DecisionDistribution> {
        self.positive.get(object)
    }

    /// Decisions of objects dominated by `object`.
    pub fn negative_d_cone(&self, object: usize) -> Option<&DecisionDistribution> {
        self.negative.get(object)
    }

    pub fn positive_inv_d_cone(&self, object: usize) -> Option<&DecisionDistribution> {
        self.positive_inverse.get(object)
    }

    pub fn negative_inv_d_cone(&self, object: usize) -> Option<&DecisionDistribution> {
        self.negative_inverse.get(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::Decision;
    use crate::field::AttributePreferenceType::{Cost, Gain};
    use crate::field::{EvaluationField, MissingValueSemantics};

    fn class(v: i64) -> Decision {
        Decision::simple(EvaluationField::integer(v, Gain), 2)
    }

    fn row(a: i64, b: i64) -> Vec<EvaluationField> {
        vec![EvaluationField::integer(a, Gain), EvaluationField::integer(b, Cost)]
    }

    /// Four objects:
    /// 0: (1, 5) class 1
    /// 1: (2, 3) class 2
    /// 2: (3, 1) class 3
    /// 3: (3, 6) class 2   (better than 0 on gain, worse on cost)
    fn sample_table() -> DecisionTable {
        DecisionTable::new(
            vec![row(1, 5), row(2, 3), row(3, 1), row(3, 6)],
            vec![class(1), class(2), class(3), class(2)],
        )
        .unwrap()
    }

    #[test]
    fn test_cones_sequential() {
        let table = sample_table();
        let cones = DominanceCones::calculate(&table, &ConeConfig::default().with_parallel(false));
        assert_eq!(cones.object_count(), 4);

        // object 0 is dominated by 1 and 2, not by 3
        let pos0 = cones.positive_d_cone(0).unwrap();
        assert_eq!(pos0.total(), 3);
        assert_eq!(pos0.count(&class(1)), 1);
        assert_eq!(pos0.count(&class(2)), 1);
        assert_eq!(pos0.count(&class(3)), 1);

        // object 2 dominates everyone
        let neg2 = cones.negative_d_cone(2).unwrap();
        assert_eq!(neg2.total(), 4);
        assert_eq!(neg2.count(&class(2)), 2);
        assert_eq!(neg2.count(&class(3)), 1);

        // object 3 dominates nobody but itself
        let neg3 = cones.negative_d_cone(3).unwrap();
        assert_eq!(neg3.total(), 1);
        assert_eq!(neg3.count(&class(2)), 1);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let table = sample_table();
        let seq = DominanceCones::calculate(&table, &ConeConfig::default().with_parallel(false));
        let par = DominanceCones::calculate(&table, &ConeConfig::default().with_parallel(true));
        for x in 0..table.object_count() {
            assert_eq!(seq.positive_d_cone(x), par.positive_d_cone(x));
            assert_eq!(seq.negative_d_cone(x), par.negative_d_cone(x));
        }
    }

    #[test]
    fn test_reflexive_membership() {
        let table = sample_table();
        let cones = DominanceCones::calculate(&table, &ConeConfig::default());
        for (x, decision) in table.decisions().iter().enumerate() {
            assert!(cones.positive_d_cone(x).unwrap().count(decision) >= 1);
            assert!(cones.negative_d_cone(x).unwrap().count(decision) >= 1);
        }
    }

    #[test]
    fn test_reflexive_membership_with_nan() {
        let nan_class = Decision::simple(EvaluationField::real(f64::NAN, Gain), 2);
        let table = DecisionTable::new(
            vec![
                vec![EvaluationField::real(f64::NAN, Gain)],
                vec![EvaluationField::real(1.0, Gain)],
            ],
            vec![nan_class.clone(), class(1)],
        )
        .unwrap();
        let cones = DominanceCones::calculate(&table, &ConeConfig::default());

        for cone in [
            cones.positive_d_cone(0),
            cones.negative_d_cone(0),
            cones.positive_inv_d_cone(0),
            cones.negative_inv_d_cone(0),
        ] {
            let cone = cone.unwrap();
            assert_eq!(cone.count(&nan_class), 1);
            assert_eq!(cone.total(), 1);
        }
        assert_eq!(cones.positive_d_cone(1).unwrap().count(&class(1)), 1);
    }

    #[test]
    fn test_inverse_cones_equal_plain_without_unknowns() {
        let table = sample_table();
        let cones = DominanceCones::calculate(&table, &ConeConfig::default());
        for x in 0..table.object_count() {
            assert_eq!(cones.positive_d_cone(x), cones.positive_inv_d_cone(x));
            assert_eq!(cones.negative_d_cone(x), cones.negative_inv_d_cone(x));
        }
    }

    #[test]
    fn test_inverse_cones_differ_under_mv15() {
        let unknown = EvaluationField::unknown(MissingValueSemantics::Mv15, Gain);
        let table = DecisionTable::new(
            vec![vec![EvaluationField::integer(2, Gain)], vec![unknown]],
            vec![class(1), class(2)],
        )
        .unwrap();
        let cones = DominanceCones::calculate(&table, &ConeConfig::default());

        // unknown (object 1) is at least as good as 2, so it is in D+(0);
        // but 2 is not at most as good as unknown, so it is not in D+inv(0)
        assert_eq!(cones.positive_d_cone(0).unwrap().total(), 2);
        assert_eq!(cones.positive_inv_d_cone(0).unwrap().total(), 1);

        // reflexivity survives unknown values
        assert_eq!(cones.positive_d_cone(1).unwrap().count(&class(2)), 1);
        assert_eq!(cones.negative_d_cone(1).unwrap().count(&class(2)), 1);
    }

    #[test]
    fn test_empty_table() {
        let table = DecisionTable::new(vec![], vec![]).unwrap();
        let cones = DominanceCones::calculate(&table, &ConeConfig::default());
        assert_eq!(cones.object_count(), 0);
        assert!(cones.positive_d_cone(0).is_none());
    }

    #[test]
    fn test_no_condition_attributes() {
        // every object dominates every other one
        let table = DecisionTable::new(vec![vec![], vec![]], vec![class(1), class(2)]).unwrap();
        let cones = DominanceCones::calculate(&table, &ConeConfig::default());
        assert_eq!(cones.positive_d_cone(0).unwrap().total(), 2);
        assert_eq!(cones.negative_d_cone(1).unwrap().total(), 2);
    }
}
