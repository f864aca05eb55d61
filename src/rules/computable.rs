//! Rule characteristics computed on demand from coverage information.

use super::characteristics::{Characteristics, RuleCharacteristics};
use super::config::C1Parameters;
use super::confirmation::{self, ContingencyTable};
use super::coverage::RuleCoverageInformation;
use super::measure::{Measure, MeasureValue};
use crate::error::CharacteristicsError;
use std::sync::OnceLock;

/// Rule measures computed lazily from fixed coverage information.
///
/// Each measure is computed on first access and cached; later accesses
/// return the cached value. Caches are [`OnceLock`]s, so concurrent first
/// accesses compute a measure once and every reader sees the same value.
///
/// Coverage information is fixed at construction. Measures whose inputs
/// are missing (no positive or neutral object list) stay unset.
///
/// # Examples
///
/// ```
/// use u_drsa::rules::{
///     Characteristics, ComputableRuleCharacteristics, ContingencyTable, RuleCoverageInformation,
/// };
///
/// let coverage = RuleCoverageInformation::from_contingency(ContingencyTable::new(4, 2, 1, 3));
/// let characteristics = ComputableRuleCharacteristics::new(coverage);
///
/// assert!(!characteristics.is_confidence_set());
/// assert_eq!(characteristics.confidence(), Some(0.8));
/// assert!(characteristics.is_confidence_set());
/// ```
#[derive(Debug)]
pub struct ComputableRuleCharacteristics {
    coverage: RuleCoverageInformation,
    c1_parameters: C1Parameters,
    values: [OnceLock<Option<MeasureValue>>; Measure::COUNT],
    positive_not_covered: OnceLock<Option<usize>>,
    negative_not_covered: OnceLock<Option<usize>>,
}

impl ComputableRuleCharacteristics {
    pub fn new(coverage: RuleCoverageInformation) -> Self {
        Self::with_characteristics(coverage, RuleCharacteristics::new())
    }

    /// Creates characteristics whose cache already holds the measures set
    /// in `known`, as for a rule read back from a rule set. Those measures
    /// are never recomputed; the rest are computed from `coverage` on demand.
    pub fn with_characteristics(coverage: RuleCoverageInformation, known: RuleCharacteristics) -> Self {
        Self {
            coverage,
            c1_parameters: C1Parameters::default(),
            values: std::array::from_fn(|i| match known.measure(Measure::ALL[i]) {
                Some(value) => OnceLock::from(Some(value)),
                None => OnceLock::new(),
            }),
            positive_not_covered: OnceLock::new(),
            negative_not_covered: OnceLock::new(),
        }
    }

    pub fn rule_coverage_information(&self) -> &RuleCoverageInformation {
        &self.coverage
    }

    /// Always fails: coverage information cannot be replaced once measures
    /// may have been derived from it.
    pub fn set_rule_coverage_information(
        &mut self,
        _coverage: RuleCoverageInformation,
    ) -> Result<(), CharacteristicsError> {
        Err(CharacteristicsError::CoverageInformationImmutable)
    }

    pub fn c1_confirmation_alpha(&self) -> f64 {
        self.c1_parameters.alpha
    }

    pub fn c1_confirmation_beta(&self) -> f64 {
        self.c1_parameters.beta
    }

    /// Changes the c1 weights.
    ///
    /// Returns `false`, leaving the weights unchanged, once c1 has been
    /// computed or if the weights are not finite.
    pub fn set_c1_confirmation_parameters(&mut self, alpha: f64, beta: f64) -> bool {
        if self.values[Measure::C1Confirmation.index()].get().is_some() {
            tracing::debug!(alpha, beta, "c1 already computed, parameters unchanged");
            return false;
        }
        let parameters = C1Parameters::new(alpha, beta);
        if let Err(reason) = parameters.validate() {
            tracing::debug!(%reason, "c1 parameters rejected");
            return false;
        }
        self.c1_parameters = parameters;
        true
    }

    /// Positive objects not covered (cell `b`), cached.
    pub fn positive_not_covered_objects_count(&self) -> Option<usize> {
        *self.positive_not_covered.get_or_init(|| {
            let support = self.support()?;
            Some(self.coverage.positive_count()?.saturating_sub(support))
        })
    }

    /// Negative objects not covered (cell `d`), cached.
    pub fn negative_not_covered_objects_count(&self) -> Option<usize> {
        *self.negative_not_covered.get_or_init(|| {
            let negative_coverage = self.negative_coverage()?;
            Some(
                self.coverage
                    .negative_count()?
                    .saturating_sub(negative_coverage),
            )
        })
    }

    /// Forces computation of every measure.
    pub fn calculate_all_characteristics(&self) {
        for m in Measure::ALL {
            self.measure(m);
        }
    }

    /// Snapshot of the measures computed so far.
    pub fn to_rule_characteristics(&self) -> RuleCharacteristics {
        RuleCharacteristics::from_values(std::array::from_fn(|i| {
            self.values[i].get().copied().flatten()
        }))
    }

    /// Contingency table assembled from the cached cells.
    fn contingency_table(&self) -> Option<ContingencyTable> {
        Some(ContingencyTable {
            a: self.support()?,
            b: self.positive_not_covered_objects_count()?,
            c: self.negative_coverage()?,
            d: self.negative_not_covered_objects_count()?,
        })
    }

    fn compute(&self, measure: Measure) -> Option<MeasureValue> {
        let real = |f: fn(&ContingencyTable) -> f64| {
            self.contingency_table()
                .map(|t| MeasureValue::Real(f(&t)))
        };
        match measure {
            Measure::Support => self.coverage.support().map(MeasureValue::Count),
            Measure::Strength => {
                let support = self.support()? as f64;
                Some(MeasureValue::Real(
                    support / self.coverage.all_objects_count() as f64,
                ))
            }
            Measure::Confidence => real(confirmation::confidence),
            Measure::CoverageFactor => {
                let support = self.support()? as f64;
                let positive = self.coverage.positive_count()? as f64;
                Some(MeasureValue::Real(support / positive))
            }
            Measure::Coverage => Some(MeasureValue::Count(self.coverage.coverage())),
            Measure::NegativeCoverage => self
                .coverage
                .negative_coverage()
                .map(MeasureValue::Count),
            Measure::Epsilon => real(confirmation::epsilon),
            Measure::EpsilonPrime => real(confirmation::epsilon_prime),
            Measure::FConfirmation => real(confirmation::f_confirmation),
            Measure::AConfirmation => real(confirmation::a_confirmation),
            Measure::ZConfirmation => real(confirmation::z_confirmation),
            Measure::LConfirmation => real(confirmation::l_confirmation),
            Measure::C1Confirmation => {
                let C1Parameters { alpha, beta } = self.c1_parameters;
                self.contingency_table()
                    .map(|t| MeasureValue::Real(confirmation::c1_confirmation(&t, alpha, beta)))
            }
            Measure::SConfirmation => real(confirmation::s_confirmation),
        }
    }
}

impl Characteristics for ComputableRuleCharacteristics {
    fn measure(&self, measure: Measure) -> Option<MeasureValue> {
        *self.values[measure.index()].get_or_init(|| {
            let value = self.compute(measure);
            tracing::trace!(%measure, ?value, "rule characteristic computed");
            value
        })
    }

    fn is_set(&self, measure: Measure) -> bool {
        matches!(self.values[measure.index()].get(), Some(Some(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoverageError;

    fn worked() -> ComputableRuleCharacteristics {
        ComputableRuleCharacteristics::new(RuleCoverageInformation::from_contingency(
            ContingencyTable::new(4, 2, 1, 3),
        ))
    }

    fn close(actual: Option<f64>, expected: f64) -> bool {
        actual.is_some_and(|v| (v - expected).abs() < 1e-4)
    }

    #[test]
    fn test_worked_scenario() {
        let ch = worked();
        assert_eq!(ch.support(), Some(4));
        assert_eq!(ch.positive_not_covered_objects_count(), Some(2));
        assert_eq!(ch.negative_coverage(), Some(1));
        assert_eq!(ch.negative_not_covered_objects_count(), Some(3));
        assert_eq!(ch.coverage(), Some(5));

        assert!(close(ch.strength(), 0.4));
        assert!(close(ch.confidence(), 0.8));
        assert!(close(ch.coverage_factor(), 0.6667));
        assert!(close(ch.epsilon(), 0.25));
        assert!(close(ch.epsilon_prime(), 0.1667));
        assert!(close(ch.a_confirmation(), 0.3333));
        assert!(close(ch.z_confirmation(), 0.5));
        assert!(close(ch.c1_confirmation(), 0.25));
        assert!(close(ch.f_confirmation(), 0.4545));
        assert!(close(ch.l_confirmation(), 0.9808));
        assert!(close(ch.s_confirmation(), 0.4));
    }

    #[test]
    fn test_measures_cached_on_first_access() {
        let ch = worked();
        assert!(!ch.is_f_confirmation_set());
        let first = ch.f_confirmation();
        assert!(ch.is_f_confirmation_set());
        assert_eq!(ch.f_confirmation(), first);
        // F needed all four cells, which are cached as a side effect
        assert!(ch.is_support_set());
        assert!(ch.is_negative_coverage_set());
        assert!(!ch.is_strength_set());
    }

    #[test]
    fn test_strength_uses_all_objects() {
        // 2 neutral objects count in N but not in the contingency table
        let coverage = RuleCoverageInformation::new(8, vec![0, 1, 4, 6])
            .unwrap()
            .with_positive_objects(vec![0, 1, 2])
            .unwrap()
            .with_neutral_objects(vec![6, 7])
            .unwrap();
        let ch = ComputableRuleCharacteristics::new(coverage);
        assert!(close(ch.strength(), 2.0 / 8.0));
        assert_eq!(ch.coverage(), Some(4));
        assert_eq!(ch.negative_coverage(), Some(1));
        assert_eq!(ch.negative_not_covered_objects_count(), Some(2));
        assert!(close(ch.confidence(), 2.0 / 3.0));
    }

    #[test]
    fn test_coverage_information_is_immutable() {
        let mut ch = worked();
        let replacement = RuleCoverageInformation::new(1, vec![0]).unwrap();
        assert_eq!(
            ch.set_rule_coverage_information(replacement),
            Err(CharacteristicsError::CoverageInformationImmutable)
        );
        assert_eq!(ch.rule_coverage_information().all_objects_count(), 10);
    }

    #[test]
    fn test_c1_parameters_before_and_after_computation() {
        let mut ch = worked();
        assert!((ch.c1_confirmation_alpha() - 0.5).abs() < 1e-15);
        assert!((ch.c1_confirmation_beta() - 0.5).abs() < 1e-15);

        assert!(ch.set_c1_confirmation_parameters(0.4, 0.6));
        assert!((ch.c1_confirmation_alpha() - 0.4).abs() < 1e-15);
        assert!(close(ch.c1_confirmation(), 0.4 * 0.5));

        assert!(!ch.set_c1_confirmation_parameters(0.9, 0.1));
        assert!((ch.c1_confirmation_alpha() - 0.4).abs() < 1e-15);
        assert!((ch.c1_confirmation_beta() - 0.6).abs() < 1e-15);
    }

    #[test]
    fn test_c1_parameters_rejected_after_read_even_if_default() {
        let mut ch = worked();
        ch.c1_confirmation();
        assert!(!ch.set_c1_confirmation_parameters(0.5, 0.5));
    }

    #[test]
    fn test_non_finite_c1_parameters_rejected() {
        let mut ch = worked();
        assert!(!ch.set_c1_confirmation_parameters(f64::NAN, 0.5));
        assert!((ch.c1_confirmation_alpha() - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_missing_positive_objects_leave_measures_unset() -> Result<(), CoverageError> {
        let ch = ComputableRuleCharacteristics::new(RuleCoverageInformation::new(5, vec![0, 1])?);
        assert_eq!(ch.support(), None);
        assert_eq!(ch.confidence(), None);
        assert_eq!(ch.positive_not_covered_objects_count(), None);
        assert!(!ch.is_support_set());
        assert!(!ch.is_confidence_set());
        // coverage needs no class information
        assert_eq!(ch.coverage(), Some(2));
        assert!(ch.is_coverage_set());
        Ok(())
    }

    #[test]
    fn test_missing_neutral_objects() -> Result<(), CoverageError> {
        let coverage = RuleCoverageInformation::new(5, vec![0, 1])?.with_positive_objects(vec![0])?;
        let ch = ComputableRuleCharacteristics::new(coverage);
        assert_eq!(ch.support(), Some(1));
        assert!(close(ch.coverage_factor(), 1.0));
        assert_eq!(ch.negative_coverage(), None);
        assert_eq!(ch.negative_not_covered_objects_count(), None);
        assert!(!ch.is_epsilon_set());
        Ok(())
    }

    #[test]
    fn test_calculate_all_and_snapshot() {
        let ch = worked();
        ch.calculate_all_characteristics();
        ch.calculate_all_characteristics();
        for m in Measure::ALL {
            assert!(ch.is_set(m), "{m} not set");
        }
        let snapshot = ch.to_rule_characteristics();
        assert_eq!(snapshot.iter().count(), Measure::COUNT);
        assert_eq!(snapshot.support(), Some(4));
        assert_eq!(snapshot.z_confirmation(), ch.z_confirmation());
    }

    #[test]
    fn test_snapshot_contains_only_computed() {
        let ch = worked();
        ch.support();
        ch.confidence();
        let snapshot = ch.to_rule_characteristics();
        assert!(snapshot.is_support_set());
        assert!(snapshot.is_confidence_set());
        assert!(!snapshot.is_strength_set());
    }

    #[test]
    fn test_seeded_values_are_not_recomputed() {
        let mut known = RuleCharacteristics::new();
        known.set_confidence(0.5);
        let ch = ComputableRuleCharacteristics::with_characteristics(
            RuleCoverageInformation::from_contingency(ContingencyTable::new(4, 2, 1, 3)),
            known,
        );
        assert!(ch.is_confidence_set());
        assert!(!ch.is_support_set());
        assert_eq!(ch.confidence(), Some(0.5));
        assert_eq!(ch.support(), Some(4));
    }

    #[test]
    fn test_seeded_count_given_as_real() {
        let mut known = RuleCharacteristics::new();
        known.set(Measure::Support, MeasureValue::Real(4.0)).unwrap();
        let ch = ComputableRuleCharacteristics::with_characteristics(
            RuleCoverageInformation::from_contingency(ContingencyTable::new(4, 2, 1, 3)),
            known,
        );
        assert_eq!(ch.support(), Some(4));
        assert!(close(ch.confidence(), 0.8));
        assert!(close(ch.f_confirmation(), 0.4545));
    }

    #[test]
    fn test_concurrent_first_access() {
        let ch = &worked();
        let values: Vec<Option<f64>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(move || ch.l_confirmation()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(values.iter().all(|v| *v == values[0]));
        assert!(ch.is_l_confirmation_set());
    }
}
