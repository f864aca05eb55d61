//! Rule characteristics: the read interface and the plain record.

use super::measure::{Measure, MeasureValue};
use crate::error::CharacteristicsError;

/// Read access to the fourteen rule measures.
///
/// Implementors provide [`measure`](Characteristics::measure) and
/// [`is_set`](Characteristics::is_set); the typed getters are derived from
/// them. A getter returns `None` when the measure is unset.
pub trait Characteristics {
    /// Value of `measure`, `None` if unset.
    fn measure(&self, measure: Measure) -> Option<MeasureValue>;

    /// Whether `measure` holds a value right now, without computing it.
    fn is_set(&self, measure: Measure) -> bool;

    fn support(&self) -> Option<usize> {
        self.measure(Measure::Support).and_then(MeasureValue::as_count)
    }

    fn strength(&self) -> Option<f64> {
        self.real(Measure::Strength)
    }

    fn confidence(&self) -> Option<f64> {
        self.real(Measure::Confidence)
    }

    fn coverage_factor(&self) -> Option<f64> {
        self.real(Measure::CoverageFactor)
    }

    fn coverage(&self) -> Option<usize> {
        self.measure(Measure::Coverage).and_then(MeasureValue::as_count)
    }

    fn negative_coverage(&self) -> Option<usize> {
        self.measure(Measure::NegativeCoverage)
            .and_then(MeasureValue::as_count)
    }

    fn epsilon(&self) -> Option<f64> {
        self.real(Measure::Epsilon)
    }

    fn epsilon_prime(&self) -> Option<f64> {
        self.real(Measure::EpsilonPrime)
    }

    fn f_confirmation(&self) -> Option<f64> {
        self.real(Measure::FConfirmation)
    }

    fn a_confirmation(&self) -> Option<f64> {
        self.real(Measure::AConfirmation)
    }

    fn z_confirmation(&self) -> Option<f64> {
        self.real(Measure::ZConfirmation)
    }

    fn l_confirmation(&self) -> Option<f64> {
        self.real(Measure::LConfirmation)
    }

    fn c1_confirmation(&self) -> Option<f64> {
        self.real(Measure::C1Confirmation)
    }

    fn s_confirmation(&self) -> Option<f64> {
        self.real(Measure::SConfirmation)
    }

    fn is_support_set(&self) -> bool {
        self.is_set(Measure::Support)
    }

    fn is_strength_set(&self) -> bool {
        self.is_set(Measure::Strength)
    }

    fn is_confidence_set(&self) -> bool {
        self.is_set(Measure::Confidence)
    }

    fn is_coverage_factor_set(&self) -> bool {
        self.is_set(Measure::CoverageFactor)
    }

    fn is_coverage_set(&self) -> bool {
        self.is_set(Measure::Coverage)
    }

    fn is_negative_coverage_set(&self) -> bool {
        self.is_set(Measure::NegativeCoverage)
    }

    fn is_epsilon_set(&self) -> bool {
        self.is_set(Measure::Epsilon)
    }

    fn is_epsilon_prime_set(&self) -> bool {
        self.is_set(Measure::EpsilonPrime)
    }

    fn is_f_confirmation_set(&self) -> bool {
        self.is_set(Measure::FConfirmation)
    }

    fn is_a_confirmation_set(&self) -> bool {
        self.is_set(Measure::AConfirmation)
    }

    fn is_z_confirmation_set(&self) -> bool {
        self.is_set(Measure::ZConfirmation)
    }

    fn is_l_confirmation_set(&self) -> bool {
        self.is_set(Measure::LConfirmation)
    }

    fn is_c1_confirmation_set(&self) -> bool {
        self.is_set(Measure::C1Confirmation)
    }

    fn is_s_confirmation_set(&self) -> bool {
        self.is_set(Measure::SConfirmation)
    }

    /// Real-valued read of any measure.
    fn real(&self, measure: Measure) -> Option<f64> {
        self.measure(measure).map(MeasureValue::as_real)
    }
}

/// Plain record of rule measures.
///
/// Holds whatever values were set, typically by a rule set reader. Nothing
/// is computed.
///
/// # Examples
///
/// ```
/// use u_drsa::rules::{Characteristics, RuleCharacteristics};
///
/// let mut characteristics = RuleCharacteristics::new();
/// characteristics.set_support(12);
/// characteristics.set_confidence(0.75);
///
/// assert_eq!(characteristics.support(), Some(12));
/// assert!(characteristics.is_confidence_set());
/// assert!(!characteristics.is_strength_set());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleCharacteristics {
    values: [Option<MeasureValue>; Measure::COUNT],
}

impl RuleCharacteristics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record holding exactly `values`, indexed like [`Measure::ALL`].
    /// Callers guarantee count measures hold counts.
    pub(crate) fn from_values(values: [Option<MeasureValue>; Measure::COUNT]) -> Self {
        Self { values }
    }

    /// Sets `measure`, converting `value` to the measure's kind.
    ///
    /// Counts given to real-valued measures become reals. Reals given to
    /// count measures must be non-negative whole numbers.
    ///
    /// # Errors
    ///
    /// [`CharacteristicsError::NotACount`] if a count measure receives a
    /// fractional, negative or non-finite real.
    pub fn set(&mut self, measure: Measure, value: MeasureValue) -> Result<(), CharacteristicsError> {
        let value = match value {
            MeasureValue::Real(x) if measure.is_count() => {
                if x >= 0.0 && x.fract() == 0.0 && x < usize::MAX as f64 {
                    MeasureValue::Count(x as usize)
                } else {
                    return Err(CharacteristicsError::NotACount {
                        measure,
                        value: x.to_string(),
                    });
                }
            }
            MeasureValue::Count(n) if !measure.is_count() => MeasureValue::Real(n as f64),
            value => value,
        };
        self.put(measure, value);
        Ok(())
    }

    fn put(&mut self, measure: Measure, value: MeasureValue) {
        self.values[measure.index()] = Some(value);
    }

    /// Clears `measure`.
    pub fn unset(&mut self, measure: Measure) {
        self.values[measure.index()] = None;
    }

    /// Set measures with their values, in [`Measure::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Measure, MeasureValue)> + '_ {
        Measure::ALL
            .iter()
            .filter_map(|&m| self.values[m.index()].map(|v| (m, v)))
    }

    pub fn set_support(&mut self, value: usize) {
        self.put(Measure::Support, MeasureValue::Count(value));
    }

    pub fn set_strength(&mut self, value: f64) {
        self.put(Measure::Strength, MeasureValue::Real(value));
    }

    pub fn set_confidence(&mut self, value: f64) {
        self.put(Measure::Confidence, MeasureValue::Real(value));
    }

    pub fn set_coverage_factor(&mut self, value: f64) {
        self.put(Measure::CoverageFactor, MeasureValue::Real(value));
    }

    pub fn set_coverage(&mut self, value: usize) {
        self.put(Measure::Coverage, MeasureValue::Count(value));
    }

    pub fn set_negative_coverage(&mut self, value: usize) {
        self.put(Measure::NegativeCoverage, MeasureValue::Count(value));
    }

    pub fn set_epsilon(&mut self, value: f64) {
        self.put(Measure::Epsilon, MeasureValue::Real(value));
    }

    pub fn set_epsilon_prime(&mut self, value: f64) {
        self.put(Measure::EpsilonPrime, MeasureValue::Real(value));
    }

    pub fn set_f_confirmation(&mut self, value: f64) {
        self.put(Measure::FConfirmation, MeasureValue::Real(value));
    }

    pub fn set_a_confirmation(&mut self, value: f64) {
        self.put(Measure::AConfirmation, MeasureValue::Real(value));
    }

    pub fn set_z_confirmation(&mut self, value: f64) {
        self.put(Measure::ZConfirmation, MeasureValue::Real(value));
    }

    pub fn set_l_confirmation(&mut self, value: f64) {
        self.put(Measure::LConfirmation, MeasureValue::Real(value));
    }

    pub fn set_c1_confirmation(&mut self, value: f64) {
        self.put(Measure::C1Confirmation, MeasureValue::Real(value));
    }

    pub fn set_s_confirmation(&mut self, value: f64) {
        self.put(Measure::SConfirmation, MeasureValue::Real(value));
    }
}

impl Characteristics for RuleCharacteristics {
    fn measure(&self, measure: Measure) -> Option<MeasureValue> {
        self.values[measure.index()]
    }

    fn is_set(&self, measure: Measure) -> bool {
        self.values[measure.index()].is_some()
    }
}
