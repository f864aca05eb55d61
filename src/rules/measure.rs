//! Identifiers and values of rule measures.

use std::fmt;

/// One of the fourteen rule measures.
///
/// Declaration order is the order in which measures are listed and
/// serialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Measure {
    Support,
    Strength,
    Confidence,
    CoverageFactor,
    Coverage,
    NegativeCoverage,
    Epsilon,
    EpsilonPrime,
    FConfirmation,
    AConfirmation,
    ZConfirmation,
    LConfirmation,
    C1Confirmation,
    SConfirmation,
}

impl Measure {
    pub const COUNT: usize = 14;

    pub const ALL: [Measure; Self::COUNT] = [
        Measure::Support,
        Measure::Strength,
        Measure::Confidence,
        Measure::CoverageFactor,
        Measure::Coverage,
        Measure::NegativeCoverage,
        Measure::Epsilon,
        Measure::EpsilonPrime,
        Measure::FConfirmation,
        Measure::AConfirmation,
        Measure::ZConfirmation,
        Measure::LConfirmation,
        Measure::C1Confirmation,
        Measure::SConfirmation,
    ];

    /// Position in [`Measure::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether the measure is an object count rather than a real number.
    pub fn is_count(self) -> bool {
        matches!(
            self,
            Measure::Support | Measure::Coverage | Measure::NegativeCoverage
        )
    }

    /// Name used for the measure in RuleML `<evaluation>` elements.
    pub fn ruleml_name(self) -> &'static str {
        match self {
            Measure::Support => "Support",
            Measure::Strength => "Strength",
            Measure::Confidence => "Confidence",
            Measure::CoverageFactor => "CoverageFactor",
            Measure::Coverage => "Coverage",
            Measure::NegativeCoverage => "NegativeCoverage",
            Measure::Epsilon => "EpsilonMeasure",
            Measure::EpsilonPrime => "EpsilonPrimeMeasure",
            Measure::FConfirmation => "f-ConfirmationMeasure",
            Measure::AConfirmation => "A-ConfirmationMeasure",
            Measure::ZConfirmation => "Z-ConfirmationMeasure",
            Measure::LConfirmation => "l-ConfirmationMeasure",
            Measure::C1Confirmation => "c1-ConfirmationMeasure",
            Measure::SConfirmation => "s-ConfirmationMeasure",
        }
    }

    /// Resolves a RuleML measure name, including the legacy names
    /// `InconsistencyMeasure` and `EpsilonPrimMeasure`.
    ///
    /// Returns the measure and whether the name was a legacy alias.
    pub fn from_ruleml_name(name: &str) -> Option<(Measure, bool)> {
        match name {
            "InconsistencyMeasure" => Some((Measure::Epsilon, true)),
            "EpsilonPrimMeasure" => Some((Measure::EpsilonPrime, true)),
            _ => Self::ALL
                .iter()
                .find(|m| m.ruleml_name() == name)
                .map(|&m| (m, false)),
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ruleml_name())
    }
}

/// Value of a measure: an object count or a real number.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasureValue {
    Count(usize),
    Real(f64),
}

impl MeasureValue {
    pub fn as_count(self) -> Option<usize> {
        match self {
            MeasureValue::Count(n) => Some(n),
            MeasureValue::Real(_) => None,
        }
    }

    /// Real value; counts are converted.
    pub fn as_real(self) -> f64 {
        match self {
            MeasureValue::Count(n) => n as f64,
            MeasureValue::Real(x) => x,
        }
    }
}

impl fmt::Display for MeasureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureValue::Count(n) => write!(f, "{n}"),
            MeasureValue::Real(x) => write!(f, "{x}"),
        }
    }
}
