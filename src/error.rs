//! Error types.
//!
//! Each concern has its own error enum; [`Error`] gathers them for callers
//! that drive several stages at once.

use crate::rules::Measure;
use thiserror::Error;

/// Errors raised while constructing a decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("{evaluations} evaluations given for {attributes} attribute indices")]
    MismatchedLength {
        evaluations: usize,
        attributes: usize,
    },

    #[error("composite decision needs at least 2 evaluations, got {0}")]
    TooFewEvaluations(usize),

    #[error("attribute index {0} appears more than once")]
    DuplicateAttribute(usize),
}

/// Errors raised while constructing rule coverage information.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoverageError {
    #[error("object index {index} out of range for {all_objects_count} objects")]
    IndexOutOfRange {
        index: usize,
        all_objects_count: usize,
    },

    #[error("object {0} is both positive and neutral")]
    OverlappingPositiveAndNeutral(usize),
}

/// Errors raised by computable rule characteristics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharacteristicsError {
    #[error("rule coverage information is fixed at construction and cannot be replaced")]
    CoverageInformationImmutable,

    #[error("{measure} counts objects, got {value}")]
    NotACount { measure: Measure, value: String },
}

/// Errors raised while building a decision table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("object {object} has {found} condition evaluations, expected {expected}")]
    RaggedRow {
        object: usize,
        expected: usize,
        found: usize,
    },

    #[error("{objects} objects but {decisions} decisions")]
    DecisionCountMismatch { objects: usize, decisions: usize },

    #[error("dominance cones cover {cones} objects, table has {objects}")]
    ConeCountMismatch { objects: usize, cones: usize },
}

/// Errors raised while reading or writing RuleML rule evaluations.
#[cfg(feature = "ruleml")]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleMlError {
    #[error("malformed RuleML: {0}")]
    Xml(String),

    #[error("unknown rule evaluation measure \"{0}\"")]
    UnknownMeasure(String),

    #[error("invalid value \"{value}\" for measure {measure}")]
    InvalidValue { measure: String, value: String },
}

/// Crate-level error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Decision(#[from] DecisionError),

    #[error(transparent)]
    Coverage(#[from] CoverageError),

    #[error(transparent)]
    Characteristics(#[from] CharacteristicsError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[cfg(feature = "ruleml")]
    #[error(transparent)]
    RuleMl(#[from] RuleMlError),
}

/// Result type using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = DecisionError::MismatchedLength {
            evaluations: 2,
            attributes: 3,
        };
        assert_eq!(err.to_string(), "2 evaluations given for 3 attribute indices");

        let err: Error = CoverageError::IndexOutOfRange {
            index: 7,
            all_objects_count: 5,
        }
        .into();
        assert_eq!(err.to_string(), "object index 7 out of range for 5 objects");
    }
}
