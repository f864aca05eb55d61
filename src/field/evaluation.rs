//! Evaluation field and its comparison semantics.

use super::types::{AttributePreferenceType, Dominance, FieldValue, MissingValueSemantics};
use crate::logic::TernaryLogicValue;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// One object's evaluation on one attribute.
///
/// Comparisons follow the attribute's preference type:
///
/// - `Gain`: natural order of the values
/// - `Cost`: reversed order
/// - `None`: equal values are mutually dominating, distinct values are
///   uncomparable
///
/// Fields with different preference types, different value kinds, or
/// enumerations over different domains are uncomparable.
///
/// # Examples
///
/// ```
/// use u_drsa::field::{AttributePreferenceType, Dominance, EvaluationField};
/// use u_drsa::logic::TernaryLogicValue;
///
/// let high = EvaluationField::integer(5, AttributePreferenceType::Cost);
/// let low = EvaluationField::integer(2, AttributePreferenceType::Cost);
///
/// assert_eq!(low.is_at_least_as_good_as(&high), TernaryLogicValue::True);
/// ```
#[derive(Debug, Clone)]
pub struct EvaluationField {
    value: FieldValue,
    preference: AttributePreferenceType,
}

impl EvaluationField {
    pub fn new(value: FieldValue, preference: AttributePreferenceType) -> Self {
        Self { value, preference }
    }

    pub fn integer(value: i64, preference: AttributePreferenceType) -> Self {
        Self::new(FieldValue::Integer(value), preference)
    }

    pub fn real(value: f64, preference: AttributePreferenceType) -> Self {
        Self::new(FieldValue::Real(value), preference)
    }

    /// Creates an enumerated evaluation. `domain` lists labels from worst
    /// to best (for `Gain`) and is shared between fields of one attribute.
    pub fn enumeration(
        index: usize,
        domain: Arc<[String]>,
        preference: AttributePreferenceType,
    ) -> Self {
        Self::new(FieldValue::Enumeration { index, domain }, preference)
    }

    pub fn unknown(semantics: MissingValueSemantics, preference: AttributePreferenceType) -> Self {
        Self::new(FieldValue::Unknown(semantics), preference)
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn preference(&self) -> AttributePreferenceType {
        self.preference
    }

    pub fn is_unknown(&self) -> bool {
        self.value.is_unknown()
    }

    /// Outcome forced by an unknown operand, if any.
    fn unknown_outcome(&self, other: &Self) -> Option<TernaryLogicValue> {
        match (&self.value, &other.value) {
            (FieldValue::Unknown(_), _) => Some(TernaryLogicValue::True),
            (_, FieldValue::Unknown(MissingValueSemantics::Mv2)) => Some(TernaryLogicValue::True),
            (_, FieldValue::Unknown(MissingValueSemantics::Mv15)) => {
                Some(TernaryLogicValue::False)
            }
            _ => None,
        }
    }

    /// Natural order of two known values, `None` when they cannot be ordered.
    fn natural_cmp(&self, other: &Self) -> Option<Ordering> {
        match (&self.value, &other.value) {
            (FieldValue::Integer(a), FieldValue::Integer(b)) => Some(a.cmp(b)),
            // NaN equals NaN so every value dominates itself
            (FieldValue::Real(a), FieldValue::Real(b)) if a.is_nan() && b.is_nan() => {
                Some(Ordering::Equal)
            }
            (FieldValue::Real(a), FieldValue::Real(b)) => a.partial_cmp(b),
            (
                FieldValue::Enumeration { index: a, domain: da },
                FieldValue::Enumeration { index: b, domain: db },
            ) => {
                if Arc::ptr_eq(da, db) || da == db {
                    Some(a.cmp(b))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Shared body of the two dominance directions. `accept` decides which
    /// orderings of `self` against `other` count as dominance.
    fn dominance(&self, other: &Self, accept: fn(Ordering) -> bool) -> TernaryLogicValue {
        if self.preference != other.preference {
            return TernaryLogicValue::Uncomparable;
        }
        if let Some(outcome) = self.unknown_outcome(other) {
            return outcome;
        }
        let Some(ordering) = self.natural_cmp(other) else {
            return TernaryLogicValue::Uncomparable;
        };
        match self.preference {
            AttributePreferenceType::Gain => accept(ordering).into(),
            AttributePreferenceType::Cost => accept(ordering.reverse()).into(),
            AttributePreferenceType::None => {
                if ordering == Ordering::Equal {
                    TernaryLogicValue::True
                } else {
                    TernaryLogicValue::Uncomparable
                }
            }
        }
    }

    fn normalized_bits(value: f64) -> u64 {
        if value == 0.0 {
            0.0f64.to_bits()
        } else if value.is_nan() {
            f64::NAN.to_bits()
        } else {
            value.to_bits()
        }
    }
}

impl Dominance for EvaluationField {
    fn is_at_least_as_good_as(&self, other: &Self) -> TernaryLogicValue {
        self.dominance(other, |o| o != Ordering::Less)
    }

    fn is_at_most_as_good_as(&self, other: &Self) -> TernaryLogicValue {
        self.dominance(other, |o| o != Ordering::Greater)
    }

    fn is_equal_to(&self, other: &Self) -> TernaryLogicValue {
        if self.preference != other.preference {
            return TernaryLogicValue::Uncomparable;
        }
        if let Some(outcome) = self.unknown_outcome(other) {
            return outcome;
        }
        match self.natural_cmp(other) {
            Some(Ordering::Equal) => TernaryLogicValue::True,
            Some(_) => TernaryLogicValue::False,
            None => TernaryLogicValue::Uncomparable,
        }
    }
}

impl PartialEq for EvaluationField {
    fn eq(&self, other: &Self) -> bool {
        if self.preference != other.preference {
            return false;
        }
        match (&self.value, &other.value) {
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a == b,
            (FieldValue::Real(a), FieldValue::Real(b)) => {
                Self::normalized_bits(*a) == Self::normalized_bits(*b)
            }
            (
                FieldValue::Enumeration { index: a, domain: da },
                FieldValue::Enumeration { index: b, domain: db },
            ) => a == b && (Arc::ptr_eq(da, db) || da == db),
            (FieldValue::Unknown(a), FieldValue::Unknown(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for EvaluationField {}

impl Hash for EvaluationField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.preference.hash(state);
        match &self.value {
            FieldValue::Integer(v) => {
                0u8.hash(state);
                v.hash(state);
            }
            FieldValue::Real(v) => {
                1u8.hash(state);
                Self::normalized_bits(*v).hash(state);
            }
            FieldValue::Enumeration { index, domain } => {
                2u8.hash(state);
                index.hash(state);
                domain.hash(state);
            }
            FieldValue::Unknown(semantics) => {
                3u8.hash(state);
                semantics.hash(state);
            }
        }
    }
}

impl fmt::Display for EvaluationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            FieldValue::Integer(v) => write!(f, "{v}"),
            FieldValue::Real(v) => write!(f, "{v}"),
            FieldValue::Enumeration { index, domain } => match domain.get(*index) {
                Some(label) => f.write_str(label),
                None => write!(f, "#{index}"),
            },
            FieldValue::Unknown(_) => f.write_str("?"),
        }
    }
}
