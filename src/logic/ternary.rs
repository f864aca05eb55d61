//! Ternary logic value and its connectives.

use std::fmt;

/// Result of a dominance or equality comparison.
///
/// `Uncomparable` is not "false": it means the two operands cannot be
/// ordered (different attribute sets, nominal values, mismatched types).
/// Callers must branch on it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TernaryLogicValue {
    True,
    False,
    Uncomparable,
}

impl TernaryLogicValue {
    /// Three-valued conjunction.
    ///
    /// `False` dominates, then `Uncomparable`, then `True`.
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::False, _) | (_, Self::False) => Self::False,
            (Self::Uncomparable, _) | (_, Self::Uncomparable) => Self::Uncomparable,
            (Self::True, Self::True) => Self::True,
        }
    }

    /// Three-valued disjunction.
    ///
    /// `True` dominates, then `Uncomparable`, then `False`.
    pub fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::True, _) | (_, Self::True) => Self::True,
            (Self::Uncomparable, _) | (_, Self::Uncomparable) => Self::Uncomparable,
            (Self::False, Self::False) => Self::False,
        }
    }

    /// Negation. `Uncomparable` stays `Uncomparable`.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        match self {
            Self::True => Self::False,
            Self::False => Self::True,
            Self::Uncomparable => Self::Uncomparable,
        }
    }

    /// Conjunction of every value in the iterator. Empty input is `True`.
    ///
    /// Stops at the first `False`.
    pub fn all<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut result = Self::True;
        for value in values {
            match value {
                Self::False => return Self::False,
                Self::Uncomparable => result = Self::Uncomparable,
                Self::True => {}
            }
        }
        result
    }

    pub fn is_true(self) -> bool {
        self == Self::True
    }

    pub fn is_false(self) -> bool {
        self == Self::False
    }

    pub fn is_uncomparable(self) -> bool {
        self == Self::Uncomparable
    }
}

impl From<bool> for TernaryLogicValue {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

impl fmt::Display for TernaryLogicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Uncomparable => "UNCOMPARABLE",
        };
        f.write_str(s)
    }
}
