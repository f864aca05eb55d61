//! Measure formulas over the contingency table of a rule.
//!
//! With `a` covered positives, `b` uncovered positives, `c` covered
//! negatives and `d` uncovered negatives:
//!
//! | measure | formula |
//! |---|---|
//! | confidence | `a / (a + c)` |
//! | coverage factor | `a / (a + b)` |
//! | ε | `c / (c + d)`, 0 when there are no negatives |
//! | ε′ | `c / (a + b)` |
//! | F | `(ad − bc) / (ad + bc + 2ac)` |
//! | A, Z, c1 | piecewise, see each function |
//! | L | `ln[(a / (a + b)) / (c / (c + d))]` |
//! | S | `a / (a + c) − b / (b + d)` |
//!
//! Arithmetic is IEEE: a zero denominator yields NaN or ±∞, which callers
//! receive as ordinary values. The piecewise measures keep their published
//! branch structure; only the branches listed guard against zero.

/// Contingency-table cells of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContingencyTable {
    /// Covered positive objects (support).
    pub a: usize,
    /// Positive objects not covered.
    pub b: usize,
    /// Covered negative objects (negative coverage).
    pub c: usize,
    /// Negative objects not covered.
    pub d: usize,
}

/// Cells as reals plus the shared quantities of the confirmation measures.
struct Cells {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    /// `ad − bc`
    delta: f64,
}

impl ContingencyTable {
    pub fn new(a: usize, b: usize, c: usize, d: usize) -> Self {
        Self { a, b, c, d }
    }

    /// Total number of positive and negative objects.
    pub fn total(&self) -> usize {
        self.a + self.b + self.c + self.d
    }

    fn cells(&self) -> Cells {
        let (a, b, c, d) = (self.a as f64, self.b as f64, self.c as f64, self.d as f64);
        Cells {
            a,
            b,
            c,
            d,
            delta: a * d - b * c,
        }
    }

    /// Whether the rule's confidence reaches the prior `(a+b) / (a+b+c+d)`,
    /// i.e. the rule confirms rather than disconfirms its decision.
    fn confirms(&self) -> bool {
        let Cells { a, b, c, d, .. } = self.cells();
        a / (a + c) >= (a + b) / (a + b + c + d)
    }
}

/// `a / (a + c)`
pub fn confidence(t: &ContingencyTable) -> f64 {
    let Cells { a, c, .. } = t.cells();
    a / (a + c)
}

/// `a / (a + b)`
pub fn coverage_factor(t: &ContingencyTable) -> f64 {
    let Cells { a, b, .. } = t.cells();
    a / (a + b)
}

/// ε consistency: share of negative objects covered, `c / (c + d)`.
///
/// 0 when there are no negative objects.
pub fn epsilon(t: &ContingencyTable) -> f64 {
    if t.c + t.d == 0 {
        return 0.0;
    }
    let Cells { c, d, .. } = t.cells();
    c / (c + d)
}

/// ε′ consistency: covered negatives relative to positives, `c / (a + b)`.
pub fn epsilon_prime(t: &ContingencyTable) -> f64 {
    let Cells { a, b, c, .. } = t.cells();
    c / (a + b)
}

/// F confirmation: `(ad − bc) / (ad + bc + 2ac)`.
pub fn f_confirmation(t: &ContingencyTable) -> f64 {
    let Cells { a, b, c, d, delta } = t.cells();
    delta / (a * d + b * c + 2.0 * a * c)
}

/// A confirmation.
///
/// - confirming: `(ad − bc) / ((a + b)(b + d))`
/// - otherwise: `(ad − bc) / ((b + d)(c + d))`
pub fn a_confirmation(t: &ContingencyTable) -> f64 {
    let Cells { a, b, c, d, delta } = t.cells();
    if t.confirms() {
        delta / ((a + b) * (b + d))
    } else {
        delta / ((b + d) * (c + d))
    }
}

/// Z confirmation.
///
/// - confirming: `(ad − bc) / ((a + c)(c + d))`
/// - otherwise: `(ad − bc) / ((a + c)(a + b))`
pub fn z_confirmation(t: &ContingencyTable) -> f64 {
    let Cells { a, b, c, d, delta } = t.cells();
    if t.confirms() {
        delta / ((a + c) * (c + d))
    } else {
        delta / ((a + c) * (a + b))
    }
}

/// L confirmation (log-likelihood ratio).
///
/// `ln[(a / (a + b)) / (c / (c + d))]` when `c ≠ 0`; otherwise NaN when
/// `a = 0` and +∞ when `a > 0`.
pub fn l_confirmation(t: &ContingencyTable) -> f64 {
    if t.c != 0 {
        let Cells { a, b, c, d, .. } = t.cells();
        ((a / (a + b)) / (c / (c + d))).ln()
    } else if t.a == 0 {
        f64::NAN
    } else {
        f64::INFINITY
    }
}

/// c1 confirmation with weights `alpha` and `beta`.
///
/// - confirming, `c = 0`: `α + β·(ad − bc) / ((a + b)(b + d))`
/// - confirming, `c > 0`: `α·(ad − bc) / ((a + c)(c + d))`
/// - otherwise, `a = 0`: `−α + β·(ad − bc) / ((b + d)(c + d))`
/// - otherwise, `a > 0`: `α·(ad − bc) / ((a + b)(a + c))`
pub fn c1_confirmation(t: &ContingencyTable, alpha: f64, beta: f64) -> f64 {
    let Cells { a, b, c, d, delta } = t.cells();
    if t.confirms() {
        if t.c == 0 {
            alpha + beta * (delta / ((a + b) * (b + d)))
        } else {
            alpha * (delta / ((a + c) * (c + d)))
        }
    } else if t.a == 0 {
        -alpha + beta * (delta / ((b + d) * (c + d)))
    } else {
        alpha * (delta / ((a + b) * (a + c)))
    }
}

/// S confirmation: `a / (a + c) − b / (b + d)`.
pub fn s_confirmation(t: &ContingencyTable) -> f64 {
    let Cells { a, b, c, d, .. } = t.cells();
    a / (a + c) - b / (b + d)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worked() -> ContingencyTable {
        ContingencyTable::new(4, 2, 1, 3)
    }

    #[test]
    fn test_worked_example() {
        let t = worked();
        assert!(t.confirms());
        assert!((confidence(&t) - 0.8).abs() < 1e-10);
        assert!((coverage_factor(&t) - 4.0 / 6.0).abs() < 1e-10);
        assert!((epsilon(&t) - 0.25).abs() < 1e-10);
        assert!((epsilon_prime(&t) - 1.0 / 6.0).abs() < 1e-10);
        assert!((f_confirmation(&t) - 10.0 / 22.0).abs() < 1e-10);
        assert!((a_confirmation(&t) - 10.0 / 30.0).abs() < 1e-10);
        assert!((z_confirmation(&t) - 0.5).abs() < 1e-10);
        assert!((l_confirmation(&t) - (8.0f64 / 3.0).ln()).abs() < 1e-10);
        assert!((c1_confirmation(&t, 0.5, 0.5) - 0.25).abs() < 1e-10);
        assert!((s_confirmation(&t) - 0.4).abs() < 1e-10);
    }

    #[test]
    fn test_disconfirming_branch() {
        // confidence 1/3 below prior 4/10
        let t = ContingencyTable::new(1, 3, 2, 4);
        assert!(!t.confirms());
        let delta = 1.0 * 4.0 - 3.0 * 2.0;
        assert!((a_confirmation(&t) - delta / (7.0 * 6.0)).abs() < 1e-10);
        assert!((z_confirmation(&t) - delta / (3.0 * 4.0)).abs() < 1e-10);
        assert!((c1_confirmation(&t, 0.5, 0.5) - 0.5 * delta / (4.0 * 3.0)).abs() < 1e-10);
    }

    #[test]
    fn test_c1_special_cases() {
        // no counterexamples: alpha + beta * A
        let clean = ContingencyTable::new(3, 1, 0, 4);
        let a_measure = (3.0 * 4.0) / (4.0 * 5.0);
        assert!((c1_confirmation(&clean, 0.5, 0.5) - (0.5 + 0.5 * a_measure)).abs() < 1e-10);
        assert!((c1_confirmation(&clean, 0.2, 0.8) - (0.2 + 0.8 * a_measure)).abs() < 1e-10);

        // no support: -alpha + beta * A (disconfirming form)
        let empty = ContingencyTable::new(0, 2, 3, 5);
        let a_neg = (0.0 - 2.0 * 3.0) / (7.0 * 8.0);
        assert!((c1_confirmation(&empty, 0.5, 0.5) - (-0.5 + 0.5 * a_neg)).abs() < 1e-10);
    }

    #[test]
    fn test_l_confirmation_edges() {
        assert!(l_confirmation(&ContingencyTable::new(0, 3, 0, 3)).is_nan());
        assert_eq!(l_confirmation(&ContingencyTable::new(2, 3, 0, 3)), f64::INFINITY);
    }

    #[test]
    fn test_epsilon_without_negatives() {
        let t = ContingencyTable::new(3, 1, 0, 0);
        assert!((epsilon(&t) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn test_zero_denominators_propagate() {
        // nothing covered: confidence is 0/0
        let t = ContingencyTable::new(0, 2, 0, 2);
        assert!(confidence(&t).is_nan());
        assert!(s_confirmation(&t).is_nan());
        // no positives: coverage factor 0/0, epsilon prime c/0
        let t = ContingencyTable::new(0, 0, 1, 1);
        assert!(coverage_factor(&t).is_nan());
        assert_eq!(epsilon_prime(&t), f64::INFINITY);
    }
}
