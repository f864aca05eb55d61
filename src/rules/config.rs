//! Parameters of the c1 confirmation measure.

/// Weights of the c1 confirmation measure.
///
/// `alpha` scales the normalised Z (or A) term; `beta` weighs the bonus
/// (or penalty) given to rules with no counterexamples (or no support).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct C1Parameters {
    pub alpha: f64,
    pub beta: f64,
}

impl Default for C1Parameters {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            beta: 0.5,
        }
    }
}

impl C1Parameters {
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// Validates the parameters.
    pub fn validate(&self) -> Result<(), String> {
        if !self.alpha.is_finite() {
            return Err(format!("alpha must be finite, got {}", self.alpha));
        }
        if !self.beta.is_finite() {
            return Err(format!("beta must be finite, got {}", self.beta));
        }
        Ok(())
    }
}
