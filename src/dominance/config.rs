//! Dominance cone and approximation configuration.

/// Configuration for dominance cone construction.
///
/// # Examples
///
/// ```
/// use u_drsa::dominance::ConeConfig;
///
/// let config = ConeConfig::default().with_parallel(false);
/// assert!(!config.parallel);
/// ```
#[derive(Debug, Clone)]
pub struct ConeConfig {
    /// Whether to build the cones of different objects in parallel using
    /// rayon. Ignored unless the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for ConeConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl ConeConfig {
    /// Enables or disables parallel construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Configuration for union approximations.
#[derive(Debug, Clone)]
pub struct ApproximationConfig {
    /// Largest ε-consistency an object may have and still belong to the
    /// lower approximation. `0.0` gives the classical DRSA lower
    /// approximation.
    pub consistency_threshold: f64,
}

impl Default for ApproximationConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: 0.0,
        }
    }
}

impl ApproximationConfig {
    pub fn with_consistency_threshold(mut self, threshold: f64) -> Self {
        self.consistency_threshold = threshold;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        let t = self.consistency_threshold;
        if !(0.0..=1.0).contains(&t) {
            return Err(format!("consistency_threshold must be in [0, 1], got {t}"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert!(ConeConfig::default().parallel);
        let config = ApproximationConfig::default();
        assert!((config.consistency_threshold - 0.0).abs() < 1e-15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_threshold() {
        assert!(ApproximationConfig::default()
            .with_consistency_threshold(1.5)
            .validate()
            .is_err());
        assert!(ApproximationConfig::default()
            .with_consistency_threshold(f64::NAN)
            .validate()
            .is_err());
        assert!(ApproximationConfig::default()
            .with_consistency_threshold(0.25)
            .validate()
            .is_ok());
    }
}
