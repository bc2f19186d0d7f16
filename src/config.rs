//! Tunable parameters of a wave-propagation block.

use crate::diagnostics::Verbosity;
use crate::error::{BlockError, BlockResult};

/// Numerical and execution parameters of a block.
///
/// # Example
///
/// ```
/// use swe_block::BlockConfig;
///
/// let config = BlockConfig::default().with_lane_width(8).with_dry_tolerance(0.05);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.cfl_safety_factor, 0.4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BlockConfig {
    /// Factor applied to `min(dx, dy) / max_wave_speed`. Must lie in (0, 1).
    ///
    /// The default is 0.4, although the scheme has long been documented as
    /// running at a CFL number of 0.5. The two values disagree; 0.4 is the
    /// one applied.
    pub cfl_safety_factor: f64,
    /// Cells shallower than this keep their depth but lose their momentum.
    pub dry_tolerance: f64,
    /// Wave speeds at or below this leave the time step unconstrained.
    pub zero_speed_epsilon: f64,
    /// Depth below `-negative_depth_report` triggers a warning event.
    pub negative_depth_report: f64,
    /// Number of edges handed to the solver per batch.
    pub lane_width: usize,
    /// Sweep independent lines on the rayon pool (`parallel` feature).
    pub parallel: bool,
    /// Which diagnostic events are emitted.
    pub verbosity: Verbosity,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            cfl_safety_factor: 0.4,
            dry_tolerance: 0.1,
            zero_speed_epsilon: 1e-5,
            negative_depth_report: 0.1,
            lane_width: 4,
            parallel: false,
            verbosity: Verbosity::default(),
        }
    }
}

impl BlockConfig {
    pub fn with_cfl_safety_factor(mut self, factor: f64) -> Self {
        self.cfl_safety_factor = factor;
        self
    }

    pub fn with_dry_tolerance(mut self, tol: f64) -> Self {
        self.dry_tolerance = tol;
        self
    }

    pub fn with_zero_speed_epsilon(mut self, eps: f64) -> Self {
        self.zero_speed_epsilon = eps;
        self
    }

    pub fn with_lane_width(mut self, width: usize) -> Self {
        self.lane_width = width;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Check every parameter.
    pub fn validate(&self) -> BlockResult<()> {
        let f = self.cfl_safety_factor;
        if !(f.is_finite() && f > 0.0 && f < 1.0) {
            return Err(BlockError::invalid_config(format!(
                "CFL safety factor must lie in (0, 1), got {}",
                f
            )));
        }
        for (name, value) in [
            ("dry tolerance", self.dry_tolerance),
            ("zero-speed epsilon", self.zero_speed_epsilon),
            ("negative-depth report threshold", self.negative_depth_report),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(BlockError::invalid_config(format!(
                    "{} must be non-negative and finite, got {}",
                    name, value
                )));
            }
        }
        if self.lane_width == 0 {
            return Err(BlockError::invalid_config("lane width must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = BlockConfig::default();
        assert_eq!(c.cfl_safety_factor, 0.4);
        assert_eq!(c.dry_tolerance, 0.1);
        assert_eq!(c.zero_speed_epsilon, 1e-5);
        assert_eq!(c.lane_width, 4);
        assert!(!c.parallel);
        assert_eq!(c.verbosity, Verbosity::Warnings);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_safety_factor_range() {
        assert!(BlockConfig::default().with_cfl_safety_factor(1.0).validate().is_err());
        assert!(BlockConfig::default().with_cfl_safety_factor(0.0).validate().is_err());
        assert!(BlockConfig::default().with_cfl_safety_factor(0.9).validate().is_ok());
    }

    #[test]
    fn test_invalid_values() {
        assert!(BlockConfig::default().with_lane_width(0).validate().is_err());
        assert!(BlockConfig::default().with_dry_tolerance(-0.1).validate().is_err());
        assert!(
            BlockConfig::default()
                .with_zero_speed_epsilon(f64::NAN)
                .validate()
                .is_err()
        );
    }
}
