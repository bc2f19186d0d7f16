//! Error types for block construction and time stepping.

use thiserror::Error;

/// Convenience alias for results returned by this crate.
pub type BlockResult<T> = Result<T, BlockError>;

/// Errors that can occur while building or stepping a block.
///
/// Numeric kernels never fail; these errors are raised only at the
/// boundaries of the public API (construction, configuration, and
/// out-of-order calls).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlockError {
    /// An externally supplied array has the wrong shape.
    #[error("Dimension mismatch for `{field}`: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        field: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// The block has no interior cells in some direction.
    #[error("Invalid resolution: {0}")]
    InvalidResolution(String),

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The time-step width handed to the update is unusable.
    #[error("Invalid time step: dt = {0}")]
    InvalidTimeStep(f64),

    /// The update was requested without fresh net updates.
    #[error("Net updates are stale: compute numerical fluxes before updating unknowns")]
    StaleNetUpdates,

    /// A simulation hit its step limit before reaching the end time.
    #[error("Maximum step limit ({max_steps}) reached at t = {time}")]
    StepLimitReached { max_steps: usize, time: f64 },
}

impl BlockError {
    /// Create a dimension mismatch error.
    pub fn dimension_mismatch(
        field: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> Self {
        Self::DimensionMismatch {
            field,
            expected,
            actual,
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = BlockError::dimension_mismatch("h", (6, 6), (5, 6));
        let msg = err.to_string();
        assert!(msg.contains("`h`"));
        assert!(msg.contains("(6, 6)"));
        assert!(msg.contains("(5, 6)"));
    }

    #[test]
    fn test_invalid_config_helper() {
        let err = BlockError::invalid_config("lane width must be positive");
        assert_eq!(
            err,
            BlockError::InvalidConfig("lane width must be positive".to_string())
        );
    }
}
