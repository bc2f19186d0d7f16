//! Physical cell size of a uniform block.

use std::fmt;

use crate::error::{BlockError, BlockResult};

/// Cell widths `(dx, dy)` of a uniform Cartesian block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellSize {
    dx: f64,
    dy: f64,
}

impl CellSize {
    /// Create a cell size; both widths must be positive and finite.
    pub fn new(dx: f64, dy: f64) -> BlockResult<Self> {
        if !(dx.is_finite() && dx > 0.0) || !(dy.is_finite() && dy > 0.0) {
            return Err(BlockError::invalid_config(format!(
                "cell size must be positive and finite, got dx={}, dy={}",
                dx, dy
            )));
        }
        Ok(Self { dx, dy })
    }

    /// Square cells.
    pub fn uniform(d: f64) -> BlockResult<Self> {
        Self::new(d, d)
    }

    #[inline]
    pub fn dx(&self) -> f64 {
        self.dx
    }

    #[inline]
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// The smaller of the two widths (CFL length scale).
    #[inline]
    pub fn min_width(&self) -> f64 {
        self.dx.min(self.dy)
    }

    /// Cell area dx·dy.
    #[inline]
    pub fn area(&self) -> f64 {
        self.dx * self.dy
    }
}

impl fmt::Display for CellSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.dx, self.dy)
    }
}
