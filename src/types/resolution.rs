//! Block resolution (interior cell counts).

use std::fmt;

use crate::error::{BlockError, BlockResult};

/// Number of interior cells of a block in each direction.
///
/// Every array of a block is sized from this value: cell arrays carry one
/// ghost layer on each side, edge arrays hold one more edge than cells along
/// the sweep direction.
///
/// # Example
///
/// ```
/// use swe_block::types::Resolution2D;
///
/// let res = Resolution2D::new(4, 3).unwrap();
/// assert_eq!(res.cell_dims(), (6, 5));
/// assert_eq!(res.vertical_edge_dims(), (5, 3));
/// assert_eq!(res.horizontal_edge_dims(), (4, 4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Resolution2D {
    /// Interior cells in x-direction
    nx: usize,
    /// Interior cells in y-direction
    ny: usize,
}

impl Resolution2D {
    /// Create a new resolution.
    ///
    /// Fails if either direction has no interior cells.
    pub fn new(nx: usize, ny: usize) -> BlockResult<Self> {
        if nx == 0 || ny == 0 {
            return Err(BlockError::InvalidResolution(format!(
                "block needs at least one interior cell per direction, got {}×{}",
                nx, ny
            )));
        }
        Ok(Self { nx, ny })
    }

    /// Square block with `n` interior cells per direction.
    pub fn square(n: usize) -> BlockResult<Self> {
        Self::new(n, n)
    }

    /// Interior cells in x-direction.
    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Interior cells in y-direction.
    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Total number of interior cells.
    #[inline]
    pub fn interior_cells(&self) -> usize {
        self.nx * self.ny
    }

    /// Shape of a ghost-inclusive cell array, `(nx + 2, ny + 2)`.
    #[inline]
    pub fn cell_dims(&self) -> (usize, usize) {
        (self.nx + 2, self.ny + 2)
    }

    /// Shape of the vertical-edge update arrays, `(nx + 1, ny)`.
    #[inline]
    pub fn vertical_edge_dims(&self) -> (usize, usize) {
        (self.nx + 1, self.ny)
    }

    /// Shape of the horizontal-edge update arrays, `(nx, ny + 1)`.
    #[inline]
    pub fn horizontal_edge_dims(&self) -> (usize, usize) {
        (self.nx, self.ny + 1)
    }

    /// Return as tuple (nx, ny).
    #[inline]
    pub fn as_tuple(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }
}

impl fmt::Display for Resolution2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.nx, self.ny)
    }
}

impl TryFrom<(usize, usize)> for Resolution2D {
    type Error = BlockError;

    fn try_from((nx, ny): (usize, usize)) -> BlockResult<Self> {
        Self::new(nx, ny)
    }
}

impl From<Resolution2D> for (usize, usize) {
    fn from(res: Resolution2D) -> Self {
        (res.nx, res.ny)
    }
}
