//! Ghost-inclusive cell state of one block: h, hu, hv and bathymetry b.

use std::ops::Deref;

use super::{Array2D, ArrayViewMut};
use crate::error::{BlockError, BlockResult};
use crate::types::Resolution2D;

/// Cell-averaged unknowns and static bathymetry of a block.
///
/// All four arrays have shape `(nx + 2) × (ny + 2)`; interior cells are
/// `i ∈ [1, nx]`, `j ∈ [1, ny]`, index 0 and `n + 1` are ghost cells.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockState {
    resolution: Resolution2D,
    h: Array2D,
    hu: Array2D,
    hv: Array2D,
    b: Array2D,
}

impl BlockState {
    /// Dry, flat block (all arrays zero).
    pub fn new(resolution: Resolution2D) -> Self {
        let (rows, cols) = resolution.cell_dims();
        Self {
            resolution,
            h: Array2D::zeros(rows, cols),
            hu: Array2D::zeros(rows, cols),
            hv: Array2D::zeros(rows, cols),
            b: Array2D::zeros(rows, cols),
        }
    }

    /// Adopt externally allocated arrays.
    ///
    /// Every array must have shape `(nx + 2) × (ny + 2)`.
    pub fn from_arrays(
        resolution: Resolution2D,
        h: Array2D,
        hu: Array2D,
        hv: Array2D,
        b: Array2D,
    ) -> BlockResult<Self> {
        let expected = resolution.cell_dims();
        for (field, arr) in [("h", &h), ("hu", &hu), ("hv", &hv), ("b", &b)] {
            if arr.dims() != expected {
                return Err(BlockError::dimension_mismatch(field, expected, arr.dims()));
            }
        }
        Ok(Self {
            resolution,
            h,
            hu,
            hv,
            b,
        })
    }

    /// Lake at rest: `h + b = surface` wherever that is non-negative, zero momentum.
    ///
    /// Applied to ghost cells too, so the block is consistent before any
    /// boundary fill.
    pub fn lake_at_rest(
        resolution: Resolution2D,
        surface: f64,
        bathymetry: impl Fn(usize, usize) -> f64,
    ) -> Self {
        let mut state = Self::new(resolution);
        let (rows, cols) = resolution.cell_dims();
        for i in 0..rows {
            for j in 0..cols {
                let b = bathymetry(i, j);
                state.b[(i, j)] = b;
                state.h[(i, j)] = (surface - b).max(0.0);
            }
        }
        state
    }

    /// Set `(h, hu, hv)` of every cell, ghosts included, from a function of `(i, j)`.
    pub fn set_unknowns(&mut self, f: impl Fn(usize, usize) -> (f64, f64, f64)) {
        let (rows, cols) = self.resolution.cell_dims();
        for i in 0..rows {
            for j in 0..cols {
                let (h, hu, hv) = f(i, j);
                self.h[(i, j)] = h;
                self.hu[(i, j)] = hu;
                self.hv[(i, j)] = hv;
            }
        }
    }

    /// Set bathymetry of every cell, ghosts included.
    pub fn set_bathymetry(&mut self, f: impl Fn(usize, usize) -> f64) {
        let (rows, cols) = self.resolution.cell_dims();
        for i in 0..rows {
            for j in 0..cols {
                self.b[(i, j)] = f(i, j);
            }
        }
    }

    #[inline]
    pub fn resolution(&self) -> Resolution2D {
        self.resolution
    }

    #[inline]
    pub fn h(&self) -> &Array2D {
        &self.h
    }

    #[inline]
    pub fn hu(&self) -> &Array2D {
        &self.hu
    }

    #[inline]
    pub fn hv(&self) -> &Array2D {
        &self.hv
    }

    #[inline]
    pub fn b(&self) -> &Array2D {
        &self.b
    }

    /// Writable heights; the array keeps its shape.
    #[inline]
    pub fn h_mut(&mut self) -> ArrayViewMut<'_> {
        ArrayViewMut::new(&mut self.h)
    }

    #[inline]
    pub fn hu_mut(&mut self) -> ArrayViewMut<'_> {
        ArrayViewMut::new(&mut self.hu)
    }

    #[inline]
    pub fn hv_mut(&mut self) -> ArrayViewMut<'_> {
        ArrayViewMut::new(&mut self.hv)
    }

    #[inline]
    pub fn b_mut(&mut self) -> ArrayViewMut<'_> {
        ArrayViewMut::new(&mut self.b)
    }

    /// Split borrow: mutable unknowns alongside read-only bathymetry.
    #[inline]
    pub(crate) fn unknowns_mut(&mut self) -> (&mut Array2D, &mut Array2D, &mut Array2D, &Array2D) {
        (&mut self.h, &mut self.hu, &mut self.hv, &self.b)
    }

    /// Iterator over interior cell indices `(i, j)`.
    pub fn interior_indices(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let (nx, ny) = self.resolution.as_tuple();
        (1..=nx).flat_map(move |i| (1..=ny).map(move |j| (i, j)))
    }

    /// Consume the state and return `(h, hu, hv, b)`.
    pub fn into_arrays(self) -> (Array2D, Array2D, Array2D, Array2D) {
        (self.h, self.hu, self.hv, self.b)
    }
}

/// Writable cells of a state whose resolution is owned elsewhere.
///
/// Unknowns and bathymetry can be changed entry by entry, but the state
/// cannot be replaced, so every array keeps the owner's shape.
///
/// ```compile_fail
/// use swe_block::{BlockConfig, BlockState, CellSize, Resolution2D, StandardSolver, WavePropagationBlock};
///
/// let mut block = WavePropagationBlock::new(
///     Resolution2D::square(4).unwrap(),
///     CellSize::uniform(1.0).unwrap(),
///     StandardSolver::default(),
///     BlockConfig::default(),
/// )
/// .unwrap();
/// *block.state_mut() = BlockState::new(Resolution2D::square(2).unwrap());
/// ```
#[derive(Debug)]
pub struct BlockStateMut<'a> {
    state: &'a mut BlockState,
}

impl<'a> BlockStateMut<'a> {
    pub(crate) fn new(state: &'a mut BlockState) -> Self {
        Self { state }
    }

    /// See [`BlockState::set_unknowns`].
    pub fn set_unknowns(&mut self, f: impl Fn(usize, usize) -> (f64, f64, f64)) {
        self.state.set_unknowns(f);
    }

    /// See [`BlockState::set_bathymetry`].
    pub fn set_bathymetry(&mut self, f: impl Fn(usize, usize) -> f64) {
        self.state.set_bathymetry(f);
    }

    pub fn h_mut(&mut self) -> ArrayViewMut<'_> {
        self.state.h_mut()
    }

    pub fn hu_mut(&mut self) -> ArrayViewMut<'_> {
        self.state.hu_mut()
    }

    pub fn hv_mut(&mut self) -> ArrayViewMut<'_> {
        self.state.hv_mut()
    }

    pub fn b_mut(&mut self) -> ArrayViewMut<'_> {
        self.state.b_mut()
    }
}

impl Deref for BlockStateMut<'_> {
    type Target = BlockState;

    fn deref(&self) -> &BlockState {
        self.state
    }
}
