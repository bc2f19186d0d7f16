//! Dense row-major 2D array with bounds-checked `(i, j)` indexing.
//!
//! Rows run along `i` (x-direction), columns along `j` (y-direction), so a
//! run of contiguous `j` at fixed `i` is a contiguous slice. The flux sweeps
//! rely on this to hand independent edge batches to the solver without
//! gathering.

use std::ops::{Deref, Index, IndexMut};

/// Row-major 2D array of `f64`.
#[derive(Clone, Debug, PartialEq)]
pub struct Array2D {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Array2D {
    /// Zero-filled array of shape `rows × cols`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    /// Array of shape `rows × cols` with every entry set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Build from a function of `(i, j)`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    /// Wrap an existing row-major buffer.
    ///
    /// Returns `None` if the buffer length is not `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Option<Self> {
        (data.len() == rows * cols).then_some(Self { rows, cols, data })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Checked access.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        (i < self.rows && j < self.cols).then(|| self.data[i * self.cols + j])
    }

    /// Row `i` as a slice over all columns.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows, "row {} out of range for {} rows", i, self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Mutable row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        assert!(i < self.rows, "row {} out of range for {} rows", i, self.rows);
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Set every entry to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Raw row-major data.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable raw row-major data.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Largest absolute entry (0 for an empty array).
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |m, v| m.max(v.abs()))
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "index ({}, {}) out of bounds for {}×{} array",
            i,
            j,
            self.rows,
            self.cols
        );
        i * self.cols + j
    }
}

impl Index<(usize, usize)> for Array2D {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        let k = self.offset(i, j);
        &self.data[k]
    }
}

impl IndexMut<(usize, usize)> for Array2D {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        let k = self.offset(i, j);
        &mut self.data[k]
    }
}

// =============================================================================
// Shape-locked mutable view
// =============================================================================

/// Mutable access to the entries of an [`Array2D`] without access to the
/// array itself.
///
/// Entries and rows can be written, but the array cannot be replaced, so
/// its shape is fixed for the lifetime of the owner.
///
/// ```compile_fail
/// use swe_block::{Array2D, BlockState, Resolution2D};
///
/// let mut state = BlockState::new(Resolution2D::square(4).unwrap());
/// *state.h_mut() = Array2D::zeros(3, 3);
/// ```
#[derive(Debug)]
pub struct ArrayViewMut<'a> {
    inner: &'a mut Array2D,
}

impl<'a> ArrayViewMut<'a> {
    #[inline]
    pub(crate) fn new(inner: &'a mut Array2D) -> Self {
        Self { inner }
    }

    /// Mutable row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        self.inner.row_mut(i)
    }

    /// Set every entry to `value`.
    pub fn fill(&mut self, value: f64) {
        self.inner.fill(value);
    }

    /// Mutable raw row-major data.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        self.inner.as_mut_slice()
    }
}

impl Deref for ArrayViewMut<'_> {
    type Target = Array2D;

    #[inline]
    fn deref(&self) -> &Array2D {
        self.inner
    }
}

impl Index<(usize, usize)> for ArrayViewMut<'_> {
    type Output = f64;

    #[inline]
    fn index(&self, idx: (usize, usize)) -> &f64 {
        &self.inner[idx]
    }
}

impl IndexMut<(usize, usize)> for ArrayViewMut<'_> {
    #[inline]
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut f64 {
        &mut self.inner[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexing_is_row_major() {
        let a = Array2D::from_fn(3, 4, |i, j| (10 * i + j) as f64);
        assert_eq!(a[(2, 3)], 23.0);
        assert_eq!(a.row(1), &[10.0, 11.0, 12.0, 13.0]);
        assert_eq!(a.as_slice()[4], 10.0);
    }

    #[test]
    fn test_get_out_of_range() {
        let a = Array2D::zeros(2, 2);
        assert_eq!(a.get(1, 1), Some(0.0));
        assert_eq!(a.get(2, 0), None);
        assert_eq!(a.get(0, 2), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_panics_on_column_overflow() {
        // Would silently alias the next row with a flat offset.
        let a = Array2D::zeros(3, 3);
        let _ = a[(0, 3)];
    }

    #[test]
    fn test_from_vec_checks_length() {
        assert!(Array2D::from_vec(2, 3, vec![0.0; 6]).is_some());
        assert!(Array2D::from_vec(2, 3, vec![0.0; 5]).is_none());
    }

    #[test]
    fn test_fill_and_max_abs() {
        let mut a = Array2D::zeros(2, 2);
        a[(1, 0)] = -3.0;
        assert_eq!(a.max_abs(), 3.0);
        a.fill(1.5);
        assert_eq!(a.max_abs(), 1.5);
    }

    #[test]
    fn test_view_writes_through_keep_shape() {
        let mut a = Array2D::zeros(3, 4);
        {
            let mut v = ArrayViewMut::new(&mut a);
            v[(2, 1)] = 5.0;
            v.row_mut(0)[3] = -1.0;
            assert_eq!(v.dims(), (3, 4));
            assert_eq!(v[(2, 1)], 5.0);
        }
        assert_eq!(a[(2, 1)], 5.0);
        assert_eq!(a[(0, 3)], -1.0);
        assert_eq!(a.dims(), (3, 4));
    }
}
