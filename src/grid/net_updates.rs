//! Per-edge net-update storage.
//!
//! Vertical edge `(e, k)`, `e ∈ [0, nx]`, `k ∈ [0, ny)`, separates cell
//! `(e, k + 1)` from `(e + 1, k + 1)`. Horizontal edge `(k, e)`, `k ∈ [0, nx)`,
//! `e ∈ [0, ny]`, separates cell `(k + 1, e)` from `(k + 1, e + 1)`. Indices
//! refer to ghost-inclusive cell coordinates.

use super::Array2D;
use crate::types::Resolution2D;

/// Net updates of all edges of a block for one flux computation.
///
/// Every array is fully overwritten by each flux computation; nothing is
/// carried over between time steps.
#[derive(Clone, Debug, PartialEq)]
pub struct NetUpdates {
    /// Height update to the cell left of each vertical edge
    pub h_left: Array2D,
    /// Height update to the cell right of each vertical edge
    pub h_right: Array2D,
    /// x-momentum update to the cell left of each vertical edge
    pub hu_left: Array2D,
    /// x-momentum update to the cell right of each vertical edge
    pub hu_right: Array2D,
    /// Height update to the cell below each horizontal edge
    pub h_below: Array2D,
    /// Height update to the cell above each horizontal edge
    pub h_above: Array2D,
    /// y-momentum update to the cell below each horizontal edge
    pub hv_below: Array2D,
    /// y-momentum update to the cell above each horizontal edge
    pub hv_above: Array2D,
}

impl NetUpdates {
    /// Allocate zeroed arrays sized for `resolution`.
    pub fn new(resolution: Resolution2D) -> Self {
        let (vr, vc) = resolution.vertical_edge_dims();
        let (hr, hc) = resolution.horizontal_edge_dims();
        Self {
            h_left: Array2D::zeros(vr, vc),
            h_right: Array2D::zeros(vr, vc),
            hu_left: Array2D::zeros(vr, vc),
            hu_right: Array2D::zeros(vr, vc),
            h_below: Array2D::zeros(hr, hc),
            h_above: Array2D::zeros(hr, hc),
            hv_below: Array2D::zeros(hr, hc),
            hv_above: Array2D::zeros(hr, hc),
        }
    }

    /// Largest absolute net update over all eight arrays.
    pub fn max_abs(&self) -> f64 {
        [
            &self.h_left,
            &self.h_right,
            &self.hu_left,
            &self.hu_right,
            &self.h_below,
            &self.h_above,
            &self.hv_below,
            &self.hv_above,
        ]
        .iter()
        .fold(0.0_f64, |m, a| m.max(a.max_abs()))
    }
}
