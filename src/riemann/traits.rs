//! Net-update solver contract.
//!
//! A net-update solver evaluates the Riemann problem at a batch of mutually
//! independent edges. For each edge it receives the states on both sides in
//! the edge-normal frame (height, normal momentum, bathymetry) and returns
//! the net updates to the left and right cells plus a signal speed.
//!
//! # Example
//! ```
//! use swe_block::riemann::{EdgeState, FWaveSolver, NetUpdateSolver, SolverParams};
//!
//! let solver = FWaveSolver::new(SolverParams::default());
//! let dam_break = EdgeState::new((2.0, 1.0), (0.0, 0.0), (0.0, 0.0));
//! let upd = solver.compute_edge(&dam_break);
//! assert!(upd.h_right < 0.0); // net updates are subtracted: the right cell fills
//! assert!(upd.max_speed > 0.0);
//! ```

use std::ops::Range;

use crate::error::{BlockError, BlockResult};

// =============================================================================
// Solver Parameters
// =============================================================================

/// Physical and numerical parameters shared by the built-in solvers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverParams {
    /// Gravitational acceleration (m/s²).
    pub g: f64,
    /// Depth below which a side of an edge is treated as dry.
    pub dry_tol: f64,
    /// Wave speeds and wave strengths below this magnitude count as zero.
    pub zero_tol: f64,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            g: 9.81,
            dry_tol: 0.01,
            zero_tol: 1e-7,
        }
    }
}

impl SolverParams {
    /// Parameters with a custom gravitational acceleration.
    pub fn with_gravity(mut self, g: f64) -> Self {
        self.g = g;
        self
    }

    /// Parameters with a custom dry tolerance.
    pub fn with_dry_tol(mut self, dry_tol: f64) -> Self {
        self.dry_tol = dry_tol;
        self
    }

    /// Check that every parameter is usable.
    ///
    /// A positive dry tolerance is what keeps velocity reconstruction away
    /// from division by zero.
    pub fn validate(&self) -> BlockResult<()> {
        if !(self.g.is_finite() && self.g > 0.0) {
            return Err(BlockError::invalid_config(format!(
                "gravity must be positive, got {}",
                self.g
            )));
        }
        if !(self.dry_tol.is_finite() && self.dry_tol > 0.0) {
            return Err(BlockError::invalid_config(format!(
                "solver dry tolerance must be positive, got {}",
                self.dry_tol
            )));
        }
        if !(self.zero_tol.is_finite() && self.zero_tol >= 0.0) {
            return Err(BlockError::invalid_config(format!(
                "solver zero tolerance must be non-negative, got {}",
                self.zero_tol
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Single-edge types
// =============================================================================

/// Riemann data at one edge, in the edge-normal frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeState {
    pub h_left: f64,
    pub h_right: f64,
    /// Normal momentum (hu for vertical edges, hv for horizontal ones)
    pub hu_left: f64,
    pub hu_right: f64,
    pub b_left: f64,
    pub b_right: f64,
}

impl EdgeState {
    /// Build from `(h, hu)` pairs and a `(b_left, b_right)` pair.
    pub fn new(h: (f64, f64), hu: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            h_left: h.0,
            h_right: h.1,
            hu_left: hu.0,
            hu_right: hu.1,
            b_left: b.0,
            b_right: b.1,
        }
    }
}

/// Net updates produced at one edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeNetUpdates {
    pub h_left: f64,
    pub h_right: f64,
    pub hu_left: f64,
    pub hu_right: f64,
    /// Largest signal speed of the waves present at this edge
    pub max_speed: f64,
}

// =============================================================================
// Lane views
// =============================================================================

/// Read-only view of a batch of independent edges, one lane per edge.
///
/// All six slices have the same length.
#[derive(Clone, Copy, Debug)]
pub struct EdgeBatch<'a> {
    pub h_left: &'a [f64],
    pub h_right: &'a [f64],
    pub hu_left: &'a [f64],
    pub hu_right: &'a [f64],
    pub b_left: &'a [f64],
    pub b_right: &'a [f64],
}

impl<'a> EdgeBatch<'a> {
    /// Number of lanes.
    #[inline]
    pub fn len(&self) -> usize {
        self.h_left.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.h_left.is_empty()
    }

    /// Whether all lanes have matching lengths.
    pub fn is_consistent(&self) -> bool {
        let n = self.len();
        [
            self.h_right.len(),
            self.hu_left.len(),
            self.hu_right.len(),
            self.b_left.len(),
            self.b_right.len(),
        ]
        .iter()
        .all(|&l| l == n)
    }

    /// Riemann data of lane `k`.
    #[inline]
    pub fn edge(&self, k: usize) -> EdgeState {
        EdgeState {
            h_left: self.h_left[k],
            h_right: self.h_right[k],
            hu_left: self.hu_left[k],
            hu_right: self.hu_right[k],
            b_left: self.b_left[k],
            b_right: self.b_right[k],
        }
    }

    /// Sub-batch over `range`.
    #[inline]
    pub fn lanes(&self, range: Range<usize>) -> EdgeBatch<'a> {
        EdgeBatch {
            h_left: &self.h_left[range.clone()],
            h_right: &self.h_right[range.clone()],
            hu_left: &self.hu_left[range.clone()],
            hu_right: &self.hu_right[range.clone()],
            b_left: &self.b_left[range.clone()],
            b_right: &self.b_right[range],
        }
    }
}

/// Output lanes for a batch of edges.
#[derive(Debug)]
pub struct NetUpdateBatch<'a> {
    pub h_left: &'a mut [f64],
    pub h_right: &'a mut [f64],
    pub hu_left: &'a mut [f64],
    pub hu_right: &'a mut [f64],
}

impl NetUpdateBatch<'_> {
    /// Number of lanes.
    #[inline]
    pub fn len(&self) -> usize {
        self.h_left.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.h_left.is_empty()
    }

    /// Write the updates of lane `k`.
    #[inline]
    pub fn set(&mut self, k: usize, upd: &EdgeNetUpdates) {
        self.h_left[k] = upd.h_left;
        self.h_right[k] = upd.h_right;
        self.hu_left[k] = upd.hu_left;
        self.hu_right[k] = upd.hu_right;
    }

    /// Mutable sub-batch over `range`.
    #[inline]
    pub fn lanes_mut(&mut self, range: Range<usize>) -> NetUpdateBatch<'_> {
        NetUpdateBatch {
            h_left: &mut self.h_left[range.clone()],
            h_right: &mut self.h_right[range.clone()],
            hu_left: &mut self.hu_left[range.clone()],
            hu_right: &mut self.hu_right[range],
        }
    }
}

// =============================================================================
// Solver Trait
// =============================================================================

/// Pluggable approximate Riemann solver producing net updates.
///
/// # Implementation Notes
///
/// - Must be pure: no state carried between calls
/// - Must handle dry (zero height) data on either side without NaN/Inf
/// - Must be well-balanced: lake at rest (constant `h + b`, zero momentum)
///   gives all-zero updates and zero signal speed
/// - `compute_batch` must give, lane by lane, exactly what
///   `compute_edge` gives; the default implementation guarantees this
pub trait NetUpdateSolver: Send + Sync {
    /// Solve the Riemann problem at a single edge.
    fn compute_edge(&self, edge: &EdgeState) -> EdgeNetUpdates;

    /// Solve a batch of independent edges and return the batch's maximum
    /// signal speed.
    fn compute_batch(&self, edges: &EdgeBatch<'_>, out: &mut NetUpdateBatch<'_>) -> f64 {
        debug_assert!(edges.is_consistent());
        debug_assert_eq!(edges.len(), out.len());

        let mut max_speed = 0.0_f64;
        for k in 0..edges.len() {
            let upd = self.compute_edge(&edges.edge(k));
            out.set(k, &upd);
            max_speed = max_speed.max(upd.max_speed);
        }
        max_speed
    }

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Reject parameters under which the solver could produce NaN or Inf.
    ///
    /// Called once when a block is built. Solvers without parameters keep
    /// the default.
    fn validate(&self) -> BlockResult<()> {
        Ok(())
    }
}

impl<S: NetUpdateSolver + ?Sized> NetUpdateSolver for Box<S> {
    #[inline]
    fn compute_edge(&self, edge: &EdgeState) -> EdgeNetUpdates {
        (**self).compute_edge(edge)
    }

    #[inline]
    fn compute_batch(&self, edges: &EdgeBatch<'_>, out: &mut NetUpdateBatch<'_>) -> f64 {
        (**self).compute_batch(edges, out)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn validate(&self) -> BlockResult<()> {
        (**self).validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Upwind-style toy solver: sends the momentum jump to one side.
    struct JumpSolver;

    impl NetUpdateSolver for JumpSolver {
        fn compute_edge(&self, e: &EdgeState) -> EdgeNetUpdates {
            EdgeNetUpdates {
                h_left: e.hu_right - e.hu_left,
                h_right: 0.0,
                hu_left: 0.0,
                hu_right: e.h_right - e.h_left,
                max_speed: (e.h_right - e.h_left).abs(),
            }
        }

        fn name(&self) -> &'static str {
            "jump"
        }
    }

    #[test]
    fn test_default_batch_matches_edges() {
        let h_l = [1.0, 2.0, 3.0];
        let h_r = [1.5, 0.0, 3.0];
        let hu_l = [0.0, 1.0, -1.0];
        let hu_r = [0.5, 0.0, 1.0];
        let zeros = [0.0; 3];
        let batch = EdgeBatch {
            h_left: &h_l,
            h_right: &h_r,
            hu_left: &hu_l,
            hu_right: &hu_r,
            b_left: &zeros,
            b_right: &zeros,
        };

        let (mut a, mut b, mut c, mut d) = ([0.0; 3], [0.0; 3], [0.0; 3], [0.0; 3]);
        let mut out = NetUpdateBatch {
            h_left: &mut a,
            h_right: &mut b,
            hu_left: &mut c,
            hu_right: &mut d,
        };
        let max_speed = JumpSolver.compute_batch(&batch, &mut out);

        assert_eq!(max_speed, 2.0);
        for k in 0..3 {
            let e = JumpSolver.compute_edge(&batch.edge(k));
            assert_eq!(out.h_left[k], e.h_left);
            assert_eq!(out.hu_right[k], e.hu_right);
        }
    }

    #[test]
    fn test_sub_batch_views() {
        let v = [0.0, 1.0, 2.0, 3.0, 4.0];
        let batch = EdgeBatch {
            h_left: &v,
            h_right: &v,
            hu_left: &v,
            hu_right: &v,
            b_left: &v,
            b_right: &v,
        };
        let sub = batch.lanes(3..5);
        assert_eq!(sub.len(), 2);
        assert_eq!(sub.edge(0).h_left, 3.0);
        assert!(sub.is_consistent());
    }

    #[test]
    fn test_boxed_solver_delegates() {
        let boxed: Box<dyn NetUpdateSolver> = Box::new(JumpSolver);
        let e = EdgeState::new((1.0, 2.0), (0.0, 0.0), (0.0, 0.0));
        assert_eq!(boxed.compute_edge(&e), JumpSolver.compute_edge(&e));
        assert_eq!(boxed.name(), "jump");
    }

    #[test]
    fn test_default_validate_accepts() {
        assert!(JumpSolver.validate().is_ok());
        let boxed: Box<dyn NetUpdateSolver> = Box::new(JumpSolver);
        assert!(boxed.validate().is_ok());
    }

    #[test]
    fn test_params_validation() {
        assert!(SolverParams::default().validate().is_ok());
        assert!(SolverParams::default().with_dry_tol(0.0).validate().is_err());
        assert!(SolverParams::default().with_gravity(-1.0).validate().is_err());
    }
}
