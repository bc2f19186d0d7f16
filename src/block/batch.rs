//! Independent-edge batches and the maximum-speed reduction.
//!
//! A sweep line (all edges at fixed `i`) is cut into consecutive batches of
//! `lane_width` edges; the last batch may be shorter. Edges of one line
//! never share a written cell, so every batch is independent of the others
//! and the batch boundaries cannot change any per-edge result. Speeds are
//! combined with `max`, which is associative and commutative, so the global
//! maximum is also independent of the batch width and of the order in which
//! lines are evaluated.

use std::ops::Range;

use crate::riemann::{EdgeBatch, NetUpdateBatch, NetUpdateSolver};

/// Running maximum of non-negative signal speeds.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct MaxSpeed(f64);

impl MaxSpeed {
    /// Identity of the reduction.
    pub const ZERO: Self = Self(0.0);

    #[inline]
    pub fn new(speed: f64) -> Self {
        Self(speed.max(0.0))
    }

    /// Combine two partial maxima.
    #[inline]
    pub fn combine(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl FromIterator<MaxSpeed> for MaxSpeed {
    fn from_iter<I: IntoIterator<Item = MaxSpeed>>(iter: I) -> Self {
        iter.into_iter().fold(MaxSpeed::ZERO, MaxSpeed::combine)
    }
}

/// Lane ranges covering `0..len` in steps of `width`.
///
/// `width` comes from a validated [`BlockConfig`](crate::BlockConfig) and is
/// never zero.
pub(crate) fn batch_ranges(len: usize, width: usize) -> impl Iterator<Item = Range<usize>> {
    assert!(width > 0, "lane width must be positive");
    (0..len)
        .step_by(width)
        .map(move |start| start..(start + width).min(len))
}

/// Evaluate one sweep line batch by batch and return its maximum speed.
pub(crate) fn solve_line<S: NetUpdateSolver + ?Sized>(
    solver: &S,
    edges: &EdgeBatch<'_>,
    out: &mut NetUpdateBatch<'_>,
    lane_width: usize,
) -> MaxSpeed {
    debug_assert_eq!(edges.len(), out.len());

    batch_ranges(edges.len(), lane_width)
        .map(|lanes| {
            let batch = edges.lanes(lanes.clone());
            let mut batch_out = out.lanes_mut(lanes);
            MaxSpeed::new(solver.compute_batch(&batch, &mut batch_out))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riemann::{FWaveSolver, SolverParams};

    #[test]
    fn test_batch_ranges_cover_line() {
        let r: Vec<_> = batch_ranges(10, 4).collect();
        assert_eq!(r, vec![0..4, 4..8, 8..10]);

        let r: Vec<_> = batch_ranges(3, 1).collect();
        assert_eq!(r, vec![0..1, 1..2, 2..3]);

        let r: Vec<_> = batch_ranges(3, 16).collect();
        assert_eq!(r, vec![0..3]);

        assert_eq!(batch_ranges(0, 4).count(), 0);
    }

    #[test]
    #[should_panic(expected = "lane width")]
    fn test_zero_width_panics() {
        let _ = batch_ranges(4, 0).count();
    }

    #[test]
    fn test_max_speed_reduction_is_order_free() {
        let speeds = [0.3, 2.5, 0.0, 1.7, 2.5, 0.9];
        let forward: MaxSpeed = speeds.iter().map(|&s| MaxSpeed::new(s)).collect();
        let backward: MaxSpeed = speeds.iter().rev().map(|&s| MaxSpeed::new(s)).collect();
        let paired = MaxSpeed::new(0.3)
            .combine(MaxSpeed::new(2.5))
            .combine(MaxSpeed::new(0.0).combine(MaxSpeed::new(1.7)))
            .combine(MaxSpeed::new(2.5).combine(MaxSpeed::new(0.9)));
        assert_eq!(forward.get(), 2.5);
        assert_eq!(forward, backward);
        assert_eq!(forward, paired);
        assert_eq!(MaxSpeed::ZERO.combine(MaxSpeed::ZERO).get(), 0.0);
    }

    #[test]
    fn test_solve_line_width_invariance() {
        let n = 11;
        let h_l: Vec<f64> = (0..n).map(|k| 1.0 + 0.1 * k as f64).collect();
        let h_r: Vec<f64> = (0..n).map(|k| 2.0 - 0.13 * k as f64).collect();
        let hu_l: Vec<f64> = (0..n).map(|k| 0.05 * k as f64).collect();
        let hu_r: Vec<f64> = (0..n).map(|k| -0.02 * k as f64).collect();
        let b_l = vec![0.0; n];
        let b_r: Vec<f64> = (0..n).map(|k| 0.01 * k as f64).collect();
        let edges = EdgeBatch {
            h_left: &h_l,
            h_right: &h_r,
            hu_left: &hu_l,
            hu_right: &hu_r,
            b_left: &b_l,
            b_right: &b_r,
        };
        let solver = FWaveSolver::new(SolverParams::default());

        let run = |width: usize| {
            let (mut a, mut b, mut c, mut d) = (vec![0.0; n], vec![0.0; n], vec![0.0; n], vec![0.0; n]);
            let mut out = NetUpdateBatch {
                h_left: &mut a,
                h_right: &mut b,
                hu_left: &mut c,
                hu_right: &mut d,
            };
            let speed = solve_line(&solver, &edges, &mut out, width);
            (speed, a, b, c, d)
        };

        let reference = run(1);
        for width in [2, 3, 4, 8, 64] {
            assert_eq!(run(width), reference, "width {}", width);
        }
    }
}
