//! Edge sweeps of the dimensional-splitting scheme.
//!
//! Vertical edges (x-direction, normal momentum `hu`) are swept line by line
//! at fixed `i`, horizontal edges (y-direction, normal momentum `hv`) at
//! fixed `i` as well. Along a line both neighbours of every edge are
//! contiguous in memory, so each line is handed to the solver as plain
//! slices.

use super::batch::{MaxSpeed, solve_line};
use crate::grid::{Array2D, BlockState, NetUpdates};
use crate::riemann::{EdgeBatch, NetUpdateBatch, NetUpdateSolver};

/// How a sweep is executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SweepPlan {
    pub lane_width: usize,
    pub parallel: bool,
}

/// Net updates at all vertical edges; returns the maximum signal speed.
///
/// Line `e ∈ [0, nx]` holds the edges between cell columns `e` and `e + 1`
/// for `j ∈ [1, ny]`.
pub(crate) fn sweep_vertical<S: NetUpdateSolver + ?Sized>(
    solver: &S,
    state: &BlockState,
    nu: &mut NetUpdates,
    plan: SweepPlan,
) -> MaxSpeed {
    let ny = state.resolution().ny();
    let (h, hu, b) = (state.h(), state.hu(), state.b());
    let lanes = 1..ny + 1;

    let line_edges = move |e: usize| EdgeBatch {
        h_left: &h.row(e)[lanes.clone()],
        h_right: &h.row(e + 1)[lanes.clone()],
        hu_left: &hu.row(e)[lanes.clone()],
        hu_right: &hu.row(e + 1)[lanes.clone()],
        b_left: &b.row(e)[lanes.clone()],
        b_right: &b.row(e + 1)[lanes.clone()],
    };

    sweep(
        solver,
        [
            &mut nu.h_left,
            &mut nu.h_right,
            &mut nu.hu_left,
            &mut nu.hu_right,
        ],
        plan,
        line_edges,
    )
}

/// Net updates at all horizontal edges; returns the maximum signal speed.
///
/// Line `k ∈ [0, nx)` holds the edges of cell column `k + 1` between rows
/// `e` and `e + 1` for `e ∈ [0, ny]`.
pub(crate) fn sweep_horizontal<S: NetUpdateSolver + ?Sized>(
    solver: &S,
    state: &BlockState,
    nu: &mut NetUpdates,
    plan: SweepPlan,
) -> MaxSpeed {
    let ny = state.resolution().ny();
    let (h, hv, b) = (state.h(), state.hv(), state.b());
    let below = 0..ny + 1;
    let above = 1..ny + 2;

    let line_edges = move |k: usize| EdgeBatch {
        h_left: &h.row(k + 1)[below.clone()],
        h_right: &h.row(k + 1)[above.clone()],
        hu_left: &hv.row(k + 1)[below.clone()],
        hu_right: &hv.row(k + 1)[above.clone()],
        b_left: &b.row(k + 1)[below.clone()],
        b_right: &b.row(k + 1)[above.clone()],
    };

    sweep(
        solver,
        [
            &mut nu.h_below,
            &mut nu.h_above,
            &mut nu.hv_below,
            &mut nu.hv_above,
        ],
        plan,
        line_edges,
    )
}

/// Run every line of one sweep, writing row `line` of each output array.
fn sweep<'a, S, F>(
    solver: &S,
    outputs: [&mut Array2D; 4],
    plan: SweepPlan,
    line_edges: F,
) -> MaxSpeed
where
    S: NetUpdateSolver + ?Sized,
    F: Fn(usize) -> EdgeBatch<'a> + Sync,
{
    debug_assert!(!plan.parallel || cfg!(feature = "parallel"));

    #[cfg(feature = "parallel")]
    if plan.parallel {
        return sweep_parallel(solver, outputs, plan.lane_width, line_edges);
    }

    let [h_l, h_r, q_l, q_r] = outputs;
    let mut max_speed = MaxSpeed::ZERO;
    for line in 0..h_l.rows() {
        let mut out = NetUpdateBatch {
            h_left: h_l.row_mut(line),
            h_right: h_r.row_mut(line),
            hu_left: q_l.row_mut(line),
            hu_right: q_r.row_mut(line),
        };
        let line_max = solve_line(solver, &line_edges(line), &mut out, plan.lane_width);
        max_speed = max_speed.combine(line_max);
    }
    max_speed
}

#[cfg(feature = "parallel")]
fn sweep_parallel<'a, S, F>(
    solver: &S,
    outputs: [&mut Array2D; 4],
    lane_width: usize,
    line_edges: F,
) -> MaxSpeed
where
    S: NetUpdateSolver + ?Sized,
    F: Fn(usize) -> EdgeBatch<'a> + Sync,
{
    use rayon::prelude::*;

    let [h_l, h_r, q_l, q_r] = outputs;
    let cols = h_l.cols();

    h_l.as_mut_slice()
        .par_chunks_mut(cols)
        .zip(h_r.as_mut_slice().par_chunks_mut(cols))
        .zip(q_l.as_mut_slice().par_chunks_mut(cols))
        .zip(q_r.as_mut_slice().par_chunks_mut(cols))
        .enumerate()
        .map(|(line, (((a, b), c), d))| {
            let mut out = NetUpdateBatch {
                h_left: a,
                h_right: b,
                hu_left: c,
                hu_right: d,
            };
            solve_line(solver, &line_edges(line), &mut out, lane_width)
        })
        .reduce(|| MaxSpeed::ZERO, MaxSpeed::combine)
}
