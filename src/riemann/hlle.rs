//! HLLE net-update solver.
//!
//! Same f-wave decomposition as [`FWaveSolver`](super::FWaveSolver), but with
//! Einfeldt speed bounds: the outer characteristic speeds of the left and
//! right states are compared with the Roe speeds and the extreme values are
//! kept. The wider fan makes the solver more dissipative and more robust for
//! strong rarefactions and transonic flow.
//!
//! Reference: Einfeldt (1988), "On Godunov-type methods for gas dynamics"

use super::fwave::{Reconstructed, roe_speeds, solve_edge};
use super::{EdgeNetUpdates, EdgeState, NetUpdateSolver, SolverParams};
use crate::error::BlockResult;

/// HLLE solver (f-wave form, Einfeldt speeds).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HlleSolver {
    params: SolverParams,
}

impl HlleSolver {
    pub fn new(params: SolverParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }
}

impl NetUpdateSolver for HlleSolver {
    fn compute_edge(&self, edge: &EdgeState) -> EdgeNetUpdates {
        solve_edge(edge, &self.params, einfeldt_speeds)
    }

    fn name(&self) -> &'static str {
        "hlle"
    }

    fn validate(&self) -> BlockResult<()> {
        self.params.validate()
    }
}

/// Einfeldt wave speed estimates.
fn einfeldt_speeds(r: &Reconstructed, g: f64) -> (f64, f64) {
    let (roe_1, roe_2) = roe_speeds(r, g);
    let c_l = (g * r.h_l).sqrt();
    let c_r = (g * r.h_r).sqrt();

    ((r.u_l - c_l).min(roe_1), (r.u_r + c_r).max(roe_2))
}
