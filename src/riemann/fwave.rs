//! F-wave net-update solver for the 1D shallow water equations.
//!
//! The jump in the flux function, augmented by the bathymetry source term,
//! is decomposed into two waves along the eigenvectors `(1, λ)` of the
//! linearized system:
//!
//! Δf = [ Δ(hu),  Δ(hu² + g h²/2) + g (h_l + h_r)/2 · (b_r - b_l) ]
//!
//! Δf = β₁ (1, λ₁) + β₂ (1, λ₂)
//!
//! Left-going waves update the left cell, right-going waves the right cell.
//! A lake at rest has Δf = 0, so the scheme is well-balanced by construction.
//!
//! Wet/dry edges are treated as reflecting walls: the dry side mirrors the
//! wet side with reversed momentum and its own updates are discarded.
//!
//! Reference: Bale, LeVeque, Mitran & Rossmanith (2002), "A wave propagation
//! method for conservation laws and balance laws with spatially varying flux
//! functions"

use super::{EdgeNetUpdates, EdgeState, NetUpdateSolver, SolverParams};
use crate::error::BlockResult;

/// F-wave solver with Roe eigenvalue estimates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FWaveSolver {
    params: SolverParams,
}

impl FWaveSolver {
    pub fn new(params: SolverParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }
}

impl NetUpdateSolver for FWaveSolver {
    fn compute_edge(&self, edge: &EdgeState) -> EdgeNetUpdates {
        solve_edge(edge, &self.params, roe_speeds)
    }

    fn name(&self) -> &'static str {
        "fwave"
    }

    fn validate(&self) -> BlockResult<()> {
        self.params.validate()
    }
}

// =============================================================================
// Shared decomposition (also used by the HLLE solver)
// =============================================================================

/// Wet/dry configuration of an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum WetDry {
    WetWet,
    /// Right side dry, acts as a wall
    WetDryWall,
    /// Left side dry, acts as a wall
    DryWetWall,
    DryDry,
}

impl WetDry {
    pub(super) fn classify(h_left: f64, h_right: f64, dry_tol: f64) -> Self {
        match (h_left >= dry_tol, h_right >= dry_tol) {
            (true, true) => Self::WetWet,
            (true, false) => Self::WetDryWall,
            (false, true) => Self::DryWetWall,
            (false, false) => Self::DryDry,
        }
    }
}

/// Edge data after wall reflection, with velocities.
#[derive(Clone, Copy, Debug)]
pub(super) struct Reconstructed {
    pub h_l: f64,
    pub h_r: f64,
    pub hu_l: f64,
    pub hu_r: f64,
    pub u_l: f64,
    pub u_r: f64,
    pub b_l: f64,
    pub b_r: f64,
}

impl Reconstructed {
    /// Mirror the dry side of a wet/dry edge. Both heights are at least
    /// `dry_tol` afterwards, so the velocities are finite.
    fn new(e: &EdgeState, wet_dry: WetDry) -> Self {
        let (mut h_l, mut h_r) = (e.h_left, e.h_right);
        let (mut hu_l, mut hu_r) = (e.hu_left, e.hu_right);
        let (mut b_l, mut b_r) = (e.b_left, e.b_right);

        match wet_dry {
            WetDry::WetDryWall => {
                h_r = h_l;
                hu_r = -hu_l;
                b_r = b_l;
            }
            WetDry::DryWetWall => {
                h_l = h_r;
                hu_l = -hu_r;
                b_l = b_r;
            }
            WetDry::WetWet | WetDry::DryDry => {}
        }

        Self {
            h_l,
            h_r,
            hu_l,
            hu_r,
            u_l: hu_l / h_l,
            u_r: hu_r / h_r,
            b_l,
            b_r,
        }
    }
}

/// Roe eigenvalues `(λ₁, λ₂)` of the linearized system.
pub(super) fn roe_speeds(r: &Reconstructed, g: f64) -> (f64, f64) {
    let sqrt_h_l = r.h_l.sqrt();
    let sqrt_h_r = r.h_r.sqrt();

    let h_roe = 0.5 * (r.h_l + r.h_r);
    let u_roe = (r.u_l * sqrt_h_l + r.u_r * sqrt_h_r) / (sqrt_h_l + sqrt_h_r);
    let c_roe = (g * h_roe).sqrt();

    (u_roe - c_roe, u_roe + c_roe)
}

/// Full edge solve with a pluggable wave speed estimate.
pub(super) fn solve_edge(
    edge: &EdgeState,
    params: &SolverParams,
    speeds: impl Fn(&Reconstructed, f64) -> (f64, f64),
) -> EdgeNetUpdates {
    let wet_dry = WetDry::classify(edge.h_left, edge.h_right, params.dry_tol);
    if wet_dry == WetDry::DryDry {
        return EdgeNetUpdates::default();
    }

    let r = Reconstructed::new(edge, wet_dry);
    let (s1, s2) = speeds(&r, params.g);
    let mut upd = decompose(&r, s1, s2, params);

    match wet_dry {
        WetDry::WetDryWall => {
            upd.h_right = 0.0;
            upd.hu_right = 0.0;
        }
        WetDry::DryWetWall => {
            upd.h_left = 0.0;
            upd.hu_left = 0.0;
        }
        WetDry::WetWet | WetDry::DryDry => {}
    }
    upd
}

/// Split the flux jump into two f-waves and route them by speed sign.
fn decompose(r: &Reconstructed, s1: f64, s2: f64, params: &SolverParams) -> EdgeNetUpdates {
    let g = params.g;

    let df_h = r.hu_r - r.hu_l;
    let df_hu = r.hu_r * r.u_r + 0.5 * g * r.h_r * r.h_r
        - (r.hu_l * r.u_l + 0.5 * g * r.h_l * r.h_l)
        + 0.5 * g * (r.h_r + r.h_l) * (r.b_r - r.b_l);

    // Both heights are >= dry_tol > 0 here, so s2 > s1.
    let inv_ds = 1.0 / (s2 - s1);
    let beta1 = inv_ds * (s2 * df_h - df_hu);
    let beta2 = inv_ds * (df_hu - s1 * df_h);

    let mut upd = EdgeNetUpdates::default();
    for (beta, s) in [(beta1, s1), (beta2, s2)] {
        let wave_h = beta;
        let wave_hu = beta * s;

        if s < -params.zero_tol {
            upd.h_left += wave_h;
            upd.hu_left += wave_hu;
        } else if s > params.zero_tol {
            upd.h_right += wave_h;
            upd.hu_right += wave_hu;
        } else {
            upd.h_left += 0.5 * wave_h;
            upd.hu_left += 0.5 * wave_hu;
            upd.h_right += 0.5 * wave_h;
            upd.hu_right += 0.5 * wave_hu;
        }

        // Only waves that actually carry something constrain the step.
        if beta.abs() > params.zero_tol {
            upd.max_speed = upd.max_speed.max(s.abs());
        }
    }
    upd
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn solver() -> FWaveSolver {
        FWaveSolver::new(SolverParams::default())
    }

    fn assert_zero(u: &EdgeNetUpdates) {
        assert!(u.h_left.abs() < TOL, "h_left = {}", u.h_left);
        assert!(u.h_right.abs() < TOL, "h_right = {}", u.h_right);
        assert!(u.hu_left.abs() < TOL, "hu_left = {}", u.hu_left);
        assert!(u.hu_right.abs() < TOL, "hu_right = {}", u.hu_right);
    }

    #[test]
    fn test_lake_at_rest_flat() {
        let u = solver().compute_edge(&EdgeState::new((3.0, 3.0), (0.0, 0.0), (0.0, 0.0)));
        assert_zero(&u);
        assert_eq!(u.max_speed, 0.0);
    }

    #[test]
    fn test_lake_at_rest_step_bathymetry() {
        // eta = h + b = 2 on both sides
        let u = solver().compute_edge(&EdgeState::new((3.0, 1.5), (0.0, 0.0), (-1.0, 0.5)));
        assert_zero(&u);
        assert_eq!(u.max_speed, 0.0);
    }

    #[test]
    fn test_dry_dry_is_zero() {
        let u = solver().compute_edge(&EdgeState::new((0.0, 0.0), (1.0, -1.0), (0.0, 0.0)));
        assert_eq!(u, EdgeNetUpdates::default());
    }

    #[test]
    fn test_dam_break_direction() {
        let u = solver().compute_edge(&EdgeState::new((2.0, 1.0), (0.0, 0.0), (0.0, 0.0)));
        // Updates are subtracted: the deep side drains, the shallow side fills.
        assert!(u.h_left > 0.0);
        assert!(u.h_right < 0.0);
        assert!(u.max_speed > 0.0);
        // Conservation: the two updates sum to the mass flux jump, which is zero here.
        assert!((u.h_left + u.h_right).abs() < TOL);
    }

    #[test]
    fn test_flux_jump_is_conserved() {
        let e = EdgeState::new((2.0, 1.2), (0.4, -0.3), (0.0, 0.0));
        let u = solver().compute_edge(&e);
        let df_h = e.hu_right - e.hu_left;
        assert!((u.h_left + u.h_right - df_h).abs() < 1e-12);

        let g = 9.81;
        let f = |h: f64, hu: f64| hu * hu / h + 0.5 * g * h * h;
        let df_hu = f(e.h_right, e.hu_right) - f(e.h_left, e.hu_left);
        assert!((u.hu_left + u.hu_right - df_hu).abs() < 1e-10);
    }

    #[test]
    fn test_wet_dry_wall_no_update_to_dry_side() {
        let u = solver().compute_edge(&EdgeState::new((1.0, 0.0), (0.5, 0.0), (0.0, 0.0)));
        assert_eq!(u.h_right, 0.0);
        assert_eq!(u.hu_right, 0.0);
        assert!(u.h_left.is_finite() && u.hu_left.is_finite());
        assert!(u.max_speed > 0.0);

        let mirrored = solver().compute_edge(&EdgeState::new((0.0, 1.0), (0.0, -0.5), (0.0, 0.0)));
        assert_eq!(mirrored.h_left, 0.0);
        assert_eq!(mirrored.hu_left, 0.0);
        assert!((mirrored.h_right - u.h_left).abs() < TOL);
        assert!((mirrored.hu_right + u.hu_left).abs() < TOL);
    }

    #[test]
    fn test_resting_water_next_to_dry_cell() {
        // Still water against a dry bank stays put.
        let u = solver().compute_edge(&EdgeState::new((1.0, 0.0), (0.0, 0.0), (0.0, 2.0)));
        assert_zero(&u);
        assert_eq!(u.max_speed, 0.0);
    }

    #[test]
    fn test_mirror_symmetry() {
        // Reflecting x -> -x swaps sides and negates momentum; the depth
        // change of each physical cell is unchanged.
        let e = EdgeState::new((2.0, 1.0), (0.3, -0.2), (0.1, -0.1));
        let m = EdgeState::new((1.0, 2.0), (0.2, -0.3), (-0.1, 0.1));
        let a = solver().compute_edge(&e);
        let b = solver().compute_edge(&m);
        assert!((a.h_left - b.h_right).abs() < 1e-12);
        assert!((a.hu_left + b.hu_right).abs() < 1e-12);
        assert!((a.h_right - b.h_left).abs() < 1e-12);
        assert!((a.max_speed - b.max_speed).abs() < 1e-12);
    }

    #[test]
    fn test_tiny_depths_stay_finite() {
        let u = solver().compute_edge(&EdgeState::new((1e-300, 5.0), (1e-300, 0.0), (0.0, 0.0)));
        assert!(u.h_left.is_finite() && u.h_right.is_finite());
        assert!(u.hu_left.is_finite() && u.hu_right.is_finite());
        assert!(u.max_speed.is_finite());
    }
}
