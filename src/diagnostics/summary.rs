//! Conservation and bounds summaries of a block's interior.

use crate::grid::BlockState;
use crate::types::CellSize;

/// Integral and extreme quantities over the interior cells of a block.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockDiagnostics {
    /// Total water volume (Σ h · dx · dy)
    pub total_mass: f64,
    /// Total x-momentum (Σ hu · dx · dy)
    pub momentum_x: f64,
    /// Total y-momentum (Σ hv · dx · dy)
    pub momentum_y: f64,
    /// Minimum interior depth
    pub min_depth: f64,
    /// Maximum interior depth
    pub max_depth: f64,
    /// Maximum velocity magnitude over cells deeper than `wet_tol`
    pub max_velocity: f64,
    /// Number of interior cells deeper than `wet_tol`
    pub wet_cells: usize,
}

impl BlockDiagnostics {
    /// Compute diagnostics; cells at or below `wet_tol` count as dry.
    pub fn compute(state: &BlockState, cell_size: CellSize, wet_tol: f64) -> Self {
        let area = cell_size.area();

        let mut total_mass = 0.0;
        let mut momentum_x = 0.0;
        let mut momentum_y = 0.0;
        let mut min_depth = f64::INFINITY;
        let mut max_depth = f64::NEG_INFINITY;
        let mut max_velocity = 0.0_f64;
        let mut wet_cells = 0;

        for (i, j) in state.interior_indices() {
            let h = state.h()[(i, j)];
            let hu = state.hu()[(i, j)];
            let hv = state.hv()[(i, j)];

            total_mass += h * area;
            momentum_x += hu * area;
            momentum_y += hv * area;
            min_depth = min_depth.min(h);
            max_depth = max_depth.max(h);

            if h > wet_tol {
                wet_cells += 1;
                let u = hu / h;
                let v = hv / h;
                max_velocity = max_velocity.max((u * u + v * v).sqrt());
            }
        }

        Self {
            total_mass,
            momentum_x,
            momentum_y,
            min_depth,
            max_depth,
            max_velocity,
            wet_cells,
        }
    }

    /// Relative change of total mass with respect to `reference`.
    pub fn relative_mass_error(&self, reference: &BlockDiagnostics) -> f64 {
        if reference.total_mass.abs() > 0.0 {
            (self.total_mass - reference.total_mass).abs() / reference.total_mass.abs()
        } else {
            self.total_mass.abs()
        }
    }
}
