//! CFL time-step derivation.

use crate::config::BlockConfig;
use crate::types::CellSize;

/// Time step reported when no wave motion limits the block.
///
/// Callers combine block proposals with `min`, so the sentinel never wins
/// against a finite constraint.
pub const UNCONSTRAINED: f64 = f64::MAX;

/// Largest stable time step for a block whose fastest wave travels at
/// `max_wave_speed`.
///
/// `safety · min(dx, dy) / v` when `v > zero_speed_epsilon`, otherwise
/// [`UNCONSTRAINED`].
///
/// # Example
///
/// ```
/// use swe_block::{BlockConfig, CellSize, stable_time_step, UNCONSTRAINED};
///
/// let cells = CellSize::new(2.0, 1.0).unwrap();
/// let config = BlockConfig::default();
/// assert!((stable_time_step(5.0, cells, &config) - 0.08).abs() < 1e-12);
/// assert_eq!(stable_time_step(0.0, cells, &config), UNCONSTRAINED);
/// ```
pub fn stable_time_step(max_wave_speed: f64, cell_size: CellSize, config: &BlockConfig) -> f64 {
    if max_wave_speed > config.zero_speed_epsilon {
        cell_size.min_width() / max_wave_speed * config.cfl_safety_factor
    } else {
        UNCONSTRAINED
    }
}
