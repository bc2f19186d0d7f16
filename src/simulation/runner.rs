//! Simulation runner implementation.
//!
//! Drives a single block through boundary fill, flux computation and state
//! update until an end time.

use crate::block::{UNCONSTRAINED, WavePropagationBlock};
use crate::error::{BlockError, BlockResult};
use crate::grid::{BlockState, BoundaryConditions};
use crate::riemann::{NetUpdateSolver, StandardSolver};

// =============================================================================
// Time-Step Reduction
// =============================================================================

/// Global time step: the minimum over the proposals of several blocks.
///
/// An empty slice, or one holding only unconstrained proposals, yields
/// [`UNCONSTRAINED`].
///
/// ```
/// use swe_block::{UNCONSTRAINED, global_time_step};
///
/// assert_eq!(global_time_step(&[0.3, UNCONSTRAINED, 0.1]), 0.1);
/// assert_eq!(global_time_step(&[]), UNCONSTRAINED);
/// ```
pub fn global_time_step(proposals: &[f64]) -> f64 {
    proposals.iter().copied().fold(UNCONSTRAINED, f64::min)
}

// =============================================================================
// Simulation Configuration
// =============================================================================

/// Configuration for a simulation run.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfig {
    /// Maximum time step (overrides CFL if smaller).
    pub dt_max: Option<f64>,
    /// Maximum number of time steps per [`Simulation::advance`] call.
    pub max_steps: Option<usize>,
}

// =============================================================================
// Simulation Result
// =============================================================================

/// Result of a simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationResult {
    /// Final simulation time reached.
    pub final_time: f64,
    /// Total number of time steps taken.
    pub n_steps: usize,
    /// Minimum time step used.
    pub dt_min: f64,
    /// Maximum time step used.
    pub dt_max: f64,
}

// =============================================================================
// Simulation Runner
// =============================================================================

/// A block together with its boundary conditions and the current time.
pub struct Simulation<S: NetUpdateSolver = StandardSolver> {
    block: WavePropagationBlock<S>,
    boundaries: BoundaryConditions,
    config: SimulationConfig,
    time: f64,
}

impl<S: NetUpdateSolver> Simulation<S> {
    /// Start at `t = 0`.
    pub fn new(block: WavePropagationBlock<S>, boundaries: BoundaryConditions) -> Self {
        Self {
            block,
            boundaries,
            config: SimulationConfig::default(),
            time: 0.0,
        }
    }

    /// Set the maximum time step.
    pub fn with_dt_max(mut self, dt_max: f64) -> Self {
        self.config.dt_max = Some(dt_max);
        self
    }

    /// Set the maximum number of steps.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.config.max_steps = Some(max_steps);
        self
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn block(&self) -> &WavePropagationBlock<S> {
        &self.block
    }

    pub fn block_mut(&mut self) -> &mut WavePropagationBlock<S> {
        &mut self.block
    }

    pub fn into_block(self) -> WavePropagationBlock<S> {
        self.block
    }

    /// Advance to `t_end`.
    pub fn advance(&mut self, t_end: f64) -> BlockResult<SimulationResult> {
        self.advance_with_callback(t_end, |_, _| {})
    }

    /// Advance to `t_end`, calling `callback` with the state and time after
    /// every step.
    ///
    /// # Errors
    ///
    /// `StepLimitReached` when `max_steps` steps did not reach `t_end`; the
    /// simulation stays at the time reached and can be resumed.
    pub fn advance_with_callback<F>(
        &mut self,
        t_end: f64,
        mut callback: F,
    ) -> BlockResult<SimulationResult>
    where
        F: FnMut(&BlockState, f64),
    {
        let mut n_steps = 0;
        let mut dt_min_used = f64::INFINITY;
        let mut dt_max_used: f64 = 0.0;

        log::debug!(
            target: "swe_block",
            "advancing {} from t = {:.4} to t = {:.4}",
            self.block.solver().name(),
            self.time,
            t_end
        );

        while self.time < t_end {
            if let Some(max_steps) = self.config.max_steps
                && n_steps >= max_steps
            {
                return Err(BlockError::StepLimitReached {
                    max_steps,
                    time: self.time,
                });
            }

            self.block.apply_boundaries(&self.boundaries);
            let fluxes = self.block.compute_numerical_fluxes();

            let remaining = t_end - self.time;
            let mut dt = global_time_step(&[fluxes.max_time_step, remaining]);
            if let Some(dt_max) = self.config.dt_max {
                dt = dt.min(dt_max);
            }

            self.block.update_unknowns(dt)?;

            // Land exactly on the end time
            if dt >= remaining {
                self.time = t_end;
            } else {
                self.time += dt;
            }
            n_steps += 1;
            dt_min_used = dt_min_used.min(dt);
            dt_max_used = dt_max_used.max(dt);

            callback(self.block.state(), self.time);

            if n_steps % 100 == 0 {
                log::debug!(
                    target: "swe_block",
                    "step {}: t = {:.4}, dt = {:.2e}",
                    n_steps,
                    self.time,
                    dt
                );
            }
        }

        log::info!(
            target: "swe_block",
            "reached t = {:.4} in {} steps, dt range [{:.2e}, {:.2e}]",
            self.time,
            n_steps,
            dt_min_used,
            dt_max_used
        );

        Ok(SimulationResult {
            final_time: self.time,
            n_steps,
            dt_min: dt_min_used,
            dt_max: dt_max_used,
        })
    }
}
