//! Wave-propagation block: flux sweeps, CFL time step and state update.
//!
//! One time step of a block is two calls, always in this order:
//!
//! 1. [`WavePropagationBlock::compute_numerical_fluxes`] evaluates the
//!    net-update solver at every vertical and horizontal edge, reduces the
//!    maximum signal speed and derives the block's stable time step.
//! 2. [`WavePropagationBlock::update_unknowns`] applies the net updates
//!    with a caller-chosen `dt` (usually the minimum over all blocks) and
//!    clips negative and thin-water cells.
//!
//! Edges along one sweep line are handed to the solver in batches of
//! `lane_width`; the results do not depend on the width.
//!
//! # Example
//!
//! ```
//! use swe_block::{BlockConfig, CellSize, Resolution2D, StandardSolver, WavePropagationBlock};
//!
//! let res = Resolution2D::new(8, 8).unwrap();
//! let mut block = WavePropagationBlock::new(
//!     res,
//!     CellSize::uniform(1.0).unwrap(),
//!     StandardSolver::default(),
//!     BlockConfig::default(),
//! )
//! .unwrap();
//! block.state_mut().set_unknowns(|i, _| (if i <= 4 { 2.0 } else { 1.0 }, 0.0, 0.0));
//!
//! let fluxes = block.compute_numerical_fluxes();
//! assert!(fluxes.max_wave_speed > 0.0);
//! block.update_unknowns(fluxes.max_time_step).unwrap();
//! ```

mod batch;
mod sweep;
mod timestep;
mod update;

use std::sync::Arc;

pub use batch::MaxSpeed;
pub use timestep::{UNCONSTRAINED, stable_time_step};
pub use update::UpdateSummary;

use crate::config::BlockConfig;
use crate::diagnostics::{BlockDiagnostics, Diagnostic, DiagnosticSink, LogSink};
use crate::error::{BlockError, BlockResult};
use crate::grid::{BlockState, BlockStateMut, BoundaryConditions, NetUpdates};
use crate::riemann::{NetUpdateSolver, StandardSolver};
use crate::types::{CellSize, Resolution2D};
use sweep::{SweepPlan, sweep_horizontal, sweep_vertical};

/// Outcome of one flux computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FluxSummary {
    /// Largest signal speed over all edges of the block
    pub max_wave_speed: f64,
    /// Stable time step, or [`UNCONSTRAINED`]
    pub max_time_step: f64,
}

impl FluxSummary {
    /// Whether no wave motion limits the time step.
    pub fn is_unconstrained(&self) -> bool {
        self.max_time_step == UNCONSTRAINED
    }
}

/// A rectangular block of shallow-water cells with its net-update buffers.
pub struct WavePropagationBlock<S: NetUpdateSolver = StandardSolver> {
    cell_size: CellSize,
    state: BlockState,
    net_updates: NetUpdates,
    solver: S,
    config: BlockConfig,
    sink: Arc<dyn DiagnosticSink>,
    max_time_step: f64,
    max_wave_speed: f64,
    fluxes_current: bool,
}

impl<S: NetUpdateSolver> WavePropagationBlock<S> {
    /// Dry, flat block with zero-initialised net-update buffers.
    pub fn new(
        resolution: Resolution2D,
        cell_size: CellSize,
        solver: S,
        config: BlockConfig,
    ) -> BlockResult<Self> {
        Self::with_state(resolution, cell_size, BlockState::new(resolution), solver, config)
    }

    /// Block over externally prepared cell arrays.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `state` was built for another resolution,
    /// `InvalidConfig` if `config` or the solver's parameters do not validate.
    pub fn with_state(
        resolution: Resolution2D,
        cell_size: CellSize,
        state: BlockState,
        solver: S,
        config: BlockConfig,
    ) -> BlockResult<Self> {
        config.validate()?;
        solver.validate()?;
        if state.resolution() != resolution {
            return Err(BlockError::dimension_mismatch(
                "state",
                resolution.cell_dims(),
                state.resolution().cell_dims(),
            ));
        }
        if config.parallel && !cfg!(feature = "parallel") {
            log::warn!(
                target: "swe_block",
                "parallel sweeps requested but the `parallel` feature is disabled; sweeping sequentially"
            );
        }

        log::debug!(
            target: "swe_block",
            "block {} cells, dx={}, dy={}, solver={}, lane width {}",
            resolution,
            cell_size.dx(),
            cell_size.dy(),
            solver.name(),
            config.lane_width
        );

        Ok(Self {
            cell_size,
            net_updates: NetUpdates::new(resolution),
            state,
            solver,
            config,
            sink: Arc::new(LogSink),
            max_time_step: UNCONSTRAINED,
            max_wave_speed: 0.0,
            fluxes_current: false,
        })
    }

    /// Route diagnostic events to `sink` instead of the `log` facade.
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    // ===== Time stepping =====

    /// Net updates at every edge, maximum wave speed and stable time step.
    ///
    /// Reads `h`, `hu`, `hv` and `b` of all cells including the ghost layer,
    /// so boundaries must be filled beforehand.
    pub fn compute_numerical_fluxes(&mut self) -> FluxSummary {
        let plan = SweepPlan {
            lane_width: self.config.lane_width,
            parallel: self.config.parallel && cfg!(feature = "parallel"),
        };

        let vertical = sweep_vertical(&self.solver, &self.state, &mut self.net_updates, plan);
        let horizontal = sweep_horizontal(&self.solver, &self.state, &mut self.net_updates, plan);
        let max_wave_speed = vertical.combine(horizontal).get();

        self.max_wave_speed = max_wave_speed;
        self.max_time_step = stable_time_step(max_wave_speed, self.cell_size, &self.config);
        self.fluxes_current = true;

        let summary = FluxSummary {
            max_wave_speed,
            max_time_step: self.max_time_step,
        };
        if summary.is_unconstrained() {
            self.emit(Diagnostic::UnconstrainedTimeStep { max_wave_speed });
        }
        log::trace!(
            target: "swe_block",
            "fluxes: max wave speed {:.6e}, max dt {:.6e}",
            max_wave_speed,
            self.max_time_step
        );
        summary
    }

    /// Advance the interior cells by `dt` using the last computed net updates.
    ///
    /// # Errors
    ///
    /// `InvalidTimeStep` for a negative or non-finite `dt`,
    /// `StaleNetUpdates` if the state changed since the last
    /// [`compute_numerical_fluxes`](Self::compute_numerical_fluxes).
    pub fn update_unknowns(&mut self, dt: f64) -> BlockResult<UpdateSummary> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(BlockError::InvalidTimeStep(dt));
        }
        if !self.fluxes_current {
            return Err(BlockError::StaleNetUpdates);
        }

        let summary = update::update_cells(
            &mut self.state,
            &self.net_updates,
            self.cell_size,
            dt,
            &self.config,
            self.sink.as_ref(),
        );
        self.fluxes_current = false;
        Ok(summary)
    }

    /// Fill the ghost layer; net updates become stale.
    pub fn apply_boundaries(&mut self, bc: &BoundaryConditions) {
        self.state.apply_boundaries(bc);
        self.fluxes_current = false;
    }

    fn emit(&self, event: Diagnostic) {
        if self.config.verbosity.allows(event.severity()) {
            self.sink.emit(&event);
        }
    }

    // ===== Accessors =====

    pub fn resolution(&self) -> Resolution2D {
        self.state.resolution()
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    pub fn config(&self) -> &BlockConfig {
        &self.config
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }

    pub fn state(&self) -> &BlockState {
        &self.state
    }

    /// Writable cells; net updates become stale.
    ///
    /// The state cannot be replaced, so the block's resolution and every
    /// array shape stay as validated at construction.
    pub fn state_mut(&mut self) -> BlockStateMut<'_> {
        self.fluxes_current = false;
        BlockStateMut::new(&mut self.state)
    }

    pub fn into_state(self) -> BlockState {
        self.state
    }

    /// Net updates from the last flux computation.
    pub fn net_updates(&self) -> &NetUpdates {
        &self.net_updates
    }

    /// Stable time step from the last flux computation ([`UNCONSTRAINED`]
    /// before the first).
    pub fn max_time_step(&self) -> f64 {
        self.max_time_step
    }

    pub fn max_wave_speed(&self) -> f64 {
        self.max_wave_speed
    }

    /// Conservation and bounds summary; cells below the dry tolerance count as dry.
    pub fn diagnostics(&self) -> BlockDiagnostics {
        BlockDiagnostics::compute(&self.state, self.cell_size, self.config.dry_tolerance)
    }
}
