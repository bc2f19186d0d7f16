//! # swe-block
//!
//! Numerical core of a two-dimensional shallow-water wave-propagation block.
//!
//! A block is a rectangular patch of `nx × ny` finite-volume cells, framed
//! by one layer of ghost cells, holding water height `h`, momenta `hu` and
//! `hv`, and bathymetry `b`. Each time step:
//! - Sweeps vertical and horizontal edges with a pluggable net-update
//!   (approximate Riemann) solver, in batches of independent edges
//! - Reduces the maximum wave speed into a CFL time step
//! - Applies the net updates with an externally chosen `dt`, clipping
//!   negative and thin-water cells
//!
//! The crate also provides:
//! - F-wave and HLLE net-update solvers
//! - Ghost-layer boundary fill (walls, outflow)
//! - Severity-tagged diagnostics routed to `log` or a custom sink
//! - A single-block simulation driver
//!
//! # Example
//!
//! ```
//! use swe_block::{
//!     BlockConfig, BoundaryConditions, CellSize, Resolution2D, StandardSolver,
//!     WavePropagationBlock, global_time_step,
//! };
//!
//! let res = Resolution2D::new(32, 32).unwrap();
//! let mut block = WavePropagationBlock::new(
//!     res,
//!     CellSize::uniform(10.0).unwrap(),
//!     StandardSolver::default(),
//!     BlockConfig::default(),
//! )
//! .unwrap();
//! block.state_mut().set_unknowns(|i, j| {
//!     let r2 = (i as f64 - 16.0).powi(2) + (j as f64 - 16.0).powi(2);
//!     (if r2 < 25.0 { 3.0 } else { 1.0 }, 0.0, 0.0)
//! });
//!
//! block.apply_boundaries(&BoundaryConditions::walls());
//! let fluxes = block.compute_numerical_fluxes();
//! let dt = global_time_step(&[fluxes.max_time_step]);
//! let summary = block.update_unknowns(dt).unwrap();
//! assert_eq!(summary.negative_clipped, 0);
//! ```
//!
//! # Features
//!
//! - `parallel`: sweep independent edge lines on the rayon thread pool

pub mod block;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod grid;
pub mod riemann;
pub mod simulation;
pub mod types;

pub use block::{
    FluxSummary, MaxSpeed, UNCONSTRAINED, UpdateSummary, WavePropagationBlock, stable_time_step,
};
pub use config::BlockConfig;
pub use diagnostics::{
    BlockDiagnostics, CollectingSink, Diagnostic, DiagnosticSink, LogSink, Severity, Verbosity,
};
pub use error::{BlockError, BlockResult};
pub use grid::{
    Array2D, ArrayViewMut, BlockState, BlockStateMut, BoundaryConditions, BoundaryType, NetUpdates,
};
pub use riemann::{
    BoxedSolver, EdgeState, FWaveSolver, HlleSolver, NetUpdateSolver, SolverKind, SolverParams,
    StandardSolver, create_solver,
};
pub use simulation::{Simulation, SimulationConfig, SimulationResult, global_time_step};
pub use types::{CellSize, Resolution2D};
