//! Single-block simulation driver.
//!
//! Each step fills the ghost layer, computes the numerical fluxes, picks
//! `dt = min(max_time_step, t_end - t)` and updates the unknowns. Several
//! blocks would share one step through [`global_time_step`].
//!
//! # Example
//! ```
//! use swe_block::{
//!     BlockConfig, BoundaryConditions, CellSize, Resolution2D, Simulation, StandardSolver,
//!     WavePropagationBlock,
//! };
//!
//! let mut block = WavePropagationBlock::new(
//!     Resolution2D::new(16, 4).unwrap(),
//!     CellSize::uniform(1.0).unwrap(),
//!     StandardSolver::default(),
//!     BlockConfig::default(),
//! )
//! .unwrap();
//! block.state_mut().set_unknowns(|i, _| (if i <= 8 { 2.0 } else { 1.0 }, 0.0, 0.0));
//!
//! let result = Simulation::new(block, BoundaryConditions::walls())
//!     .with_max_steps(1000)
//!     .advance(1.0)
//!     .unwrap();
//! assert_eq!(result.final_time, 1.0);
//! ```

mod runner;

pub use runner::{Simulation, SimulationConfig, SimulationResult, global_time_step};
