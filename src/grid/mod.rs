//! Block storage: ghost-inclusive cell arrays and per-edge net updates.
//!
//! Flux and update code address cells and edges through `(i, j)` indexing
//! or whole-row slices only; no caller computes linear offsets.

mod array2d;
mod boundary;
mod net_updates;
mod state;

pub use array2d::{Array2D, ArrayViewMut};
pub use boundary::{BoundaryConditions, BoundaryType};
pub use net_updates::NetUpdates;
pub use state::{BlockState, BlockStateMut};
