//! Strongly-typed block geometry.
//!
//! Keeps interior cell counts and physical cell widths apart from the
//! many other `usize`/`f64` parameters a block takes.
//!
//! # Example
//!
//! ```
//! use swe_block::types::{CellSize, Resolution2D};
//!
//! let res = Resolution2D::new(64, 32).unwrap();
//! let cells = CellSize::new(10.0, 5.0).unwrap();
//! assert_eq!(res.interior_cells(), 2048);
//! assert_eq!(cells.min_width(), 5.0);
//! ```

mod cell_size;
mod resolution;

pub use cell_size::CellSize;
pub use resolution::Resolution2D;
