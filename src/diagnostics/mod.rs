//! Runtime diagnostics for a wave-propagation block.
//!
//! - Severity-tagged events ([`Diagnostic`]) filtered by a runtime
//!   [`Verbosity`] and delivered to a [`DiagnosticSink`]
//! - Conservation and bounds summaries ([`BlockDiagnostics`])
//!
//! Emission never touches the numerical state.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use swe_block::diagnostics::{CollectingSink, Diagnostic, DiagnosticSink};
//!
//! let sink = Arc::new(CollectingSink::new());
//! sink.emit(&Diagnostic::CellsClipped { negative: 0, thin: 3 });
//! assert_eq!(sink.len(), 1);
//! ```

mod events;
mod sink;
mod summary;

pub use events::{Diagnostic, Severity, Verbosity};
pub use sink::{CollectingSink, DiagnosticSink, LogSink};
pub use summary::BlockDiagnostics;
