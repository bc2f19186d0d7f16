//! Severity-tagged diagnostic events.

use std::fmt;

/// Severity of a diagnostic event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warning,
}

impl Severity {
    /// Matching `log` level.
    pub fn log_level(&self) -> log::Level {
        match self {
            Severity::Debug => log::Level::Debug,
            Severity::Info => log::Level::Info,
            Severity::Warning => log::Level::Warn,
        }
    }
}

/// Runtime verbosity: which severities reach a sink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verbosity {
    /// Nothing is emitted
    Quiet,
    /// Warnings only
    #[default]
    Warnings,
    /// Warnings and informational events
    Info,
    /// Everything
    Debug,
}

impl Verbosity {
    /// Whether events of `severity` pass this verbosity.
    #[inline]
    pub fn allows(&self, severity: Severity) -> bool {
        match self {
            Verbosity::Quiet => false,
            Verbosity::Warnings => severity >= Severity::Warning,
            Verbosity::Info => severity >= Severity::Info,
            Verbosity::Debug => true,
        }
    }
}

/// Diagnostic events raised by a block.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// Post-update depth far below zero; the cell is clipped to dry anyway.
    NegativeDepth {
        i: usize,
        j: usize,
        /// Height before clipping
        h: f64,
        /// Bathymetry of the cell
        b: f64,
    },
    /// Summary of the clipping applied by one update.
    CellsClipped {
        /// Cells with negative depth reset to dry
        negative: usize,
        /// Thin-water cells whose momentum was zeroed
        thin: usize,
    },
    /// No wave motion detected; the block does not limit the time step.
    UnconstrainedTimeStep { max_wave_speed: f64 },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::NegativeDepth { .. } => Severity::Warning,
            Diagnostic::CellsClipped { .. } | Diagnostic::UnconstrainedTimeStep { .. } => {
                Severity::Debug
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeDepth { i, j, h, b } => write!(
                f,
                "Negative height at (i,j)=({},{}): h={:.6}, b={:.6}",
                i, j, h, b
            ),
            Self::CellsClipped { negative, thin } => write!(
                f,
                "Clipped {} negative-depth cells, zeroed momentum in {} thin cells",
                negative, thin
            ),
            Self::UnconstrainedTimeStep { max_wave_speed } => write!(
                f,
                "Time step unconstrained (max wave speed {:.3e})",
                max_wave_speed
            ),
        }
    }
}
