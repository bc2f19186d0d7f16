//! Approximate Riemann solvers in net-update form.
//!
//! The block treats the solver as a pure, pluggable function over batches of
//! independent edges (see [`NetUpdateSolver`]). Two implementations ship
//! with the crate:
//! - [`FWaveSolver`]: f-wave decomposition with Roe speeds
//! - [`HlleSolver`]: the same decomposition with Einfeldt speed bounds
//!
//! [`StandardSolver`] selects between them at runtime without boxing.

mod fwave;
mod hlle;
mod traits;

use std::fmt;
use std::str::FromStr;

use crate::error::BlockResult;

pub use fwave::FWaveSolver;
pub use hlle::HlleSolver;
pub use traits::{
    EdgeBatch, EdgeNetUpdates, EdgeState, NetUpdateBatch, NetUpdateSolver, SolverParams,
};

// =============================================================================
// Standard Solver Enum (Zero-Cost Dispatch)
// =============================================================================

/// Built-in solver selected at runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StandardSolver {
    FWave(FWaveSolver),
    Hlle(HlleSolver),
}

/// Names of the built-in solvers, as accepted by [`SolverKind::from_str`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SolverKind {
    #[default]
    FWave,
    Hlle,
}

impl SolverKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SolverKind::FWave => "fwave",
            SolverKind::Hlle => "hlle",
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SolverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fwave" | "f-wave" => Ok(SolverKind::FWave),
            "hlle" => Ok(SolverKind::Hlle),
            other => Err(format!("unknown net-update solver `{}`", other)),
        }
    }
}

impl StandardSolver {
    /// Build the solver named by `kind`.
    pub fn new(kind: SolverKind, params: SolverParams) -> Self {
        match kind {
            SolverKind::FWave => StandardSolver::FWave(FWaveSolver::new(params)),
            SolverKind::Hlle => StandardSolver::Hlle(HlleSolver::new(params)),
        }
    }

    pub fn kind(&self) -> SolverKind {
        match self {
            StandardSolver::FWave(_) => SolverKind::FWave,
            StandardSolver::Hlle(_) => SolverKind::Hlle,
        }
    }

    pub fn params(&self) -> &SolverParams {
        match self {
            StandardSolver::FWave(s) => s.params(),
            StandardSolver::Hlle(s) => s.params(),
        }
    }
}

impl Default for StandardSolver {
    fn default() -> Self {
        Self::new(SolverKind::default(), SolverParams::default())
    }
}

impl NetUpdateSolver for StandardSolver {
    #[inline]
    fn compute_edge(&self, edge: &EdgeState) -> EdgeNetUpdates {
        match self {
            StandardSolver::FWave(s) => s.compute_edge(edge),
            StandardSolver::Hlle(s) => s.compute_edge(edge),
        }
    }

    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    fn validate(&self) -> BlockResult<()> {
        self.params().validate()
    }
}

// =============================================================================
// Boxed Solver (Runtime Polymorphism)
// =============================================================================

/// Boxed solver for configuration-driven selection or user-supplied solvers.
pub type BoxedSolver = Box<dyn NetUpdateSolver>;

/// Create a boxed built-in solver.
pub fn create_solver(kind: SolverKind, params: SolverParams) -> BoxedSolver {
    match kind {
        SolverKind::FWave => Box::new(FWaveSolver::new(params)),
        SolverKind::Hlle => Box::new(HlleSolver::new(params)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_kind_parsing() {
        assert_eq!("fwave".parse::<SolverKind>(), Ok(SolverKind::FWave));
        assert_eq!("F-Wave".parse::<SolverKind>(), Ok(SolverKind::FWave));
        assert_eq!("HLLE".parse::<SolverKind>(), Ok(SolverKind::Hlle));
        assert!("roe".parse::<SolverKind>().is_err());
    }

    #[test]
    fn test_standard_solver_matches_concrete() {
        let params = SolverParams::default();
        let e = EdgeState::new((2.0, 1.0), (0.5, -0.5), (0.0, 0.1));
        assert_eq!(
            StandardSolver::new(SolverKind::FWave, params).compute_edge(&e),
            FWaveSolver::new(params).compute_edge(&e)
        );
        assert_eq!(
            StandardSolver::new(SolverKind::Hlle, params).compute_edge(&e),
            HlleSolver::new(params).compute_edge(&e)
        );
    }

    #[test]
    fn test_boxed_solver() {
        let params = SolverParams::default();
        let solver = create_solver(SolverKind::Hlle, params);
        assert_eq!(solver.name(), "hlle");
        let e = EdgeState::new((1.0, 3.0), (0.0, 0.0), (0.0, 0.0));
        assert_eq!(solver.compute_edge(&e), HlleSolver::new(params).compute_edge(&e));
    }

    #[test]
    fn test_validate_checks_params() {
        let bad = SolverParams::default().with_dry_tol(0.0);
        assert!(StandardSolver::new(SolverKind::FWave, bad).validate().is_err());
        assert!(create_solver(SolverKind::Hlle, bad).validate().is_err());
        assert!(StandardSolver::default().validate().is_ok());
    }

    #[test]
    fn test_names() {
        assert_eq!(StandardSolver::default().name(), "fwave");
        assert_eq!(SolverKind::Hlle.to_string(), "hlle");
    }
}
