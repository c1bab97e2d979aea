//! Error types for the solver engine

use apiary_config::ConfigError;
use apiary_core::CubeError;
use thiserror::Error;

/// Errors raised while building or running a solver.
///
/// Running out of iterations or being cancelled are outcomes, not errors; see
/// [`StepOutcome`](crate::StepOutcome) and [`RunOutcome`](crate::RunOutcome).
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cube error: {0}")]
    Cube(#[from] CubeError),

    #[error("Failed to spawn solver thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("Solver thread panicked")]
    Panicked,
}

/// Result type alias for solver operations
pub type Result<T> = std::result::Result<T, SolverError>;
