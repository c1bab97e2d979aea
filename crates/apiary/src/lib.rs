//! Apiary - a Rubik's cube solver driven by the Bees Algorithm
//!
//! A population of candidate move sequences is improved by local search on
//! the best candidates (exploitation) and by scouts seeded from elites or
//! the scramble (exploration) until one of them solves the cube.
//!
//! # Example
//!
//! ```rust
//! use apiary::prelude::*;
//!
//! let mut config = ApiaryConfig::new()
//!     .with_scramble("R")
//!     .with_population(10, 10, 5)
//!     .with_random_seed(42);
//! config.output.save_solution = false;
//!
//! let report = apiary::solve(&config).unwrap();
//! assert_eq!(report.outcome, RunOutcome::Solved);
//! ```

// Cube model
pub use apiary_core::{
    format_sequence, parse_sequence, Candidate, Catalog, Color, Cube, CubeError, CubeScore, Face,
    MacroLibrary, MacroRef, MoveToken, Scramble,
};

// Configuration
pub use apiary_config::{
    ApiaryConfig, ConfigError, MutationSchedule, OutputConfig, PublishPolicy, SolverConfig,
};

// Search and runner
pub use apiary_solver::{
    BeesSolver, ProgressListener, RunOutcome, RunReport, RunningSolver, Snapshot, SolverError,
    SolverHandle, SolverRunner, SolverStatistics, StepOutcome,
};

#[cfg(feature = "console")]
pub use apiary_console as console;

mod solve;
pub use solve::{load_config, resolve_scramble, solve, DEFAULT_CONFIG_PATH};

pub mod prelude {
    pub use super::{ApiaryConfig, Cube, CubeScore, MoveToken, Scramble};
    pub use super::{RunOutcome, RunReport, SolverHandle, SolverRunner};
}
