//! Apiary Solver - bees-algorithm search over cube move sequences
//!
//! This crate provides:
//! - [`BeesSolver`]: one exploit, explore, select and check round per call
//! - Phase functions for local search, scouting and selection
//! - [`SolverRunner`]: iteration loop with cancellation, time limit and
//!   progress publishing
//! - CSV run logs and the solution artifact
//! - Atomic statistics collection

pub mod error;
pub mod phase;
pub mod report;
pub mod runner;
pub mod solver;
pub mod statistics;

#[cfg(test)]
mod test_utils;

pub use apiary_config::PublishPolicy;
pub use error::{Result, SolverError};
pub use report::{RunLog, RunParameters, SolutionArtifact};
pub use runner::{
    BoxedProgressListener, ProgressListener, RunOutcome, RunReport, RunningSolver, SharedBest,
    Snapshot, SolverHandle, SolverRunner,
};
pub use solver::{BeesSolver, StepOutcome};
pub use statistics::{IterationRecord, SolverStatistics, StatisticsCollector};
