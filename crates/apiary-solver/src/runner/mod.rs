//! Solver runner.
//!
//! Drives [`BeesSolver::solve`] until the cube is solved, the iteration
//! budget is spent, the wall-clock limit passes, or cancellation is
//! requested. After every iteration the runner publishes a deep-copied
//! [`Snapshot`] into the shared slot, invokes the optional
//! [`ProgressListener`] while holding the slot's lock, and forwards the
//! snapshot to an optional tokio channel.
//!
//! # Example
//!
//! ```
//! use apiary_config::ApiaryConfig;
//! use apiary_core::Scramble;
//! use apiary_solver::runner::{RunOutcome, SolverRunner};
//!
//! let mut config = ApiaryConfig::new()
//!     .with_population(10, 10, 5)
//!     .with_max_iterations(2)
//!     .with_random_seed(7);
//! config.output.save_solution = false;
//!
//! let scramble = Scramble::parse("R U F' L2 D B'").unwrap();
//! let runner = SolverRunner::new(scramble, &config);
//! let handle = runner.handle();
//!
//! let report = runner.spawn().unwrap().join().unwrap();
//! assert!(matches!(
//!     report.outcome,
//!     RunOutcome::Solved | RunOutcome::IterationLimitExceeded
//! ));
//! assert!(handle.best().is_some());
//! assert!(!handle.is_solving());
//! ```

mod handle;
mod listener;

use std::path::PathBuf;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use apiary_config::{ApiaryConfig, OutputConfig, PublishPolicy, SolverConfig};
use apiary_core::{Candidate, MacroLibrary, MoveToken, Scramble};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use crate::error::{Result, SolverError};
use crate::report::{unix_timestamp, RunLog, RunParameters, SolutionArtifact};
use crate::solver::{BeesSolver, StepOutcome};
use crate::statistics::SolverStatistics;

pub use handle::{lock_slot, SharedBest, Snapshot, SolverHandle};
pub use listener::{BoxedProgressListener, ProgressListener};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Solved,
    IterationLimitExceeded,
    TimeLimitReached,
    Cancelled,
}

impl RunOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            RunOutcome::Solved => "solved",
            RunOutcome::IterationLimitExceeded => "iteration_limit",
            RunOutcome::TimeLimitReached => "time_limit",
            RunOutcome::Cancelled => "cancelled",
        }
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcome: RunOutcome,
    /// Iterations actually searched.
    pub iterations: usize,
    pub elapsed: Duration,
    /// Best candidate at the end of the run.
    pub best: Candidate,
    /// Translated solution moves, if solved.
    pub solution: Option<Vec<MoveToken>>,
    /// Where the solution artifact was written, if it was.
    pub solution_path: Option<PathBuf>,
    pub statistics: SolverStatistics,
}

impl RunReport {
    pub fn is_solved(&self) -> bool {
        self.outcome == RunOutcome::Solved
    }

    /// Hyperparameter-search metric: elapsed seconds, doubled when unsolved.
    pub fn loss(&self) -> f64 {
        let seconds = self.elapsed.as_secs_f64();
        if self.is_solved() {
            seconds
        } else {
            seconds * 2.0
        }
    }
}

/// Runs one solve, on the caller's thread or a dedicated one.
pub struct SolverRunner {
    scramble: Arc<Scramble>,
    library: Arc<MacroLibrary>,
    config: SolverConfig,
    output: OutputConfig,
    handle: SolverHandle,
    listener: Option<BoxedProgressListener>,
    snapshots: Option<UnboundedSender<Snapshot>>,
}

impl SolverRunner {
    pub fn new(scramble: Scramble, config: &ApiaryConfig) -> Self {
        Self::from_parts(
            Arc::new(scramble),
            config.solver.clone(),
            config.output.clone(),
        )
    }

    pub fn from_parts(scramble: Arc<Scramble>, config: SolverConfig, output: OutputConfig) -> Self {
        Self {
            scramble,
            library: MacroLibrary::builtin(),
            config,
            output,
            handle: SolverHandle::new(),
            listener: None,
            snapshots: None,
        }
    }

    /// Uses a custom macro library instead of the built-in one.
    pub fn with_library(mut self, library: Arc<MacroLibrary>) -> Self {
        self.library = library;
        self
    }

    /// Shares flags and slot with an existing handle.
    pub fn with_handle(mut self, handle: SolverHandle) -> Self {
        self.handle = handle;
        self
    }

    pub fn with_listener(mut self, listener: impl ProgressListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Opens a channel that receives a copy of every published snapshot.
    pub fn subscribe(&mut self) -> UnboundedReceiver<Snapshot> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.snapshots = Some(tx);
        rx
    }

    pub fn handle(&self) -> SolverHandle {
        self.handle.clone()
    }

    /// Solves on the current thread.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Config`] for invalid parameters and
    /// [`SolverError::Cube`] if a history fails to translate.
    pub fn run(mut self) -> Result<RunReport> {
        let handle = self.handle.clone();
        handle.set_solving(true);
        let result = self.run_loop();
        handle.set_solving(false);
        result
    }

    /// Solves on a dedicated thread named `apiary-solver`.
    pub fn spawn(self) -> Result<RunningSolver> {
        let handle = self.handle.clone();
        handle.set_solving(true);
        let thread = thread::Builder::new()
            .name("apiary-solver".to_string())
            .spawn(move || self.run())
            .map_err(|err| {
                handle.set_solving(false);
                SolverError::Spawn(err)
            })?;
        Ok(RunningSolver { handle, thread })
    }

    fn run_loop(&mut self) -> Result<RunReport> {
        let start = Instant::now();
        let time_limit = self.config.time_limit();
        let mut solver = BeesSolver::with_library(
            Arc::clone(&self.scramble),
            Arc::clone(&self.library),
            self.config.clone(),
        )?;
        let params = RunParameters::from(&self.config);
        let log = RunLog::new(self.output.log_dir.clone(), params, unix_timestamp());

        info!(
            event = "solve_start",
            scramble = %self.scramble,
            scramble_length = self.scramble.len() as u64,
            population = self.config.initial_population_size as u64,
            scouts = self.config.num_scouts as u64,
            local_searches = self.config.num_local_searches as u64,
            max_iterations = self.config.max_iterations as u64,
            time_limit_secs = self.config.seconds_spent_limit.unwrap_or(0),
            score = %solver.origin().score(),
        );

        let mut published = Some(solver.origin().score().selection_key());
        {
            let shared = self.handle.shared_best();
            let mut slot = lock_slot(&shared);
            if slot.is_none() {
                *slot = Some(Snapshot {
                    iteration: 0,
                    candidate: solver.origin().clone(),
                    moves: Vec::new(),
                });
            }
        }

        let mut iteration = 0;
        let (outcome, best, solution) = loop {
            let stop = if self.handle.is_terminate_early_requested() {
                Some(RunOutcome::Cancelled)
            } else if time_limit.is_some_and(|limit| start.elapsed() >= limit) {
                Some(RunOutcome::TimeLimitReached)
            } else {
                None
            };
            if let Some(outcome) = stop {
                let best = solver.best().clone();
                self.publish(&mut published, iteration, &best, Vec::new());
                break (outcome, best, None);
            }

            match solver.solve(iteration)? {
                StepOutcome::Solved { candidate, moves } => {
                    log.log_iteration(iteration, candidate.score());
                    iteration += 1;
                    self.publish(&mut published, iteration, &candidate, moves.clone());
                    break (RunOutcome::Solved, candidate, Some(moves));
                }
                StepOutcome::Searching { best } => {
                    let score = best.score();
                    debug!(
                        event = "iteration_end",
                        iteration = iteration as u64,
                        score = %score,
                        total = score.total() as u64,
                        corners = score.corners() as u64,
                        edges = score.edges() as u64,
                    );
                    log.log_iteration(iteration, score);
                    iteration += 1;
                    self.publish(&mut published, iteration, &best, Vec::new());
                }
                StepOutcome::IterationLimitExceeded { best } => {
                    let moves = best.solution()?;
                    self.publish(&mut published, iteration, &best, moves);
                    break (RunOutcome::IterationLimitExceeded, best, None);
                }
            }
        };

        let elapsed = start.elapsed();
        log.log_execution(iteration, elapsed);

        let solution_path = match &solution {
            Some(moves) if self.output.save_solution => SolutionArtifact {
                scramble: self.scramble.notation(),
                elapsed,
                iterations: iteration,
                params,
                moves,
            }
            .save(&self.output.solution_dir),
            _ => None,
        };

        info!(
            event = "solve_end",
            outcome = outcome.as_str(),
            solved = outcome == RunOutcome::Solved,
            iterations = iteration as u64,
            duration_ms = elapsed.as_millis() as u64,
            score = %best.score(),
            solution_length = solution.as_ref().map_or(0, Vec::len) as u64,
            solution = %solution.as_deref().map(apiary_core::format_sequence).unwrap_or_default(),
        );

        Ok(RunReport {
            outcome,
            iterations: iteration,
            elapsed,
            best,
            solution,
            solution_path,
            statistics: solver.statistics(),
        })
    }

    // `published` holds the selection key of the last snapshot published
    // under `OnImprovement`. A solved candidate is always published.
    fn publish(
        &mut self,
        published: &mut Option<(usize, usize, usize)>,
        iteration: usize,
        candidate: &Candidate,
        moves: Vec<MoveToken>,
    ) {
        if self.config.publish == PublishPolicy::OnImprovement {
            let key = candidate.score().selection_key();
            if !candidate.is_solved() && published.is_some_and(|last| key >= last) {
                return;
            }
            *published = Some(key);
        }

        let snapshot = Snapshot {
            iteration,
            candidate: candidate.clone(),
            moves,
        };
        let shared = self.handle.shared_best();
        {
            let mut slot = lock_slot(&shared);
            if let Some(listener) = self.listener.as_mut() {
                listener.on_progress(&snapshot.moves, &snapshot.candidate);
            }
            *slot = Some(snapshot.clone());
        }
        if let Some(tx) = &self.snapshots {
            if tx.send(snapshot).is_err() {
                self.snapshots = None;
            }
        }
    }
}

/// A solve running on its own thread.
#[derive(Debug)]
pub struct RunningSolver {
    handle: SolverHandle,
    thread: JoinHandle<Result<RunReport>>,
}

impl RunningSolver {
    pub fn handle(&self) -> &SolverHandle {
        &self.handle
    }

    /// Waits for the run to finish.
    pub fn join(self) -> Result<RunReport> {
        self.thread.join().map_err(|_| SolverError::Panicked)?
    }
}
