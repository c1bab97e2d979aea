//! Bees-algorithm solver.

use std::fmt::Debug;
use std::sync::Arc;

use apiary_config::SolverConfig;
use apiary_core::{Candidate, MacroLibrary, MoveToken, Scramble};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::error::Result;
use crate::phase::{self, PhaseContext};
use crate::statistics::{SolverStatistics, StatisticsCollector};

/// Result of one [`BeesSolver::solve`] call.
#[derive(Debug, Clone)]
pub enum StepOutcome {
    /// A population member reached the solved state.
    Solved {
        candidate: Candidate,
        moves: Vec<MoveToken>,
    },
    /// Iteration done, not solved yet; `best` is the top-ranked member.
    Searching { best: Candidate },
    /// The iteration budget was already spent; no search was performed.
    IterationLimitExceeded { best: Candidate },
}

impl StepOutcome {
    /// The candidate this outcome reports.
    pub fn candidate(&self) -> &Candidate {
        match self {
            StepOutcome::Solved { candidate, .. } => candidate,
            StepOutcome::Searching { best } | StepOutcome::IterationLimitExceeded { best } => best,
        }
    }

    /// Translated solution moves; empty unless solved.
    pub fn moves(&self) -> &[MoveToken] {
        match self {
            StepOutcome::Solved { moves, .. } => moves,
            _ => &[],
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, StepOutcome::Solved { .. })
    }
}

/// Population-based cube solver.
///
/// Starts from `initial_population_size` copies of the scrambled origin. Each
/// [`solve`](Self::solve) call runs one finish, exploit, explore, select and
/// check round.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use apiary_config::SolverConfig;
/// use apiary_core::Scramble;
/// use apiary_solver::{BeesSolver, StepOutcome};
///
/// let config = SolverConfig {
///     initial_population_size: 10,
///     num_scouts: 10,
///     num_local_searches: 5,
///     max_iterations: 3,
///     random_seed: Some(42),
///     ..SolverConfig::default()
/// };
/// let scramble = Arc::new(Scramble::parse("R U F' L2 D B'").unwrap());
/// let mut solver = BeesSolver::new(scramble, config).unwrap();
///
/// let outcome = solver.solve(0).unwrap();
/// assert_eq!(solver.population().len(), 10);
/// assert_eq!(solver.elites().len(), 5);
/// assert_eq!(outcome.moves().is_empty(), !outcome.is_solved());
///
/// // past the budget nothing is searched
/// assert!(matches!(
///     solver.solve(3).unwrap(),
///     StepOutcome::IterationLimitExceeded { .. }
/// ));
/// ```
pub struct BeesSolver {
    config: SolverConfig,
    origin: Candidate,
    population: Vec<Candidate>,
    elites: Vec<Candidate>,
    rng: ChaCha8Rng,
    statistics: StatisticsCollector,
}

impl Debug for BeesSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeesSolver")
            .field("scramble", &self.origin.scramble().notation())
            .field("population", &self.population.len())
            .field("elites", &self.elites.len())
            .field("best", &self.best().score())
            .finish()
    }
}

impl BeesSolver {
    /// Creates a solver using the built-in macro library.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Config`](crate::SolverError::Config) if the
    /// parameters fail validation.
    pub fn new(scramble: Arc<Scramble>, config: SolverConfig) -> Result<Self> {
        Self::with_library(scramble, MacroLibrary::builtin(), config)
    }

    /// Creates a solver with a custom macro library.
    pub fn with_library(
        scramble: Arc<Scramble>,
        library: Arc<MacroLibrary>,
        config: SolverConfig,
    ) -> Result<Self> {
        config.validate()?;

        let rng = match config.random_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        let origin = Candidate::new(scramble, library);
        let population = vec![origin.clone(); config.initial_population_size];
        let elites = vec![origin.clone()];

        Ok(Self {
            config,
            origin,
            population,
            elites,
            rng,
            statistics: StatisticsCollector::new(),
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The scrambled origin with an empty history.
    pub fn origin(&self) -> &Candidate {
        &self.origin
    }

    pub fn population(&self) -> &[Candidate] {
        &self.population
    }

    pub fn elites(&self) -> &[Candidate] {
        &self.elites
    }

    /// The best-ranked candidate so far.
    pub fn best(&self) -> &Candidate {
        self.elites.first().unwrap_or(&self.origin)
    }

    pub fn statistics(&self) -> SolverStatistics {
        self.statistics.snapshot()
    }

    /// Runs one iteration.
    ///
    /// Returns [`StepOutcome::IterationLimitExceeded`] without searching when
    /// `iteration >= max_iterations`. Otherwise the best elite is first handed
    /// to [`phase::finish`]; if that solves it the bee phases are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Cube`](crate::SolverError::Cube) if the solved
    /// candidate's history cannot be translated.
    pub fn solve(&mut self, iteration: usize) -> Result<StepOutcome> {
        if iteration >= self.config.max_iterations {
            return Ok(StepOutcome::IterationLimitExceeded {
                best: self.best().clone(),
            });
        }

        if let Some(finished) = phase::finish(self.best(), self.config.finish_depth) {
            trace!(
                event = "finish_solved",
                iteration,
                history = finished.history().len() as u64,
            );
            self.statistics.record_iteration(iteration, finished.score());
            self.population.insert(0, finished.clone());
            self.elites.insert(0, finished.clone());
            let moves = finished.solution()?;
            return Ok(StepOutcome::Solved {
                candidate: finished,
                moves,
            });
        }

        let ctx = PhaseContext::new(&self.config, &self.statistics);

        let seeds = draw_seeds(&mut self.rng, self.population.len());
        let population = std::mem::take(&mut self.population);
        let mut merged = phase::exploit(population, seeds, ctx);
        trace!(
            event = "exploit_end",
            iteration,
            candidates = merged.len() as u64,
        );

        let seeds = draw_seeds(&mut self.rng, self.config.num_scouts);
        let scouts = phase::explore(&self.elites, &self.origin, seeds, ctx);
        trace!(event = "explore_end", iteration, scouts = scouts.len() as u64);
        merged.extend(scouts);

        let selection = phase::select(merged);
        self.population = selection.population;
        self.elites = selection.elites;

        let best = self.best().clone();
        self.statistics.record_iteration(iteration, best.score());

        if let Some(solved) = self.population.iter().find(|c| c.is_solved()) {
            let moves = solved.solution()?;
            return Ok(StepOutcome::Solved {
                candidate: solved.clone(),
                moves,
            });
        }
        Ok(StepOutcome::Searching { best })
    }
}

fn draw_seeds(rng: &mut ChaCha8Rng, count: usize) -> Vec<u64> {
    (0..count).map(|_| rng.random()).collect()
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
