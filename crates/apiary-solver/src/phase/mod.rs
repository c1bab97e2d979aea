//! Bees-algorithm phases.
//!
//! One solver iteration first tries to [`finish`] the best elite, then runs
//! [`exploit`], [`explore`] and [`select`] in that order. Exploit and
//! explore mutate independent candidates, so both fan out over rayon; each
//! candidate gets its own ChaCha stream seeded from the solver's master RNG,
//! which keeps seeded runs reproducible regardless of thread scheduling.

mod exploit;
mod explore;
mod finish;
mod select;

use apiary_config::{CountRange, SolverConfig};
use rand::Rng;

use crate::statistics::StatisticsCollector;

pub use exploit::{exploit, local_mutation, local_search};
pub use explore::{explore, scout_mutation, seed_scouts};
pub use finish::finish;
pub use select::{select, Selection};

/// Borrowed state the phases need.
#[derive(Debug, Clone, Copy)]
pub struct PhaseContext<'a> {
    pub config: &'a SolverConfig,
    pub statistics: &'a StatisticsCollector,
}

impl<'a> PhaseContext<'a> {
    pub fn new(config: &'a SolverConfig, statistics: &'a StatisticsCollector) -> Self {
        Self { config, statistics }
    }

    #[inline]
    fn near_goal(&self, relevant: usize) -> bool {
        relevant <= self.config.score_threshold
    }
}

#[inline]
fn draw<R: Rng + ?Sized>(range: CountRange, rng: &mut R) -> usize {
    rng.random_range(range.bounds())
}
