//! Exploit phase: local search around every population member.

use apiary_core::{Candidate, Catalog};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use super::{draw, PhaseContext};

/// Runs [`local_search`] on every candidate in parallel.
///
/// `seeds[i]` seeds the trials of `population[i]`; output order matches input.
pub fn exploit(population: Vec<Candidate>, seeds: Vec<u64>, ctx: PhaseContext<'_>) -> Vec<Candidate> {
    debug_assert_eq!(population.len(), seeds.len());
    population
        .into_par_iter()
        .zip(seeds.into_par_iter())
        .map(|(candidate, seed)| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            local_search(candidate, &mut rng, ctx)
        })
        .collect()
}

/// `num_local_searches` trials from `candidate`; returns the best by total.
///
/// Every trial starts from `candidate` itself. A trial replaces the current
/// best when its total is strictly lower, or equal with a strictly lower
/// selection key.
pub fn local_search<R: Rng + ?Sized>(
    candidate: Candidate,
    rng: &mut R,
    ctx: PhaseContext<'_>,
) -> Candidate {
    let mut best: Option<Candidate> = None;
    let mut best_rank = rank(&candidate);

    for _ in 0..ctx.config.num_local_searches {
        let mut trial = candidate.clone();
        local_mutation(&mut trial, rng, ctx);

        let trial_rank = rank(&trial);
        let improved = trial_rank < best_rank;
        ctx.statistics.record_trial(improved);
        if improved {
            best_rank = trial_rank;
            best = Some(trial);
        }
    }

    best.unwrap_or(candidate)
}

#[inline]
fn rank(candidate: &Candidate) -> (usize, (usize, usize, usize)) {
    let score = candidate.score();
    (score.total(), score.selection_key())
}

/// One light mutation round: a single literal move, or a few bracketed macros
/// aimed at whichever piece type is still unsolved.
pub fn local_mutation<R: Rng + ?Sized>(trial: &mut Candidate, rng: &mut R, ctx: PhaseContext<'_>) {
    let schedule = &ctx.config.schedule;
    let score = trial.score();
    let near = ctx.near_goal(score.relevant());

    let literal_rate = if near {
        schedule.literal_rate_low
    } else {
        schedule.literal_rate_high
    };
    if rng.random_bool(literal_rate) {
        trial.apply_random_move(rng);
        return;
    }

    let catalog = if score.corners() == 0 {
        Catalog::Edges
    } else {
        Catalog::Corners
    };
    let range = if near {
        schedule.exploit_low
    } else {
        schedule.exploit_high
    };
    let count = draw(range, rng);
    trial.apply_bracketed(catalog, count, schedule.max_setup, rng);
}
