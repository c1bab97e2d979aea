//! Explore phase: scouts seeded from the elites or the scrambled origin.

use apiary_core::{Candidate, Catalog};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use super::{draw, PhaseContext};

/// Generates one scout per seed and mutates them in parallel.
pub fn explore(
    elites: &[Candidate],
    origin: &Candidate,
    seeds: Vec<u64>,
    ctx: PhaseContext<'_>,
) -> Vec<Candidate> {
    seed_scouts(elites, origin, seeds.len(), ctx)
        .into_par_iter()
        .zip(seeds.into_par_iter())
        .map(|(mut scout, seed)| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            scout_mutation(&mut scout, &mut rng, ctx);
            ctx.statistics.record_scout();
            scout
        })
        .collect()
}

/// Picks the starting point of each scout.
///
/// Scout `i` starts from an elite when `i` is a multiple of `elite_every`, or
/// for every scout once the best elite is near the goal. Elite starts walk a
/// cursor through the elites by `elite_stride`; the walk falls back to the
/// best elite once the cursor runs past the end or while the best elite is
/// more than `elite_margin` above the threshold. Every other scout starts
/// from the scrambled origin.
pub fn seed_scouts(
    elites: &[Candidate],
    origin: &Candidate,
    count: usize,
    ctx: PhaseContext<'_>,
) -> Vec<Candidate> {
    let schedule = &ctx.config.schedule;
    let Some(best) = elites.first() else {
        return vec![origin.clone(); count];
    };
    let relevant = best.score().relevant();
    let near = ctx.near_goal(relevant);
    let far = relevant > ctx.config.score_threshold + schedule.elite_margin;

    let mut cursor = 0.0_f64;
    (0..count)
        .map(|i| {
            if i % schedule.elite_every != 0 && !near {
                return origin.clone();
            }
            let slot = cursor as usize;
            if far || slot >= elites.len() {
                best.clone()
            } else {
                cursor += schedule.elite_stride;
                elites[slot].clone()
            }
        })
        .collect()
}

/// One heavy mutation round, sized by the scout's own score.
pub fn scout_mutation<R: Rng + ?Sized>(scout: &mut Candidate, rng: &mut R, ctx: PhaseContext<'_>) {
    let schedule = &ctx.config.schedule;
    let score = scout.score();
    let near = ctx.near_goal(score.relevant());

    if score.corners() == 0 {
        if near {
            let count = draw(schedule.explore_low, rng);
            scout.apply_bracketed(Catalog::Edges, count, schedule.max_setup, rng);
        } else {
            let macros = draw(schedule.explore_edge_macros, rng);
            scout.apply_random_macros(Catalog::Edges, macros, rng);
            let count = draw(schedule.explore_edge_brackets, rng);
            scout.apply_bracketed(Catalog::Edges, count, schedule.max_setup, rng);
        }
    } else {
        let count = draw(schedule.explore_corner_brackets, rng);
        scout.apply_bracketed(Catalog::Corners, count, schedule.max_setup, rng);
    }
}
