//! Select phase: rank the merged candidates and keep the best prefixes.

use apiary_core::Candidate;

/// Population and elites retained for the next iteration.
#[derive(Debug, Clone)]
pub struct Selection {
    pub population: Vec<Candidate>,
    pub elites: Vec<Candidate>,
}

/// Ranks `merged` and keeps its best quarter as elites and best half as the
/// next population, each at least one candidate.
///
/// The sort is stable and ascending on corners, then edges once corners are
/// solved, then total. Elites are copies of the population prefix.
pub fn select(mut merged: Vec<Candidate>) -> Selection {
    merged.sort_by_key(|candidate| candidate.score().selection_key());

    let n = merged.len();
    let population_size = (n / 2).max(1).min(n);
    let elite_size = (n / 4).max(1).min(population_size);

    merged.truncate(population_size);
    let elites = merged[..elite_size].to_vec();
    Selection {
        population: merged,
        elites,
    }
}
