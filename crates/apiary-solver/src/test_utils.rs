//! Test utilities for apiary-solver
//!
//! Small, seeded configurations and candidate fixtures shared by the crate's
//! test modules.

use std::sync::Arc;

use apiary_config::SolverConfig;
use apiary_core::{Candidate, Catalog, MacroLibrary, MacroRef, Scramble};

/// Ten bees, ten scouts, five trials, fifty iterations, fixed seed.
pub fn small_config(seed: u64) -> SolverConfig {
    SolverConfig {
        initial_population_size: 10,
        num_scouts: 10,
        num_local_searches: 5,
        max_iterations: 50,
        random_seed: Some(seed),
        ..SolverConfig::default()
    }
}

pub fn scramble(notation: &str) -> Arc<Scramble> {
    Arc::new(Scramble::parse(notation).unwrap())
}

/// A candidate at the origin of `notation`.
pub fn candidate(notation: &str) -> Candidate {
    Candidate::new(scramble(notation), MacroLibrary::builtin())
}

/// A solved-scramble candidate with only three edges cycled.
pub fn edge_cycled() -> Candidate {
    let mut c = candidate("");
    c.apply_macro(MacroRef::new(Catalog::Edges, 2)).unwrap();
    c
}
