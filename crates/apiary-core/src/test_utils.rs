//! Test utilities for apiary-core
//!
//! Fixtures shared by the crate's test modules.

use std::sync::Arc;

use rand::Rng;

use crate::algorithm::MacroLibrary;
use crate::candidate::Candidate;
use crate::moves::{format_sequence, MoveToken};
use crate::scramble::Scramble;

/// A candidate at the origin of `notation`, using the built-in macros.
pub fn candidate(notation: &str) -> Candidate {
    let scramble = Scramble::parse(notation).unwrap();
    Candidate::new(Arc::new(scramble), MacroLibrary::builtin())
}

/// Random notation of `length` tokens.
pub fn random_scramble<R: Rng>(rng: &mut R, length: usize) -> String {
    let moves: Vec<MoveToken> = (0..length).map(|_| MoveToken::random(rng)).collect();
    format_sequence(&moves)
}
