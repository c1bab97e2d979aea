//! Apiary Core - cube state engine for the bees-algorithm solver
//!
//! This crate provides the pieces the solver mutates and scores:
//! - Move notation and the 36 legal tokens
//! - The 54-facelet cube with static move and adjacency tables
//! - Misalignment scoring relative to the current face centres
//! - Edge and corner macro catalogs and move history
//! - Scrambles and population candidates

pub mod algorithm;
pub mod candidate;
pub mod cube;
pub mod error;
pub mod moves;
pub mod scramble;
pub mod score;

#[cfg(test)]
mod test_utils;

pub use algorithm::{Catalog, HistoryEntry, MacroLibrary, MacroRef, MoveHistory};
pub use candidate::Candidate;
pub use cube::{Color, Cube, Face};
pub use error::CubeError;
pub use moves::{
    format_sequence, invert_sequence, parse_sequence, reverse_moves, Modifier, MoveToken, Turn,
};
pub use scramble::Scramble;
pub use score::CubeScore;
