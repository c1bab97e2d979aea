//! The starting position of a solve.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::cube::Cube;
use crate::error::{CubeError, Result};
use crate::moves::{format_sequence, parse_sequence, MoveToken};

/// A parsed scramble, shared by every candidate of one solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scramble {
    notation: String,
    moves: Vec<MoveToken>,
}

impl Scramble {
    /// Parses notation; the stored notation is normalised to single spaces.
    pub fn parse(notation: &str) -> Result<Self> {
        Ok(Self::from_moves(parse_sequence(notation)?))
    }

    pub fn from_moves(moves: Vec<MoveToken>) -> Self {
        Self {
            notation: format_sequence(&moves),
            moves,
        }
    }

    /// `length` tokens drawn uniformly, with replacement, from all 36.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Self {
        Self::from_moves((0..length).map(|_| MoveToken::random(rng)).collect())
    }

    pub fn notation(&self) -> &str {
        &self.notation
    }

    pub fn moves(&self) -> &[MoveToken] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Resets `cube` to solved and applies the scramble.
    pub fn apply_to(&self, cube: &mut Cube) {
        cube.reset();
        cube.apply_all(&self.moves);
    }

    /// A fresh solved cube with the scramble applied.
    pub fn scrambled_cube(&self) -> Cube {
        let mut cube = Cube::solved();
        cube.apply_all(&self.moves);
        cube
    }
}

impl FromStr for Scramble {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Scramble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation)
    }
}
