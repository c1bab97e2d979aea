//! The 54-facelet cube state.

use std::fmt;

use super::adjacency::adjacency;
use super::geometry::{facelet_index, permutation, FACELET_COUNT};
use super::{Color, Face};
use crate::error::Result;
use crate::moves::{parse_sequence, MoveToken};
use crate::score::CubeScore;

/// A cube state: six 3×3 grids of colours, stored face-major.
///
/// Face turns keep every centre in place. Slice moves and whole-cube rotations
/// carry centres along, so scoring always compares against the centre a face
/// currently shows rather than a fixed colour.
///
/// # Examples
///
/// ```
/// use apiary_core::{Cube, MoveToken};
///
/// let mut cube = Cube::solved();
/// let r: MoveToken = "R".parse().unwrap();
///
/// cube.apply(r);
/// assert!(!cube.is_solved());
///
/// cube.apply(r.inverse());
/// assert!(cube.is_solved());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    facelets: [Color; FACELET_COUNT],
}

impl Cube {
    pub fn solved() -> Self {
        let mut facelets = [Color::Green; FACELET_COUNT];
        for face in Face::ALL {
            facelets[face.index() * 9..face.index() * 9 + 9].fill(face.home_color());
        }
        Self { facelets }
    }

    /// Restores the solved colouring in place.
    pub fn reset(&mut self) {
        *self = Self::solved();
    }

    #[inline]
    pub fn apply(&mut self, token: MoveToken) {
        let dest = permutation(token);
        let before = self.facelets;
        for (from, color) in before.into_iter().enumerate() {
            self.facelets[dest[from] as usize] = color;
        }
    }

    pub fn apply_all<'a>(&mut self, tokens: impl IntoIterator<Item = &'a MoveToken>) {
        for token in tokens {
            self.apply(*token);
        }
    }

    /// Parses and applies whitespace-separated notation.
    ///
    /// The cube is left untouched when any token fails to parse.
    pub fn apply_notation(&mut self, notation: &str) -> Result<()> {
        let moves = parse_sequence(notation)?;
        self.apply_all(&moves);
        Ok(())
    }

    #[inline]
    pub fn facelet(&self, face: Face, row: usize, col: usize) -> Color {
        self.facelets[facelet_index(face, row, col)]
    }

    #[inline]
    pub fn center(&self, face: Face) -> Color {
        self.facelet(face, 1, 1)
    }

    pub fn grid(&self, face: Face) -> [[Color; 3]; 3] {
        std::array::from_fn(|row| std::array::from_fn(|col| self.facelet(face, row, col)))
    }

    pub fn facelets(&self) -> &[Color; FACELET_COUNT] {
        &self.facelets
    }

    /// Counts misplaced edge and corner pieces.
    ///
    /// A piece is misplaced when any of its facelets differs from the centre
    /// of the face it lies on.
    pub fn score(&self) -> CubeScore {
        let table = adjacency();
        let centers: [Color; 6] = std::array::from_fn(|i| self.center(Face::ALL[i]));
        let off = |index: usize, face: Face| self.facelets[index] != centers[face.index()];

        let mut edges = 0;
        let mut corners = 0;
        for face in Face::ALL {
            let owned = table.face(face);
            edges += owned
                .edges
                .iter()
                .filter(|e| off(e.own.index(), e.own.face) || off(e.neighbor.index(), e.neighbor.face))
                .count();
            corners += owned
                .corners
                .iter()
                .filter(|c| {
                    off(c.own.index(), c.own.face)
                        || c.neighbors.iter().any(|n| off(n.index(), n.face))
                })
                .count();
        }
        CubeScore::of(edges, corners)
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.score().is_solved()
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::solved()
    }
}

impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cube({:?})", self.score())
    }
}

/// Unfolded net: Up on top, then Left, Front, Right, Back, then Down.
impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row_of = |face: Face, row: usize| {
            let [a, b, c] = self.grid(face)[row];
            format!("{a} {b} {c}")
        };

        for row in 0..3 {
            writeln!(f, "      {}", row_of(Face::Up, row))?;
        }
        for row in 0..3 {
            writeln!(
                f,
                "{} {} {} {}",
                row_of(Face::Left, row),
                row_of(Face::Front, row),
                row_of(Face::Right, row),
                row_of(Face::Back, row)
            )?;
        }
        for row in 0..3 {
            writeln!(f, "      {}", row_of(Face::Down, row))?;
        }
        Ok(())
    }
}
