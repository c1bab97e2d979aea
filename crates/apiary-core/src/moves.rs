//! Move notation: turns, modifiers and whitespace-separated sequences.
//!
//! A [`MoveToken`] is one of the 36 legal tokens: twelve turns
//! (`F R U B L D M E S x y z`), each with no suffix (quarter turn clockwise),
//! a prime suffix (`'`, quarter turn counter-clockwise) or a double suffix
//! (`2`, half turn).
//!
//! # Examples
//!
//! ```
//! use apiary_core::moves::{reverse_moves, parse_sequence, MoveToken};
//!
//! let moves = parse_sequence("R U  R' U'").unwrap();
//! assert_eq!(moves.len(), 4);
//! assert_eq!(moves[2], "R'".parse::<MoveToken>().unwrap());
//!
//! assert_eq!(reverse_moves("R U R' U'").unwrap(), "U R U' R'");
//! assert!(parse_sequence("R Q").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::cube::Axis;
use crate::error::{CubeError, Result};

/// The twelve turn identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Turn {
    F,
    R,
    U,
    B,
    L,
    D,
    /// Middle slice, turns like `L`.
    M,
    /// Equatorial slice, turns like `D`.
    E,
    /// Standing slice, turns like `F`.
    S,
    /// Whole-cube rotation, turns like `R`.
    X,
    /// Whole-cube rotation, turns like `U`.
    Y,
    /// Whole-cube rotation, turns like `F`.
    Z,
}

impl Turn {
    pub const ALL: [Turn; 12] = [
        Turn::F,
        Turn::R,
        Turn::U,
        Turn::B,
        Turn::L,
        Turn::D,
        Turn::M,
        Turn::E,
        Turn::S,
        Turn::X,
        Turn::Y,
        Turn::Z,
    ];

    pub const fn letter(self) -> char {
        match self {
            Turn::F => 'F',
            Turn::R => 'R',
            Turn::U => 'U',
            Turn::B => 'B',
            Turn::L => 'L',
            Turn::D => 'D',
            Turn::M => 'M',
            Turn::E => 'E',
            Turn::S => 'S',
            Turn::X => 'x',
            Turn::Y => 'y',
            Turn::Z => 'z',
        }
    }

    fn from_letter(letter: char) -> Option<Turn> {
        Turn::ALL.into_iter().find(|turn| turn.letter() == letter)
    }

    /// Rotation axis of the turned layer.
    pub const fn axis(self) -> Axis {
        match self {
            Turn::R | Turn::L | Turn::M | Turn::X => Axis::X,
            Turn::U | Turn::D | Turn::E | Turn::Y => Axis::Y,
            Turn::F | Turn::B | Turn::S | Turn::Z => Axis::Z,
        }
    }

    /// Coordinate of the turned layer along [`Turn::axis`], `None` for whole-cube rotations.
    pub const fn layer(self) -> Option<i8> {
        match self {
            Turn::R | Turn::U | Turn::F => Some(1),
            Turn::L | Turn::D | Turn::B => Some(-1),
            Turn::M | Turn::E | Turn::S => Some(0),
            Turn::X | Turn::Y | Turn::Z => None,
        }
    }

    /// Sign of the right-handed rotation about the axis that one clockwise
    /// quarter turn performs.
    pub const fn clockwise_sign(self) -> i8 {
        match self {
            Turn::R | Turn::U | Turn::F | Turn::S | Turn::X | Turn::Y | Turn::Z => -1,
            Turn::L | Turn::D | Turn::B | Turn::M | Turn::E => 1,
        }
    }
}

/// Turn amount carried by a token's suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    Clockwise,
    Prime,
    Double,
}

impl Modifier {
    pub const ALL: [Modifier; 3] = [Modifier::Clockwise, Modifier::Prime, Modifier::Double];

    pub const fn suffix(self) -> &'static str {
        match self {
            Modifier::Clockwise => "",
            Modifier::Prime => "'",
            Modifier::Double => "2",
        }
    }

    /// Number of clockwise quarter turns this modifier amounts to.
    pub const fn quarter_turns(self) -> usize {
        match self {
            Modifier::Clockwise => 1,
            Modifier::Double => 2,
            Modifier::Prime => 3,
        }
    }

    pub const fn inverse(self) -> Modifier {
        match self {
            Modifier::Clockwise => Modifier::Prime,
            Modifier::Prime => Modifier::Clockwise,
            Modifier::Double => Modifier::Double,
        }
    }
}

/// One legal move token.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MoveToken {
    pub turn: Turn,
    pub modifier: Modifier,
}

impl MoveToken {
    /// Number of legal tokens.
    pub const COUNT: usize = 36;

    /// Every legal token, turn-major in the order `F R U B L D M E S x y z`.
    pub const ALL: [MoveToken; MoveToken::COUNT] = {
        let mut all = [MoveToken::new(Turn::F, Modifier::Clockwise); MoveToken::COUNT];
        let mut i = 0;
        while i < MoveToken::COUNT {
            all[i] = MoveToken::new(Turn::ALL[i / 3], Modifier::ALL[i % 3]);
            i += 1;
        }
        all
    };

    pub const fn new(turn: Turn, modifier: Modifier) -> Self {
        Self { turn, modifier }
    }

    /// Position of this token in [`MoveToken::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self.turn as usize * 3 + self.modifier as usize
    }

    /// The token that undoes this one.
    pub const fn inverse(self) -> MoveToken {
        MoveToken::new(self.turn, self.modifier.inverse())
    }

    /// Draws one of the 36 tokens uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> MoveToken {
        MoveToken::ALL[rng.random_range(0..MoveToken::COUNT)]
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.turn.letter(), self.modifier.suffix())
    }
}

impl fmt::Debug for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveToken({})", self)
    }
}

impl FromStr for MoveToken {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self> {
        let unknown = || CubeError::UnknownMove(s.to_string());
        let mut chars = s.chars();
        let turn = chars
            .next()
            .and_then(Turn::from_letter)
            .ok_or_else(unknown)?;
        let modifier = match chars.as_str() {
            "" => Modifier::Clockwise,
            "'" => Modifier::Prime,
            "2" => Modifier::Double,
            _ => return Err(unknown()),
        };
        Ok(MoveToken::new(turn, modifier))
    }
}

/// Parses whitespace-separated notation. Empty input yields an empty sequence.
pub fn parse_sequence(notation: &str) -> Result<Vec<MoveToken>> {
    notation.split_whitespace().map(str::parse).collect()
}

/// Renders tokens as space-separated notation.
pub fn format_sequence(moves: &[MoveToken]) -> String {
    let mut out = String::with_capacity(moves.len() * 3);
    for (i, token) in moves.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&token.to_string());
    }
    out
}

/// Tokens that undo `moves`: reversed order, each token inverted.
pub fn invert_sequence(moves: &[MoveToken]) -> Vec<MoveToken> {
    moves.iter().rev().map(|token| token.inverse()).collect()
}

/// Inverts a notation string.
///
/// # Errors
///
/// Returns [`CubeError::UnknownMove`] for the first illegal token.
pub fn reverse_moves(notation: &str) -> Result<String> {
    let moves = parse_sequence(notation)?;
    Ok(format_sequence(&invert_sequence(&moves)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tokens_are_distinct_and_indexed() {
        for (i, token) in MoveToken::ALL.iter().enumerate() {
            assert_eq!(token.index(), i);
        }
        let rendered: std::collections::HashSet<String> =
            MoveToken::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(rendered.len(), MoveToken::COUNT);
    }

    #[test]
    fn test_display_parse_agree() {
        for token in MoveToken::ALL {
            let parsed: MoveToken = token.to_string().parse().unwrap();
            assert_eq!(parsed, token);
        }
    }

    #[test]
    fn test_inverse_modifiers() {
        let r: MoveToken = "R".parse().unwrap();
        let r_prime: MoveToken = "R'".parse().unwrap();
        let r2: MoveToken = "R2".parse().unwrap();
        assert_eq!(r.inverse(), r_prime);
        assert_eq!(r_prime.inverse(), r);
        assert_eq!(r2.inverse(), r2);
    }

    #[test]
    fn test_unknown_tokens_rejected() {
        for bad in ["Q", "r", "X", "R3", "R''", "2R", "U2'"] {
            assert_eq!(
                bad.parse::<MoveToken>(),
                Err(CubeError::UnknownMove(bad.to_string())),
                "{bad} should not parse"
            );
        }
    }

    #[test]
    fn test_parse_sequence_tolerates_whitespace() {
        let moves = parse_sequence("  x  R2\tU'\n").unwrap();
        assert_eq!(format_sequence(&moves), "x R2 U'");
        assert!(parse_sequence("").unwrap().is_empty());
        assert!(parse_sequence("   ").unwrap().is_empty());
    }

    #[test]
    fn test_reverse_moves() {
        assert_eq!(reverse_moves("R U R' U'").unwrap(), "U R U' R'");
        assert_eq!(reverse_moves("M2 y' F").unwrap(), "F' y M2");
        assert_eq!(reverse_moves("").unwrap(), "");
        assert!(reverse_moves("R U Z").is_err());
    }
}
