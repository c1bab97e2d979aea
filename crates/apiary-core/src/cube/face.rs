//! Faces and sticker colours.

use std::fmt;

/// One of the six faces of the cube.
///
/// The discriminant is the face's slot in the facelet array, so the declaration
/// order is part of the storage layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Face {
    Front = 0,
    Back = 1,
    Up = 2,
    Down = 3,
    Left = 4,
    Right = 5,
}

impl Face {
    /// All faces in storage order.
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Up,
        Face::Down,
        Face::Left,
        Face::Right,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Outward unit normal in cube coordinates (x right, y up, z towards the viewer).
    pub const fn normal(self) -> [i8; 3] {
        match self {
            Face::Front => [0, 0, 1],
            Face::Back => [0, 0, -1],
            Face::Up => [0, 1, 0],
            Face::Down => [0, -1, 0],
            Face::Left => [-1, 0, 0],
            Face::Right => [1, 0, 0],
        }
    }

    /// Face whose outward normal is `normal`, if it is a unit axis vector.
    pub fn from_normal(normal: [i8; 3]) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.normal() == normal)
    }

    /// Colour this face carries on a solved cube.
    pub const fn home_color(self) -> Color {
        match self {
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Left => Color::Orange,
            Face::Right => Color::Red,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Right => 'R',
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Sticker colour. Only equality with a face centre carries meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Green,
    Blue,
    White,
    Yellow,
    Orange,
    Red,
}

impl Color {
    /// Single-letter code used by the text net.
    pub const fn code(self) -> char {
        match self {
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Red => 'R',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
