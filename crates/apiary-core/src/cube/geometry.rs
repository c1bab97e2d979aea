//! Facelet geometry and the move permutation table.
//!
//! Every facelet sits at an integer position in `{-1, 0, 1}^3` and points along
//! its face's outward normal. A quarter turn rotates position and normal of the
//! facelets in the turned layer; reading back the face and grid cell gives the
//! destination slot. Doubles and primes compose the quarter turn two and three
//! times. The table is built once, on first use.

use std::sync::LazyLock;

use super::Face;
use crate::moves::MoveToken;

/// Number of facelets on a cube.
pub const FACELET_COUNT: usize = 54;

/// `dest[i]` is the slot that the facelet in slot `i` moves to.
pub(crate) type Permutation = [u8; FACELET_COUNT];

/// Rotation axis in cube coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    const fn component(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

static MOVE_TABLE: LazyLock<Vec<Permutation>> = LazyLock::new(|| {
    MoveToken::ALL
        .iter()
        .map(|token| {
            let quarter = quarter_turn(*token);
            let mut perm = quarter;
            for _ in 1..token.modifier.quarter_turns() {
                perm = compose(&perm, &quarter);
            }
            perm
        })
        .collect()
});

/// Destination table for `token`.
#[inline]
pub(crate) fn permutation(token: MoveToken) -> &'static Permutation {
    &MOVE_TABLE[token.index()]
}

/// Flat slot of a grid cell: `face * 9 + row * 3 + col`.
#[inline]
pub const fn facelet_index(face: Face, row: usize, col: usize) -> usize {
    face.index() * 9 + row * 3 + col
}

/// Position of the cubie carrying the facelet at `(row, col)` of `face`.
pub(crate) fn position(face: Face, row: usize, col: usize) -> [i8; 3] {
    let (r, c) = (row as i8, col as i8);
    match face {
        Face::Front => [c - 1, 1 - r, 1],
        Face::Back => [1 - c, 1 - r, -1],
        Face::Up => [c - 1, 1, r - 1],
        Face::Down => [c - 1, -1, 1 - r],
        Face::Left => [-1, 1 - r, c - 1],
        Face::Right => [1, 1 - r, 1 - c],
    }
}

/// Grid cell of `face` that shows the cubie at `pos`.
pub(crate) fn locate(face: Face, pos: [i8; 3]) -> (usize, usize) {
    let [x, y, z] = pos;
    let (row, col) = match face {
        Face::Front => (1 - y, x + 1),
        Face::Back => (1 - y, 1 - x),
        Face::Up => (z + 1, x + 1),
        Face::Down => (1 - z, x + 1),
        Face::Left => (1 - y, z + 1),
        Face::Right => (1 - y, 1 - z),
    };
    (row as usize, col as usize)
}

/// Right-handed quarter rotation about `axis`; `sign` picks the direction.
fn rotate(axis: Axis, sign: i8, [x, y, z]: [i8; 3]) -> [i8; 3] {
    match (axis, sign > 0) {
        (Axis::X, true) => [x, -z, y],
        (Axis::X, false) => [x, z, -y],
        (Axis::Y, true) => [z, y, -x],
        (Axis::Y, false) => [-z, y, x],
        (Axis::Z, true) => [-y, x, z],
        (Axis::Z, false) => [y, -x, z],
    }
}

fn quarter_turn(token: MoveToken) -> Permutation {
    let turn = token.turn;
    let axis = turn.axis();
    let sign = turn.clockwise_sign();
    let mut dest = [0u8; FACELET_COUNT];

    for face in Face::ALL {
        for row in 0..3 {
            for col in 0..3 {
                let from = facelet_index(face, row, col);
                let pos = position(face, row, col);
                let moves = turn
                    .layer()
                    .map_or(true, |layer| pos[axis.component()] == layer);
                dest[from] = if moves {
                    let to_face = Face::from_normal(rotate(axis, sign, face.normal()))
                        .expect("a rotated face normal is a face normal");
                    let (to_row, to_col) = locate(to_face, rotate(axis, sign, pos));
                    facelet_index(to_face, to_row, to_col) as u8
                } else {
                    from as u8
                };
            }
        }
    }
    dest
}

/// Permutation equal to applying `first`, then `then`.
fn compose(first: &Permutation, then: &Permutation) -> Permutation {
    let mut out = [0u8; FACELET_COUNT];
    for (slot, &mid) in out.iter_mut().zip(first.iter()) {
        *slot = then[mid as usize];
    }
    out
}
