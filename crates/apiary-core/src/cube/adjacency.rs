//! Per-face edge and corner relations used by scoring.
//!
//! Each edge and corner piece is owned by exactly one face: the first of
//! `U D R L F B` among the faces it shows. The owning face lists the piece's
//! facelet on itself plus the neighbouring facelets. That leaves Up and Down
//! with four edges and four corners each, Left and Right with the two
//! middle-layer edges each, and Front and Back with nothing.

use std::sync::LazyLock;

use super::geometry::{facelet_index, locate};
use super::Face;

const OWNERSHIP_ORDER: [Face; 6] = [
    Face::Up,
    Face::Down,
    Face::Right,
    Face::Left,
    Face::Front,
    Face::Back,
];

/// A single grid cell, with its flat slot precomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Facelet {
    pub face: Face,
    pub row: usize,
    pub col: usize,
    index: usize,
}

impl Facelet {
    pub const fn new(face: Face, row: usize, col: usize) -> Self {
        Self {
            face,
            row,
            col,
            index: facelet_index(face, row, col),
        }
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }
}

/// An edge piece seen from its owning face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRelation {
    pub own: Facelet,
    pub neighbor: Facelet,
}

/// A corner piece seen from its owning face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerRelation {
    pub own: Facelet,
    pub neighbors: [Facelet; 2],
}

/// Relations owned by one face.
#[derive(Debug, Clone, Default)]
pub struct FaceAdjacency {
    pub edges: Vec<EdgeRelation>,
    pub corners: Vec<CornerRelation>,
}

/// The full, immutable adjacency table.
#[derive(Debug, Clone)]
pub struct AdjacencyTable {
    faces: [FaceAdjacency; 6],
}

static ADJACENCY: LazyLock<AdjacencyTable> = LazyLock::new(AdjacencyTable::derive);

/// Shared adjacency table.
pub fn adjacency() -> &'static AdjacencyTable {
    &ADJACENCY
}

impl AdjacencyTable {
    fn derive() -> Self {
        let mut faces: [FaceAdjacency; 6] = Default::default();

        for x in -1i8..=1 {
            for y in -1i8..=1 {
                for z in -1i8..=1 {
                    let pos = [x, y, z];
                    let mut shown: Vec<Facelet> = Face::ALL
                        .into_iter()
                        .filter(|face| {
                            let normal = face.normal();
                            (0..3).any(|axis| normal[axis] != 0 && normal[axis] == pos[axis])
                        })
                        .map(|face| {
                            let (row, col) = locate(face, pos);
                            Facelet::new(face, row, col)
                        })
                        .collect();
                    if shown.len() < 2 {
                        continue;
                    }

                    shown.sort_by_key(|facelet| {
                        OWNERSHIP_ORDER.iter().position(|f| *f == facelet.face)
                    });
                    let own = shown.remove(0);
                    shown.sort_by_key(|facelet| facelet.face);

                    let owner = &mut faces[own.face.index()];
                    match shown.as_slice() {
                        [neighbor] => owner.edges.push(EdgeRelation {
                            own,
                            neighbor: *neighbor,
                        }),
                        [first, second] => owner.corners.push(CornerRelation {
                            own,
                            neighbors: [*first, *second],
                        }),
                        _ => unreachable!("a cubie shows at most three faces"),
                    }
                }
            }
        }

        Self { faces }
    }

    /// Relations owned by `face`.
    pub fn face(&self, face: Face) -> &FaceAdjacency {
        &self.faces[face.index()]
    }

    pub fn edge_count(&self) -> usize {
        self.faces.iter().map(|f| f.edges.len()).sum()
    }

    pub fn corner_count(&self) -> usize {
        self.faces.iter().map(|f| f.corners.len()).sum()
    }
}
