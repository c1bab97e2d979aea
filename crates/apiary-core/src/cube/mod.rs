//! Cube state engine
//!
//! Facelet storage, the static move and adjacency tables, and scoring.

mod adjacency;
mod face;
mod geometry;
mod state;

#[cfg(test)]
mod tests;

pub use adjacency::{
    adjacency, AdjacencyTable, CornerRelation, EdgeRelation, FaceAdjacency, Facelet,
};
pub use face::{Color, Face};
pub use geometry::{facelet_index, Axis, FACELET_COUNT};
pub use state::Cube;
