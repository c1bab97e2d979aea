//! CubeScore - misalignment counts of a cube state

use std::fmt;

/// Number of edge and corner pieces out of place relative to their face centres.
///
/// Lower is better; a total of zero means solved.
///
/// # Examples
///
/// ```
/// use apiary_core::CubeScore;
///
/// let score = CubeScore::of(3, 0);
/// assert_eq!(score.total(), 3);
/// assert_eq!(score.relevant(), 3); // corners done, edges are what matter
/// assert!(CubeScore::of(0, 2).rank_key() > CubeScore::of(9, 0).rank_key());
/// assert!(CubeScore::SOLVED.is_solved());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubeScore {
    total: usize,
    edges: usize,
    corners: usize,
}

impl CubeScore {
    /// Score of a solved cube.
    pub const SOLVED: CubeScore = CubeScore::of(0, 0);

    #[inline]
    pub const fn of(edges: usize, corners: usize) -> Self {
        CubeScore {
            total: edges + corners,
            edges,
            corners,
        }
    }

    #[inline]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[inline]
    pub const fn edges(&self) -> usize {
        self.edges
    }

    #[inline]
    pub const fn corners(&self) -> usize {
        self.corners
    }

    #[inline]
    pub const fn is_solved(&self) -> bool {
        self.total == 0
    }

    /// The count the search is currently working on: corners until they are
    /// all placed, edges afterwards.
    #[inline]
    pub const fn relevant(&self) -> usize {
        if self.corners == 0 {
            self.edges
        } else {
            self.corners
        }
    }

    /// Ranking key, ascending is better: corners first, then edges once corners are solved.
    #[inline]
    pub const fn rank_key(&self) -> (usize, usize) {
        (self.corners, if self.corners == 0 { self.edges } else { 0 })
    }

    /// [`rank_key`](Self::rank_key) with the total as a final tie-break.
    #[inline]
    pub const fn selection_key(&self) -> (usize, usize, usize) {
        let (corners, edges) = self.rank_key();
        (corners, edges, self.total)
    }
}

impl fmt::Debug for CubeScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CubeScore(total: {}, edges: {}, corners: {})",
            self.total, self.edges, self.corners
        )
    }
}

impl fmt::Display for CubeScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}e/{}c", self.edges, self.corners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum() {
        let score = CubeScore::of(4, 3);
        assert_eq!(score.total(), 7);
        assert!(!score.is_solved());
        assert_eq!(score.relevant(), 3);
    }

    #[test]
    fn test_rank_key_ignores_edges_while_corners_remain() {
        assert_eq!(CubeScore::of(11, 2).rank_key(), CubeScore::of(0, 2).rank_key());
        assert!(CubeScore::of(0, 2).selection_key() < CubeScore::of(11, 2).selection_key());
        assert!(CubeScore::of(1, 0).rank_key() < CubeScore::of(2, 0).rank_key());
    }

    #[test]
    fn test_display() {
        assert_eq!(CubeScore::of(5, 1).to_string(), "5e/1c");
    }
}
