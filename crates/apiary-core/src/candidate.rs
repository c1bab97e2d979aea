//! Candidate - a cube plus the history that produced it from the scramble.

use std::sync::Arc;

use rand::Rng;
use smallvec::SmallVec;

use crate::algorithm::{Catalog, MacroLibrary, MacroRef, MoveHistory};
use crate::cube::Cube;
use crate::error::Result;
use crate::moves::MoveToken;
use crate::scramble::Scramble;
use crate::score::CubeScore;

/// A population member.
///
/// The score is cached and refreshed by every mutating method, so reading it
/// is free. Cloning deep-copies cube and history; scramble and macro library
/// are shared.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use apiary_core::{Candidate, MacroLibrary, Scramble};
///
/// let scramble = Arc::new(Scramble::parse("R").unwrap());
/// let mut candidate = Candidate::new(scramble, MacroLibrary::builtin());
/// assert_eq!(candidate.score().total(), 8);
///
/// candidate.apply_move("R'".parse().unwrap());
/// assert!(candidate.is_solved());
/// assert_eq!(candidate.solution().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Candidate {
    cube: Cube,
    history: MoveHistory,
    scramble: Arc<Scramble>,
    library: Arc<MacroLibrary>,
    score: CubeScore,
}

impl Candidate {
    /// The scrambled origin with an empty history.
    pub fn new(scramble: Arc<Scramble>, library: Arc<MacroLibrary>) -> Self {
        let cube = scramble.scrambled_cube();
        let score = cube.score();
        Self {
            cube,
            history: MoveHistory::new(),
            scramble,
            library,
            score,
        }
    }

    #[inline]
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    #[inline]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    #[inline]
    pub fn scramble(&self) -> &Arc<Scramble> {
        &self.scramble
    }

    #[inline]
    pub fn library(&self) -> &Arc<MacroLibrary> {
        &self.library
    }

    #[inline]
    pub fn score(&self) -> CubeScore {
        self.score
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.score.is_solved()
    }

    /// Back to the scrambled origin: cube reset, scramble reapplied, history cleared.
    pub fn reset(&mut self) {
        self.scramble.apply_to(&mut self.cube);
        self.history.clear();
        self.refresh_score();
    }

    pub fn apply_move(&mut self, token: MoveToken) {
        self.push_move(token);
        self.refresh_score();
    }

    /// Applies a macro by reference.
    ///
    /// # Errors
    ///
    /// Returns [`CubeError::UnknownMacro`](crate::CubeError::UnknownMacro) and
    /// leaves the candidate untouched if the reference is out of range.
    pub fn apply_macro(&mut self, reference: MacroRef) -> Result<()> {
        self.cube.apply_all(self.library.get(reference)?);
        self.history.push_macro(reference);
        self.refresh_score();
        Ok(())
    }

    /// Applies one of the 36 tokens, drawn uniformly.
    pub fn apply_random_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> MoveToken {
        let token = MoveToken::random(rng);
        self.apply_move(token);
        token
    }

    /// Applies `count` macros drawn uniformly from `catalog`.
    pub fn apply_random_macros<R: Rng + ?Sized>(
        &mut self,
        catalog: Catalog,
        count: usize,
        rng: &mut R,
    ) {
        for _ in 0..count {
            let reference = self.library.random(catalog, rng);
            self.push_macro(reference);
        }
        self.refresh_score();
    }

    /// Applies `count` conjugated macros from `catalog`.
    ///
    /// Each one is a random setup of `0..=max_setup` tokens, a random macro,
    /// and the inverse of the setup. Setup tokens are recorded literally.
    pub fn apply_bracketed<R: Rng + ?Sized>(
        &mut self,
        catalog: Catalog,
        count: usize,
        max_setup: usize,
        rng: &mut R,
    ) {
        for _ in 0..count {
            let setup_len = rng.random_range(0..=max_setup);
            let setup: SmallVec<[MoveToken; 8]> =
                (0..setup_len).map(|_| MoveToken::random(rng)).collect();
            for token in &setup {
                self.push_move(*token);
            }
            let reference = self.library.random(catalog, rng);
            self.push_macro(reference);
            for token in setup.iter().rev() {
                self.push_move(token.inverse());
            }
        }
        self.refresh_score();
    }

    /// Translated move list from the scramble to this candidate's cube.
    pub fn solution(&self) -> Result<Vec<MoveToken>> {
        self.history.translate(&self.library)
    }

    /// Rebuilds the cube from scramble and translated history.
    pub fn replay(&self) -> Result<Cube> {
        let mut cube = self.scramble.scrambled_cube();
        cube.apply_all(&self.solution()?);
        Ok(cube)
    }

    fn push_move(&mut self, token: MoveToken) {
        self.cube.apply(token);
        self.history.push_move(token);
    }

    // Only for references drawn from this candidate's own library.
    fn push_macro(&mut self, reference: MacroRef) {
        let tokens = &self.library.catalog(reference.catalog)[reference.index];
        self.cube.apply_all(tokens);
        self.history.push_macro(reference);
    }

    fn refresh_score(&mut self) {
        self.score = self.cube.score();
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::algorithm::HistoryEntry;
    use crate::test_utils::candidate;

    #[test]
    fn test_score_tracks_mutations() {
        let mut c = candidate("U'");
        assert_eq!(c.score(), CubeScore::of(4, 4));
        c.apply_move("U".parse().unwrap());
        assert!(c.is_solved());
    }

    #[test]
    fn test_bracketed_history_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut c = candidate("");
        c.apply_bracketed(Catalog::Corners, 1, 7, &mut rng);

        let entries = c.history().entries();
        let macro_at = entries
            .iter()
            .position(|e| matches!(e, HistoryEntry::Macro(_)))
            .unwrap();
        let setup = &entries[..macro_at];
        let undo = &entries[macro_at + 1..];
        assert_eq!(setup.len(), undo.len());
        assert!(setup.len() <= 7);
        for (s, u) in setup.iter().zip(undo.iter().rev()) {
            match (s, u) {
                (HistoryEntry::Move(s), HistoryEntry::Move(u)) => assert_eq!(s.inverse(), *u),
                other => panic!("unexpected entries {other:?}"),
            }
        }
    }

    #[test]
    fn test_replay_matches_cube() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut c = candidate("R U F' L2");
        c.apply_random_macros(Catalog::Edges, 3, &mut rng);
        c.apply_bracketed(Catalog::Edges, 4, 7, &mut rng);
        c.apply_random_move(&mut rng);
        assert_eq!(&c.replay().unwrap(), c.cube());
        assert_eq!(c.score(), c.cube().score());
    }

    #[test]
    fn test_reset_returns_to_origin() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut c = candidate("R U");
        let origin = c.cube().clone();
        c.apply_bracketed(Catalog::Corners, 5, 7, &mut rng);
        c.reset();
        assert_eq!(c.cube(), &origin);
        assert!(c.history().is_empty());
        assert_eq!(c.score(), origin.score());
    }

    #[test]
    fn test_bad_macro_leaves_candidate_untouched() {
        let mut c = candidate("R");
        let before = c.cube().clone();
        assert!(c.apply_macro(MacroRef::new(Catalog::Edges, 40)).is_err());
        assert_eq!(c.cube(), &before);
        assert!(c.history().is_empty());
    }

    #[test]
    fn test_clones_do_not_alias() {
        let original = candidate("F");
        let mut branch = original.clone();
        branch.apply_move("F'".parse().unwrap());
        assert!(branch.is_solved());
        assert!(!original.is_solved());
        assert!(original.history().is_empty());
    }
}
