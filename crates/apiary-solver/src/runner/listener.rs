//! Progress callbacks.

use apiary_core::{Candidate, MoveToken};

/// Receives every published snapshot, called with the shared slot locked.
///
/// Keep implementations short: the solver thread waits on them and readers of
/// the slot block meanwhile.
pub trait ProgressListener: Send {
    fn on_progress(&mut self, moves: &[MoveToken], candidate: &Candidate);
}

impl<F> ProgressListener for F
where
    F: FnMut(&[MoveToken], &Candidate) + Send,
{
    fn on_progress(&mut self, moves: &[MoveToken], candidate: &Candidate) {
        self(moves, candidate)
    }
}

/// A boxed listener for type-erased storage.
pub type BoxedProgressListener = Box<dyn ProgressListener>;
