//! Handle for observing and cancelling a running solver.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use apiary_core::{Candidate, CubeScore, MoveToken};

/// Deep copy of the solver's best state at one point in time.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Iterations searched when this snapshot was published; 0 for the
    /// initial seed, so the first searched iteration publishes 1.
    pub iteration: usize,
    pub candidate: Candidate,
    /// Translated moves: the solution once solved, otherwise empty
    /// (or the best candidate's history at the iteration limit).
    pub moves: Vec<MoveToken>,
}

impl Snapshot {
    pub fn score(&self) -> CubeScore {
        self.candidate.score()
    }
}

/// Mutex-guarded slot holding the latest published [`Snapshot`].
pub type SharedBest = Arc<Mutex<Option<Snapshot>>>;

/// Locks a shared slot, recovering the data if a holder panicked.
pub fn lock_slot(slot: &Mutex<Option<Snapshot>>) -> MutexGuard<'_, Option<Snapshot>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle for interacting with a running solver.
///
/// Cloning is cheap; all clones share the same flags and slot.
///
/// # Example
///
/// ```
/// use apiary_solver::runner::SolverHandle;
///
/// let handle = SolverHandle::new();
/// assert!(!handle.is_solving());
/// assert!(handle.best().is_none());
///
/// handle.terminate_early();
/// assert!(handle.is_terminate_early_requested());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverHandle {
    /// Flag indicating whether the solver is currently running.
    solving: Arc<AtomicBool>,
    /// Flag to request early termination.
    terminate_early: Arc<AtomicBool>,
    /// Latest published snapshot.
    best: SharedBest,
}

impl SolverHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation; the solver stops at the next iteration boundary.
    pub fn terminate_early(&self) {
        self.terminate_early.store(true, Ordering::SeqCst);
    }

    pub fn is_terminate_early_requested(&self) -> bool {
        self.terminate_early.load(Ordering::SeqCst)
    }

    /// Returns true if the solver is currently solving.
    pub fn is_solving(&self) -> bool {
        self.solving.load(Ordering::SeqCst)
    }

    pub(crate) fn set_solving(&self, solving: bool) {
        self.solving.store(solving, Ordering::SeqCst);
    }

    /// Copy of the latest published snapshot.
    pub fn best(&self) -> Option<Snapshot> {
        lock_slot(&self.best).clone()
    }

    /// The shared slot itself, for consumers that hold the lock while reading.
    pub fn shared_best(&self) -> SharedBest {
        Arc::clone(&self.best)
    }
}
