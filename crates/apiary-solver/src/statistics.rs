//! Solver statistics collection and reporting.
//!
//! Tracks trial and scout counts across the parallel exploit and explore
//! phases, plus the best score after every iteration.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use apiary_core::CubeScore;

/// Best score at the end of one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationRecord {
    /// Iteration index (0-based).
    pub iteration: usize,
    /// Time since solving started.
    pub time_offset: Duration,
    /// Score of the best-ranked population member.
    pub best: CubeScore,
}

/// Complete statistics for a solver run.
#[derive(Debug, Clone, Default)]
pub struct SolverStatistics {
    /// Total time spent solving.
    pub total_duration: Duration,
    /// Completed iterations.
    pub iterations: u64,
    /// Exploit trials evaluated.
    pub trials_evaluated: u64,
    /// Exploit trials that beat their candidate's best.
    pub trials_improved: u64,
    /// Scouts generated by the explore phase.
    pub scouts_generated: u64,
    /// Best score per iteration.
    pub score_history: Vec<IterationRecord>,
}

impl SolverStatistics {
    /// Returns the share of exploit trials that improved (improved / evaluated).
    pub fn improvement_rate(&self) -> f64 {
        if self.trials_evaluated == 0 {
            0.0
        } else {
            self.trials_improved as f64 / self.trials_evaluated as f64
        }
    }

    /// Returns the average time per iteration.
    pub fn avg_time_per_iteration(&self) -> Duration {
        if self.iterations == 0 {
            Duration::ZERO
        } else {
            self.total_duration / self.iterations as u32
        }
    }

    /// Returns the best score seen in any iteration, by selection order.
    pub fn best_score(&self) -> Option<CubeScore> {
        self.score_history
            .iter()
            .map(|record| record.best)
            .min_by_key(|score| score.selection_key())
    }
}

/// Thread-safe collector for solver statistics.
///
/// Counters are atomics so rayon workers can record without locking.
pub struct StatisticsCollector {
    start_time: Instant,
    trials_evaluated: AtomicU64,
    trials_improved: AtomicU64,
    scouts_generated: AtomicU64,
    iterations: AtomicU64,
    score_history: Mutex<Vec<IterationRecord>>,
}

impl StatisticsCollector {
    /// Creates a new statistics collector; the start time is recorded now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            trials_evaluated: AtomicU64::new(0),
            trials_improved: AtomicU64::new(0),
            scouts_generated: AtomicU64::new(0),
            iterations: AtomicU64::new(0),
            score_history: Mutex::new(Vec::new()),
        }
    }

    /// Records one exploit trial.
    pub fn record_trial(&self, improved: bool) {
        self.trials_evaluated.fetch_add(1, Ordering::Relaxed);
        if improved {
            self.trials_improved.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_scout(&self) {
        self.scouts_generated.fetch_add(1, Ordering::Relaxed);
    }

    /// Records the end of an iteration and its best score.
    pub fn record_iteration(&self, iteration: usize, best: CubeScore) {
        self.iterations.fetch_add(1, Ordering::Relaxed);
        let record = IterationRecord {
            iteration,
            time_offset: self.start_time.elapsed(),
            best,
        };
        self.score_history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn current_trials_evaluated(&self) -> u64 {
        self.trials_evaluated.load(Ordering::Relaxed)
    }

    pub fn current_iterations(&self) -> u64 {
        self.iterations.load(Ordering::Relaxed)
    }

    /// Takes a snapshot of current statistics without consuming the collector.
    pub fn snapshot(&self) -> SolverStatistics {
        SolverStatistics {
            total_duration: self.start_time.elapsed(),
            iterations: self.iterations.load(Ordering::Relaxed),
            trials_evaluated: self.trials_evaluated.load(Ordering::Relaxed),
            trials_improved: self.trials_improved.load(Ordering::Relaxed),
            scouts_generated: self.scouts_generated.load(Ordering::Relaxed),
            score_history: self
                .score_history
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
        }
    }
}

impl Default for StatisticsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StatisticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticsCollector")
            .field("iterations", &self.current_iterations())
            .field("trials_evaluated", &self.current_trials_evaluated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_counts() {
        let collector = StatisticsCollector::new();
        collector.record_trial(false);
        collector.record_trial(true);
        collector.record_trial(true);
        collector.record_scout();
        collector.record_iteration(0, CubeScore::of(4, 4));
        collector.record_iteration(1, CubeScore::of(3, 0));

        let stats = collector.snapshot();
        assert_eq!(stats.trials_evaluated, 3);
        assert_eq!(stats.trials_improved, 2);
        assert_eq!(stats.scouts_generated, 1);
        assert_eq!(stats.iterations, 2);
        assert_eq!(stats.best_score(), Some(CubeScore::of(3, 0)));
        assert!((stats.improvement_rate() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_parallel_recording() {
        let collector = StatisticsCollector::new();
        rayon::scope(|s| {
            for _ in 0..4 {
                s.spawn(|_| {
                    for _ in 0..250 {
                        collector.record_trial(true);
                    }
                });
            }
        });
        assert_eq!(collector.current_trials_evaluated(), 1000);
        assert_eq!(collector.snapshot().trials_improved, 1000);
    }

    #[test]
    fn test_history_survives_poisoned_lock() {
        let collector = StatisticsCollector::new();
        std::thread::scope(|s| {
            let holder = s.spawn(|| {
                let _guard = collector.score_history.lock().unwrap();
                panic!("holder panicked");
            });
            assert!(holder.join().is_err());
        });
        assert!(collector.score_history.is_poisoned());

        collector.record_iteration(0, CubeScore::of(3, 0));
        let stats = collector.snapshot();
        assert_eq!(stats.score_history.len(), 1);
        assert_eq!(stats.iterations, 1);
    }

    #[test]
    fn test_empty_statistics() {
        let stats = SolverStatistics::default();
        assert_eq!(stats.improvement_rate(), 0.0);
        assert_eq!(stats.avg_time_per_iteration(), Duration::ZERO);
        assert_eq!(stats.best_score(), None);
    }
}
