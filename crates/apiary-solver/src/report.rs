//! Run logs and the solution artifact.
//!
//! Both CSV logs are append-only and shared between runs: the header is
//! written once, when the file is created, and every row carries the run's
//! parameters and execution id. Write failures are logged and never abort a
//! solve.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use apiary_config::SolverConfig;
use apiary_core::{format_sequence, CubeScore, MoveToken};
use tracing::{info, warn};

/// File name of the per-run log.
pub const EXECUTION_LOG: &str = "execution_log.csv";

/// File name of the per-iteration log.
pub const ITERATION_LOG: &str = "iteration_log.csv";

const PARAMETER_COLUMNS: &str =
    "initial_population_size,num_scouts,num_local_searches,max_iterations,execution_id";

/// Seconds since the Unix epoch, or 0 if the clock is before it.
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// The parameters every log row and solution file repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunParameters {
    pub initial_population_size: usize,
    pub num_scouts: usize,
    pub num_local_searches: usize,
    pub max_iterations: usize,
}

impl From<&SolverConfig> for RunParameters {
    fn from(config: &SolverConfig) -> Self {
        Self {
            initial_population_size: config.initial_population_size,
            num_scouts: config.num_scouts,
            num_local_searches: config.num_local_searches,
            max_iterations: config.max_iterations,
        }
    }
}

impl fmt::Display for RunParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "initial_population_size={}, num_scouts={}, num_local_searches={}, max_iterations={}",
            self.initial_population_size,
            self.num_scouts,
            self.num_local_searches,
            self.max_iterations
        )
    }
}

/// Appends run and iteration rows to the CSV logs in one directory.
///
/// # Example
///
/// ```
/// use apiary_core::CubeScore;
/// use apiary_solver::report::{RunLog, RunParameters};
/// use std::time::Duration;
///
/// let dir = std::env::temp_dir().join("apiary-runlog-doctest");
/// let params = RunParameters {
///     initial_population_size: 10,
///     num_scouts: 10,
///     num_local_searches: 5,
///     max_iterations: 50,
/// };
/// let log = RunLog::new(Some(dir.clone()), params, 1_700_000_000);
/// log.log_iteration(0, CubeScore::of(4, 4));
/// log.log_execution(1, Duration::from_millis(1500));
///
/// let rows = std::fs::read_to_string(dir.join("iteration_log.csv")).unwrap();
/// assert!(rows.starts_with("initial_population_size,"));
/// assert!(rows.contains("10,10,5,50,1700000000,0,8,4,4"));
/// # std::fs::remove_dir_all(&dir).ok();
/// ```
#[derive(Debug, Clone)]
pub struct RunLog {
    dir: Option<PathBuf>,
    params: RunParameters,
    execution_id: u64,
}

impl RunLog {
    /// Logs into `dir`; `None` disables logging.
    pub fn new(dir: Option<PathBuf>, params: RunParameters, execution_id: u64) -> Self {
        Self {
            dir,
            params,
            execution_id,
        }
    }

    pub fn execution_id(&self) -> u64 {
        self.execution_id
    }

    pub fn is_enabled(&self) -> bool {
        self.dir.is_some()
    }

    /// Appends one iteration row with the published best score.
    pub fn log_iteration(&self, iteration: usize, score: CubeScore) {
        let row = format!(
            "{},{},{},{},{}",
            self.parameter_values(),
            iteration,
            score.total(),
            score.corners(),
            score.edges()
        );
        self.append(
            ITERATION_LOG,
            &format!("{PARAMETER_COLUMNS},iteration,score,corner_score,edge_score"),
            &row,
        );
    }

    /// Appends the run row; execution time is in seconds.
    pub fn log_execution(&self, iterations: usize, elapsed: Duration) {
        let row = format!(
            "{},{},{:.3}",
            self.parameter_values(),
            iterations,
            elapsed.as_secs_f64()
        );
        self.append(
            EXECUTION_LOG,
            &format!("{PARAMETER_COLUMNS},num_iterations,execution_time"),
            &row,
        );
    }

    fn parameter_values(&self) -> String {
        let p = &self.params;
        format!(
            "{},{},{},{},{}",
            p.initial_population_size,
            p.num_scouts,
            p.num_local_searches,
            p.max_iterations,
            self.execution_id
        )
    }

    fn append(&self, file_name: &str, header: &str, row: &str) {
        let Some(dir) = &self.dir else {
            return;
        };
        let path = dir.join(file_name);
        if let Err(err) = append_row(&path, header, row) {
            warn!(
                event = "log_write_failed",
                path = %path.display(),
                error = %err,
            );
        }
    }
}

fn append_row(path: &Path, header: &str, row: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if file.metadata()?.len() == 0 {
        writeln!(file, "{header}")?;
    }
    writeln!(file, "{row}")
}

/// Plain-text record of a found solution.
#[derive(Debug, Clone)]
pub struct SolutionArtifact<'a> {
    pub scramble: &'a str,
    pub elapsed: Duration,
    pub iterations: usize,
    pub params: RunParameters,
    pub moves: &'a [MoveToken],
}

impl SolutionArtifact<'_> {
    /// Writes `solution_<timestamp>.txt` into `dir`, creating it if needed.
    pub fn write_to(&self, dir: &Path, timestamp: u64) -> io::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("solution_{timestamp}.txt"));
        fs::write(&path, self.to_string())?;
        Ok(path)
    }

    /// Like [`write_to`](Self::write_to), but failures are only logged.
    pub fn save(&self, dir: &Path) -> Option<PathBuf> {
        match self.write_to(dir, unix_timestamp()) {
            Ok(path) => {
                info!(event = "solution_saved", path = %path.display());
                Some(path)
            }
            Err(err) => {
                warn!(
                    event = "solution_write_failed",
                    dir = %dir.display(),
                    error = %err,
                );
                None
            }
        }
    }
}

impl fmt::Display for SolutionArtifact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solution for: {}", self.scramble)?;
        writeln!(
            f,
            "Found in {:.3} seconds with {} iterations",
            self.elapsed.as_secs_f64(),
            self.iterations
        )?;
        writeln!(f, "Parameters: {}", self.params)?;
        writeln!(f, "Moves: {}", self.moves.len())?;
        writeln!(f)?;
        writeln!(f, "{}", format_sequence(self.moves))
    }
}

#[cfg(test)]
mod tests {
    use apiary_core::parse_sequence;

    use super::*;

    fn params() -> RunParameters {
        RunParameters {
            initial_population_size: 10,
            num_scouts: 8,
            num_local_searches: 5,
            max_iterations: 50,
        }
    }

    #[test]
    fn test_header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let first = RunLog::new(Some(dir.path().to_path_buf()), params(), 1);
        let second = RunLog::new(Some(dir.path().to_path_buf()), params(), 2);
        first.log_iteration(0, CubeScore::of(4, 4));
        first.log_iteration(1, CubeScore::of(3, 0));
        second.log_iteration(0, CubeScore::SOLVED);

        let contents = fs::read_to_string(dir.path().join(ITERATION_LOG)).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            [
                "initial_population_size,num_scouts,num_local_searches,max_iterations,execution_id,iteration,score,corner_score,edge_score",
                "10,8,5,50,1,0,8,4,4",
                "10,8,5,50,1,1,3,0,3",
                "10,8,5,50,2,0,0,0,0",
            ]
        );
    }

    #[test]
    fn test_execution_row() {
        let dir = tempfile::tempdir().unwrap();
        let log = RunLog::new(Some(dir.path().join("nested")), params(), 7);
        log.log_execution(12, Duration::from_millis(2500));

        let contents = fs::read_to_string(dir.path().join("nested").join(EXECUTION_LOG)).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines[0],
            "initial_population_size,num_scouts,num_local_searches,max_iterations,execution_id,num_iterations,execution_time"
        );
        assert_eq!(lines[1], "10,8,5,50,7,12,2.500");
    }

    #[test]
    fn test_disabled_log_writes_nothing() {
        let log = RunLog::new(None, params(), 1);
        assert!(!log.is_enabled());
        log.log_iteration(0, CubeScore::SOLVED);
        log.log_execution(0, Duration::ZERO);
    }

    #[test]
    fn test_unwritable_log_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "not a directory").unwrap();
        let log = RunLog::new(Some(blocker), params(), 1);
        log.log_iteration(0, CubeScore::SOLVED);
    }

    #[test]
    fn test_solution_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let moves = parse_sequence("R' U'").unwrap();
        let artifact = SolutionArtifact {
            scramble: "U R",
            elapsed: Duration::from_secs(3),
            iterations: 4,
            params: params(),
            moves: &moves,
        };

        let path = artifact.write_to(&dir.path().join("solutions"), 1234).unwrap();
        assert_eq!(path.file_name().unwrap(), "solution_1234.txt");

        let text = fs::read_to_string(path).unwrap();
        assert!(text.starts_with("Solution for: U R\n"));
        assert!(text.contains("with 4 iterations"));
        assert!(text.contains("num_scouts=8"));
        assert!(text.trim_end().ends_with("R' U'"));
    }
}
