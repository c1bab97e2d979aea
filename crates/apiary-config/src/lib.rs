//! Configuration system for Apiary.
//!
//! Load the scramble, bees-algorithm parameters and output settings from TOML
//! or YAML without code changes. Every field has a default, so a partial file
//! (or none at all) is enough.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use apiary_config::ApiaryConfig;
//! use std::time::Duration;
//!
//! let config = ApiaryConfig::from_toml_str(r#"
//!     [scramble]
//!     manual = "R U R' U'"
//!
//!     [solver]
//!     initial_population_size = 20
//!     num_scouts = 10
//!     seconds_spent_limit = 30
//!
//!     [solver.schedule]
//!     exploit_low = { min = 1, max = 3 }
//! "#).unwrap();
//!
//! assert_eq!(config.solver.initial_population_size, 20);
//! assert_eq!(config.solver.max_iterations, 50);
//! assert_eq!(config.solver.schedule.exploit_low.max, 3);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert!(config.validate().is_ok());
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use apiary_config::ApiaryConfig;
//!
//! let config = ApiaryConfig::load("apiary.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

use apiary_core::{CubeError, Scramble};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid scramble: {0}")]
    Scramble(#[from] CubeError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ApiaryConfig {
    /// Where the cube starts.
    #[serde(default)]
    pub scramble: ScrambleConfig,

    /// Bees-algorithm parameters.
    #[serde(default)]
    pub solver: SolverConfig,

    /// Solution artifact and run logs.
    #[serde(default)]
    pub output: OutputConfig,
}

impl ApiaryConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets a manual scramble.
    pub fn with_scramble(mut self, notation: impl Into<String>) -> Self {
        self.scramble.manual = Some(notation.into());
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.solver.random_seed = Some(seed);
        self
    }

    /// Sets population size, scouts and local searches in one go.
    pub fn with_population(
        mut self,
        initial_population_size: usize,
        num_scouts: usize,
        num_local_searches: usize,
    ) -> Self {
        self.solver.initial_population_size = initial_population_size;
        self.solver.num_scouts = num_scouts;
        self.solver.num_local_searches = num_local_searches;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.solver.max_iterations = max_iterations;
        self
    }

    /// Sets the wall-clock limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.solver.seconds_spent_limit = Some(seconds);
        self
    }

    /// Returns the wall-clock limit, if configured.
    pub fn time_limit(&self) -> Option<Duration> {
        self.solver.time_limit()
    }

    /// Checks everything that would make the solver degenerate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field, or
    /// [`ConfigError::Scramble`] if the manual scramble does not parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scramble.manual_scramble()?;
        self.solver.validate()
    }
}

/// Scramble configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct ScrambleConfig {
    /// Fixed scramble notation. Empty or absent means a random scramble.
    pub manual: Option<String>,

    /// Length of the random scramble.
    pub random_moves: usize,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            manual: None,
            random_moves: 50,
        }
    }
}

impl ScrambleConfig {
    /// The manual scramble, parsed; `None` if a random one should be drawn.
    pub fn manual_scramble(&self) -> Result<Option<Scramble>, ConfigError> {
        match self.manual.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(notation) => Ok(Some(Scramble::parse(notation)?)),
        }
    }
}

/// How the runner publishes snapshots to the shared slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishPolicy {
    /// Publish the current best after every iteration, even if it got worse.
    #[default]
    EveryIteration,

    /// Publish only when the best strictly improves.
    OnImprovement,
}

/// Largest accepted [`SolverConfig::finish_depth`].
pub const MAX_FINISH_DEPTH: usize = 4;

/// Bees-algorithm parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SolverConfig {
    /// Copies of the scrambled origin in the first population.
    pub initial_population_size: usize,

    /// Scouts generated per iteration.
    pub num_scouts: usize,

    /// Trials per candidate per iteration.
    pub num_local_searches: usize,

    /// Iteration budget.
    pub max_iterations: usize,

    /// Relevant-score level below which mutations get lighter.
    pub score_threshold: usize,

    /// Depth of the exhaustive literal-move search tried from the best elite
    /// before each iteration; 0 disables it.
    pub finish_depth: usize,

    /// Random seed for reproducible results.
    pub random_seed: Option<u64>,

    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<u64>,

    /// Snapshot publishing policy.
    pub publish: PublishPolicy,

    /// Mutation sizes and rates.
    pub schedule: MutationSchedule,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_population_size: 50,
            num_scouts: 50,
            num_local_searches: 50,
            max_iterations: 50,
            score_threshold: 5,
            finish_depth: 3,
            random_seed: None,
            seconds_spent_limit: None,
            publish: PublishPolicy::default(),
            schedule: MutationSchedule::default(),
        }
    }
}

impl SolverConfig {
    pub fn time_limit(&self) -> Option<Duration> {
        self.seconds_spent_limit
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Validates population sizes and the mutation schedule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_population_size < 4 {
            return Err(invalid(format!(
                "initial_population_size must be at least 4, got {}",
                self.initial_population_size
            )));
        }
        if self.num_scouts < 2 {
            return Err(invalid(format!(
                "num_scouts must be at least 2, got {}",
                self.num_scouts
            )));
        }
        if self.num_local_searches == 0 {
            return Err(invalid("num_local_searches must be at least 1"));
        }
        if self.max_iterations == 0 {
            return Err(invalid("max_iterations must be at least 1"));
        }
        if self.finish_depth > MAX_FINISH_DEPTH {
            return Err(invalid(format!(
                "finish_depth must be at most {MAX_FINISH_DEPTH}, got {}",
                self.finish_depth
            )));
        }
        self.schedule.validate()
    }
}

/// Inclusive count range a mutation size is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

impl CountRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn bounds(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }
}

/// Mutation sizes and rates used by the exploit and explore phases.
///
/// "Low" ranges apply once the relevant score is at or below the threshold.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct MutationSchedule {
    /// Longest random setup in a bracketed macro.
    pub max_setup: usize,

    /// Bracketed macros per exploit trial, near the goal.
    pub exploit_low: CountRange,

    /// Bracketed macros per exploit trial, far from the goal.
    pub exploit_high: CountRange,

    /// Bracketed macros per scout, near the goal.
    pub explore_low: CountRange,

    /// Plain edge macros per scout while corners are solved but edges are far off.
    pub explore_edge_macros: CountRange,

    /// Bracketed edge macros following [`explore_edge_macros`](Self::explore_edge_macros).
    pub explore_edge_brackets: CountRange,

    /// Bracketed corner macros per scout, far from the goal.
    pub explore_corner_brackets: CountRange,

    /// Chance an exploit trial is a single literal move, near the goal.
    pub literal_rate_low: f64,

    /// Chance an exploit trial is a single literal move, far from the goal.
    pub literal_rate_high: f64,

    /// Every n-th scout is seeded from the elites.
    pub elite_every: usize,

    /// Cursor advance through the elites per elite-seeded scout.
    pub elite_stride: f64,

    /// Above threshold + margin, elite-seeded scouts all start from the best elite.
    pub elite_margin: usize,
}

impl Default for MutationSchedule {
    fn default() -> Self {
        Self {
            max_setup: 7,
            exploit_low: CountRange::new(1, 2),
            exploit_high: CountRange::new(1, 4),
            explore_low: CountRange::new(1, 4),
            explore_edge_macros: CountRange::new(0, 60),
            explore_edge_brackets: CountRange::new(1, 40),
            explore_corner_brackets: CountRange::new(1, 30),
            literal_rate_low: 0.5,
            literal_rate_high: 0.15,
            elite_every: 5,
            elite_stride: 0.2,
            elite_margin: 3,
        }
    }
}

impl MutationSchedule {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ranges = [
            ("exploit_low", self.exploit_low),
            ("exploit_high", self.exploit_high),
            ("explore_low", self.explore_low),
            ("explore_edge_macros", self.explore_edge_macros),
            ("explore_edge_brackets", self.explore_edge_brackets),
            ("explore_corner_brackets", self.explore_corner_brackets),
        ];
        for (name, range) in ranges {
            if range.min > range.max {
                return Err(invalid(format!(
                    "schedule.{name}: min {} exceeds max {}",
                    range.min, range.max
                )));
            }
        }
        for (name, rate) in [
            ("literal_rate_low", self.literal_rate_low),
            ("literal_rate_high", self.literal_rate_high),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(invalid(format!(
                    "schedule.{name} must be within [0, 1], got {rate}"
                )));
            }
        }
        if self.elite_every == 0 {
            return Err(invalid("schedule.elite_every must be at least 1"));
        }
        if !(self.elite_stride > 0.0 && self.elite_stride.is_finite()) {
            return Err(invalid("schedule.elite_stride must be positive"));
        }
        Ok(())
    }
}

/// Where results go.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct OutputConfig {
    /// Write a solution text file when the cube is solved.
    pub save_solution: bool,

    /// Directory for solution files.
    pub solution_dir: PathBuf,

    /// Directory for `execution_log.csv` and `iteration_log.csv`; no logs if unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            save_solution: true,
            solution_dir: PathBuf::from("solutions"),
            log_dir: None,
        }
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(message.into())
}

#[cfg(test)]
mod tests;
