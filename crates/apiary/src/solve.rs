//! Solver entry points that hide the runner wiring.

use std::path::Path;

use apiary_config::ApiaryConfig;
use apiary_core::Scramble;
use apiary_solver::{Result, RunReport, SolverRunner};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::warn;

/// Config file read when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "apiary.toml";

/// Loads `path` (or [`DEFAULT_CONFIG_PATH`]), falling back to defaults.
///
/// Files ending in `.yaml` or `.yml` are read as YAML, everything else as
/// TOML.
pub fn load_config(path: Option<&Path>) -> ApiaryConfig {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
    let loaded = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => ApiaryConfig::from_yaml_file(path),
        _ => ApiaryConfig::from_toml_file(path),
    };
    loaded.unwrap_or_else(|err| {
        warn!(
            event = "config_defaults",
            path = %path.display(),
            error = %err,
        );
        ApiaryConfig::default()
    })
}

/// The configured manual scramble, or a random one of `random_moves` moves.
///
/// Random scrambles are drawn from the solver seed when one is set, so a
/// seeded config reproduces both scramble and search.
pub fn resolve_scramble(config: &ApiaryConfig) -> Result<Scramble> {
    if let Some(scramble) = config.scramble.manual_scramble()? {
        return Ok(scramble);
    }
    let mut rng = match config.solver.random_seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };
    Ok(Scramble::random(&mut rng, config.scramble.random_moves))
}

/// Validates `config`, resolves its scramble and solves on this thread.
pub fn solve(config: &ApiaryConfig) -> Result<RunReport> {
    config.validate()?;
    let scramble = resolve_scramble(config)?;
    SolverRunner::new(scramble, config).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("absent.toml")));
        assert_eq!(config.solver.initial_population_size, 50);
    }

    #[test]
    fn test_yaml_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("apiary.yml");
        std::fs::write(&path, "solver:\n  num_scouts: 12\n").unwrap();
        assert_eq!(load_config(Some(&path)).solver.num_scouts, 12);
    }

    #[test]
    fn test_seeded_random_scramble_is_stable() {
        let config = ApiaryConfig::new().with_random_seed(5);
        let first = resolve_scramble(&config).unwrap();
        let second = resolve_scramble(&config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 50);
    }

    #[test]
    fn test_manual_scramble_wins() {
        let config = ApiaryConfig::new().with_scramble("R U2 F'");
        assert_eq!(resolve_scramble(&config).unwrap().notation(), "R U2 F'");
    }
}
