//! Tests for apiary configuration.

use super::*;

#[test]
fn test_defaults_match_reference_settings() {
    let config = ApiaryConfig::default();
    assert_eq!(config.scramble.random_moves, 50);
    assert!(config.scramble.manual.is_none());
    assert_eq!(config.solver.initial_population_size, 50);
    assert_eq!(config.solver.num_scouts, 50);
    assert_eq!(config.solver.num_local_searches, 50);
    assert_eq!(config.solver.max_iterations, 50);
    assert_eq!(config.solver.score_threshold, 5);
    assert_eq!(config.solver.finish_depth, 3);
    assert_eq!(config.solver.publish, PublishPolicy::EveryIteration);
    assert!(config.output.save_solution);
    assert!(config.output.log_dir.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [scramble]
        manual = "F R U"

        [solver]
        initial_population_size = 10
        num_scouts = 10
        num_local_searches = 5
        random_seed = 42
        publish = "on_improvement"

        [solver.schedule]
        max_setup = 4
        literal_rate_low = 0.7

        [output]
        save_solution = false
        log_dir = "logs"
    "#;

    let config = ApiaryConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.solver.initial_population_size, 10);
    assert_eq!(config.solver.random_seed, Some(42));
    assert_eq!(config.solver.publish, PublishPolicy::OnImprovement);
    assert_eq!(config.solver.schedule.max_setup, 4);
    assert_eq!(config.solver.schedule.literal_rate_low, 0.7);
    // untouched schedule fields keep their defaults
    assert_eq!(config.solver.schedule.explore_corner_brackets, CountRange::new(1, 30));
    assert!(!config.output.save_solution);
    assert_eq!(config.output.log_dir, Some(PathBuf::from("logs")));
    assert_eq!(
        config.scramble.manual_scramble().unwrap().unwrap().notation(),
        "F R U"
    );
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        scramble:
          random_moves: 25
        solver:
          max_iterations: 200
          random_seed: 7
          schedule:
            exploit_high:
              min: 2
              max: 6
    "#;

    let config = ApiaryConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.scramble.random_moves, 25);
    assert_eq!(config.solver.max_iterations, 200);
    assert_eq!(config.solver.random_seed, Some(7));
    assert_eq!(config.solver.schedule.exploit_high.bounds(), 2..=6);
}

#[test]
fn test_builder() {
    let config = ApiaryConfig::new()
        .with_scramble("R U")
        .with_random_seed(123)
        .with_population(12, 8, 3)
        .with_max_iterations(80)
        .with_termination_seconds(60);

    assert_eq!(config.solver.random_seed, Some(123));
    assert_eq!(config.solver.initial_population_size, 12);
    assert_eq!(config.solver.num_scouts, 8);
    assert_eq!(config.solver.num_local_searches, 3);
    assert_eq!(config.solver.max_iterations, 80);
    assert_eq!(config.time_limit(), Some(Duration::from_secs(60)));
}

#[test]
fn test_blank_manual_scramble_means_random() {
    let config = ApiaryConfig::new().with_scramble("   ");
    assert!(config.scramble.manual_scramble().unwrap().is_none());
}

#[test]
fn test_bad_manual_scramble_rejected() {
    let config = ApiaryConfig::new().with_scramble("R U Q");
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Scramble(CubeError::UnknownMove(token))) if token == "Q"
    ));
}

#[test]
fn test_degenerate_population_rejected() {
    let too_small = ApiaryConfig::new().with_population(3, 10, 5);
    assert!(matches!(too_small.validate(), Err(ConfigError::Invalid(_))));

    let one_scout = ApiaryConfig::new().with_population(10, 1, 5);
    assert!(matches!(one_scout.validate(), Err(ConfigError::Invalid(_))));

    let no_trials = ApiaryConfig::new().with_population(10, 10, 0);
    assert!(matches!(no_trials.validate(), Err(ConfigError::Invalid(_))));

    let no_budget = ApiaryConfig::new().with_max_iterations(0);
    assert!(matches!(no_budget.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_finish_depth_bounds() {
    let mut config = ApiaryConfig::new();
    config.solver.finish_depth = 0;
    assert!(config.validate().is_ok());

    config.solver.finish_depth = MAX_FINISH_DEPTH;
    assert!(config.validate().is_ok());

    config.solver.finish_depth = MAX_FINISH_DEPTH + 1;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("finish_depth"));
}

#[test]
fn test_bad_schedule_rejected() {
    let mut config = ApiaryConfig::new();
    config.solver.schedule.exploit_low = CountRange::new(3, 1);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("exploit_low"));

    let mut config = ApiaryConfig::new();
    config.solver.schedule.literal_rate_high = 1.5;
    assert!(config.validate().is_err());

    let mut config = ApiaryConfig::new();
    config.solver.schedule.elite_stride = 0.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_zero_time_limit_is_none() {
    let config = ApiaryConfig::new().with_termination_seconds(0);
    assert_eq!(config.time_limit(), None);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = ApiaryConfig::load("/nonexistent/apiary.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
