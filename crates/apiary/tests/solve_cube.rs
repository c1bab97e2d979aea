//! End-to-end solves through the public API.

use std::sync::{Arc, Mutex};

use apiary::prelude::*;
use apiary::{Candidate, PublishPolicy};

fn config(scramble: &str, dir: &std::path::Path) -> ApiaryConfig {
    let mut config = ApiaryConfig::new()
        .with_scramble(scramble)
        .with_population(10, 10, 5)
        .with_random_seed(42);
    config.output.solution_dir = dir.join("solutions");
    config.output.log_dir = Some(dir.join("logs"));
    config
}

#[test]
fn solves_single_turn_and_saves_solution() {
    let dir = tempfile::tempdir().unwrap();
    let report = apiary::solve(&config("R", dir.path())).unwrap();

    assert_eq!(report.outcome, RunOutcome::Solved);
    let moves = report.solution.as_deref().unwrap();
    let mut cube = Scramble::parse("R").unwrap().scrambled_cube();
    cube.apply_all(moves);
    assert!(cube.is_solved());

    let saved = std::fs::read_to_string(report.solution_path.unwrap()).unwrap();
    assert!(saved.contains(&apiary::format_sequence(moves)));
    assert!(dir.path().join("logs").join("execution_log.csv").exists());
}

#[test]
fn listener_sees_solution_last() {
    let dir = tempfile::tempdir().unwrap();
    let config = config("R", dir.path());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let scramble = apiary::resolve_scramble(&config).unwrap();
    let report = SolverRunner::new(scramble, &config)
        .with_listener(move |moves: &[MoveToken], candidate: &Candidate| {
            sink.lock()
                .unwrap()
                .push((moves.to_vec(), candidate.is_solved()));
        })
        .spawn()
        .unwrap()
        .join()
        .unwrap();

    let seen = seen.lock().unwrap();
    let (moves, solved) = seen.last().unwrap();
    assert!(*solved);
    assert_eq!(Some(moves), report.solution.as_ref());
    assert!(seen[..seen.len() - 1].iter().all(|(m, s)| m.is_empty() && !s));
}

#[test]
fn on_improvement_best_never_regresses() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config("R U F' L D2", dir.path()).with_max_iterations(6);
    config.output.save_solution = false;
    config.solver.publish = PublishPolicy::OnImprovement;

    let scramble = apiary::resolve_scramble(&config).unwrap();
    let mut runner = SolverRunner::new(scramble, &config);
    let mut rx = runner.subscribe();
    let report = runner.run().unwrap();

    let mut last: Option<CubeScore> = None;
    while let Ok(snapshot) = rx.try_recv() {
        let score = snapshot.score();
        if let Some(prev) = last {
            assert!(score.selection_key() <= prev.selection_key());
        }
        last = Some(score);
    }
    if report.is_solved() {
        assert_eq!(last, Some(CubeScore::SOLVED));
    }
}
