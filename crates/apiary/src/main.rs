use std::path::PathBuf;
use std::process::ExitCode;

use apiary::{console, load_config, resolve_scramble, RunReport, SolverError, SolverRunner};
use clap::Parser;
use tracing::error;

#[derive(Parser)]
#[command(name = "apiary")]
#[command(version, about = "Solve a Rubik's cube with the Bees Algorithm")]
struct Cli {
    /// Configuration file (TOML, or YAML by extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scramble in standard notation; overrides the configured one
    #[arg(short, long)]
    scramble: Option<String>,

    /// Seed for scramble generation and search
    #[arg(long)]
    seed: Option<u64>,

    /// Iteration budget
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Wall-clock limit in seconds
    #[arg(long)]
    time_limit: Option<u64>,

    /// Do not write the solution file
    #[arg(long)]
    no_save: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    console::init();

    match run(cli) {
        Ok(report) => {
            console::print_report(&report);
            if report.is_solved() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
        Err(err) => {
            error!(event = "solve_failed", error = %err);
            eprintln!("apiary: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<RunReport, SolverError> {
    let mut config = load_config(cli.config.as_deref());
    if let Some(scramble) = cli.scramble {
        config = config.with_scramble(scramble);
    }
    if let Some(seed) = cli.seed {
        config = config.with_random_seed(seed);
    }
    if let Some(max_iterations) = cli.max_iterations {
        config = config.with_max_iterations(max_iterations);
    }
    if let Some(seconds) = cli.time_limit {
        config = config.with_termination_seconds(seconds);
    }
    if cli.no_save {
        config.output.save_solution = false;
    }
    config.validate()?;

    let scramble = resolve_scramble(&config)?;
    console::print_cube(&scramble.scrambled_cube());

    SolverRunner::new(scramble, &config).spawn()?.join()
}
