//! Colorful console output for solver progress.
//!
//! Provides a custom `tracing` layer that formats solver events with colors,
//! plus helpers that draw the cube net and the final run report.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve start/end, saved solution)
//! - **DEBUG**: Per-iteration best score
//! - **WARN**: Log or artifact write failures

mod net;

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

use apiary_core::format_sequence;
use apiary_solver::{RunOutcome, RunReport};
use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub use net::{format_net, print_cube};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the Apiary banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive("apiary_solver=info".parse().expect("static directive"))
            .from_env_lossy()
            .add_directive("apiary=info".parse().expect("static directive"));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
    _          _
   / \   _ __ (_) __ _ _ __ _   _
  / _ \ | '_ \| |/ _` | '__| | | |
 / ___ \| |_) | | (_| | |  | |_| |
/_/   \_\ .__/|_|\__,_|_|   \__, |
        |_|                 |___/
"#;

    let version_line = format!("         v{} - Bees Algorithm Cube Solver\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_yellow());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("apiary") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    scramble: Option<String>,
    score: Option<String>,
    outcome: Option<String>,
    solution: Option<String>,
    path: Option<String>,
    error: Option<String>,
    scramble_length: Option<u64>,
    population: Option<u64>,
    scouts: Option<u64>,
    local_searches: Option<u64>,
    max_iterations: Option<u64>,
    time_limit_secs: Option<u64>,
    iteration: Option<u64>,
    iterations: Option<u64>,
    duration_ms: Option<u64>,
    solution_length: Option<u64>,
    solved: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "scramble_length" => self.scramble_length = Some(value),
            "population" => self.population = Some(value),
            "scouts" => self.scouts = Some(value),
            "local_searches" => self.local_searches = Some(value),
            "max_iterations" => self.max_iterations = Some(value),
            "time_limit_secs" => self.time_limit_secs = Some(value),
            "iteration" => self.iteration = Some(value),
            "iterations" => self.iterations = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "solution_length" => self.solution_length = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "solved" {
            self.solved = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let slot = match field.name() {
            "event" => &mut self.event,
            "scramble" => &mut self.scramble,
            "score" => &mut self.score,
            "outcome" => &mut self.outcome,
            "solution" => &mut self.solution,
            "path" | "dir" => &mut self.path,
            "error" => &mut self.error,
            _ => return,
        };
        *slot = Some(value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "iteration_end" => format_iteration(v),
        "solve_end" => format_solve_end(v),
        "solution_saved" => format_saved(v),
        "log_write_failed" | "solution_write_failed" if level == Level::WARN => format_failure(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let scramble = v.scramble.as_deref().unwrap_or("");
    let time_limit = v.time_limit_secs.unwrap_or(0);

    let mut output = format!(
        "{} {} Solving {} ({} moves) │ {} bees │ {} scouts │ {} trials │ {} iterations max",
        format_elapsed(),
        "▶".bright_green().bold(),
        scramble.white().bold(),
        count(v.scramble_length).bright_yellow(),
        count(v.population).bright_yellow(),
        count(v.scouts).bright_yellow(),
        count(v.local_searches).bright_yellow(),
        count(v.max_iterations).bright_yellow(),
    );

    if time_limit > 0 {
        output.push_str(&format!(
            " │ {}s limit",
            time_limit.to_formatted_string(&Locale::en).bright_yellow()
        ));
    }
    if let Some(score) = &v.score {
        output.push_str(&format!(" │ {}", format_score(score)));
    }

    output
}

fn format_iteration(v: &EventVisitor) -> String {
    let score = v.score.as_deref().unwrap_or("N/A");
    format!(
        "{} {} Iteration {:>6} │ {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        count(v.iteration).white(),
        format_score(score)
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let score = v.score.as_deref().unwrap_or("N/A");
    let solved = v.solved.unwrap_or(false);
    let outcome = v.outcome.as_deref().unwrap_or("unknown");

    let status = if solved {
        "SOLVED".bright_green().bold().to_string()
    } else {
        outcome.to_uppercase().bright_red().bold().to_string()
    };

    let mut output = format!(
        "{} {} Solving complete │ {} iterations │ {} │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        count(v.iterations).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        format_score(score),
        status
    );

    // Summary box
    let inner_width: usize = 58;
    let border = "═".repeat(inner_width);
    output.push_str("\n\n");
    output.push_str(&format!("╔{border}╗").bright_cyan().to_string());
    output.push('\n');

    let status_text = if solved {
        "CUBE SOLVED"
    } else {
        "NO SOLUTION FOUND"
    };
    let total_pad = inner_width.saturating_sub(status_text.len());
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    let status_colored = if solved {
        status_text.bright_green().bold().to_string()
    } else {
        status_text.bright_red().bold().to_string()
    };
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        status_colored,
        " ".repeat(right_pad),
        "║".bright_cyan()
    ));
    output.push('\n');

    output.push_str(&format!("╠{border}╣").bright_cyan().to_string());
    output.push('\n');
    output.push_str(&box_row("Best Score:", score));
    if solved {
        output.push_str(&box_row("Solution Length:", &count(v.solution_length)));
    }
    output.push_str(&format!("╚{border}╝").bright_cyan().to_string());
    output.push('\n');

    output
}

fn box_row(label: &str, value: &str) -> String {
    format!(
        "{}  {:<18}{:>36}  {}\n",
        "║".bright_cyan(),
        label,
        value,
        "║".bright_cyan()
    )
}

fn format_saved(v: &EventVisitor) -> String {
    format!(
        "{} {} Solution saved to {}",
        format_elapsed(),
        "✓".bright_green(),
        v.path.as_deref().unwrap_or("?").underline()
    )
}

fn format_failure(v: &EventVisitor) -> String {
    format!(
        "{} {} Could not write {}: {}",
        format_elapsed(),
        "✗".bright_red(),
        v.path.as_deref().unwrap_or("?"),
        v.error.as_deref().unwrap_or("unknown error").yellow()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

// Scores render as `<edges>e/<corners>c`; zero parts are green.
fn format_score(score: &str) -> String {
    let Some((edges, corners)) = score.split_once('/') else {
        return score.white().to_string();
    };
    let part = |text: &str, suffix: char| {
        let misplaced = text.trim_end_matches(suffix).parse::<u64>().unwrap_or(1);
        if misplaced == 0 {
            text.bright_green().to_string()
        } else {
            text.yellow().to_string()
        }
    };
    format!("{}/{}", part(edges, 'e'), part(corners, 'c'))
}

/// Prints the final cube and outcome of a run to stdout.
pub fn print_report(report: &RunReport) {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout);
    let _ = write!(stdout, "{}", format_net(report.best.cube()));
    let _ = writeln!(stdout);

    let headline = match report.outcome {
        RunOutcome::Solved => "Solved".bright_green().bold().to_string(),
        RunOutcome::IterationLimitExceeded => {
            "Iteration limit reached".bright_red().bold().to_string()
        }
        RunOutcome::TimeLimitReached => "Time limit reached".bright_red().bold().to_string(),
        RunOutcome::Cancelled => "Cancelled".yellow().bold().to_string(),
    };
    let _ = writeln!(
        stdout,
        "{} after {} iterations in {:.3}s │ best {}",
        headline,
        report.iterations.to_formatted_string(&Locale::en),
        report.elapsed.as_secs_f64(),
        format_score(&report.best.score().to_string())
    );

    if let Some(moves) = &report.solution {
        let _ = writeln!(
            stdout,
            "{} {}",
            format!("Solution ({} moves):", moves.len()).bold(),
            format_sequence(moves).bright_white()
        );
    }
    let _ = stdout.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(2_500), "2.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_format_score_keeps_text() {
        assert_eq!(strip(&format_score("3e/0c")), "3e/0c");
        assert_eq!(strip(&format_score("N/A")), "N/A");
        assert_eq!(strip(&format_score("pending")), "pending");
    }

    #[test]
    fn test_unknown_events_are_silent() {
        let visitor = EventVisitor {
            event: Some("exploit_end".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor, Level::TRACE).is_empty());
    }

    #[test]
    fn test_solve_end_summary() {
        let visitor = EventVisitor {
            event: Some("solve_end".to_string()),
            outcome: Some("solved".to_string()),
            solved: Some(true),
            score: Some("0e/0c".to_string()),
            iterations: Some(1_234),
            solution_length: Some(42),
            duration_ms: Some(1_500),
            ..EventVisitor::default()
        };
        let text = strip(&format_event(&visitor, Level::INFO));
        assert!(text.contains("1,234 iterations"));
        assert!(text.contains("CUBE SOLVED"));
        assert!(text.contains("Solution Length:"));
        assert!(text.contains("1.50s"));
    }
}
