//! Colorful console output for benchmark sweeps.
//!
//! Provides a custom `tracing` layer that formats sweep events with colors,
//! and a plain-text chart of pass time against sample size.
//!
//! ## Log Levels
//!
//! - **INFO**: Sweep start and end
//! - **WARN**: Sweep cancelled
//! - **DEBUG**: One line per sample size with both pass times

mod chart;

pub use chart::render_chart;

use armstrong_benchmark::Progress;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
// Set while a progress bar line is waiting for its newline.
static PROGRESS_OPEN: AtomicBool = AtomicBool::new(false);

const PROGRESS_WIDTH: usize = 30;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing. `RUST_LOG` overrides the default
/// `armstrong_benchmark=info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(
                "armstrong_benchmark=info"
                    .parse()
                    .expect("static directive is valid"),
            )
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SweepConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

fn print_banner() {
    let version_line = format!(
        "armstrong v{} - iterative vs recursive classifier benchmark",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = writeln!(stdout);
    let _ = stdout.flush();
}

/// A tracing layer that formats sweep events with colors.
pub struct SweepConsoleLayer;

impl<S: Subscriber> Layer<S> for SweepConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("armstrong_benchmark") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let mut stdout = io::stdout().lock();
            if PROGRESS_OPEN.swap(false, Ordering::SeqCst) {
                let _ = writeln!(stdout);
            }
            let _ = writeln!(stdout, "{}", output);
        }
    }
}

/// Redraws the sweep progress bar in place on stdout.
///
/// The bar line is closed once the sweep completes, and any log line
/// printed in between starts on a fresh line.
pub fn print_progress(progress: Progress) {
    let done = progress.completed >= progress.total;

    let mut stdout = io::stdout().lock();
    let _ = write!(stdout, "\r{}", format_progress_bar(&progress));
    if done {
        let _ = writeln!(stdout);
    }
    PROGRESS_OPEN.store(!done, Ordering::SeqCst);
    let _ = stdout.flush();
}

fn format_progress_bar(progress: &Progress) -> String {
    let fraction = progress.fraction().clamp(0.0, 1.0);
    let filled = (fraction * PROGRESS_WIDTH as f64).round() as usize;

    format!(
        "[{}{}] {:>3.0}% │ processing {} random numbers",
        "█".repeat(filled).bright_cyan(),
        "░".repeat(PROGRESS_WIDTH - filled),
        fraction * 100.0,
        progress.sample_size.to_formatted_string(&Locale::en),
    )
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    winner: Option<String>,
    max_n: Option<i64>,
    step: Option<u64>,
    steps: Option<u64>,
    completed: Option<u64>,
    sample_size: Option<u64>,
    iterative_us: Option<u64>,
    recursive_us: Option<u64>,
    hits: Option<u64>,
    records: Option<u64>,
    duration_ms: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "winner" => self.winner = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "step" => self.step = Some(value),
            "steps" => self.steps = Some(value),
            "completed" => self.completed = Some(value),
            "sample_size" => self.sample_size = Some(value),
            "iterative_us" => self.iterative_us = Some(value),
            "recursive_us" => self.recursive_us = Some(value),
            "hits" => self.hits = Some(value),
            "records" => self.records = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "max_n" => self.max_n = Some(value),
            _ => self.record_u64(field, value.max(0) as u64),
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "winner" => self.winner = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "sweep_start" => format_sweep_start(v),
        "sample" => format_sample(v),
        "sweep_cancelled" => format_sweep_cancelled(v),
        "sweep_end" => format_sweep_end(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_sweep_start(v: &EventVisitor) -> String {
    let max_n = v.max_n.unwrap_or(0);
    let step = v.step.unwrap_or(0);
    let steps = v.steps.unwrap_or(0);

    format!(
        "{} {} Sweep │ max N {} │ step {} │ {} sample sizes",
        format_elapsed(),
        "▶".bright_green().bold(),
        max_n.to_formatted_string(&Locale::en).bright_yellow(),
        step.to_formatted_string(&Locale::en).bright_yellow(),
        steps.to_formatted_string(&Locale::en).bright_yellow(),
    )
}

fn format_sample(v: &EventVisitor) -> String {
    let n = v.sample_size.unwrap_or(0);
    let iterative = v.iterative_us.unwrap_or(0);
    let recursive = v.recursive_us.unwrap_or(0);
    let hits = v.hits.unwrap_or(0);

    let (iterative_str, recursive_str) = if iterative < recursive {
        (
            format_micros(iterative).bright_green().to_string(),
            format_micros(recursive).white().to_string(),
        )
    } else {
        (
            format_micros(iterative).white().to_string(),
            format_micros(recursive).bright_green().to_string(),
        )
    };

    format!(
        "{} {} N {:>10} │ iterative {:>10} │ recursive {:>10} │ {} hits",
        format_elapsed(),
        "⚡".bright_cyan(),
        n.to_formatted_string(&Locale::en).white(),
        iterative_str,
        recursive_str,
        hits.to_formatted_string(&Locale::en).bright_black(),
    )
}

fn format_sweep_cancelled(v: &EventVisitor) -> String {
    format!(
        "{} {} Sweep cancelled after {}/{} sample sizes",
        format_elapsed(),
        "■".bright_red().bold(),
        v.completed.unwrap_or(0),
        v.steps.unwrap_or(0),
    )
}

fn format_sweep_end(v: &EventVisitor) -> String {
    let records = v.records.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);
    let winner = v.winner.as_deref().unwrap_or("N/A");

    format!(
        "{} {} Sweep complete │ {} │ {} sample sizes │ faster: {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(duration).yellow(),
        records.to_formatted_string(&Locale::en).white(),
        winner.bright_magenta().bold(),
    )
}

fn format_micros(us: u64) -> String {
    if us < 1_000 {
        format!("{}µs", us)
    } else {
        format!("{:.2}ms", us as f64 / 1000.0)
    }
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
