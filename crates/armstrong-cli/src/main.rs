//! `armstrong` - compare the iterative and recursive Armstrong classifiers.
//!
//! ```text
//! armstrong bench --max-n 2000 --seed 7 --csv sweep.csv
//! armstrong check 9474
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use armstrong_benchmark::{check, Benchmark, CsvExporter, MarkdownReport, Strategy};
use armstrong_config::{ConfigError, SweepConfig, SweepOverrides};
use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Time both classifiers over random datasets of increasing size.
    Bench(BenchArgs),
    /// Classify one number with both classifiers.
    Check {
        /// Candidate to classify.
        candidate: u64,
    },
}

#[derive(Args, Debug)]
struct BenchArgs {
    /// TOML or YAML sweep configuration.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Largest sample size (overrides the config file).
    #[arg(long, allow_negative_numbers = true)]
    max_n: Option<i64>,

    /// Seed for reproducible datasets.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the records as CSV.
    #[arg(long, value_name = "PATH")]
    csv: Option<String>,

    /// Write a Markdown report.
    #[arg(long, value_name = "PATH")]
    markdown: Option<String>,

    /// Skip the text chart.
    #[arg(long)]
    no_chart: bool,

    /// Chart width in characters.
    #[arg(long, default_value_t = 60)]
    chart_width: usize,

    /// Chart height in rows.
    #[arg(long, default_value_t = 16)]
    chart_height: usize,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: io::Error,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    armstrong_console::init();

    let result = match cli.command {
        Command::Bench(args) => bench(args),
        Command::Check { candidate } => {
            print_check(candidate);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".bright_red().bold());
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &BenchArgs) -> Result<SweepConfig, CliError> {
    let config = match &args.config {
        Some(path) => SweepConfig::from_file(path)?,
        None => SweepConfig::default(),
    };

    let config = config.with_overrides(SweepOverrides {
        max_n: args.max_n,
        random_seed: args.seed,
        csv_path: args.csv.clone(),
        markdown_path: args.markdown.clone(),
    });

    config.validate()?;
    Ok(config)
}

fn bench(args: BenchArgs) -> Result<(), CliError> {
    let config = load_config(&args)?;
    let benchmark = Benchmark::new(config)?;

    let report = benchmark.run_with_progress(armstrong_console::print_progress);

    if !args.no_chart && !report.is_empty() {
        println!();
        println!(
            "{}",
            armstrong_console::render_chart(
                &report.chart_series(),
                args.chart_width,
                args.chart_height
            )
        );
    }

    match report.conclusion() {
        Some(conclusion) => println!("{}", conclusion.summary().bright_green()),
        None => println!("{}", "No sample sizes to measure (max N below 10).".yellow()),
    }

    let output = &benchmark.config().output;
    if let Some(path) = &output.csv_path {
        CsvExporter::to_file(&report, path).map_err(|source| CliError::Output {
            path: path.clone(),
            source,
        })?;
        println!("wrote {path}");
    }
    if let Some(path) = &output.markdown_path {
        MarkdownReport::to_file(&report, path).map_err(|source| CliError::Output {
            path: path.clone(),
            source,
        })?;
        println!("wrote {path}");
    }

    Ok(())
}

fn print_check(candidate: u64) {
    let outcome = check(candidate);

    if outcome.is_armstrong() {
        println!(
            "{} {} is an Armstrong number.",
            "✓".bright_green().bold(),
            candidate
        );
        println!("  The sum of its digit powers is {}.", outcome.power_sum);
    } else {
        println!(
            "{} {} is not an Armstrong number.",
            "✗".bright_red().bold(),
            candidate
        );
        println!(
            "  The sum of its digit powers is {}, not {}.",
            outcome.power_sum, candidate
        );
    }

    if !outcome.agrees() {
        println!(
            "{}",
            "  warning: the classifiers disagree on this input".bright_red()
        );
    }

    println!();
    for strategy in Strategy::ALL {
        println!(
            "  {:<10} {:.8} s",
            strategy.name(),
            outcome.elapsed(strategy).as_secs_f64()
        );
    }
}
