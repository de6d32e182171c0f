//! Report generation for benchmark sweeps.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use armstrong_core::Strategy;

use crate::result::BenchmarkReport;

/// One line of a time-vs-N chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// The classifier this line belongs to.
    pub strategy: Strategy,
    /// `(sample size, seconds)` in increasing sample-size order.
    pub points: Vec<(usize, f64)>,
}

impl ChartSeries {
    /// Returns the series label.
    pub fn label(&self) -> &'static str {
        self.strategy.name()
    }

    /// Returns the largest time in the series, or 0 when empty.
    pub fn max_secs(&self) -> f64 {
        self.points.iter().map(|&(_, secs)| secs).fold(0.0, f64::max)
    }
}

impl BenchmarkReport {
    /// Shapes the report into one chart series per strategy.
    ///
    /// # Example
    ///
    /// ```
    /// use armstrong_benchmark::{run_benchmark, Strategy};
    ///
    /// let report = run_benchmark(40);
    /// let [iterative, recursive] = report.chart_series();
    /// assert_eq!(iterative.strategy, Strategy::Iterative);
    /// assert_eq!(recursive.points.len(), 4);
    /// assert_eq!(recursive.points[0].0, 10);
    /// ```
    pub fn chart_series(&self) -> [ChartSeries; 2] {
        Strategy::ALL.map(|strategy| ChartSeries {
            strategy,
            points: self
                .records()
                .iter()
                .map(|r| (r.sample_size, r.time_for(strategy).as_secs_f64()))
                .collect(),
        })
    }
}

/// CSV exporter for benchmark reports.
///
/// One row per sample size with both pass times in seconds.
///
/// # Example
///
/// ```
/// use armstrong_benchmark::{BenchmarkReport, CsvExporter};
///
/// let csv = CsvExporter::to_string(&BenchmarkReport::new(0));
/// assert_eq!(csv, "n,iterative_seconds,recursive_seconds,armstrong_hits\n");
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports the report to a CSV string.
    pub fn to_string(report: &BenchmarkReport) -> String {
        let mut output = String::new();

        writeln!(output, "n,iterative_seconds,recursive_seconds,armstrong_hits").unwrap();

        for record in report.records() {
            writeln!(
                output,
                "{},{:.9},{:.9},{}",
                record.sample_size,
                record.iterative_secs(),
                record.recursive_secs(),
                record.armstrong_hits,
            )
            .unwrap();
        }

        output
    }

    /// Exports the report to a CSV file.
    pub fn to_file(report: &BenchmarkReport, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(report))
    }

    /// Writes the report as CSV to a writer.
    pub fn write<W: Write>(report: &BenchmarkReport, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(report).as_bytes())
    }
}

/// Markdown report generator.
///
/// Produces a summary, the per-N timing table and the conclusion sentence.
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(report: &BenchmarkReport) -> String {
        let mut output = String::new();

        writeln!(output, "# Armstrong Classifier Benchmark").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "- **Max N**: {}", report.max_n()).unwrap();
        writeln!(output, "- **Sample sizes**: {}", report.len()).unwrap();
        if report.terminated_early() {
            writeln!(output, "- **Status**: cancelled before completion").unwrap();
        }
        writeln!(output).unwrap();

        writeln!(output, "## Summary").unwrap();
        writeln!(output).unwrap();

        let Some(conclusion) = report.conclusion() else {
            writeln!(output, "*No sample sizes measured.*").unwrap();
            return output;
        };

        writeln!(output, "| Metric | Iterative | Recursive |").unwrap();
        writeln!(output, "|--------|-----------|-----------|").unwrap();
        writeln!(
            output,
            "| Total time | {:.4} s | {:.4} s |",
            report.total_time(Strategy::Iterative).as_secs_f64(),
            report.total_time(Strategy::Recursive).as_secs_f64(),
        )
        .unwrap();
        writeln!(
            output,
            "| Time at N = {} | {:.4} s | {:.4} s |",
            conclusion.sample_size,
            conclusion.iterative.as_secs_f64(),
            conclusion.recursive.as_secs_f64(),
        )
        .unwrap();
        writeln!(output).unwrap();
        writeln!(output, "**Conclusion**: {}.", conclusion.summary()).unwrap();
        writeln!(output).unwrap();

        writeln!(output, "## Samples").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "| N | Iterative (ms) | Recursive (ms) | Faster | Hits |").unwrap();
        writeln!(output, "|---|----------------|----------------|--------|------|").unwrap();

        for record in report.records() {
            writeln!(
                output,
                "| {} | {:.4} | {:.4} | {} | {} |",
                record.sample_size,
                record.iterative_secs() * 1000.0,
                record.recursive_secs() * 1000.0,
                record.winner(),
                record.armstrong_hits,
            )
            .unwrap();
        }

        output
    }

    /// Writes the Markdown report to a file.
    pub fn to_file(report: &BenchmarkReport, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(report))
    }

    /// Writes the Markdown report to a writer.
    pub fn write<W: Write>(report: &BenchmarkReport, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(report).as_bytes())
    }
}
