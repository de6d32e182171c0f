//! Tests for benchmark sweeps.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use armstrong_config::{ConfigError, SweepConfig};
use armstrong_test::known_in;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::runner::{generate_dataset, time_pass};

fn record(sample_size: usize, iterative_ms: u64, recursive_ms: u64) -> BenchmarkRecord {
    BenchmarkRecord {
        sample_size,
        iterative: Duration::from_millis(iterative_ms),
        recursive: Duration::from_millis(recursive_ms),
        armstrong_hits: 0,
    }
}

fn report_of(records: &[BenchmarkRecord]) -> BenchmarkReport {
    let max_n = records.last().map_or(0, |r| r.sample_size as i64);
    let mut report = BenchmarkReport::new(max_n);
    for &r in records {
        report.push(r);
    }
    report
}

#[test]
fn test_step_size() {
    assert_eq!(step_size(500), 50);
    assert_eq!(step_size(100), 10);
    assert_eq!(step_size(99), 10);
    assert_eq!(step_size(1), 10);
    assert_eq!(step_size(0), 10);
    assert_eq!(step_size(-5), 10);
    assert_eq!(step_size(12_345), 1_234);
}

#[test]
fn test_sample_sizes_short_final_point() {
    let sizes: Vec<usize> = sample_sizes(125).collect();
    assert_eq!(sizes, vec![12, 24, 36, 48, 60, 72, 84, 96, 108, 120]);

    let sizes: Vec<usize> = sample_sizes(25).collect();
    assert_eq!(sizes, vec![10, 20]);
}

#[test]
fn test_run_benchmark_500_is_monotonic() {
    let report = run_benchmark(500);
    assert!(report.len() >= 9 && report.len() <= 50, "{}", report.len());
    assert!(report
        .records()
        .windows(2)
        .all(|w| w[0].sample_size < w[1].sample_size));
    assert_eq!(report.records()[0].sample_size, 50);
    assert_eq!(report.last().map(|r| r.sample_size), Some(500));
    assert_eq!(report.max_n(), 500);
    assert!(!report.terminated_early());
}

#[test]
fn test_timings_non_negative() {
    let report = run_benchmark(200);
    for r in report.records() {
        assert!(r.iterative_secs() >= 0.0);
        assert!(r.recursive_secs() >= 0.0);
    }
}

#[test]
fn test_degenerate_bounds_yield_empty_report() {
    for max_n in [0, -5, 9] {
        let report = run_benchmark(max_n);
        assert!(report.is_empty(), "max_n = {max_n}");
        assert!(report.conclusion().is_none());
        assert_eq!(report.total_samples(), 0);
    }
}

#[test]
fn test_hits_match_dataset_range() {
    // 153, 370, 371, 407 are the only Armstrong numbers in 150..=410.
    let config = SweepConfig::new()
        .with_max_n(100)
        .with_value_range(150, 410)
        .with_random_seed(3);
    let report = Benchmark::new(config).unwrap().run();
    assert_eq!(known_in(150..=410), vec![153, 370, 371, 407]);
    for r in report.records() {
        assert!(r.armstrong_hits <= r.sample_size);
    }

    let config = SweepConfig::new().with_max_n(20).with_value_range(153, 153);
    let report = Benchmark::new(config).unwrap().run();
    let hits: Vec<usize> = report.records().iter().map(|r| r.armstrong_hits).collect();
    assert_eq!(hits, vec![10, 20]);
}

#[test]
fn test_inverted_dataset_range_rejected() {
    let config = SweepConfig::new().with_max_n(20).with_value_range(10, 5);
    let err = Benchmark::new(config).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_seeded_datasets_are_reproducible() {
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    let first = generate_dataset(&mut a, 100, 100..=9999);
    let second = generate_dataset(&mut b, 100, 100..=9999);
    assert_eq!(first, second);
    assert!(first.iter().all(|n| (100..=9999).contains(n)));

    let config = SweepConfig::new().with_max_n(60).with_random_seed(9);
    let hits = |report: BenchmarkReport| -> Vec<usize> {
        report.records().iter().map(|r| r.armstrong_hits).collect()
    };
    assert_eq!(
        hits(Benchmark::new(config.clone()).unwrap().run()),
        hits(Benchmark::new(config).unwrap().run())
    );
}

#[test]
fn test_time_pass_counts_hits() {
    let dataset = [153, 154, 9474, 100, 0];
    let (_, iterative_hits) = time_pass(Strategy::Iterative, &dataset);
    let (_, recursive_hits) = time_pass(Strategy::Recursive, &dataset);
    assert_eq!(iterative_hits, 3);
    assert_eq!(recursive_hits, 3);
}

#[test]
fn test_progress_reports_every_step() {
    let benchmark =
        Benchmark::new(SweepConfig::new().with_max_n(100).with_random_seed(1)).unwrap();
    let mut updates = Vec::new();
    let report = benchmark.run_with_progress(|p| updates.push(p));

    assert_eq!(updates.len(), report.len());
    assert_eq!(updates[0].completed, 1);
    assert_eq!(updates[0].total, 10);
    assert_eq!(updates[0].sample_size, 10);
    assert!((updates[4].fraction() - 0.5).abs() < f64::EPSILON);
    assert_eq!(updates.last().map(Progress::fraction), Some(1.0));
}

#[test]
fn test_empty_progress_fraction() {
    let progress = Progress {
        completed: 0,
        total: 0,
        sample_size: 0,
    };
    assert_eq!(progress.fraction(), 1.0);
}

#[test]
fn test_cancel_before_start() {
    let flag = Arc::new(AtomicBool::new(true));
    let report = Benchmark::new(SweepConfig::new().with_max_n(100))
        .unwrap()
        .with_cancel_flag(flag)
        .run();
    assert!(report.is_empty());
    assert!(report.terminated_early());
}

#[test]
fn test_cancel_between_steps() {
    let flag = Arc::new(AtomicBool::new(false));
    let benchmark = Benchmark::new(SweepConfig::new().with_max_n(100))
        .unwrap()
        .with_cancel_flag(flag.clone());

    let report = benchmark.run_with_progress(|p| {
        if p.completed == 3 {
            flag.store(true, Ordering::SeqCst);
        }
    });

    assert_eq!(report.len(), 3);
    assert!(report.terminated_early());
    assert_eq!(report.last().map(|r| r.sample_size), Some(30));
}

#[test]
fn test_conclusion_uses_last_record() {
    let report = report_of(&[record(10, 9, 1), record(20, 2, 5)]);
    let conclusion = report.conclusion().unwrap();
    assert_eq!(conclusion.sample_size, 20);
    assert_eq!(conclusion.winner, Strategy::Iterative);
    assert_eq!(conclusion.iterative, Duration::from_millis(2));
    assert_eq!(conclusion.recursive, Duration::from_millis(5));

    let report = report_of(&[record(10, 1, 9), record(20, 7, 3)]);
    assert_eq!(report.conclusion().unwrap().winner, Strategy::Recursive);
}

#[test]
fn test_tie_goes_to_recursive() {
    assert_eq!(record(10, 4, 4).winner(), Strategy::Recursive);
}

#[test]
fn test_report_totals() {
    let report = report_of(&[record(10, 1, 2), record(20, 3, 4)]);
    assert_eq!(report.total_time(Strategy::Iterative), Duration::from_millis(4));
    assert_eq!(report.total_time(Strategy::Recursive), Duration::from_millis(6));
    assert_eq!(report.total_samples(), 30);
}

#[test]
fn test_chart_series_shape() {
    let report = report_of(&[record(10, 1, 2), record(20, 3, 4)]);
    let [iterative, recursive] = report.chart_series();
    assert_eq!(iterative.label(), "Iterative");
    assert_eq!(iterative.points, vec![(10, 0.001), (20, 0.003)]);
    assert_eq!(recursive.points, vec![(10, 0.002), (20, 0.004)]);
    assert_eq!(recursive.max_secs(), 0.004);
}

#[test]
fn test_csv_export() {
    let report = report_of(&[record(10, 1, 2)]);
    let csv = CsvExporter::to_string(&report);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "n,iterative_seconds,recursive_seconds,armstrong_hits");
    assert_eq!(lines[1], "10,0.001000000,0.002000000,0");

    let mut buf = Vec::new();
    CsvExporter::write(&report, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), csv);
}

#[test]
fn test_markdown_report() {
    let report = report_of(&[record(10, 1, 2), record(20, 6, 5)]);
    let md = MarkdownReport::to_string(&report);
    assert!(md.contains("# Armstrong Classifier Benchmark"));
    assert!(md.contains("| Metric | Iterative | Recursive |"));
    assert!(md.contains("| 20 | 6.0000 | 5.0000 | Recursive | 0 |"));
    assert!(md.contains(
        "At N = 20 the Recursive classifier was faster (Iterative: 0.0060s vs Recursive: 0.0050s)"
    ));
    assert!(!md.contains("cancelled"));
}

#[test]
fn test_markdown_empty_report() {
    let md = MarkdownReport::to_string(&BenchmarkReport::new(-5));
    assert!(md.contains("- **Max N**: -5"));
    assert!(md.contains("*No sample sizes measured.*"));
    assert!(!md.contains("## Samples"));
}

#[test]
fn test_check_known_values() {
    let outcome = check(9474);
    assert!(outcome.is_armstrong());
    assert!(outcome.agrees());
    assert_eq!(outcome.candidate, 9474);
    assert_eq!(outcome.power_sum, 9474);
    assert_eq!(outcome.elapsed(Strategy::Iterative), outcome.iterative.elapsed);

    let outcome = check(100);
    assert!(!outcome.is_armstrong());
    assert!(outcome.agrees());
    assert_eq!(outcome.power_sum, 1);

    assert!(check(0).is_armstrong());
}

#[test]
fn test_report_files_written() {
    let report = report_of(&[record(10, 1, 2), record(20, 3, 4)]);
    let dir = tempfile::tempdir().unwrap();

    let csv_path = dir.path().join("sweep.csv");
    CsvExporter::to_file(&report, &csv_path).unwrap();
    assert_eq!(
        std::fs::read_to_string(&csv_path).unwrap(),
        CsvExporter::to_string(&report)
    );

    let md_path = dir.path().join("sweep.md");
    MarkdownReport::to_file(&report, &md_path).unwrap();
    assert_eq!(
        std::fs::read_to_string(&md_path).unwrap(),
        MarkdownReport::to_string(&report)
    );

    let mut buf = Vec::new();
    MarkdownReport::write(&report, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), MarkdownReport::to_string(&report));
}

#[test]
fn test_report_file_in_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("sweep.csv");
    assert!(CsvExporter::to_file(&BenchmarkReport::new(0), path).is_err());
}

#[test]
fn test_markdown_marks_cancelled_sweep() {
    let mut report = report_of(&[record(10, 1, 2)]);
    report.mark_terminated_early();
    let md = MarkdownReport::to_string(&report);
    assert!(md.contains("- **Status**: cancelled before completion"));
    assert!(md.contains("## Samples"));
}
