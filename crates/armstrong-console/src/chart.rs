//! Plain-text line chart of pass time against sample size.

use std::fmt::Write as _;

use armstrong_benchmark::{ChartSeries, Strategy};

/// Marker for a point of `strategy`.
fn marker(strategy: Strategy) -> char {
    match strategy {
        Strategy::Iterative => '*',
        Strategy::Recursive => 'o',
    }
}

/// Marker where two series land on the same cell.
const OVERLAP: char = '#';

/// Renders `series` on a `width` x `height` character grid.
///
/// The x axis spans the smallest to largest sample size, the y axis spans
/// zero to the slowest pass. Returns an empty string when there is nothing
/// to plot.
///
/// # Example
///
/// ```
/// use armstrong_benchmark::{ChartSeries, Strategy};
/// use armstrong_console::render_chart;
///
/// let series = [
///     ChartSeries { strategy: Strategy::Iterative, points: vec![(10, 0.5), (20, 1.0)] },
///     ChartSeries { strategy: Strategy::Recursive, points: vec![(10, 1.0), (20, 2.0)] },
/// ];
/// let chart = render_chart(&series, 20, 5);
/// assert!(chart.contains("* Iterative"));
/// assert!(chart.contains("o Recursive"));
/// ```
pub fn render_chart(series: &[ChartSeries], width: usize, height: usize) -> String {
    let width = width.max(2);
    let height = height.max(2);

    let xs = series.iter().flat_map(|s| s.points.iter().map(|&(n, _)| n));
    let (Some(min_n), Some(max_n)) = (xs.clone().min(), xs.max()) else {
        return String::new();
    };
    let max_secs = series.iter().map(ChartSeries::max_secs).fold(0.0, f64::max);

    let mut grid = vec![vec![' '; width]; height];
    for s in series {
        let mark = marker(s.strategy);
        for &(n, secs) in &s.points {
            let col = scale(n.saturating_sub(min_n) as f64, (max_n - min_n) as f64, width);
            let row = height - 1 - scale(secs, max_secs, height);
            let cell = &mut grid[row][col];
            *cell = if *cell == ' ' || *cell == mark {
                mark
            } else {
                OVERLAP
            };
        }
    }

    let mut output = String::new();
    for (i, row) in grid.iter().enumerate() {
        let label = if i == 0 {
            format!("{:>10.6}s", max_secs)
        } else if i == height - 1 {
            format!("{:>10.6}s", 0.0)
        } else {
            " ".repeat(11)
        };
        let line: String = row.iter().collect();
        writeln!(output, "{} │{}", label, line.trim_end()).unwrap();
    }
    writeln!(output, "{} └{}", " ".repeat(11), "─".repeat(width)).unwrap();
    writeln!(
        output,
        "{}  N = {:<w$}{:>r$}",
        " ".repeat(11),
        min_n,
        max_n,
        w = width / 2,
        r = (width - width / 2).saturating_sub(4),
    )
    .unwrap();

    let legend: Vec<String> = series
        .iter()
        .map(|s| format!("{} {}", marker(s.strategy), s.label()))
        .collect();
    writeln!(output, "{}  {}", " ".repeat(11), legend.join("   ")).unwrap();

    output
}

// Maps `value` in `0..=max` onto a cell index in `0..cells`.
pub(crate) fn scale(value: f64, max: f64, cells: usize) -> usize {
    if max <= 0.0 {
        return 0;
    }
    let idx = (value / max * (cells - 1) as f64).round() as usize;
    idx.min(cells - 1)
}
