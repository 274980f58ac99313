//! Charts over comparison results.
//!
//! A [`Chart`] is plain data (categories and named series) so it can be sent over the wire as
//! JSON; its `Display` impl draws it as a fixed-width text chart for the console.
use crate::compare::{Comparison, Sweep};
use crate::error::{Error, Result};
use crate::timer::Algorithm;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const BAR_WIDTH: usize = 40;
const HISTOGRAM_BINS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    ExecutionTime,
    RecursiveCalls,
    Speedup,
    ExecutionTimeBar,
    RecursiveCallsBar,
    ExecutionTimeShare,
    RecursiveCallsShare,
    ExecutionTimeHistogram,
    RecursiveCallsHistogram,
    Combined,
}

impl ChartKind {
    /// In menu order.
    pub const ALL: [ChartKind; 10] = [
        ChartKind::ExecutionTime,
        ChartKind::RecursiveCalls,
        ChartKind::Speedup,
        ChartKind::ExecutionTimeBar,
        ChartKind::RecursiveCallsBar,
        ChartKind::ExecutionTimeShare,
        ChartKind::RecursiveCallsShare,
        ChartKind::ExecutionTimeHistogram,
        ChartKind::RecursiveCallsHistogram,
        ChartKind::Combined,
    ];

    pub fn from_menu_choice(choice: usize) -> Option<ChartKind> {
        choice
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }

    pub fn menu_choice(self) -> usize {
        Self::ALL
            .iter()
            .position(|&kind| kind == self)
            .map_or(0, |index| index + 1)
    }

    pub fn name(self) -> &'static str {
        match self {
            ChartKind::ExecutionTime => "execution_time",
            ChartKind::RecursiveCalls => "recursive_calls",
            ChartKind::Speedup => "speedup",
            ChartKind::ExecutionTimeBar => "execution_time_bar",
            ChartKind::RecursiveCallsBar => "recursive_calls_bar",
            ChartKind::ExecutionTimeShare => "execution_time_share",
            ChartKind::RecursiveCallsShare => "recursive_calls_share",
            ChartKind::ExecutionTimeHistogram => "execution_time_histogram",
            ChartKind::RecursiveCallsHistogram => "recursive_calls_histogram",
            ChartKind::Combined => "combined",
        }
    }

    /// Menu entry text.
    pub fn description(self) -> &'static str {
        match self {
            ChartKind::ExecutionTime => "Execution Time (Line)",
            ChartKind::RecursiveCalls => "Recursive Calls (Line)",
            ChartKind::Speedup => "Speedup Factor (Line)",
            ChartKind::ExecutionTimeBar => "Execution Time (Bar)",
            ChartKind::RecursiveCallsBar => "Recursive Calls (Bar)",
            ChartKind::ExecutionTimeShare => "Execution Time Share (Pie)",
            ChartKind::RecursiveCallsShare => "Recursive Calls Share (Pie)",
            ChartKind::ExecutionTimeHistogram => "Execution Time Histogram",
            ChartKind::RecursiveCallsHistogram => "Recursive Calls Histogram",
            ChartKind::Combined => "Combined Subplots (Time, Calls, Speedup)",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownChart(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Line,
    Bar,
    Pie,
    Histogram,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub title: String,
    pub style: Style,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

#[derive(Clone, Copy)]
enum Metric {
    Time,
    Calls,
}

impl Metric {
    fn axis_label(self) -> &'static str {
        match self {
            Metric::Time => "Time (s)",
            Metric::Calls => "Calls",
        }
    }
    fn sweep_series(self, sweep: &Sweep) -> Vec<Series> {
        Algorithm::ALL
            .iter()
            .map(|&algorithm| Series {
                label: algorithm.label().to_string(),
                values: match self {
                    Metric::Time => sweep.times(algorithm),
                    Metric::Calls => sweep
                        .calls(algorithm)
                        .into_iter()
                        .map(|calls| calls as f64)
                        .collect(),
                },
            })
            .collect()
    }
    fn comparison_value(self, comparison: &Comparison, algorithm: Algorithm) -> f64 {
        let record = comparison.record(algorithm);
        match self {
            Metric::Time => record.elapsed.as_secs_f64(),
            Metric::Calls => record.call_count as f64,
        }
    }
}

fn digit_categories(sweep: &Sweep) -> Vec<String> {
    sweep
        .digit_lengths()
        .into_iter()
        .map(|digits| digits.to_string())
        .collect()
}

fn algorithm_categories() -> Vec<String> {
    Algorithm::ALL
        .iter()
        .map(|algorithm| algorithm.label().to_string())
        .collect()
}

fn series_chart(title: &str, style: Style, metric: Metric, sweep: &Sweep) -> Chart {
    Chart {
        title: title.to_string(),
        style,
        x_label: "Digits".to_string(),
        y_label: metric.axis_label().to_string(),
        categories: digit_categories(sweep),
        series: metric.sweep_series(sweep),
    }
}

fn speedup_chart(title: &str, sweep: &Sweep) -> Chart {
    Chart {
        title: title.to_string(),
        style: Style::Line,
        x_label: "Digits".to_string(),
        y_label: "Speedup Factor".to_string(),
        categories: digit_categories(sweep),
        series: vec![Series {
            label: "Divide ÷ Karatsuba".to_string(),
            values: sweep.speedups(),
        }],
    }
}

fn share_chart(title: &str, metric: Metric, sweep: &Sweep) -> Chart {
    let totals = metric
        .sweep_series(sweep)
        .iter()
        .map(|series| series.values.iter().sum())
        .collect();
    Chart {
        title: title.to_string(),
        style: Style::Pie,
        x_label: String::new(),
        y_label: String::new(),
        categories: algorithm_categories(),
        series: vec![Series {
            label: "Share".to_string(),
            values: totals,
        }],
    }
}

fn histogram_chart(title: &str, metric: Metric, sweep: &Sweep) -> Chart {
    let series = metric.sweep_series(sweep);
    let (categories, series) = histogram(&series, HISTOGRAM_BINS);
    Chart {
        title: title.to_string(),
        style: Style::Histogram,
        x_label: metric.axis_label().to_string(),
        y_label: "Frequency".to_string(),
        categories,
        series,
    }
}

/// Bins every series over the combined range of all of them.
fn histogram(series: &[Series], bins: usize) -> (Vec<String>, Vec<Series>) {
    let values = series.iter().flat_map(|series| series.values.iter().copied());
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    });
    if min > max {
        return (Vec::new(), Vec::new());
    }
    let width = (max - min) / bins as f64;
    let bins = if width > 0.0 { bins } else { 1 };
    let categories = (0..bins)
        .map(|bin| {
            let low = min + bin as f64 * width;
            format!("{}-{}", format_value(low), format_value(low + width))
        })
        .collect();
    let counted = series
        .iter()
        .map(|series| {
            let mut counts = vec![0.0; bins];
            for &value in &series.values {
                let bin = if width > 0.0 {
                    (((value - min) / width) as usize).min(bins - 1)
                } else {
                    0
                };
                counts[bin] += 1.0;
            }
            Series {
                label: series.label.clone(),
                values: counts,
            }
        })
        .collect();
    (categories, counted)
}

/// Charts over a sweep; the combined kind yields three panels.
pub fn render_sweep(kind: ChartKind, sweep: &Sweep) -> Vec<Chart> {
    match kind {
        ChartKind::ExecutionTime => vec![series_chart(
            "Execution Time",
            Style::Line,
            Metric::Time,
            sweep,
        )],
        ChartKind::RecursiveCalls => vec![series_chart(
            "Recursive Calls",
            Style::Line,
            Metric::Calls,
            sweep,
        )],
        ChartKind::Speedup => vec![speedup_chart("Speedup (Divide ÷ Karatsuba)", sweep)],
        ChartKind::ExecutionTimeBar => vec![series_chart(
            "Execution Time (Bar)",
            Style::Bar,
            Metric::Time,
            sweep,
        )],
        ChartKind::RecursiveCallsBar => vec![series_chart(
            "Recursive Calls (Bar)",
            Style::Bar,
            Metric::Calls,
            sweep,
        )],
        ChartKind::ExecutionTimeShare => {
            vec![share_chart("Execution Time Share", Metric::Time, sweep)]
        }
        ChartKind::RecursiveCallsShare => {
            vec![share_chart("Recursive Calls Share", Metric::Calls, sweep)]
        }
        ChartKind::ExecutionTimeHistogram => vec![histogram_chart(
            "Execution Time Histogram",
            Metric::Time,
            sweep,
        )],
        ChartKind::RecursiveCallsHistogram => vec![histogram_chart(
            "Recursive Calls Histogram",
            Metric::Calls,
            sweep,
        )],
        ChartKind::Combined => vec![
            series_chart("Execution Time", Style::Line, Metric::Time, sweep),
            series_chart("Recursive Calls", Style::Line, Metric::Calls, sweep),
            speedup_chart("Speedup Factor", sweep),
        ],
    }
}

fn comparison_bar(title: &str, metric: Metric, comparison: &Comparison) -> Chart {
    Chart {
        title: title.to_string(),
        style: Style::Bar,
        x_label: String::new(),
        y_label: metric.axis_label().to_string(),
        categories: algorithm_categories(),
        series: vec![Series {
            label: metric.axis_label().to_string(),
            values: Algorithm::ALL
                .iter()
                .map(|&algorithm| metric.comparison_value(comparison, algorithm))
                .collect(),
        }],
    }
}

fn comparison_speedup(title: &str, comparison: &Comparison) -> Chart {
    Chart {
        title: title.to_string(),
        style: Style::Bar,
        x_label: String::new(),
        y_label: "Speedup Factor".to_string(),
        categories: vec!["Speedup".to_string()],
        series: vec![Series {
            label: "Divide ÷ Karatsuba".to_string(),
            values: vec![comparison.speedup()],
        }],
    }
}

/// Charts over a single operand pair. Only the time, calls, speedup and combined kinds make
/// sense for one pair.
pub fn render_comparison(kind: ChartKind, comparison: &Comparison) -> Result<Vec<Chart>> {
    match kind {
        ChartKind::ExecutionTime => Ok(vec![comparison_bar(
            "Execution Time (s)",
            Metric::Time,
            comparison,
        )]),
        ChartKind::RecursiveCalls => Ok(vec![comparison_bar(
            "Recursive Calls",
            Metric::Calls,
            comparison,
        )]),
        ChartKind::Speedup => Ok(vec![comparison_speedup("Speedup Factor", comparison)]),
        ChartKind::Combined => Ok(vec![
            comparison_bar("Execution Time", Metric::Time, comparison),
            comparison_bar("Recursive Calls", Metric::Calls, comparison),
            comparison_speedup("Speedup", comparison),
        ]),
        other => Err(Error::UnknownChart(other.name().to_string())),
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{:.6}", value)
    }
}

fn bar(value: f64, max: f64) -> String {
    let len = if max > 0.0 {
        ((value / max) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    "#".repeat(len.min(BAR_WIDTH))
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        if !self.y_label.is_empty() {
            if self.x_label.is_empty() {
                writeln!(f, "{}", self.y_label)?;
            } else {
                writeln!(f, "{} by {}", self.y_label, self.x_label)?;
            }
        }
        let category_width = self.categories.iter().map(|c| c.chars().count()).max().unwrap_or(0);
        let label_width = self
            .series
            .iter()
            .map(|s| s.label.chars().count())
            .max()
            .unwrap_or(0);
        if self.style == Style::Pie {
            for series in &self.series {
                let total: f64 = series.values.iter().sum();
                for (category, &value) in self.categories.iter().zip(&series.values) {
                    let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
                    writeln!(
                        f,
                        "{:<cw$} {:>5.1}% |{:<bw$}|",
                        category,
                        share,
                        bar(share, 100.0),
                        cw = category_width,
                        bw = BAR_WIDTH
                    )?;
                }
            }
            return Ok(());
        }
        let max = self
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max);
        for (i, category) in self.categories.iter().enumerate() {
            for series in &self.series {
                let value = series.values.get(i).copied().unwrap_or(0.0);
                writeln!(
                    f,
                    "{:>cw$} {:<lw$} |{:<bw$}| {}",
                    category,
                    series.label,
                    bar(value, max),
                    format_value(value),
                    cw = category_width,
                    lw = label_width,
                    bw = BAR_WIDTH
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{compare, sweep_seeded};
    use num_bigint::BigUint;
    #[test]
    fn test_menu_choices() {
        for (index, kind) in ChartKind::ALL.iter().copied().enumerate() {
            assert_eq!(ChartKind::from_menu_choice(index + 1), Some(kind));
            assert_eq!(kind.menu_choice(), index + 1);
            assert_eq!(kind.name().parse::<ChartKind>(), Ok(kind));
        }
        assert_eq!(ChartKind::from_menu_choice(0), None);
        assert_eq!(ChartKind::from_menu_choice(11), None);
        assert_eq!(
            "pie".parse::<ChartKind>(),
            Err(Error::UnknownChart("pie".to_string()))
        );
    }
    #[test]
    fn test_render_sweep_series() {
        let sweep = sweep_seeded(&[4, 8, 16], 1).unwrap();
        let charts = render_sweep(ChartKind::RecursiveCalls, &sweep);
        assert_eq!(charts.len(), 1);
        let chart = &charts[0];
        assert_eq!(chart.categories, vec!["4", "8", "16"]);
        assert_eq!(chart.series[0].label, "Divide");
        assert_eq!(chart.series[1].label, "Karatsuba");
        let karatsuba_calls: Vec<f64> = sweep
            .calls(Algorithm::Karatsuba)
            .into_iter()
            .map(|calls| calls as f64)
            .collect();
        assert_eq!(chart.series[1].values, karatsuba_calls);
        assert_eq!(render_sweep(ChartKind::Combined, &sweep).len(), 3);
    }
    #[test]
    fn test_render_sweep_share_and_histogram() {
        let sweep = sweep_seeded(&[4, 8, 16, 32], 2).unwrap();
        let share = &render_sweep(ChartKind::RecursiveCallsShare, &sweep)[0];
        let divide_total: u64 = sweep.calls(Algorithm::DivideAndConquer).iter().sum();
        assert_eq!(share.series[0].values[0], divide_total as f64);
        assert_eq!(share.style, Style::Pie);
        let histogram = &render_sweep(ChartKind::RecursiveCallsHistogram, &sweep)[0];
        assert_eq!(histogram.categories.len(), HISTOGRAM_BINS);
        for series in &histogram.series {
            assert_eq!(series.values.iter().sum::<f64>(), 4.0);
        }
    }
    #[test]
    fn test_histogram_single_value() {
        let series = vec![Series {
            label: "Calls".to_string(),
            values: vec![3.0, 3.0],
        }];
        let (categories, counted) = histogram(&series, HISTOGRAM_BINS);
        assert_eq!(categories, vec!["3-3"]);
        assert_eq!(counted[0].values, vec![2.0]);
        assert_eq!(histogram(&[], HISTOGRAM_BINS), (Vec::new(), Vec::new()));
    }
    #[test]
    fn test_render_comparison() {
        let comparison = compare(&BigUint::from(1234u32), &BigUint::from(5678u32));
        let calls = &render_comparison(ChartKind::RecursiveCalls, &comparison).unwrap()[0];
        assert_eq!(calls.categories, vec!["Divide", "Karatsuba"]);
        assert_eq!(calls.series[0].values, vec![21.0, 16.0]);
        assert_eq!(
            render_comparison(ChartKind::Combined, &comparison)
                .unwrap()
                .len(),
            3
        );
        assert_eq!(
            render_comparison(ChartKind::ExecutionTimeShare, &comparison),
            Err(Error::UnknownChart("execution_time_share".to_string()))
        );
    }
    #[test]
    fn test_text_rendering() {
        let chart = Chart {
            title: "Recursive Calls".to_string(),
            style: Style::Bar,
            x_label: String::new(),
            y_label: "Calls".to_string(),
            categories: vec!["Divide".to_string(), "Karatsuba".to_string()],
            series: vec![Series {
                label: "Calls".to_string(),
                values: vec![20.0, 10.0],
            }],
        };
        let text = chart.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "== Recursive Calls ==");
        assert_eq!(lines[1], "Calls");
        assert!(lines[2].contains(&"#".repeat(BAR_WIDTH)));
        assert!(lines[2].ends_with(" 20"));
        assert!(lines[3].contains(&format!("|{}{}|", "#".repeat(20), " ".repeat(20))));
        let pie = Chart {
            style: Style::Pie,
            ..chart
        };
        assert!(pie.to_string().contains("66.7%"));
    }
}
