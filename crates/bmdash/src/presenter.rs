// Dweve BMDash - Benchmark Result Dashboard
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Presentation tables for a selected case.
//!
//! Turns a [`CaseView`] into the products a dashboard renders:
//!
//! - plot series: per entry, sizes with the parsed metric values
//! - comparison tables: raw values and speedups per metric
//! - complexity tables: fitted complexity per entry, for real and CPU time
//! - a full results table echoing every column of every entry
//!
//! All tables share the [`Table`] shape and render as aligned text or CSV.

use crate::case::BenchmarkCase;
use crate::comparator::{speedup, ComparisonTable};
use crate::registry::CaseView;
use bmdash_core::{format_csv_line, BenchmarkSeries};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Cell value in a presentation table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableCell {
    /// Text, echoed verbatim.
    String(String),
    /// Computed number.
    Float(f64),
    /// Nothing to show.
    Empty,
}

impl TableCell {
    /// Display form, floats with two decimals.
    pub fn as_string(&self) -> String {
        self.format_with_precision(2)
    }

    /// Display form with a given float precision.
    pub fn format_with_precision(&self, precision: usize) -> String {
        match self {
            TableCell::String(s) => s.clone(),
            TableCell::Float(f) => format!("{:.prec$}", f, prec = precision),
            TableCell::Empty => String::new(),
        }
    }

    /// Full precision form, for machine-readable output.
    pub fn as_exact_string(&self) -> String {
        match self {
            TableCell::Float(f) => f.to_string(),
            _ => self.as_string(),
        }
    }

    /// Numeric value, if any.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            TableCell::Float(f) => Some(*f),
            TableCell::String(s) => s.trim().parse().ok(),
            TableCell::Empty => None,
        }
    }

    /// True for [`TableCell::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, TableCell::Empty)
    }
}

impl From<&str> for TableCell {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            TableCell::Empty
        } else {
            TableCell::String(s.to_string())
        }
    }
}

/// A titled table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Title.
    pub title: String,
    /// Column headers.
    pub headers: Vec<String>,
    /// Rows, each as wide as `headers`.
    pub rows: Vec<Vec<TableCell>>,
}

impl Table {
    /// An empty table.
    pub fn new(title: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            title: title.into(),
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<TableCell>) {
        row.resize(self.headers.len(), TableCell::Empty);
        self.rows.push(row);
    }

    /// Append a row of empty cells.
    pub fn push_blank_row(&mut self) {
        self.push_row(Vec::new());
    }

    /// Cell at row and column.
    pub fn cell(&self, row: usize, column: usize) -> Option<&TableCell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Index of a header.
    pub fn column(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Render as CSV: the header line, then one line per row.
    pub fn to_csv(&self) -> String {
        let mut out = format_csv_line(&self.headers);
        out.push('\n');
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(TableCell::as_exact_string).collect();
            out.push_str(&format_csv_line(&cells));
            out.push('\n');
        }
        out
    }

    /// Render as column-aligned text under a title line.
    pub fn to_text(&self) -> String {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(TableCell::as_string).collect())
            .collect();

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let line = |values: &[String]| -> String {
            values
                .iter()
                .zip(&widths)
                .map(|(v, w)| format!("{:<w$}", v, w = *w))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        let mut out = format!("## {}\n\n", self.title);
        out.push_str(&line(&self.headers));
        out.push('\n');
        let rule: usize = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
        out.push_str(&"-".repeat(rule));
        out.push('\n');
        for row in &cells {
            out.push_str(&line(row));
            out.push('\n');
        }
        out
    }
}

/// Metric values of one entry for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSeries {
    /// Entry name.
    pub entry: String,
    /// Metric field.
    pub metric: String,
    /// Size labels.
    pub sizes: Vec<String>,
    /// Parsed values, parallel to `sizes`; `None` where not numeric.
    pub values: Vec<Option<f64>>,
}

/// Plot series of `metric` for every loaded entry of `case`.
pub fn plot_series(case: &BenchmarkCase, metric: &str) -> Vec<PlotSeries> {
    case.entries()
        .iter()
        .filter_map(|entry| entry.series().map(|s| (entry.name(), s)))
        .filter_map(|(name, series)| {
            let values = series.metric(metric)?;
            Some(PlotSeries {
                entry: name.to_string(),
                metric: metric.to_string(),
                sizes: series.sizes.clone(),
                values: values.iter().map(|v| v.trim().parse().ok()).collect(),
            })
        })
        .collect()
}

/// Render a comparison as a table: `size`, one raw column per entry, then one
/// speedup column per entry. Failed speedups are empty cells.
pub fn comparison_table(comparison: &ComparisonTable) -> Table {
    let mut headers = vec!["size".to_string()];
    headers.extend(comparison.column_names());
    let mut table = Table::new(comparison.metric.field.clone(), headers);

    for row in &comparison.rows {
        let mut cells = vec![TableCell::String(row.size.clone())];
        cells.extend(row.values.iter().map(|v| TableCell::from(v.as_str())));
        cells.extend(row.speedups.iter().map(|s| match s {
            Ok(value) => TableCell::Float(*value),
            Err(_) => TableCell::Empty,
        }));
        table.push_row(cells);
    }
    table
}

/// Which time the complexity table reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeKind {
    /// Wall-clock time.
    Real,
    /// CPU time.
    Cpu,
}

impl TimeKind {
    /// Both kinds, real first.
    pub const ALL: [TimeKind; 2] = [TimeKind::Real, TimeKind::Cpu];

    /// Short name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeKind::Real => "real_time",
            TimeKind::Cpu => "cpu_time",
        }
    }

    fn coefficient(self, series: &BenchmarkSeries) -> Option<&str> {
        match self {
            TimeKind::Real => series.complexity_real_time.as_deref(),
            TimeKind::Cpu => series.complexity_cpu_time.as_deref(),
        }
    }

    fn rms(self, series: &BenchmarkSeries) -> Option<&str> {
        match self {
            TimeKind::Real => series.complexity_rms_real_time.as_deref(),
            TimeKind::Cpu => series.complexity_rms_cpu_time.as_deref(),
        }
    }
}

/// Complexity summary, one row per entry: label, coefficient, RMS and the
/// coefficient speedup against the baseline.
///
/// Returns `None` when no entry carries a complexity fit.
pub fn complexity_table(case: &BenchmarkCase, kind: TimeKind) -> Option<Table> {
    let entries: Vec<(&str, &BenchmarkSeries)> = case
        .entries()
        .iter()
        .filter_map(|e| e.series().map(|s| (e.name(), s)))
        .collect();
    if !entries.iter().any(|(_, s)| s.has_complexity()) {
        debug!(case = case.name(), "no complexity fit");
        return None;
    }

    let baseline = case.baseline().series().and_then(|s| kind.coefficient(s));
    let mut table = Table::new(
        format!("complexity ({})", kind.as_str()),
        ["entry", "complexity", "coefficient", "rms", "speedup"]
            .iter()
            .map(|h| h.to_string())
            .collect(),
    );

    for (name, series) in entries {
        let coefficient = kind.coefficient(series);
        table.push_row(vec![
            TableCell::String(name.to_string()),
            TableCell::from(series.complexity_label.as_deref().unwrap_or_default()),
            TableCell::from(coefficient.unwrap_or_default()),
            TableCell::from(kind.rms(series).unwrap_or_default()),
            speedup(baseline, coefficient, false)
                .map(TableCell::Float)
                .unwrap_or(TableCell::Empty),
        ]);
    }
    Some(table)
}

/// Every original column of every entry, entries separated by a blank row.
///
/// The headers are the union of the entries' headers in first-seen order,
/// preceded by an `entry` column.
pub fn full_results_table(case: &BenchmarkCase) -> Table {
    let loaded: Vec<_> = case
        .entries()
        .iter()
        .filter_map(|e| e.results().map(|r| (e.name(), r)))
        .collect();

    let mut headers = vec!["entry".to_string()];
    for (_, results) in &loaded {
        for field in results.table.header.fields() {
            if !headers.contains(field) {
                headers.push(field.clone());
            }
        }
    }

    let mut table = Table::new(format!("{} results", case.name()), headers);
    for (position, (name, results)) in loaded.iter().enumerate() {
        if position > 0 {
            table.push_blank_row();
        }
        for record in &results.table.records {
            let row = table
                .headers
                .iter()
                .enumerate()
                .map(|(column, header)| match column {
                    0 => TableCell::String(name.to_string()),
                    _ => TableCell::from(record.get(header).unwrap_or_default()),
                })
                .collect();
            table.push_row(row);
        }
    }
    table
}

/// Everything a dashboard shows for a selected case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseReport {
    /// Topic of the case.
    pub topic: String,
    /// Case name.
    pub case: String,
    /// Case description.
    pub description: String,
    /// Name of the baseline entry.
    pub baseline: String,
    /// Plot series per compared metric.
    pub plots: Vec<PlotSeries>,
    /// One table per compared metric.
    pub comparisons: Vec<Table>,
    /// Complexity tables for real and CPU time, when fitted.
    pub complexity: Vec<Table>,
    /// Full results, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_results: Option<Table>,
}

impl CaseReport {
    /// Every table in display order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.comparisons
            .iter()
            .chain(&self.complexity)
            .chain(&self.full_results)
    }
}

/// Build the report of a selected case.
///
/// # Examples
///
/// ```
/// use bmdash::{case_report, CaseRegistry, DashboardConfig};
///
/// let dir = bmdash_test::FixtureDir::new().unwrap();
/// let mut registry = CaseRegistry::open(dir.cases_path(), DashboardConfig::default()).unwrap();
/// registry.select_topic(Some("list")).unwrap();
/// registry.select_benchmark(Some(0)).unwrap();
///
/// let report = case_report(&registry.view().unwrap(), false);
/// assert_eq!(report.baseline, "std::list");
/// assert_eq!(report.comparisons[0].title, "real_time");
/// assert_eq!(report.complexity.len(), 2);
/// ```
pub fn case_report(view: &CaseView<'_>, include_full: bool) -> CaseReport {
    let case = view.case;
    CaseReport {
        topic: view.topic.to_string(),
        case: case.name().to_string(),
        description: case.description().to_string(),
        baseline: case.baseline().name().to_string(),
        plots: view
            .comparisons
            .iter()
            .flat_map(|c| plot_series(case, &c.metric.field))
            .collect(),
        comparisons: view.comparisons.iter().map(comparison_table).collect(),
        complexity: TimeKind::ALL
            .iter()
            .filter_map(|&kind| complexity_table(case, kind))
            .collect(),
        full_results: include_full.then(|| full_results_table(case)),
    }
}
