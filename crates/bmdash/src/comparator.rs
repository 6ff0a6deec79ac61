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

//! Baseline comparison of aligned benchmark series.
//!
//! For every size index and entry, the comparator records the raw metric
//! value and the speedup against the baseline entry:
//!
//! ```text
//! speedup     = baseline / entry
//! reciprocal  = 1 / speedup          (higher-is-better metrics)
//! ```
//!
//! Entries measured at a different number of sizes abort the comparison with
//! an [`AlignmentError`]. Arithmetic problems (a zero, missing or non-numeric
//! operand, or a ratio outside the `f64` range) only affect their own cell and are kept as [`ComputationError`]s.

use crate::config::MetricSpec;
use bmdash_core::BenchmarkSeries;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Why a single speedup cell could not be computed.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
pub enum ComputationError {
    /// One operand is zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The value is absent or empty.
    #[error("missing value")]
    MissingValue,
    /// The value is not a number.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    /// The ratio overflows or underflows `f64`.
    #[error("speedup out of range")]
    OutOfRange,
}

/// An entry has a different number of sizes than the baseline.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("entry '{entry}' has {actual} sizes, baseline has {expected}")]
pub struct AlignmentError {
    /// The misaligned entry.
    pub entry: String,
    /// Number of sizes of the baseline.
    pub expected: usize,
    /// Number of sizes of the entry.
    pub actual: usize,
}

/// Speedup value or the reason it is absent.
pub type SpeedupCell = Result<f64, ComputationError>;

/// One size of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    /// Size label, taken from the baseline.
    pub size: String,
    /// Raw metric value per entry.
    pub values: Vec<String>,
    /// Speedup per entry.
    pub speedups: Vec<SpeedupCell>,
}

/// Raw values and speedups of one metric across the entries of a case.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    /// The compared metric.
    pub metric: MetricSpec,
    /// Entry names, in case order.
    pub entries: Vec<String>,
    /// Index of the baseline entry.
    pub baseline: usize,
    /// One row per size.
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// Column names: one raw column per entry, then one `name[speedup]`
    /// column per entry.
    pub fn column_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .cloned()
            .chain(self.entries.iter().map(|e| format!("{}[speedup]", e)))
            .collect()
    }

    /// Speedup cell at a row and entry index.
    pub fn speedup(&self, row: usize, entry: usize) -> Option<&SpeedupCell> {
        self.rows.get(row).and_then(|r| r.speedups.get(entry))
    }

    /// Number of failed cells.
    pub fn error_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| &r.speedups)
            .filter(|c| c.is_err())
            .count()
    }
}

/// Parse one operand.
fn operand(value: Option<&str>) -> Result<f64, ComputationError> {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(ComputationError::MissingValue);
    }
    let number: f64 = value
        .parse()
        .map_err(|_| ComputationError::InvalidNumber(value.to_string()))?;
    if !number.is_finite() {
        return Err(ComputationError::InvalidNumber(value.to_string()));
    }
    if number == 0.0 {
        return Err(ComputationError::DivisionByZero);
    }
    Ok(number)
}

/// Speedup of `entry` against `baseline`.
///
/// # Examples
///
/// ```
/// use bmdash::{speedup, ComputationError};
///
/// assert_eq!(speedup(Some("40"), Some("20"), false), Ok(2.0));
/// assert_eq!(speedup(Some("40"), Some("20"), true), Ok(0.5));
/// assert_eq!(speedup(Some("40"), Some("0"), false), Err(ComputationError::DivisionByZero));
/// assert_eq!(speedup(Some("40"), None, false), Err(ComputationError::MissingValue));
/// ```
pub fn speedup(baseline: Option<&str>, entry: Option<&str>, reciprocal: bool) -> SpeedupCell {
    let ratio = operand(baseline)? / operand(entry)?;
    // A zero ratio would make the reciprocal infinite.
    if !ratio.is_finite() || ratio == 0.0 {
        return Err(ComputationError::OutOfRange);
    }
    Ok(if reciprocal { 1.0 / ratio } else { ratio })
}

/// Compare `metric` across `entries` against the entry at `baseline`.
///
/// Entries without the metric column produce [`ComputationError::MissingValue`]
/// cells. An out-of-range `baseline` yields an empty table.
pub fn compare(
    entries: &[(&str, &BenchmarkSeries)],
    baseline: usize,
    metric: &MetricSpec,
) -> Result<ComparisonTable, AlignmentError> {
    let mut table = ComparisonTable {
        metric: metric.clone(),
        entries: entries.iter().map(|(name, _)| name.to_string()).collect(),
        baseline,
        rows: Vec::new(),
    };

    let Some((_, base)) = entries.get(baseline) else {
        return Ok(table);
    };

    for (name, series) in entries {
        if series.len() != base.len() {
            return Err(AlignmentError {
                entry: name.to_string(),
                expected: base.len(),
                actual: series.len(),
            });
        }
        if series.sizes != base.sizes {
            warn!(entry = %name, "size labels differ from the baseline");
        }
    }

    for (index, size) in base.sizes.iter().enumerate() {
        let reference = base.value(&metric.field, index);
        let mut row = ComparisonRow {
            size: size.clone(),
            values: Vec::with_capacity(entries.len()),
            speedups: Vec::with_capacity(entries.len()),
        };

        for (name, series) in entries {
            let value = series.value(&metric.field, index);
            let cell = speedup(reference, value, metric.reciprocal);
            if let Err(err) = &cell {
                debug!(entry = %name, size = %size, metric = %metric.field, %err, "speedup unavailable");
            }
            row.values.push(value.unwrap_or_default().to_string());
            row.speedups.push(cell);
        }
        table.rows.push(row);
    }

    Ok(table)
}
