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

//! Aggregation of benchmark records into per-file series.
//!
//! Record names follow the `<case>/<size>` convention. Two kinds of summary
//! rows are written by complexity-fitting runs:
//!
//! - `<case>_BigO`: fitted coefficients in `real_time` / `cpu_time`, fitted
//!   complexity (`N`, `NlgN`, ...) in `time_unit`
//! - `<case>_RMS`: normalized root-mean-square deviation of the fit
//!
//! Repetition aggregates (`_mean`, `_median`, `_stddev`, `_cv`) are skipped.

use crate::error::{BenchError, Result};
use crate::limits::Limits;
use crate::table::{parse_table_with_limits, BenchmarkRecord, BenchmarkTable};
use tracing::{debug, trace};

/// Field holding wall-clock time.
pub const REAL_TIME_FIELD: &str = "real_time";
/// Field holding CPU time.
pub const CPU_TIME_FIELD: &str = "cpu_time";
/// Field holding the time unit, or the complexity label on `_BigO` rows.
pub const TIME_UNIT_FIELD: &str = "time_unit";

const BIG_O_SUFFIX: &str = "_BigO";
const RMS_SUFFIX: &str = "_RMS";
const AGGREGATE_SUFFIXES: [&str; 4] = ["_mean", "_median", "_stddev", "_cv"];

/// How a record contributes to a series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKind {
    /// A per-size sample.
    Sized {
        /// Name without the trailing size segment.
        case_name: String,
        /// Trailing size segment.
        size: String,
    },
    /// Complexity fit (`_BigO`).
    BigO,
    /// Fit deviation (`_RMS`).
    Rms,
    /// Repetition aggregate, ignored.
    Aggregate,
}

impl RecordKind {
    /// Classify a record name. Literal `"` characters are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmdash_core::RecordKind;
    ///
    /// assert_eq!(RecordKind::classify("BM_find_BigO"), RecordKind::BigO);
    /// assert_eq!(
    ///     RecordKind::classify("BM_map<int>/real_time/4096"),
    ///     RecordKind::Sized {
    ///         case_name: "BM_map<int>/real_time".to_string(),
    ///         size: "4096".to_string(),
    ///     }
    /// );
    /// ```
    pub fn classify(name: &str) -> Self {
        let name = name.replace('"', "");

        if name.ends_with(BIG_O_SUFFIX) {
            return RecordKind::BigO;
        }
        if name.ends_with(RMS_SUFFIX) {
            return RecordKind::Rms;
        }
        if AGGREGATE_SUFFIXES.iter().any(|s| name.ends_with(s)) {
            return RecordKind::Aggregate;
        }

        match name.rsplit_once('/') {
            Some((case_name, size)) => RecordKind::Sized {
                case_name: case_name.to_string(),
                size: size.to_string(),
            },
            None => RecordKind::Sized {
                case_name: name,
                size: String::new(),
            },
        }
    }
}

/// Values of one metric column, index-aligned with [`BenchmarkSeries::sizes`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricColumn {
    /// Header field name.
    pub name: String,
    /// One value per size.
    pub values: Vec<String>,
}

/// Aggregated result of one benchmark file.
///
/// # Examples
///
/// ```
/// use bmdash_core::parse_series;
///
/// let series = parse_series(
///     "name,real_time,cpu_time,items_per_second\n\
///      \"A/8\",10,10,100\n\
///      \"A/64\",80,80,12\n",
/// )
/// .unwrap();
///
/// assert_eq!(series.case_name.as_deref(), Some("A"));
/// assert_eq!(series.sizes, ["8", "64"]);
/// assert_eq!(series.metric("real_time").unwrap(), ["10", "80"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkSeries {
    /// Case name shared by all sized records; `None` until one is seen.
    pub case_name: Option<String>,
    /// Size labels in file order.
    pub sizes: Vec<String>,
    /// Metric columns in header order.
    pub metrics: Vec<MetricColumn>,
    /// Fitted complexity (`N`, `NlgN`, ...).
    pub complexity_label: Option<String>,
    /// Fitted coefficient for real time.
    pub complexity_real_time: Option<String>,
    /// Fitted coefficient for CPU time.
    pub complexity_cpu_time: Option<String>,
    /// Fit RMS for real time.
    pub complexity_rms_real_time: Option<String>,
    /// Fit RMS for CPU time.
    pub complexity_rms_cpu_time: Option<String>,
}

impl BenchmarkSeries {
    /// Number of sizes.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Returns true for a degenerate series without sized records.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Values of a metric, if the file has that column.
    pub fn metric(&self, field: &str) -> Option<&[String]> {
        self.metrics
            .iter()
            .find(|m| m.name == field)
            .map(|m| m.values.as_slice())
    }

    /// Value of a metric at a size index.
    pub fn value(&self, field: &str, index: usize) -> Option<&str> {
        self.metric(field)
            .and_then(|values| values.get(index))
            .map(String::as_str)
    }

    /// Metric names in header order.
    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.metrics.iter().map(|m| m.name.as_str())
    }

    /// Returns true if a `_BigO` row was found.
    pub fn has_complexity(&self) -> bool {
        self.complexity_label.is_some()
            || self.complexity_real_time.is_some()
            || self.complexity_cpu_time.is_some()
    }

    fn push_sample(
        &mut self,
        record: &BenchmarkRecord,
        case_name: String,
        size: String,
    ) -> Result<()> {
        if let Some(expected) = &self.case_name {
            if *expected != case_name {
                return Err(BenchError::ConsistencyError {
                    line: record.line(),
                    expected: expected.clone(),
                    found: case_name,
                });
            }
        } else {
            self.case_name = Some(case_name);
        }

        trace!(line = record.line(), size = %size, "sized record");
        self.sizes.push(size);
        for column in &mut self.metrics {
            let value = record.get(&column.name).unwrap_or_default();
            column.values.push(value.to_string());
        }
        Ok(())
    }
}

/// Aggregate a parsed table into a series.
pub fn aggregate(table: &BenchmarkTable) -> Result<BenchmarkSeries> {
    let mut series = BenchmarkSeries {
        metrics: table
            .header
            .metric_fields()
            .map(|name| MetricColumn {
                name: name.to_string(),
                values: Vec::new(),
            })
            .collect(),
        ..Default::default()
    };

    for record in &table.records {
        let owned = |field: &str| record.get(field).map(str::to_string);

        match RecordKind::classify(record.name()) {
            RecordKind::BigO => {
                debug!(line = record.line(), name = record.name(), "complexity record");
                series.complexity_real_time = owned(REAL_TIME_FIELD);
                series.complexity_cpu_time = owned(CPU_TIME_FIELD);
                series.complexity_label = owned(TIME_UNIT_FIELD);
            }
            RecordKind::Rms => {
                debug!(line = record.line(), name = record.name(), "rms record");
                series.complexity_rms_real_time = owned(REAL_TIME_FIELD);
                series.complexity_rms_cpu_time = owned(CPU_TIME_FIELD);
            }
            RecordKind::Aggregate => {
                debug!(line = record.line(), name = record.name(), "skipping aggregate record");
            }
            RecordKind::Sized { case_name, size } => {
                series.push_sample(record, case_name, size)?;
            }
        }
    }

    Ok(series)
}

/// Parse a whole result file into a series with default limits.
pub fn parse_series(text: &str) -> Result<BenchmarkSeries> {
    parse_series_with_limits(text, &Limits::default())
}

/// Parse a whole result file into a series with explicit limits.
pub fn parse_series_with_limits(text: &str, limits: &Limits) -> Result<BenchmarkSeries> {
    let table = parse_table_with_limits(text, limits)?;
    aggregate(&table)
}
