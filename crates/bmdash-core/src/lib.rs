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

//! Parsing and aggregation of benchmark result files.
//!
//! This crate turns the CSV output of a benchmark run into a typed
//! [`BenchmarkSeries`]: the sizes that were measured, one value column per
//! metric, and the complexity summary when the run fitted one.
//!
//! # Pipeline
//!
//! ```text
//! text ──parse_csv_line──▶ fields ──parse_table──▶ BenchmarkTable ──aggregate──▶ BenchmarkSeries
//! ```
//!
//! Every step either completes or returns a [`BenchError`]; a partially built
//! series is never observable.
//!
//! # Examples
//!
//! ```
//! use bmdash_core::{parse_series, BenchError};
//!
//! let csv = "\
//! name,iterations,real_time,cpu_time,time_unit
//! \"BM_push_back/8\",1000,12.5,12.4,ns
//! \"BM_push_back/64\",200,98.1,97.9,ns
//! \"BM_push_back_BigO\",,1.53,1.52,N
//! ";
//!
//! let series = parse_series(csv).unwrap();
//! assert_eq!(series.case_name.as_deref(), Some("BM_push_back"));
//! assert_eq!(series.sizes, ["8", "64"]);
//! assert_eq!(series.complexity_label.as_deref(), Some("N"));
//!
//! let err = parse_series("no header here\n").unwrap_err();
//! assert_eq!(err, BenchError::SchemaMissing);
//! ```

pub mod csv;
mod error;
mod limits;
mod series;
mod table;

pub use csv::{format_csv_line, parse_csv_line, CsvLineError};
pub use error::{BenchError, Result};
pub use limits::Limits;
pub use series::{
    aggregate, parse_series, parse_series_with_limits, BenchmarkSeries, MetricColumn, RecordKind,
    CPU_TIME_FIELD, REAL_TIME_FIELD, TIME_UNIT_FIELD,
};
pub use table::{
    parse_table, parse_table_with_limits, BenchmarkRecord, BenchmarkTable, Header, NAME_FIELD,
};
