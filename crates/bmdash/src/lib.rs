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

//! Benchmark result dashboard.
//!
//! Builds on [`bmdash_core`] to compare several benchmark result files
//! against a baseline:
//!
//! - [`CaseRegistry`]: topics and cases from a JSON case description, with an
//!   explicit topic/case selection
//! - [`ResultLoader`]: size-limited, retrying acquisition of result files
//! - [`compare`]: per-size raw values and speedups against the baseline
//! - [`case_report`]: plot series and tables ready for rendering
//!
//! # Examples
//!
//! ```
//! use bmdash::{case_report, CaseRegistry, DashboardConfig};
//!
//! let dir = bmdash_test::FixtureDir::new().unwrap();
//! let mut registry = CaseRegistry::open(dir.cases_path(), DashboardConfig::default()).unwrap();
//!
//! registry.select_topic(Some("list")).unwrap();
//! registry.select_benchmark(Some(0)).unwrap();
//!
//! let report = case_report(&registry.view().unwrap(), true);
//! for table in report.tables() {
//!     println!("{}", table.to_text());
//! }
//! ```

mod case;
mod comparator;
mod config;
mod error;
mod loader;
mod presenter;
mod registry;

pub use bmdash_core::{BenchError, BenchmarkSeries, BenchmarkTable, Limits};
pub use case::{BenchmarkCase, BenchmarkEntry, CaseDescription, CaseSpec, EntrySpec};
pub use comparator::{
    compare, speedup, AlignmentError, ComparisonRow, ComparisonTable, ComputationError,
    SpeedupCell,
};
pub use config::{
    max_file_size_from_env, DashboardConfig, LoadPolicy, MetricSpec, BYTES_PER_SECOND_FIELD,
    DEFAULT_MAX_FILE_SIZE, ITEMS_PER_SECOND_FIELD, MAX_FILE_SIZE_ENV,
};
pub use error::{DashboardError, Result};
pub use loader::{FsSource, LoadedResults, ResultLoader, ResultSource};
pub use presenter::{
    case_report, comparison_table, complexity_table, full_results_table, plot_series, CaseReport,
    PlotSeries, Table, TableCell, TimeKind,
};
pub use registry::{CaseRegistry, CaseView, Selection, SelectionChange};
