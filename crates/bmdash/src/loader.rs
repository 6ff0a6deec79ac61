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

//! Result file acquisition.
//!
//! A [`ResultSource`] provides the raw text of a result file. The
//! [`ResultLoader`] checks the file size, retries transient read failures
//! according to its [`LoadPolicy`], and runs the parse → aggregate pipeline.
//! Loading is atomic: the caller either gets a complete [`LoadedResults`] or an
//! error.

use crate::config::{DashboardConfig, LoadPolicy};
use crate::error::{DashboardError, Result};
use bmdash_core::{aggregate, parse_table_with_limits, BenchmarkSeries, BenchmarkTable, Limits};
use std::fs;
use std::io;
use std::path::Path;
use std::thread;
use tracing::{debug, info, warn};

/// Where result text comes from.
pub trait ResultSource {
    /// Size of the file in bytes.
    fn size(&self, path: &Path) -> io::Result<u64>;

    /// Whole contents of the file.
    fn read(&self, path: &Path) -> io::Result<String>;
}

/// Reads result files from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl ResultSource for FsSource {
    fn size(&self, path: &Path) -> io::Result<u64> {
        fs::metadata(path).map(|m| m.len())
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

/// A parsed result file.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedResults {
    /// Every record, in file order.
    pub table: BenchmarkTable,
    /// The aggregated series.
    pub series: BenchmarkSeries,
}

impl LoadedResults {
    /// Run the pipeline on result text.
    pub fn from_text(text: &str, limits: &Limits) -> bmdash_core::Result<Self> {
        let table = parse_table_with_limits(text, limits)?;
        let series = aggregate(&table)?;
        Ok(Self { table, series })
    }
}

fn is_transient(kind: io::ErrorKind) -> bool {
    matches!(
        kind,
        io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
    )
}

/// Loads result files through a [`ResultSource`].
pub struct ResultLoader {
    source: Box<dyn ResultSource>,
    policy: LoadPolicy,
    limits: Limits,
    max_file_size: u64,
}

impl std::fmt::Debug for ResultLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultLoader")
            .field("policy", &self.policy)
            .field("limits", &self.limits)
            .field("max_file_size", &self.max_file_size)
            .finish_non_exhaustive()
    }
}

impl ResultLoader {
    /// A filesystem loader using the limits and policy of `config`.
    pub fn new(config: &DashboardConfig) -> Self {
        Self::with_source(FsSource, config)
    }

    /// A loader reading through a custom source.
    pub fn with_source(source: impl ResultSource + 'static, config: &DashboardConfig) -> Self {
        Self {
            source: Box::new(source),
            policy: config.load_policy,
            limits: config.limits.clone(),
            max_file_size: config.max_file_size,
        }
    }

    /// Read a file's text after checking its size.
    pub fn read_text(&self, path: &Path) -> Result<String> {
        let size = self.with_retry(path, || self.source.size(path))?;
        if size > self.max_file_size {
            return Err(DashboardError::FileTooLarge {
                path: path.to_path_buf(),
                actual: size,
                max: self.max_file_size,
            });
        }
        self.with_retry(path, || self.source.read(path))
    }

    /// Read and parse a result file.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmdash::{DashboardConfig, ResultLoader};
    ///
    /// let dir = bmdash_test::FixtureDir::new().unwrap();
    /// let loader = ResultLoader::new(&DashboardConfig::default());
    ///
    /// let results = loader.load(&dir.file("list/push_back/std_list.csv")).unwrap();
    /// assert_eq!(results.series.sizes, ["8", "64", "512", "4096"]);
    /// assert_eq!(results.table.records.len(), 6);
    /// ```
    pub fn load(&self, path: &Path) -> Result<LoadedResults> {
        let text = self.read_text(path)?;
        let results = LoadedResults::from_text(&text, &self.limits)
            .map_err(|e| DashboardError::load_error(path, e))?;
        info!(
            path = %path.display(),
            records = results.table.len(),
            sizes = results.series.len(),
            "loaded result file"
        );
        Ok(results)
    }

    fn with_retry<T>(&self, path: &Path, op: impl Fn() -> io::Result<T>) -> Result<T> {
        let attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(err) if is_transient(err.kind()) && attempt < attempts => {
                    warn!(
                        path = %path.display(),
                        attempt,
                        error = %err,
                        "transient read failure, retrying"
                    );
                    if !self.policy.retry_delay.is_zero() {
                        thread::sleep(self.policy.retry_delay);
                    }
                    attempt += 1;
                }
                Err(err) => {
                    debug!(path = %path.display(), attempt, "read failed");
                    return Err(DashboardError::io_error(path, err));
                }
            }
        }
    }
}
