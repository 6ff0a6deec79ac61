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

//! Dashboard configuration.
//!
//! [`DashboardConfig`] bundles everything the registry needs besides the case
//! description itself: where relative result paths resolve, which metrics get
//! a comparison table, parsing limits and the file loading policy.

use bmdash_core::{Limits, CPU_TIME_FIELD, REAL_TIME_FIELD};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default maximum result file size (64 MiB).
///
/// Can be overridden via the `BMDASH_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`], in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "BMDASH_MAX_FILE_SIZE";

/// Field holding bytes processed per second.
pub const BYTES_PER_SECOND_FIELD: &str = "bytes_per_second";
/// Field holding items processed per second.
pub const ITEMS_PER_SECOND_FIELD: &str = "items_per_second";

/// Maximum file size from the environment, or the default when unset or
/// unparseable.
pub fn max_file_size_from_env() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// A metric column to compare across entries.
///
/// Time metrics are lower-is-better: the speedup of an entry is
/// `baseline / entry`. Throughput metrics are higher-is-better and set
/// `reciprocal`, which inverts the ratio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSpec {
    /// Header field name.
    pub field: String,
    /// Invert the speedup ratio.
    pub reciprocal: bool,
}

impl MetricSpec {
    /// A lower-is-better metric.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reciprocal: false,
        }
    }

    /// A higher-is-better metric.
    pub fn reciprocal(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reciprocal: true,
        }
    }

    /// The metrics tracked by default: both times and both throughputs.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(REAL_TIME_FIELD),
            Self::new(CPU_TIME_FIELD),
            Self::reciprocal(BYTES_PER_SECOND_FIELD),
            Self::reciprocal(ITEMS_PER_SECOND_FIELD),
        ]
    }

    /// Resolve a field name against the defaults, keeping their direction.
    /// Unknown fields are treated as lower-is-better.
    pub fn for_field(field: &str) -> Self {
        Self::defaults()
            .into_iter()
            .find(|m| m.field == field)
            .unwrap_or_else(|| Self::new(field))
    }
}

/// Bounded retry for transient read failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadPolicy {
    /// Total attempts, including the first. Zero behaves like one.
    pub max_attempts: u32,
    /// Pause between attempts.
    pub retry_delay: Duration,
}

impl Default for LoadPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delay: Duration::from_millis(50),
        }
    }
}

impl LoadPolicy {
    /// A single attempt without retries.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            retry_delay: Duration::ZERO,
        }
    }
}

/// Configuration of a [`CaseRegistry`](crate::CaseRegistry).
///
/// # Examples
///
/// ```
/// use bmdash::{DashboardConfig, MetricSpec};
///
/// let config = DashboardConfig::default()
///     .with_root("results")
///     .with_metrics(vec![MetricSpec::new("real_time")])
///     .with_max_file_size(1024 * 1024);
///
/// assert_eq!(config.metrics.len(), 1);
/// assert_eq!(config.max_file_size, 1024 * 1024);
/// ```
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Directory relative result paths resolve against. When `None`, the
    /// directory of the case description is used.
    pub root: Option<PathBuf>,
    /// Metrics that get a comparison table.
    pub metrics: Vec<MetricSpec>,
    /// Parsing limits applied to every result file.
    pub limits: Limits,
    /// Retry policy for reading result files.
    pub load_policy: LoadPolicy,
    /// Maximum result file size in bytes.
    pub max_file_size: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            root: None,
            metrics: MetricSpec::defaults(),
            limits: Limits::default(),
            load_policy: LoadPolicy::default(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl DashboardConfig {
    /// Defaults, with the maximum file size taken from `BMDASH_MAX_FILE_SIZE`.
    pub fn from_env() -> Self {
        Self {
            max_file_size: max_file_size_from_env(),
            ..Self::default()
        }
    }

    /// Set the directory relative result paths resolve against.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Replace the tracked metrics.
    pub fn with_metrics(mut self, metrics: Vec<MetricSpec>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Replace the parsing limits.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Replace the load policy.
    pub fn with_load_policy(mut self, policy: LoadPolicy) -> Self {
        self.load_policy = policy;
        self
    }

    /// Set the maximum result file size.
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }
}
