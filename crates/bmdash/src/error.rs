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

//! Error types for loading, comparing and selecting benchmark cases.

use bmdash_core::BenchError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::comparator::AlignmentError;

/// Result type for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Errors raised while building the registry, loading result files or
/// changing the selection.
///
/// Per-cell arithmetic problems are not errors at this level; they stay inside
/// the comparison table as [`ComputationError`](crate::ComputationError)s.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DashboardError {
    /// A result file could not be parsed or aggregated.
    #[error("failed to load '{path}': {source}")]
    Load {
        /// The result file.
        path: PathBuf,
        /// The parse or aggregation error.
        source: BenchError,
    },

    /// I/O failure reading a file.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The error message.
        message: String,
    },

    /// File exceeds the configured maximum size.
    #[error("file '{path}' is too large ({actual} bytes, maximum {max} bytes); set BMDASH_MAX_FILE_SIZE to raise the limit")]
    FileTooLarge {
        /// The offending file.
        path: PathBuf,
        /// Its size in bytes.
        actual: u64,
        /// The configured maximum.
        max: u64,
    },

    /// Entries of a case were measured at a different number of sizes.
    #[error(transparent)]
    Alignment(#[from] AlignmentError),

    /// No topic of that name.
    #[error("unknown topic '{0}'")]
    UnknownTopic(String),

    /// Case index out of range for the selected topic.
    #[error("topic '{topic}' has no case {index} ({count} cases)")]
    UnknownCase {
        /// The selected topic.
        topic: String,
        /// The requested index.
        index: usize,
        /// Number of cases in the topic.
        count: usize,
    },

    /// A case was selected before any topic.
    #[error("no topic selected")]
    NoTopicSelected,

    /// The case description is structurally invalid.
    #[error("invalid case description: {0}")]
    InvalidCaseDescription(String),

    /// The case description is not valid JSON.
    #[error("JSON error: {0}")]
    Json(String),
}

impl DashboardError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Attach the file path to a parse error.
    pub fn load_error(path: impl Into<PathBuf>, source: BenchError) -> Self {
        Self::Load {
            path: path.into(),
            source,
        }
    }

    /// Returns true if the error comes from the contents of a result file
    /// rather than from reading it.
    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::Load { .. })
    }

    /// Returns true if a result file's CSV text could not be parsed.
    ///
    /// Agrees with [`BenchError::is_parse_error`]: records naming two
    /// benchmarks are a load error but not a parse error.
    pub fn is_parse_error(&self) -> bool {
        match self {
            Self::Load { source, .. } => source.is_parse_error(),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
