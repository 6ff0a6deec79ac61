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

//! Error types for benchmark result parsing and aggregation.

use thiserror::Error;

/// Result type for parsing and aggregation operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors raised while turning a result file into a [`BenchmarkSeries`].
///
/// Every variant aborts building the series for that file: no partial series
/// is ever returned.
///
/// [`BenchmarkSeries`]: crate::BenchmarkSeries
///
/// # Examples
///
/// ```
/// use bmdash_core::BenchError;
///
/// let err = BenchError::FieldCountMismatch {
///     line: 7,
///     expected: 10,
///     actual: 4,
/// };
/// assert_eq!(
///     err.to_string(),
///     "line 7: expected 10 fields, got 4"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BenchError {
    /// A line does not follow the CSV grammar.
    #[error("line {line}, column {column}: malformed CSV line: {reason}")]
    MalformedCsvLine {
        /// Line number (1-based).
        line: usize,
        /// Character column (1-based).
        column: usize,
        /// What went wrong.
        reason: String,
    },

    /// No line beginning with `name` was found.
    #[error("no header line starting with 'name' found")]
    SchemaMissing,

    /// The header line was found but cannot serve as a schema.
    #[error("line {line}: invalid header: {reason}")]
    InvalidHeader {
        /// Line number of the header (1-based).
        line: usize,
        /// Why the header was rejected.
        reason: String,
    },

    /// The same field name appears twice in the header.
    #[error("line {line}: duplicate header field '{field}'")]
    DuplicateHeaderField {
        /// Line number of the header (1-based).
        line: usize,
        /// The repeated field name.
        field: String,
    },

    /// A data line does not have as many fields as the header.
    #[error("line {line}: expected {expected} fields, got {actual}")]
    FieldCountMismatch {
        /// Line number (1-based).
        line: usize,
        /// Number of header fields.
        expected: usize,
        /// Number of fields on the line.
        actual: usize,
    },

    /// Sized records in one file disagree on their case name.
    #[error("line {line}: inconsistent case name: expected '{expected}', found '{found}'")]
    ConsistencyError {
        /// Line number of the offending record (1-based).
        line: usize,
        /// Case name established by earlier records.
        expected: String,
        /// Case name of the offending record.
        found: String,
    },

    /// A configured resource limit was exceeded.
    #[error("{what} limit exceeded: {actual} > {limit}")]
    LimitExceeded {
        /// Which limit (e.g. "input size", "line length").
        what: &'static str,
        /// Configured maximum.
        limit: usize,
        /// Observed value.
        actual: usize,
    },
}

impl BenchError {
    /// Returns the 1-based source line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            BenchError::MalformedCsvLine { line, .. }
            | BenchError::InvalidHeader { line, .. }
            | BenchError::DuplicateHeaderField { line, .. }
            | BenchError::FieldCountMismatch { line, .. }
            | BenchError::ConsistencyError { line, .. } => Some(*line),
            BenchError::SchemaMissing | BenchError::LimitExceeded { .. } => None,
        }
    }

    /// Returns true for errors caused by the CSV text itself rather than by
    /// the meaning of the records.
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, BenchError::ConsistencyError { .. })
    }
}
