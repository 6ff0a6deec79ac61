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

//! Resource limits for result file parsing.

use crate::error::{BenchError, Result};

/// Configurable limits applied while building a [`BenchmarkTable`].
///
/// Benchmark result files are small in practice; the limits only bound the
/// damage a corrupted or unrelated file can do.
///
/// [`BenchmarkTable`]: crate::BenchmarkTable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum input size in bytes (default: 64MB).
    pub max_input_size: usize,
    /// Maximum line length in bytes (default: 64KB).
    pub max_line_length: usize,
    /// Maximum number of header columns (default: 256).
    pub max_columns: usize,
    /// Maximum number of data records (default: 1M).
    pub max_records: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_size: 64 * 1024 * 1024, // 64MB
            max_line_length: 64 * 1024,       // 64KB
            max_columns: 256,
            max_records: 1_000_000,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_input_size: usize::MAX,
            max_line_length: usize::MAX,
            max_columns: usize::MAX,
            max_records: usize::MAX,
        }
    }

    pub(crate) fn check(what: &'static str, limit: usize, actual: usize) -> Result<()> {
        if actual > limit {
            Err(BenchError::LimitExceeded {
                what,
                limit,
                actual,
            })
        } else {
            Ok(())
        }
    }
}
