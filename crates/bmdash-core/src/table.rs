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

//! Header detection and record building for benchmark result files.
//!
//! Benchmark reporters print a free-form context preamble (machine, caches,
//! load average) before the CSV block. The table builder skips everything up to
//! the first line starting with `name`, adopts that line as the header and
//! zips every following non-empty line with it.

use crate::csv::{parse_csv_line, CsvLineError};
use crate::error::{BenchError, Result};
use crate::limits::Limits;
use std::collections::HashSet;
use tracing::trace;

/// Name of the field every header and record carries.
pub const NAME_FIELD: &str = "name";

/// Ordered, unique field names of a result file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    fields: Vec<String>,
}

impl Header {
    /// Build a header from already-parsed fields.
    ///
    /// Names are trimmed and trailing empty names (a stray trailing comma)
    /// are dropped. The header must contain a `name` field, no other name may
    /// be empty and no name may appear twice. `line` is only used for error
    /// reporting.
    pub fn from_fields(fields: Vec<String>, line: usize) -> Result<Self> {
        let mut fields: Vec<String> = fields.into_iter().map(|f| f.trim().to_string()).collect();
        while fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }

        if let Some(column) = fields.iter().position(|f| f.is_empty()) {
            return Err(BenchError::InvalidHeader {
                line,
                reason: format!("empty field name in column {}", column + 1),
            });
        }

        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if !seen.insert(field.as_str()) {
                return Err(BenchError::DuplicateHeaderField {
                    line,
                    field: field.clone(),
                });
            }
        }

        if !seen.contains(NAME_FIELD) {
            return Err(BenchError::InvalidHeader {
                line,
                reason: format!("no '{}' field", NAME_FIELD),
            });
        }

        Ok(Self { fields })
    }

    /// All field names in file order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Field names except `name`, in file order.
    pub fn metric_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .map(String::as_str)
            .filter(|f| *f != NAME_FIELD)
    }

    /// Position of a field, if present.
    pub fn position(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == field)
    }

    /// Returns true if the header has the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.position(field).is_some()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the header has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One data line, keyed by header field names.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkRecord {
    line: usize,
    fields: Vec<(String, String)>,
}

impl BenchmarkRecord {
    /// Zip a parsed line with the header.
    ///
    /// A line with fewer fields than the header is rejected. Surplus fields
    /// are tolerated only when they are empty (a stray trailing comma).
    pub fn from_fields(header: &Header, values: Vec<String>, line: usize) -> Result<Self> {
        let expected = header.len();
        let actual = values.len();
        let surplus_is_empty = values.iter().skip(expected).all(|v| v.trim().is_empty());

        if actual < expected || !surplus_is_empty {
            return Err(BenchError::FieldCountMismatch {
                line,
                expected,
                actual,
            });
        }

        let fields = header
            .fields()
            .iter()
            .zip(values)
            .map(|(name, value)| (name.clone(), value.trim().to_string()))
            .collect();

        Ok(Self { line, fields })
    }

    /// Source line number (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Value of the `name` field.
    pub fn name(&self) -> &str {
        self.get(NAME_FIELD).unwrap_or_default()
    }

    /// Value of a field, if the header has it.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// `(field, value)` pairs in header order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Values in header order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str())
    }
}

/// Header plus ordered records of one result file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkTable {
    /// Schema of the file.
    pub header: Header,
    /// Line number of the header (1-based).
    pub header_line: usize,
    /// Data records in file order.
    pub records: Vec<BenchmarkRecord>,
}

impl BenchmarkTable {
    /// Number of data records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the file has a header but no data records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Build a [`BenchmarkTable`] from a whole file's text with default limits.
///
/// # Examples
///
/// ```
/// use bmdash_core::parse_table;
///
/// let text = "Run on (8 X 3000 MHz CPUs)\n\
///             name,real_time,cpu_time\n\
///             \"BM_a/8\",10,11\n\
///             \n\
///             \"BM_a/64\",80,81\n";
///
/// let table = parse_table(text).unwrap();
/// assert_eq!(table.header.fields(), ["name", "real_time", "cpu_time"]);
/// assert_eq!(table.records.len(), 2);
/// assert_eq!(table.records[1].get("cpu_time"), Some("81"));
/// ```
pub fn parse_table(text: &str) -> Result<BenchmarkTable> {
    parse_table_with_limits(text, &Limits::default())
}

/// Build a [`BenchmarkTable`] with explicit limits.
pub fn parse_table_with_limits(text: &str, limits: &Limits) -> Result<BenchmarkTable> {
    Limits::check("input size", limits.max_input_size, text.len())?;

    let mut header: Option<(Header, usize)> = None;
    let mut records = Vec::new();

    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        if raw.trim().is_empty() {
            continue;
        }
        Limits::check("line length", limits.max_line_length, raw.len())?;

        if let Some((schema, _)) = &header {
            let fields = parse_line(raw, line)?;
            records.push(BenchmarkRecord::from_fields(schema, fields, line)?);
            Limits::check("record", limits.max_records, records.len())?;
            continue;
        }

        if !raw.trim_start().starts_with(NAME_FIELD) {
            trace!(line, "skipping preamble line");
            continue;
        }
        let schema = Header::from_fields(parse_line(raw, line)?, line)?;
        Limits::check("column", limits.max_columns, schema.len())?;
        header = Some((schema, line));
    }

    let (header, header_line) = header.ok_or(BenchError::SchemaMissing)?;
    Ok(BenchmarkTable {
        header,
        header_line,
        records,
    })
}

fn parse_line(raw: &str, line: usize) -> Result<Vec<String>> {
    parse_csv_line(raw).map_err(|CsvLineError { column, reason }| BenchError::MalformedCsvLine {
        line,
        column,
        reason,
    })
}
