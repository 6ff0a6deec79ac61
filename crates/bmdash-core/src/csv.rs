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

//! CSV line parsing for benchmark result files.
//!
//! Implements the line grammar used by benchmark CSV reporters:
//! - Delimiter: comma
//! - Quoting: single or double quotes
//! - Escaping: `\"` inside `"..."` (and `\'` inside `'...'`) is a literal quote;
//!   any other backslash pair inside quotes is kept verbatim
//! - Whitespace: stripped around fields, preserved inside quotes
//! - Trailing comma: yields one final empty field
//!
//! Unquoted fields may contain internal whitespace but no commas, quote
//! characters or backslashes.

use thiserror::Error;

/// A line that does not match the CSV grammar.
///
/// # Examples
///
/// ```
/// use bmdash_core::csv::parse_csv_line;
///
/// let err = parse_csv_line(r#""unclosed, value"#).unwrap_err();
/// assert_eq!(err.column, 1);
/// assert!(err.to_string().contains("unclosed quote"));
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("column {column}: {reason}")]
pub struct CsvLineError {
    /// 1-based character column where the problem was detected.
    pub column: usize,
    /// Human-readable description of the problem.
    pub reason: String,
}

impl CsvLineError {
    fn new(column: usize, reason: impl Into<String>) -> Self {
        Self {
            column,
            reason: reason.into(),
        }
    }
}

/// Parse one CSV line into its fields.
///
/// An empty or whitespace-only line yields no fields. A malformed line is an
/// error; no partial field list is ever returned.
///
/// # Examples
///
/// ```
/// use bmdash_core::csv::parse_csv_line;
///
/// let fields = parse_csv_line(r#""BM_push_back/64", 120, 'ns'"#).unwrap();
/// assert_eq!(fields, vec!["BM_push_back/64", "120", "ns"]);
///
/// let fields = parse_csv_line("a, b,").unwrap();
/// assert_eq!(fields, vec!["a", "b", ""]);
///
/// assert!(parse_csv_line("").unwrap().is_empty());
/// assert!(parse_csv_line(r#"say "hi""#).is_err());
/// ```
pub fn parse_csv_line(line: &str) -> Result<Vec<String>, CsvLineError> {
    let chars: Vec<char> = line.chars().collect();
    if chars.iter().all(|c| c.is_whitespace()) {
        return Ok(Vec::new());
    }

    let mut fields = Vec::new();
    let mut i = 0;

    loop {
        i = skip_whitespace(&chars, i);

        let (field, next) = match chars.get(i) {
            Some(&quote) if quote == '"' || quote == '\'' => {
                parse_quoted_field(&chars, i, quote)?
            }
            _ => parse_unquoted_field(&chars, i)?,
        };
        fields.push(field);

        i = skip_whitespace(&chars, next);
        match chars.get(i) {
            None => break,
            Some(',') => i += 1,
            Some(&ch) => {
                return Err(CsvLineError::new(
                    i + 1,
                    format!("expected comma or end of line, got '{}'", ch),
                ));
            }
        }
    }

    Ok(fields)
}

fn skip_whitespace(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    i
}

/// Parse a field opened by `quote`. Returns the unescaped content and the
/// position just past the closing quote.
fn parse_quoted_field(
    chars: &[char],
    start: usize,
    quote: char,
) -> Result<(String, usize), CsvLineError> {
    let mut i = start + 1;
    let mut value = String::new();

    while i < chars.len() {
        let ch = chars[i];
        if ch == '\\' && i + 1 < chars.len() {
            let next = chars[i + 1];
            if next != quote {
                value.push(ch);
            }
            value.push(next);
            i += 2;
        } else if ch == quote {
            return Ok((value, i + 1));
        } else {
            value.push(ch);
            i += 1;
        }
    }

    Err(CsvLineError::new(
        start + 1,
        format!("unclosed quote ({}) at end of line", quote),
    ))
}

/// Parse an unquoted field. Stops at the next comma or end of line.
fn parse_unquoted_field(chars: &[char], start: usize) -> Result<(String, usize), CsvLineError> {
    let mut i = start;
    let mut value = String::new();

    while i < chars.len() {
        let ch = chars[i];
        match ch {
            ',' => break,
            '"' | '\'' => {
                return Err(CsvLineError::new(
                    i + 1,
                    format!("quote character '{}' found in unquoted field", ch),
                ));
            }
            '\\' => {
                return Err(CsvLineError::new(
                    i + 1,
                    "backslash found in unquoted field",
                ));
            }
            _ => value.push(ch),
        }
        i += 1;
    }

    let trimmed = value.trim_end().to_string();
    Ok((trimmed, i))
}

/// Join fields back into a CSV line, quoting the fields that need it.
///
/// Fields are quoted when they contain a comma, a quote character or a
/// backslash, when they carry leading or trailing whitespace, or when a lone
/// empty field would otherwise vanish. Double quotes are preferred; single
/// quotes are used when the content cannot be escaped inside double quotes.
///
/// For any field list produced by [`parse_csv_line`], parsing the output of
/// this function yields the same fields again.
///
/// # Examples
///
/// ```
/// use bmdash_core::csv::{format_csv_line, parse_csv_line};
///
/// let line = format_csv_line(&["A/8", "1,000", "ns"]);
/// assert_eq!(line, r#"A/8,"1,000",ns"#);
/// assert_eq!(parse_csv_line(&line).unwrap(), vec!["A/8", "1,000", "ns"]);
/// ```
pub fn format_csv_line<S: AsRef<str>>(fields: &[S]) -> String {
    let lone = fields.len() == 1;
    fields
        .iter()
        .map(|field| {
            let field = field.as_ref();
            if needs_quotes(field, lone) {
                quote_field(field)
            } else {
                field.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn needs_quotes(field: &str, lone: bool) -> bool {
    (field.is_empty() && lone)
        || field.contains([',', '"', '\'', '\\'])
        || field.starts_with(char::is_whitespace)
        || field.ends_with(char::is_whitespace)
}

fn quote_field(field: &str) -> String {
    let quote = if escapable_with(field, '"') || !escapable_with(field, '\'') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(field.len() + 2);
    out.push(quote);
    for ch in field.chars() {
        if ch == quote {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push(quote);
    out
}

/// A field survives quoting with `quote` unless an odd run of backslashes
/// sits directly before a `quote` character or at the end of the field.
fn escapable_with(field: &str, quote: char) -> bool {
    let mut run = 0usize;
    for ch in field.chars() {
        if ch == '\\' {
            run += 1;
            continue;
        }
        if ch == quote && run % 2 == 1 {
            return false;
        }
        run = 0;
    }
    run % 2 == 0
}
