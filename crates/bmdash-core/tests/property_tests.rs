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

//! Property-based tests for line parsing and series aggregation.
//!
//! # Properties Tested
//!
//! 1. **Line Round Trip**: parse → format → parse reproduces the fields
//! 2. **Size Order**: sizes appear in file order
//! 3. **Column Alignment**: every metric column has one value per size
//! 4. **Summary Rows**: `_BigO` / `_RMS` rows never add a size

use bmdash_core::{format_csv_line, parse_csv_line, parse_series};
use proptest::prelude::*;

/// One field as it may appear on a line, quoted or not.
fn raw_field() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9_/<>:.]([A-Za-z0-9_/<>:. ]{0,10}[A-Za-z0-9_/<>:.])?",
        Just(String::new()),
        "[A-Za-z0-9 ,'/<>]{0,12}".prop_map(|s| format!("\"{}\"", s)),
        "[A-Za-z0-9 ,\"/<>]{0,12}".prop_map(|s| format!("'{}'", s)),
        "[a-z]{0,4}".prop_map(|s| format!("\"{}\\\"{}\\n\"", s, s)),
        "[a-z]{0,4}".prop_map(|s| format!("'{}\\'{}\\\\'", s, s)),
    ]
}

fn raw_line() -> impl Strategy<Value = String> {
    prop::collection::vec((raw_field(), "[ \t]{0,2}"), 1..8).prop_map(|fields| {
        fields
            .into_iter()
            .map(|(field, pad)| format!("{}{}{}", pad, field, pad))
            .collect::<Vec<_>>()
            .join(",")
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: every parsed line survives format → parse unchanged.
    #[test]
    fn prop_line_round_trip(line in raw_line()) {
        let fields = parse_csv_line(&line);
        prop_assert!(fields.is_ok(), "generated line rejected: {:?}", line);
        let fields = fields.unwrap();

        let formatted = format_csv_line(&fields);
        let reparsed = parse_csv_line(&formatted);
        prop_assert!(reparsed.is_ok(), "formatted line rejected: {:?}", formatted);
        prop_assert_eq!(reparsed.unwrap(), fields);
    }

    /// Property: backslash-free field lists always format into a parseable line.
    #[test]
    fn prop_format_without_backslashes(
        fields in prop::collection::vec("[A-Za-z0-9 ,'\"/<>]{0,10}", 2..6)
    ) {
        let formatted = format_csv_line(&fields);
        prop_assert_eq!(parse_csv_line(&formatted).unwrap(), fields);
    }

    /// Property: sizes keep file order and every column stays aligned.
    #[test]
    fn prop_sizes_in_file_order(
        sizes in prop::collection::vec(1u32..1_000_000, 0..40),
        with_fit in any::<bool>()
    ) {
        let mut text = String::from("name,iterations,real_time,cpu_time,time_unit\n");
        for (i, size) in sizes.iter().enumerate() {
            text.push_str(&format!("\"BM_case/{}\",{},{}.5,{}.25,ns\n", size, i + 1, i, i));
        }
        if with_fit {
            text.push_str("\"BM_case_BigO\",,1.5,1.25,N\n\"BM_case_RMS\",,0.01,0.02,\n");
        }

        let series = parse_series(&text).unwrap();
        let expected: Vec<String> = sizes.iter().map(|s| s.to_string()).collect();

        prop_assert_eq!(&series.sizes, &expected);
        for column in &series.metrics {
            prop_assert_eq!(column.values.len(), expected.len());
        }
        prop_assert_eq!(series.has_complexity(), with_fit);
        if !sizes.is_empty() {
            prop_assert_eq!(series.case_name.as_deref(), Some("BM_case"));
        }
    }
}
