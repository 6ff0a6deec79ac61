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

//! Case descriptions referencing the result fixtures.

use serde_json::{json, Value};

/// Topic holding the well-formed list cases.
pub const LIST_TOPIC: &str = "list";

/// Topic holding cases that fail to load or compare.
pub const BROKEN_TOPIC: &str = "broken";

/// Description as a JSON value.
///
/// `list/push_back` flags `std::list` as baseline; `list/push_back_with_reserve`
/// flags nothing, so its first entry (`flat_list`) becomes the baseline.
pub fn description() -> Value {
    json!({
        LIST_TOPIC: [
            {
                "name": "push_back",
                "desc": "Append N elements one at a time",
                "entries": [
                    { "name": "std::list", "file": "list/push_back/std_list.csv", "baseline": true },
                    { "name": "flat_list", "file": "list/push_back/flat_list.csv" },
                    { "name": "split_list", "file": "list/push_back/split_list.csv" }
                ]
            },
            {
                "name": "push_back_with_reserve",
                "desc": "Reserve N elements, then append them",
                "entries": [
                    { "name": "flat_list", "file": "list/push_back_with_reserve/flat_list.csv" },
                    { "name": "std::list", "file": "list/push_back_with_reserve/std_list.csv" }
                ]
            }
        ],
        BROKEN_TOPIC: [
            {
                "name": "misaligned",
                "desc": "Entries measured at different sizes",
                "entries": [
                    { "name": "std::list", "file": "list/push_back/std_list.csv", "baseline": true },
                    { "name": "short_list", "file": "broken/short_list.csv" }
                ]
            },
            {
                "name": "inconsistent",
                "desc": "Result file mixing two benchmarks",
                "entries": [
                    { "name": "mixed", "file": "broken/inconsistent.csv" }
                ]
            },
            {
                "name": "zero",
                "desc": "Entry with a zero measurement",
                "entries": [
                    { "name": "std::list", "file": "list/push_back/std_list.csv", "baseline": true },
                    { "name": "zero_list", "file": "broken/zero_list.csv" }
                ]
            },
            {
                "name": "truncated",
                "desc": "Result file with a short row",
                "entries": [
                    { "name": "truncated", "file": "broken/truncated.csv" }
                ]
            }
        ]
    })
}

/// Description serialized as pretty JSON.
pub fn description_json() -> String {
    serde_json::to_string_pretty(&description()).unwrap_or_default()
}

/// Every `file` referenced by [`description`].
pub fn referenced_files() -> Vec<String> {
    let mut files = Vec::new();
    if let Value::Object(topics) = description() {
        for cases in topics.values() {
            for case in cases.as_array().into_iter().flatten() {
                for entry in case["entries"].as_array().into_iter().flatten() {
                    if let Some(file) = entry["file"].as_str() {
                        files.push(file.to_string());
                    }
                }
            }
        }
    }
    files
}

/// Description with two baselines in one case.
pub fn two_baselines_json() -> String {
    json!({
        "list": [{
            "name": "push_back",
            "desc": "",
            "entries": [
                { "name": "a", "file": "list/push_back/std_list.csv", "baseline": true },
                { "name": "b", "file": "list/push_back/flat_list.csv", "baseline": true }
            ]
        }]
    })
    .to_string()
}

/// Description with a case that has no entries.
pub fn empty_case_json() -> String {
    json!({ "list": [{ "name": "nothing", "desc": "", "entries": [] }] }).to_string()
}
