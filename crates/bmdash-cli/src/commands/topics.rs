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

//! Topics command - list the topics and cases of a case description

use super::{write_output, OutputFormat};
use crate::error::CliError;
use bmdash::{CaseRegistry, DashboardConfig, Table};
use colored::Colorize;
use serde_json::json;
use std::path::Path;

/// Print every topic with its cases and their entries.
///
/// The baseline entry of each case is marked. Result files are not read.
pub fn topics(cases: &Path, format: OutputFormat) -> Result<(), CliError> {
    let registry = CaseRegistry::open(cases, DashboardConfig::from_env())?;

    let output = match format {
        OutputFormat::Json => {
            let topics: serde_json::Map<String, serde_json::Value> = registry
                .topics()
                .map(|topic| {
                    let cases: Vec<_> = registry
                        .cases(topic)
                        .unwrap_or_default()
                        .iter()
                        .map(|case| {
                            json!({
                                "name": case.name(),
                                "desc": case.description(),
                                "baseline": case.baseline().name(),
                                "entries": case.entries().iter().map(|e| e.name()).collect::<Vec<_>>(),
                            })
                        })
                        .collect();
                    (topic.to_string(), json!(cases))
                })
                .collect();
            let mut out = serde_json::to_string_pretty(&topics)?;
            out.push('\n');
            out
        }
        OutputFormat::Csv => {
            let mut table = Table::new(
                "topics",
                ["topic", "index", "case", "entry", "baseline"]
                    .iter()
                    .map(|h| h.to_string())
                    .collect(),
            );
            for topic in registry.topics() {
                for (index, case) in registry.cases(topic).unwrap_or_default().iter().enumerate() {
                    for (position, entry) in case.entries().iter().enumerate() {
                        table.push_row(vec![
                            topic.into(),
                            index.to_string().as_str().into(),
                            case.name().into(),
                            entry.name().into(),
                            (position == case.baseline_index()).to_string().as_str().into(),
                        ]);
                    }
                }
            }
            table.to_csv()
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for topic in registry.topics() {
                out.push_str(&format!("{}\n", topic.bold()));
                for (index, case) in registry.cases(topic).unwrap_or_default().iter().enumerate() {
                    out.push_str(&format!("  [{}] {}", index, case.name().green()));
                    if !case.description().is_empty() {
                        out.push_str(&format!(" - {}", case.description()));
                    }
                    out.push('\n');
                    for (position, entry) in case.entries().iter().enumerate() {
                        let marker = if position == case.baseline_index() {
                            " (baseline)".yellow().to_string()
                        } else {
                            String::new()
                        };
                        out.push_str(&format!("      {}{}\n", entry.name(), marker));
                    }
                }
            }
            out
        }
    };

    write_output(&output)
}
