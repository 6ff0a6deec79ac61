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

//! Compare command - tables of one selected case

use super::{write_output, OutputFormat};
use crate::error::CliError;
use bmdash::{case_report, CaseRegistry, DashboardConfig, MetricSpec};
use std::path::PathBuf;
use tracing::debug;

/// Arguments of the compare command.
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    /// Case description file.
    pub cases: PathBuf,
    /// Topic to select.
    pub topic: String,
    /// Case index or name within the topic.
    pub case: String,
    /// Metrics to compare; the default set when empty.
    pub metrics: Vec<String>,
    /// Output format.
    pub format: OutputFormat,
    /// Include the full results table.
    pub full: bool,
    /// Directory relative result paths resolve against.
    pub root: Option<PathBuf>,
}

/// Select a case and print its comparison, complexity and (optionally) full
/// results tables.
///
/// # Errors
///
/// Returns `Err` if the description or a result file cannot be loaded, the
/// topic or case does not exist, or the entries are not aligned.
pub fn compare(options: CompareOptions) -> Result<(), CliError> {
    let mut config = DashboardConfig::from_env();
    if let Some(root) = options.root {
        config = config.with_root(root);
    }
    if !options.metrics.is_empty() {
        config = config.with_metrics(
            options
                .metrics
                .iter()
                .map(|m| MetricSpec::for_field(m))
                .collect(),
        );
    }

    let mut registry = CaseRegistry::open(&options.cases, config)?;
    registry.select_topic(Some(&options.topic))?;

    let index = resolve_case(&registry, &options.topic, &options.case)?;
    debug!(topic = %options.topic, index, "resolved case");
    registry.select_benchmark(Some(index))?;

    let view = registry
        .view()
        .ok_or_else(|| CliError::invalid_input("no case selected"))?;
    let report = case_report(&view, options.full);

    let output = match options.format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            json
        }
        OutputFormat::Csv => report
            .tables()
            .map(|t| format!("# {}\n{}", t.title, t.to_csv()))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Text => {
            let mut out = format!("{} / {}", report.topic, report.case);
            if !report.description.is_empty() {
                out.push_str(&format!(": {}", report.description));
            }
            out.push_str(&format!("\nbaseline: {}\n\n", report.baseline));
            out.push_str(
                &report
                    .tables()
                    .map(|t| t.to_text())
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
            out
        }
    };

    write_output(&output)
}

/// A case given by index, or by name when not a number.
fn resolve_case(registry: &CaseRegistry, topic: &str, case: &str) -> Result<usize, CliError> {
    if let Ok(index) = case.trim().parse::<usize>() {
        return Ok(index);
    }
    registry
        .cases(topic)
        .unwrap_or_default()
        .iter()
        .position(|c| c.name() == case)
        .ok_or_else(|| {
            CliError::invalid_input(format!("topic '{}' has no case named '{}'", topic, case))
        })
}
