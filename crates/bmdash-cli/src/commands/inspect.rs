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

//! Inspect command - summary of a single result file

use super::{write_output, OutputFormat};
use crate::error::CliError;
use bmdash::{DashboardConfig, ResultLoader, Table, TableCell};
use colored::Colorize;
use std::path::Path;

/// Parse one result file and print its series.
///
/// Text output lists the case name, the sizes, every metric column and the
/// complexity fit; JSON output serializes the series as-is.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, is larger than
/// `BMDASH_MAX_FILE_SIZE`, or fails to parse.
pub fn inspect(file: &Path, format: OutputFormat) -> Result<(), CliError> {
    let config = DashboardConfig::from_env();
    let results = ResultLoader::new(&config).load(file)?;
    let series = &results.series;

    let output = match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(series)?;
            json.push('\n');
            json
        }
        OutputFormat::Csv => {
            let mut table = Table::new(
                series.case_name.clone().unwrap_or_default(),
                std::iter::once("size".to_string())
                    .chain(series.metric_names().map(str::to_string))
                    .collect(),
            );
            for (index, size) in series.sizes.iter().enumerate() {
                table.push_row(
                    std::iter::once(TableCell::from(size.as_str()))
                        .chain(series.metrics.iter().map(|m| {
                            TableCell::from(
                                m.values.get(index).map(String::as_str).unwrap_or_default(),
                            )
                        }))
                        .collect(),
                );
            }
            table.to_csv()
        }
        OutputFormat::Text => {
            let mut out = String::new();
            out.push_str(&format!("{}\n\n", "Benchmark Series".bold().underline()));
            out.push_str(&format!(
                "{}     {}\n",
                "Case:".cyan(),
                series.case_name.as_deref().unwrap_or("(none)").green()
            ));
            out.push_str(&format!("{}  {}\n", "Records:".cyan(), results.table.len()));
            out.push_str(&format!("{}    [{}]\n", "Sizes:".cyan(), series.sizes.join(", ")));

            out.push_str(&format!("\n{}\n", "Metrics:".cyan()));
            for column in &series.metrics {
                out.push_str(&format!(
                    "  {}: [{}]\n",
                    column.name.yellow(),
                    column.values.join(", ")
                ));
            }

            if series.has_complexity() {
                out.push_str(&format!("\n{}\n", "Complexity:".cyan()));
                let field = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
                out.push_str(&format!("  label:     {}\n", field(&series.complexity_label)));
                out.push_str(&format!(
                    "  real_time: {} (rms {})\n",
                    field(&series.complexity_real_time),
                    field(&series.complexity_rms_real_time)
                ));
                out.push_str(&format!(
                    "  cpu_time:  {} (rms {})\n",
                    field(&series.complexity_cpu_time),
                    field(&series.complexity_rms_cpu_time)
                ));
            }
            out
        }
    };

    write_output(&output)
}
