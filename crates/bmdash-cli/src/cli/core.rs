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

//! Reporting commands.

use crate::commands::{self, CompareOptions, OutputFormat};
use crate::error::CliError;
use clap::Subcommand;
use std::path::PathBuf;

/// Commands reading result files and case descriptions.
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Summarize a single result file
    ///
    /// Prints the case name, the measured sizes, every metric column and
    /// the complexity fit if the run computed one.
    Inspect {
        /// Benchmark CSV report
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the topics and cases of a case description
    Topics {
        /// Case description (JSON)
        #[arg(value_name = "CASES")]
        cases: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Compare the entries of one case against its baseline
    Compare {
        /// Case description (JSON)
        #[arg(value_name = "CASES")]
        cases: PathBuf,

        /// Topic containing the case
        #[arg(short, long)]
        topic: String,

        /// Case index or name
        #[arg(short, long)]
        case: String,

        /// Metric to compare (repeatable); defaults to real_time, cpu_time,
        /// bytes_per_second and items_per_second
        #[arg(short, long = "metric", value_name = "METRIC")]
        metrics: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also print every original column of every entry
        #[arg(long)]
        full: bool,

        /// Resolve relative result paths against this directory instead of
        /// the description's directory
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
    },
}

impl CoreCommands {
    /// Execute the reporting command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Inspect { file, format } => commands::inspect(&file, format),
            CoreCommands::Topics { cases, format } => commands::topics(&cases, format),
            CoreCommands::Compare {
                cases,
                topic,
                case,
                metrics,
                format,
                full,
                root,
            } => commands::compare(CompareOptions {
                cases,
                topic,
                case,
                metrics,
                format,
                full,
                root,
            }),
        }
    }
}
