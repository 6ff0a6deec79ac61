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

//! CLI command definitions and argument parsing.
//!
//! - [`core`]: reporting commands (inspect, topics, compare)
//! - [`utility`]: utility commands (completion)

mod core;
mod utility;

use crate::error::CliError;
use clap::{Parser, Subcommand};

pub use self::core::CoreCommands;
pub use self::utility::UtilityCommands;

/// bmdash - benchmark result dashboard
///
/// Parses benchmark CSV reports and compares several implementations of the
/// same benchmark against a baseline.
///
/// # Examples
///
/// ```bash
/// # Summarize one result file
/// bmdash inspect results/list/push_back/std_list.csv
///
/// # List the cases of a description
/// bmdash topics cases.json
///
/// # Compare the entries of a case
/// bmdash compare cases.json --topic list --case push_back --format csv
/// ```
#[derive(Parser)]
#[command(name = "bmdash")]
#[command(author, version, about = "bmdash - benchmark result dashboard", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log directive for the verbosity level.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "bmdash=warn",
            1 => "bmdash=info",
            2 => "bmdash=debug",
            _ => "bmdash=trace",
        }
    }
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    // Reporting commands, flattened to appear at top level
    #[command(flatten)]
    Core(CoreCommands),

    // Utility commands, flattened to appear at top level
    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
