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

//! CLI command implementations

mod compare;
mod completion;
mod inspect;
mod topics;

pub use compare::{compare, CompareOptions};
pub use completion::{generate_completion_for_command, print_installation_instructions};
pub use inspect::inspect;
pub use topics::topics;

use crate::error::CliError;
use clap::ValueEnum;
use std::io::{self, Write};

/// Output format of the reporting commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, column-aligned text.
    #[default]
    Text,
    /// One CSV block per table.
    Csv,
    /// Pretty-printed JSON.
    Json,
}

/// Write content to stdout.
pub fn write_output(content: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| CliError::io_error("<stdout>", e))
}
