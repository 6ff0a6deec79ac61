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

//! Structured error types for the bmdash CLI.

use bmdash::DashboardError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by CLI commands.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Loading, comparing or selecting failed.
    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    /// Writing output failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file or stream.
        path: PathBuf,
        /// The error message.
        message: String,
    },

    /// JSON serialization failed.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message.
        message: String,
    },

    /// A selection argument does not name anything.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Shell not supported by the completion generator.
    #[error("Unsupported shell: '{0}'. Supported shells: bash, zsh, fish, powershell, elvish")]
    UnsupportedShell(String),
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_errors_are_transparent() {
        let err: CliError = DashboardError::UnknownTopic("tree".to_string()).into();
        assert_eq!(err.to_string(), "unknown topic 'tree'");
    }

    #[test]
    fn test_unsupported_shell() {
        let err = CliError::UnsupportedShell("tcsh".to_string());
        assert!(err.to_string().contains("tcsh"));
    }
}
