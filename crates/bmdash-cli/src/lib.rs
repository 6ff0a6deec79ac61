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

//! bmdash CLI library
//!
//! Command definitions and implementations behind the `bmdash` binary.
//!
//! # Commands
//!
//! - `inspect <FILE>`: parse one result file and summarize its series
//! - `topics <CASES>`: list the topics and cases of a case description
//! - `compare <CASES> --topic T --case C`: comparison, complexity and full
//!   results tables of one case, as text, CSV or JSON
//! - `completion <SHELL>`: shell completion scripts
//!
//! # Configuration
//!
//! - `BMDASH_MAX_FILE_SIZE`: maximum size of any file read, in bytes
//! - `RUST_LOG`: log filter; logs go to stderr

pub mod cli;
pub mod commands;
pub mod error;
