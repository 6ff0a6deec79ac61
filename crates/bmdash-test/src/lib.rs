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

//! Shared test fixtures for the benchmark dashboard crates.
//!
//! Provides result files in the format written by benchmark CSV reporters,
//! case descriptions, and a helper that lays both out in a temporary
//! directory.
//!
//! # Quick Start
//!
//! ```rust
//! use bmdash_test::fixtures;
//!
//! let text = fixtures::results::std_list_push_back();
//! assert!(text.contains("name,iterations,real_time"));
//!
//! let dir = bmdash_test::FixtureDir::new().unwrap();
//! assert!(dir.cases_path().exists());
//! ```

pub mod fixtures;

use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// File name of the case description inside a [`FixtureDir`].
pub const CASES_FILE: &str = "cases.json";

/// A temporary directory holding every fixture result file plus `cases.json`.
///
/// The directory is removed when the value is dropped.
pub struct FixtureDir {
    dir: TempDir,
}

impl FixtureDir {
    /// Create the directory and write all fixtures into it.
    pub fn new() -> io::Result<Self> {
        let dir = tempfile::tempdir()?;
        write_fixtures_to_dir(dir.path())?;
        Ok(Self { dir })
    }

    /// Root of the fixture tree.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the case description.
    pub fn cases_path(&self) -> PathBuf {
        self.dir.path().join(CASES_FILE)
    }

    /// Path of a result file given its path relative to the root.
    pub fn file(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }
}

/// Write all result fixtures and the case description below `dir`.
pub fn write_fixtures_to_dir(dir: &Path) -> io::Result<()> {
    for (relative, text) in fixtures::results::all() {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, text)?;
    }
    std::fs::write(dir.join(CASES_FILE), fixtures::cases::description_json())
}
