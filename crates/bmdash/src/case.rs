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

//! Case descriptions and the cases built from them.
//!
//! A case description maps each topic to its comparison cases:
//!
//! ```json
//! {
//!   "list": [
//!     {
//!       "name": "push_back",
//!       "desc": "Append N elements one at a time",
//!       "entries": [
//!         { "name": "std::list", "file": "list/push_back/std_list.csv", "baseline": true },
//!         { "name": "flat_list", "file": "list/push_back/flat_list.csv" }
//!       ]
//!     }
//!   ]
//! }
//! ```

use crate::error::{DashboardError, Result};
use crate::loader::{LoadedResults, ResultLoader};
use bmdash_core::BenchmarkSeries;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One entry of a case as written in the description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySpec {
    /// Display name.
    pub name: String,
    /// Result file, absolute or relative to the description root.
    pub file: PathBuf,
    /// Marks the baseline entry.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub baseline: bool,
}

/// One case as written in the description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSpec {
    /// Case name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub desc: String,
    /// Compared entries.
    pub entries: Vec<EntrySpec>,
}

/// Topic → cases, topics ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseDescription {
    /// Cases per topic.
    pub topics: BTreeMap<String, Vec<CaseSpec>>,
}

impl CaseDescription {
    /// Parse a description from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A named result file taking part in a case.
#[derive(Debug, Clone)]
pub struct BenchmarkEntry {
    name: String,
    file: PathBuf,
    is_baseline: bool,
    results: Option<LoadedResults>,
}

impl BenchmarkEntry {
    /// An entry that has not been loaded yet.
    pub fn new(name: impl Into<String>, file: impl Into<PathBuf>, is_baseline: bool) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            is_baseline,
            results: None,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved result file path.
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// True if the description flagged this entry as baseline.
    pub fn is_baseline(&self) -> bool {
        self.is_baseline
    }

    /// Cached results, if loaded.
    pub fn results(&self) -> Option<&LoadedResults> {
        self.results.as_ref()
    }

    /// Cached series, if loaded.
    pub fn series(&self) -> Option<&BenchmarkSeries> {
        self.results.as_ref().map(|r| &r.series)
    }

    /// True once the result file has been parsed.
    pub fn is_loaded(&self) -> bool {
        self.results.is_some()
    }

    /// Load the result file unless it is already cached.
    pub fn ensure_loaded(&mut self, loader: &ResultLoader) -> Result<&LoadedResults> {
        let results = match &mut self.results {
            Some(results) => {
                debug!(entry = %self.name, "results cached");
                results
            }
            slot => slot.insert(loader.load(&self.file)?),
        };
        Ok(&*results)
    }
}

/// A comparison of several entries with one baseline.
#[derive(Debug, Clone)]
pub struct BenchmarkCase {
    name: String,
    description: String,
    entries: Vec<BenchmarkEntry>,
    baseline: usize,
}

impl BenchmarkCase {
    /// Build a case, resolving its baseline.
    ///
    /// The flagged entry is the baseline; without a flag the first entry is.
    /// Zero entries or more than one flag is an error.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        entries: Vec<BenchmarkEntry>,
    ) -> Result<Self> {
        let name = name.into();
        if entries.is_empty() {
            return Err(DashboardError::InvalidCaseDescription(format!(
                "case '{}' has no entries",
                name
            )));
        }

        let flagged: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_baseline)
            .map(|(i, _)| i)
            .collect();
        if flagged.len() > 1 {
            return Err(DashboardError::InvalidCaseDescription(format!(
                "case '{}' flags {} baselines",
                name,
                flagged.len()
            )));
        }

        Ok(Self {
            name,
            description: description.into(),
            entries,
            baseline: flagged.first().copied().unwrap_or(0),
        })
    }

    /// Build a case from its description, resolving relative paths against `root`.
    pub fn from_spec(spec: CaseSpec, root: &Path) -> Result<Self> {
        let entries = spec
            .entries
            .into_iter()
            .map(|e| {
                let file = if e.file.is_absolute() {
                    e.file
                } else {
                    root.join(e.file)
                };
                BenchmarkEntry::new(e.name, file, e.baseline)
            })
            .collect();
        Self::new(spec.name, spec.desc, entries)
    }

    /// Case name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Entries in description order.
    pub fn entries(&self) -> &[BenchmarkEntry] {
        &self.entries
    }

    /// Index of the baseline entry.
    pub fn baseline_index(&self) -> usize {
        self.baseline
    }

    /// The baseline entry.
    pub fn baseline(&self) -> &BenchmarkEntry {
        &self.entries[self.baseline]
    }

    /// Load every entry, reusing cached results.
    pub fn load_all(&mut self, loader: &ResultLoader) -> Result<()> {
        for entry in &mut self.entries {
            entry.ensure_loaded(loader)?;
        }
        Ok(())
    }

    /// `(name, series)` of every entry, or `None` while any entry is unloaded.
    pub fn loaded_series(&self) -> Option<Vec<(&str, &BenchmarkSeries)>> {
        self.entries
            .iter()
            .map(|e| e.series().map(|s| (e.name(), s)))
            .collect()
    }
}
