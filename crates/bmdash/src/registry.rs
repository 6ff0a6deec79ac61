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

//! Topic → case registry with an explicit selection state.
//!
//! ```text
//!            select_topic(Some(t))              select_benchmark(Some(i))
//!   Idle ───────────────────────▶ TopicSelected(t) ─────────────────────▶ CaseSelected(t, i)
//!     ▲                               │      ▲                                  │
//!     └──────── select_topic(None) ───┘      └──── select_benchmark(None) ──────┘
//! ```
//!
//! Selecting a case loads every entry (cached per entry for the lifetime of
//! the registry) and builds one comparison table per tracked metric present in
//! the baseline's header. Re-selecting the active topic or case changes
//! nothing and reloads nothing.

use crate::case::{BenchmarkCase, CaseDescription};
use crate::comparator::{compare, ComparisonTable};
use crate::config::{DashboardConfig, MetricSpec};
use crate::error::{DashboardError, Result};
use crate::loader::ResultLoader;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Current selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    Idle,
    /// A topic, but no case.
    TopicSelected(String),
    /// A case within a topic.
    CaseSelected {
        /// The topic.
        topic: String,
        /// Index of the case within the topic.
        index: usize,
    },
}

impl Selection {
    /// The selected topic, if any.
    pub fn topic(&self) -> Option<&str> {
        match self {
            Selection::Idle => None,
            Selection::TopicSelected(topic) | Selection::CaseSelected { topic, .. } => Some(topic),
        }
    }

    /// The selected case index, if any.
    pub fn case_index(&self) -> Option<usize> {
        match self {
            Selection::CaseSelected { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Whether a selection call changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// The request matched the current selection.
    Unchanged,
    /// The selection moved.
    Changed,
}

/// The selected case and its comparison tables.
#[derive(Debug, Clone, Copy)]
pub struct CaseView<'a> {
    /// Selected topic.
    pub topic: &'a str,
    /// Index of the case within the topic.
    pub index: usize,
    /// The case, with every entry loaded.
    pub case: &'a BenchmarkCase,
    /// One table per tracked metric in the baseline's header.
    pub comparisons: &'a [ComparisonTable],
}

/// Registry of benchmark cases grouped by topic.
///
/// # Examples
///
/// ```
/// use bmdash::{CaseRegistry, DashboardConfig, Selection, SelectionChange};
///
/// let dir = bmdash_test::FixtureDir::new().unwrap();
/// let mut registry = CaseRegistry::open(dir.cases_path(), DashboardConfig::default()).unwrap();
///
/// registry.select_topic(Some("list")).unwrap();
/// assert_eq!(registry.select_benchmark(Some(0)).unwrap(), SelectionChange::Changed);
///
/// let view = registry.view().unwrap();
/// assert_eq!(view.case.name(), "push_back");
/// assert_eq!(view.comparisons[0].metric.field, "real_time");
/// assert_eq!(view.comparisons[0].rows[0].speedups[1], Ok(2.0));
/// ```
#[derive(Debug)]
pub struct CaseRegistry {
    topics: BTreeMap<String, Vec<BenchmarkCase>>,
    selection: Selection,
    comparisons: Vec<ComparisonTable>,
    metrics: Vec<MetricSpec>,
    loader: ResultLoader,
}

impl CaseRegistry {
    /// Read a case description file.
    ///
    /// Relative result paths resolve against `config.root`, or the
    /// description's directory when no root is set.
    pub fn open(path: impl AsRef<Path>, config: DashboardConfig) -> Result<Self> {
        let path = path.as_ref();
        let loader = ResultLoader::new(&config);
        let json = loader.read_text(path)?;
        let description = CaseDescription::from_json_str(&json)?;

        let root = match &config.root {
            Some(root) => root.clone(),
            None => path.parent().map(Path::to_path_buf).unwrap_or_default(),
        };
        Self::with_loader(description, &root, config.metrics, loader)
    }

    /// Build a registry from an already parsed description.
    pub fn from_description(
        description: CaseDescription,
        root: &Path,
        config: DashboardConfig,
    ) -> Result<Self> {
        let loader = ResultLoader::new(&config);
        Self::with_loader(description, root, config.metrics, loader)
    }

    /// Build a registry that loads result files through `loader`.
    pub fn with_loader(
        description: CaseDescription,
        root: &Path,
        metrics: Vec<MetricSpec>,
        loader: ResultLoader,
    ) -> Result<Self> {
        let mut topics = BTreeMap::new();
        for (topic, specs) in description.topics {
            let cases = specs
                .into_iter()
                .map(|spec| BenchmarkCase::from_spec(spec, root))
                .collect::<Result<Vec<_>>>()?;
            topics.insert(topic, cases);
        }
        debug!(topics = topics.len(), "registry built");

        Ok(Self {
            topics,
            selection: Selection::Idle,
            comparisons: Vec::new(),
            metrics,
            loader,
        })
    }

    /// Topic names in order.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }

    /// Cases of a topic.
    pub fn cases(&self, topic: &str) -> Option<&[BenchmarkCase]> {
        self.topics.get(topic).map(Vec::as_slice)
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Tracked metrics.
    pub fn metrics(&self) -> &[MetricSpec] {
        &self.metrics
    }

    /// Select a topic, or deselect with `None`.
    ///
    /// Selecting a different topic clears the case selection.
    pub fn select_topic(&mut self, topic: Option<&str>) -> Result<SelectionChange> {
        let Some(topic) = topic else {
            if self.selection == Selection::Idle {
                return Ok(SelectionChange::Unchanged);
            }
            info!("topic deselected");
            self.selection = Selection::Idle;
            self.comparisons.clear();
            return Ok(SelectionChange::Changed);
        };

        if self.selection.topic() == Some(topic) {
            debug!(topic, "topic already selected");
            return Ok(SelectionChange::Unchanged);
        }
        if !self.topics.contains_key(topic) {
            return Err(DashboardError::UnknownTopic(topic.to_string()));
        }

        info!(topic, "topic selected");
        self.selection = Selection::TopicSelected(topic.to_string());
        self.comparisons.clear();
        Ok(SelectionChange::Changed)
    }

    /// Select a case of the current topic by index, or deselect with `None`.
    ///
    /// On failure the selection falls back to the topic alone.
    pub fn select_benchmark(&mut self, index: Option<usize>) -> Result<SelectionChange> {
        let topic = self
            .selection
            .topic()
            .ok_or(DashboardError::NoTopicSelected)?
            .to_string();

        let Some(index) = index else {
            if self.selection.case_index().is_none() {
                return Ok(SelectionChange::Unchanged);
            }
            info!(topic = %topic, "case deselected");
            self.selection = Selection::TopicSelected(topic);
            self.comparisons.clear();
            return Ok(SelectionChange::Changed);
        };

        if self.selection.case_index() == Some(index) {
            debug!(topic = %topic, index, "case already selected");
            return Ok(SelectionChange::Unchanged);
        }

        self.selection = Selection::TopicSelected(topic.clone());
        self.comparisons.clear();

        let cases = self
            .topics
            .get_mut(&topic)
            .ok_or_else(|| DashboardError::UnknownTopic(topic.clone()))?;
        let count = cases.len();
        let case = cases.get_mut(index).ok_or(DashboardError::UnknownCase {
            topic: topic.clone(),
            index,
            count,
        })?;

        let comparisons = build_comparisons(case, &self.loader, &self.metrics)?;
        info!(
            topic = %topic,
            case = case.name(),
            tables = comparisons.len(),
            "case selected"
        );

        self.comparisons = comparisons;
        self.selection = Selection::CaseSelected { topic, index };
        Ok(SelectionChange::Changed)
    }

    /// The selected case, if any.
    pub fn selected_case(&self) -> Option<&BenchmarkCase> {
        match &self.selection {
            Selection::CaseSelected { topic, index } => {
                self.topics.get(topic).and_then(|cases| cases.get(*index))
            }
            _ => None,
        }
    }

    /// Comparison tables of the selected case; empty without a selection.
    pub fn comparisons(&self) -> &[ComparisonTable] {
        &self.comparisons
    }

    /// The selected case with its comparison tables.
    pub fn view(&self) -> Option<CaseView<'_>> {
        match &self.selection {
            Selection::CaseSelected { topic, index } => Some(CaseView {
                topic,
                index: *index,
                case: self.selected_case()?,
                comparisons: &self.comparisons,
            }),
            _ => None,
        }
    }
}

fn build_comparisons(
    case: &mut BenchmarkCase,
    loader: &ResultLoader,
    metrics: &[MetricSpec],
) -> Result<Vec<ComparisonTable>> {
    case.load_all(loader)?;

    let baseline = case.baseline_index();
    let Some(header) = case.baseline().results().map(|r| &r.table.header) else {
        return Ok(Vec::new());
    };
    let entries = case.loaded_series().unwrap_or_default();

    let mut tables = Vec::new();
    for metric in metrics.iter().filter(|m| header.contains(&m.field)) {
        tables.push(compare(&entries, baseline, metric)?);
    }
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::ResultSource;
    use bmdash_test::fixtures::{cases, results};
    use std::cell::Cell;
    use std::io;
    use std::rc::Rc;

    /// Serves the fixture set from memory and counts reads.
    struct MemorySource {
        reads: Rc<Cell<usize>>,
    }

    impl MemorySource {
        fn text(path: &Path) -> io::Result<String> {
            results::all()
                .into_iter()
                .find(|(relative, _)| path.ends_with(relative))
                .map(|(_, text)| text)
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no fixture"))
        }
    }

    impl ResultSource for MemorySource {
        fn size(&self, path: &Path) -> io::Result<u64> {
            Self::text(path).map(|t| t.len() as u64)
        }

        fn read(&self, path: &Path) -> io::Result<String> {
            self.reads.set(self.reads.get() + 1);
            Self::text(path)
        }
    }

    fn registry() -> (CaseRegistry, Rc<Cell<usize>>) {
        let reads = Rc::new(Cell::new(0));
        let config = DashboardConfig::default();
        let loader = ResultLoader::with_source(
            MemorySource {
                reads: Rc::clone(&reads),
            },
            &config,
        );
        let description = CaseDescription::from_json_str(&cases::description_json()).unwrap();
        let registry =
            CaseRegistry::with_loader(description, Path::new("/fixtures"), config.metrics, loader)
                .unwrap();
        (registry, reads)
    }

    #[test]
    fn test_topics_in_name_order() {
        let (registry, _) = registry();
        let topics: Vec<&str> = registry.topics().collect();
        assert_eq!(topics, ["broken", "list"]);
        assert_eq!(registry.cases("list").unwrap().len(), 2);
        assert!(registry.cases("tree").is_none());
    }

    #[test]
    fn test_select_same_topic_twice() {
        let (mut registry, reads) = registry();
        assert_eq!(registry.select_topic(Some("list")).unwrap(), SelectionChange::Changed);
        assert_eq!(registry.select_topic(Some("list")).unwrap(), SelectionChange::Unchanged);
        assert_eq!(registry.selection(), &Selection::TopicSelected("list".to_string()));
        assert_eq!(reads.get(), 0);
    }

    #[test]
    fn test_reselecting_case_does_not_reload() {
        let (mut registry, reads) = registry();
        registry.select_topic(Some("list")).unwrap();
        registry.select_benchmark(Some(0)).unwrap();
        assert_eq!(reads.get(), 3);

        assert_eq!(registry.select_benchmark(Some(0)).unwrap(), SelectionChange::Unchanged);
        assert_eq!(reads.get(), 3);

        // switching away and back reuses the cached entries
        registry.select_benchmark(None).unwrap();
        registry.select_benchmark(Some(0)).unwrap();
        assert_eq!(reads.get(), 3);
    }

    #[test]
    fn test_changing_topic_clears_case() {
        let (mut registry, _) = registry();
        registry.select_topic(Some("list")).unwrap();
        registry.select_benchmark(Some(1)).unwrap();
        assert!(registry.view().is_some());

        registry.select_topic(Some("broken")).unwrap();
        assert_eq!(registry.selection(), &Selection::TopicSelected("broken".to_string()));
        assert!(registry.comparisons().is_empty());
        assert!(registry.view().is_none());

        registry.select_topic(None).unwrap();
        assert_eq!(registry.selection(), &Selection::Idle);
    }

    #[test]
    fn test_case_without_topic() {
        let (mut registry, _) = registry();
        assert_eq!(
            registry.select_benchmark(Some(0)).unwrap_err(),
            DashboardError::NoTopicSelected
        );
    }

    #[test]
    fn test_unknown_topic_keeps_selection() {
        let (mut registry, _) = registry();
        registry.select_topic(Some("list")).unwrap();
        let err = registry.select_topic(Some("tree")).unwrap_err();
        assert_eq!(err, DashboardError::UnknownTopic("tree".to_string()));
        assert_eq!(registry.selection().topic(), Some("list"));
    }

    #[test]
    fn test_unknown_case() {
        let (mut registry, _) = registry();
        registry.select_topic(Some("list")).unwrap();
        registry.select_benchmark(Some(0)).unwrap();
        let err = registry.select_benchmark(Some(9)).unwrap_err();
        assert!(matches!(err, DashboardError::UnknownCase { index: 9, count: 2, .. }));
        assert_eq!(registry.selection(), &Selection::TopicSelected("list".to_string()));
    }

    #[test]
    fn test_misaligned_case_fails_selection() {
        let (mut registry, _) = registry();
        registry.select_topic(Some("broken")).unwrap();
        let misaligned = registry
            .cases("broken")
            .unwrap()
            .iter()
            .position(|c| c.name() == "misaligned")
            .unwrap();

        let err = registry.select_benchmark(Some(misaligned)).unwrap_err();
        assert!(matches!(err, DashboardError::Alignment(ref e) if e.expected == 4 && e.actual == 3));
        assert_eq!(registry.selection(), &Selection::TopicSelected("broken".to_string()));
    }

    #[test]
    fn test_defaulted_baseline() {
        let (mut registry, _) = registry();
        registry.select_topic(Some("list")).unwrap();
        registry.select_benchmark(Some(1)).unwrap();

        let view = registry.view().unwrap();
        assert_eq!(view.case.name(), "push_back_with_reserve");
        assert_eq!(view.case.baseline().name(), "flat_list");
        for row in &view.comparisons[0].rows {
            assert_eq!(row.speedups[0], Ok(1.0));
        }
    }

    #[test]
    fn test_only_metrics_in_baseline_header() {
        let (mut registry, _) = registry();
        registry.select_topic(Some("list")).unwrap();
        registry.select_benchmark(Some(0)).unwrap();
        let fields: Vec<&str> = registry
            .comparisons()
            .iter()
            .map(|t| t.metric.field.as_str())
            .collect();
        assert_eq!(
            fields,
            ["real_time", "cpu_time", "bytes_per_second", "items_per_second"]
        );
    }
}
