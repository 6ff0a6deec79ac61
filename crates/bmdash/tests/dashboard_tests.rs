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

//! End-to-end tests over the fixture directory.

use bmdash::{
    case_report, CaseRegistry, ComputationError, DashboardConfig, DashboardError, MetricSpec,
    Selection, TableCell,
};
use bmdash_test::fixtures::cases;
use bmdash_test::fixtures::results::{result_file, Fit};
use bmdash_test::FixtureDir;
use std::fs;

fn open(dir: &FixtureDir) -> CaseRegistry {
    CaseRegistry::open(dir.cases_path(), DashboardConfig::default()).unwrap()
}

fn select(registry: &mut CaseRegistry, topic: &str, case: &str) -> Result<(), DashboardError> {
    registry.select_topic(Some(topic))?;
    let index = registry
        .cases(topic)
        .and_then(|cases| cases.iter().position(|c| c.name() == case))
        .expect("case exists");
    registry.select_benchmark(Some(index)).map(|_| ())
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_push_back_speedups() {
    let dir = FixtureDir::new().unwrap();
    let mut registry = open(&dir);
    select(&mut registry, "list", "push_back").unwrap();

    let view = registry.view().unwrap();
    let real = &view.comparisons[0];
    assert_eq!(real.metric, MetricSpec::new("real_time"));
    assert_eq!(real.entries, ["std::list", "flat_list", "split_list"]);
    assert_eq!(real.rows.len(), 4);

    for row in &real.rows {
        assert_eq!(row.speedups[0], Ok(1.0));
        assert!(close(*row.speedups[1].as_ref().unwrap(), 2.0));
        assert!(close(*row.speedups[2].as_ref().unwrap(), 0.5));
    }
    assert_eq!(real.rows[3].size, "4096");
    assert_eq!(real.rows[3].values, ["19900", "9950", "39800"]);
}

#[test]
fn test_throughput_is_reciprocal_of_time() {
    let dir = FixtureDir::new().unwrap();
    let mut registry = open(&dir);
    select(&mut registry, "list", "push_back").unwrap();

    let comparisons = registry.comparisons();
    let cpu = comparisons.iter().find(|t| t.metric.field == "cpu_time").unwrap();
    let items = comparisons
        .iter()
        .find(|t| t.metric.field == "items_per_second")
        .unwrap();
    assert!(items.metric.reciprocal);

    // items_per_second is derived from cpu_time, so speedups agree
    for (a, b) in cpu.rows.iter().zip(&items.rows) {
        for (x, y) in a.speedups.iter().zip(&b.speedups) {
            assert!(close(*x.as_ref().unwrap(), *y.as_ref().unwrap()));
        }
    }
}

#[test]
fn test_reciprocal_table_inverts_plain_table() {
    let dir = FixtureDir::new().unwrap();
    let config = DashboardConfig::default().with_metrics(vec![
        MetricSpec::new("real_time"),
        MetricSpec::reciprocal("real_time"),
    ]);
    let mut registry = CaseRegistry::open(dir.cases_path(), config).unwrap();
    select(&mut registry, "list", "push_back").unwrap();

    let [plain, inverted] = registry.comparisons() else {
        panic!("expected two tables");
    };
    for (a, b) in plain.rows.iter().zip(&inverted.rows) {
        for (x, y) in a.speedups.iter().zip(&b.speedups) {
            assert_eq!(1.0 / x.as_ref().unwrap(), *y.as_ref().unwrap());
        }
    }
}

#[test]
fn test_zero_measurement_stays_in_its_cell() {
    let dir = FixtureDir::new().unwrap();
    let mut registry = open(&dir);
    select(&mut registry, "broken", "zero").unwrap();

    let real = &registry.comparisons()[0];
    assert_eq!(real.rows.len(), 4);
    assert_eq!(real.rows[1].speedups[1], Err(ComputationError::DivisionByZero));
    assert_eq!(real.rows[1].values[1], "0");
    assert!(close(*real.rows[0].speedups[1].as_ref().unwrap(), 2.0));
    assert!(real.rows[2].speedups[1].is_ok());

    let report = case_report(&registry.view().unwrap(), false);
    let table = &report.comparisons[0];
    let column = table.column("zero_list[speedup]").unwrap();
    assert_eq!(table.cell(1, column), Some(&TableCell::Empty));
    assert_eq!(table.cell(0, column), Some(&TableCell::Float(2.0)));
}

#[test]
fn test_broken_cases() {
    let dir = FixtureDir::new().unwrap();
    let mut registry = open(&dir);

    let err = select(&mut registry, "broken", "misaligned").unwrap_err();
    assert!(matches!(err, DashboardError::Alignment(_)));

    let err = select(&mut registry, "broken", "inconsistent").unwrap_err();
    assert!(err.is_load_error());
    assert!(!err.is_parse_error());
    assert!(err.to_string().contains("inconsistent.csv"));

    let err = select(&mut registry, "broken", "truncated").unwrap_err();
    assert!(err.to_string().contains("expected 10 fields, got 4"));

    assert_eq!(registry.selection(), &Selection::TopicSelected("broken".to_string()));
}

#[test]
fn test_report_tables() {
    let dir = FixtureDir::new().unwrap();
    let mut registry = open(&dir);
    select(&mut registry, "list", "push_back").unwrap();

    let report = case_report(&registry.view().unwrap(), true);
    assert_eq!(report.topic, "list");
    assert_eq!(report.description, "Append N elements one at a time");

    let real = &report.comparisons[0];
    assert_eq!(
        real.headers,
        [
            "size",
            "std::list",
            "flat_list",
            "split_list",
            "std::list[speedup]",
            "flat_list[speedup]",
            "split_list[speedup]"
        ]
    );

    let complexity = &report.complexity[0];
    assert_eq!(complexity.title, "complexity (real_time)");
    assert_eq!(complexity.rows.len(), 3);
    assert_eq!(complexity.rows[2][1], TableCell::String("NlgN".to_string()));
    assert_eq!(complexity.rows[0][4], TableCell::Float(1.0));
    assert!(close(complexity.rows[1][4].as_float().unwrap(), 4.86 / 2.43));

    let full = report.full_results.as_ref().unwrap();
    assert_eq!(full.headers.len(), 11);
    // six records per entry plus two separators
    assert_eq!(full.rows.len(), 20);
    assert!(full.rows[6].iter().all(TableCell::is_empty));
    assert_eq!(full.rows[7][0], TableCell::String("flat_list".to_string()));

    let plots: Vec<_> = report.plots.iter().filter(|p| p.metric == "real_time").collect();
    assert_eq!(plots.len(), 3);
    assert_eq!(plots[1].values, [Some(20.0), Some(155.0), Some(1240.0), Some(9950.0)]);
}

#[test]
fn test_report_serializes() {
    let dir = FixtureDir::new().unwrap();
    let mut registry = open(&dir);
    select(&mut registry, "list", "push_back_with_reserve").unwrap();

    let report = case_report(&registry.view().unwrap(), false);
    assert!(report.complexity.is_empty());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["baseline"], "flat_list");
    assert!(json.get("full_results").is_none());
    assert_eq!(json["comparisons"][0]["rows"][0][0], "8");
}

#[test]
fn test_root_override() {
    let dir = FixtureDir::new().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();
    let cases_path = elsewhere.path().join("cases.json");
    std::fs::write(&cases_path, cases::description_json()).unwrap();

    let config = DashboardConfig::default().with_root(dir.path());
    let mut registry = CaseRegistry::open(&cases_path, config).unwrap();
    select(&mut registry, "list", "push_back").unwrap();

    let unrooted = CaseRegistry::open(&cases_path, DashboardConfig::default());
    let mut unrooted = unrooted.unwrap();
    let err = select(&mut unrooted, "list", "push_back").unwrap_err();
    assert!(matches!(err, DashboardError::Io { .. }));
}

#[test]
fn test_invalid_descriptions() {
    let dir = tempfile::tempdir().unwrap();

    let two = dir.path().join("two.json");
    std::fs::write(&two, cases::two_baselines_json()).unwrap();
    let err = CaseRegistry::open(&two, DashboardConfig::default()).unwrap_err();
    assert!(matches!(err, DashboardError::InvalidCaseDescription(_)));

    let empty = dir.path().join("empty.json");
    std::fs::write(&empty, cases::empty_case_json()).unwrap();
    let err = CaseRegistry::open(&empty, DashboardConfig::default()).unwrap_err();
    assert!(matches!(err, DashboardError::InvalidCaseDescription(_)));
}

#[test]
fn test_file_size_limit() {
    let dir = FixtureDir::new().unwrap();
    let config = DashboardConfig::default().with_max_file_size(64);
    let err = CaseRegistry::open(dir.cases_path(), config).unwrap_err();
    assert!(matches!(err, DashboardError::FileTooLarge { max: 64, .. }));
}

#[test]
fn test_summary_only_entries() {
    let dir = tempfile::tempdir().unwrap();
    let fit = |coefficient: f64| Fit {
        label: "N",
        real_time: coefficient,
        cpu_time: coefficient,
        rms_real_time: 0.01,
        rms_cpu_time: 0.01,
    };
    fs::write(dir.path().join("a.csv"), result_file("BM_a", &[], Some(fit(4.0)))).unwrap();
    fs::write(dir.path().join("b.csv"), result_file("BM_b", &[], Some(fit(2.0)))).unwrap();
    fs::write(
        dir.path().join("cases.json"),
        r#"{"fit": [{"name": "only_fit", "desc": "", "entries": [
            {"name": "a", "file": "a.csv", "baseline": true},
            {"name": "b", "file": "b.csv"}
        ]}]}"#,
    )
    .unwrap();

    let mut registry =
        CaseRegistry::open(dir.path().join("cases.json"), DashboardConfig::default()).unwrap();
    select(&mut registry, "fit", "only_fit").unwrap();

    let view = registry.view().unwrap();
    assert_eq!(view.comparisons.len(), 4);
    assert!(view.comparisons.iter().all(|c| c.rows.is_empty()));

    let report = case_report(&view, true);
    assert_eq!(report.comparisons.len(), 4);
    assert!(report.comparisons.iter().all(|t| t.rows.is_empty()));
    assert!(report.plots.iter().all(|p| p.sizes.is_empty() && p.values.is_empty()));

    assert_eq!(report.complexity.len(), 2);
    let real = &report.complexity[0];
    assert_eq!(real.rows.len(), 2);
    let column = real.column("speedup").unwrap();
    assert_eq!(real.cell(1, column), Some(&TableCell::Float(2.0)));

    // two summary rows per entry plus the separator
    let full = report.full_results.as_ref().unwrap();
    assert_eq!(full.rows.len(), 5);
    assert_eq!(report.tables().count(), 7);
}
