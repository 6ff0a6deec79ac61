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

//! Integration tests for the bmdash binary.

use assert_cmd::Command;
use bmdash_test::FixtureDir;
use predicates::prelude::*;

/// Test helper to create a bmdash command
fn bmdash_cmd() -> Command {
    let mut cmd = Command::cargo_bin("bmdash").expect("Failed to find bmdash binary");
    cmd.env_remove("RUST_LOG").env_remove("BMDASH_MAX_FILE_SIZE");
    cmd
}

fn fixtures() -> FixtureDir {
    FixtureDir::new().expect("Failed to write fixtures")
}

// ============================================================================
// inspect
// ============================================================================

#[test]
fn test_inspect_text() {
    let dir = fixtures();
    bmdash_cmd()
        .arg("inspect")
        .arg(dir.file("list/push_back/std_list.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("BM_push_back<std::list<int>>"))
        .stdout(predicate::str::contains("[8, 64, 512, 4096]"))
        .stdout(predicate::str::contains("real_time: [40, 310, 2480, 19900]"))
        .stdout(predicate::str::contains("label:     N"));
}

#[test]
fn test_inspect_json() {
    let dir = fixtures();
    let output = bmdash_cmd()
        .args(["inspect", "--format", "json"])
        .arg(dir.file("list/push_back/flat_list.csv"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["case_name"], "BM_push_back<flat_list<int, uint32_t>>");
    assert_eq!(json["sizes"][3], "4096");
    assert_eq!(json["complexity_label"], "N");
}

#[test]
fn test_inspect_csv() {
    let dir = fixtures();
    bmdash_cmd()
        .args(["inspect", "-f", "csv"])
        .arg(dir.file("list/push_back_with_reserve/std_list.csv"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("size,iterations,real_time,cpu_time"))
        .stdout(predicate::str::contains("\n8,1000,42,42,ns,,"));
}

#[test]
fn test_inspect_malformed_file() {
    let dir = fixtures();
    bmdash_cmd()
        .arg("inspect")
        .arg(dir.file("broken/inconsistent.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains(
            "inconsistent case name: expected 'A', found 'B'",
        ));
}

#[test]
fn test_inspect_missing_file() {
    bmdash_cmd()
        .args(["inspect", "/nonexistent/results.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_inspect_file_size_limit() {
    let dir = fixtures();
    bmdash_cmd()
        .env("BMDASH_MAX_FILE_SIZE", "100")
        .arg("inspect")
        .arg(dir.file("list/push_back/std_list.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

// ============================================================================
// topics
// ============================================================================

#[test]
fn test_topics_text() {
    let dir = fixtures();
    bmdash_cmd()
        .arg("topics")
        .arg(dir.cases_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("[0] push_back - Append N elements one at a time"))
        .stdout(predicate::str::contains("std::list (baseline)"));
}

#[test]
fn test_topics_json() {
    let dir = fixtures();
    let output = bmdash_cmd()
        .args(["topics", "--format", "json"])
        .arg(dir.cases_path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["list"][1]["name"], "push_back_with_reserve");
    assert_eq!(json["list"][1]["baseline"], "flat_list");
    assert_eq!(json["broken"].as_array().unwrap().len(), 4);
}

// ============================================================================
// compare
// ============================================================================

#[test]
fn test_compare_text() {
    let dir = fixtures();
    bmdash_cmd()
        .arg("compare")
        .arg(dir.cases_path())
        .args(["--topic", "list", "--case", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list / push_back"))
        .stdout(predicate::str::contains("baseline: std::list"))
        .stdout(predicate::str::contains("## real_time"))
        .stdout(predicate::str::contains("flat_list[speedup]"))
        .stdout(predicate::str::contains("## complexity (cpu_time)"));
}

#[test]
fn test_compare_csv_by_case_name() {
    let dir = fixtures();
    bmdash_cmd()
        .arg("compare")
        .arg(dir.cases_path())
        .args(["-t", "list", "-c", "push_back", "-m", "real_time", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "# real_time\nsize,std::list,flat_list,split_list,std::list[speedup],flat_list[speedup],split_list[speedup]\n",
        ))
        .stdout(predicate::str::contains("8,40,20,80,1,2,0.5\n"))
        .stdout(predicate::str::contains("# cpu_time\n").not());
}

#[test]
fn test_compare_json_full() {
    let dir = fixtures();
    let output = bmdash_cmd()
        .arg("compare")
        .arg(dir.cases_path())
        .args(["--topic", "list", "--case", "push_back", "--format", "json", "--full"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["baseline"], "std::list");
    assert_eq!(json["comparisons"][0]["title"], "real_time");
    assert_eq!(json["comparisons"][0]["rows"][0][5], 2.0);
    assert_eq!(json["full_results"]["rows"].as_array().unwrap().len(), 20);
}

#[test]
fn test_compare_zero_cell() {
    let dir = fixtures();
    bmdash_cmd()
        .arg("compare")
        .arg(dir.cases_path())
        .args(["-t", "broken", "-c", "zero", "-m", "real_time", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("64,310,0,1,\n"));
}

#[test]
fn test_compare_misaligned() {
    let dir = fixtures();
    bmdash_cmd()
        .arg("compare")
        .arg(dir.cases_path())
        .args(["-t", "broken", "-c", "misaligned"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("entry 'short_list' has 3 sizes, baseline has 4"));
}

#[test]
fn test_compare_unknown_topic() {
    let dir = fixtures();
    bmdash_cmd()
        .arg("compare")
        .arg(dir.cases_path())
        .args(["-t", "tree", "-c", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown topic 'tree'"));
}

#[test]
fn test_compare_unknown_case() {
    let dir = fixtures();
    bmdash_cmd()
        .arg("compare")
        .arg(dir.cases_path())
        .args(["-t", "list", "-c", "emplace_back"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no case named 'emplace_back'"));

    bmdash_cmd()
        .arg("compare")
        .arg(dir.cases_path())
        .args(["-t", "list", "-c", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no case 5"));
}

#[test]
fn test_compare_with_root() {
    let dir = fixtures();
    let elsewhere = tempfile::tempdir().unwrap();
    let cases = elsewhere.path().join("cases.json");
    std::fs::copy(dir.cases_path(), &cases).unwrap();

    bmdash_cmd()
        .arg("compare")
        .arg(&cases)
        .args(["-t", "list", "-c", "1", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("baseline: flat_list"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = fixtures();
    bmdash_cmd()
        .arg("-vv")
        .arg("compare")
        .arg(dir.cases_path())
        .args(["-t", "list", "-c", "0", "-f", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded result file"));
}

// ============================================================================
// completion
// ============================================================================

#[test]
fn test_completion_bash() {
    bmdash_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bmdash"));
}

#[test]
fn test_completion_install() {
    bmdash_cmd()
        .args(["completion", "zsh", "--install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bmdash completion zsh"));
}

#[test]
fn test_completion_unsupported() {
    bmdash_cmd()
        .args(["completion", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported shell"));
}
