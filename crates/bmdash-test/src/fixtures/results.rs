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

//! Benchmark result files.
//!
//! Each fixture carries the context preamble printed by the benchmark runner,
//! the standard ten-column header, one row per size, and optionally the
//! `_BigO` / `_RMS` summary rows of a complexity fit.
//!
//! The push_back fixtures are built so that `flat_list` is exactly twice as
//! fast as `std::list` at every size and `split_list` exactly half as fast.

/// Standard header of benchmark CSV reports.
pub const HEADER: &str = "name,iterations,real_time,cpu_time,time_unit,bytes_per_second,items_per_second,label,error_occurred,error_message";

/// Context printed before the CSV block.
pub const PREAMBLE: &str = "\
2025-03-14T09:26:53+00:00
Running ./bm_list
Run on (8 X 3600 MHz CPU s)
CPU Caches:
  L1 Data 32 KiB (x4)
  L2 Unified 256 KiB (x4)
Load Average: 0.52, 0.58, 0.59
";

/// Sizes used by the aligned fixtures.
pub const SIZES: [u64; 4] = [8, 64, 512, 4096];

/// Complexity fit written after the sized rows.
#[derive(Debug, Clone, Copy)]
pub struct Fit {
    /// Fitted complexity label.
    pub label: &'static str,
    /// Real-time coefficient.
    pub real_time: f64,
    /// CPU-time coefficient.
    pub cpu_time: f64,
    /// RMS of the real-time fit.
    pub rms_real_time: f64,
    /// RMS of the CPU-time fit.
    pub rms_cpu_time: f64,
}

/// Render a result file for `case` with one row per `(size, real_time, cpu_time)`.
///
/// `items_per_second` is derived from the CPU time.
pub fn result_file(case: &str, samples: &[(u64, f64, f64)], fit: Option<Fit>) -> String {
    let mut out = String::from(PREAMBLE);
    out.push_str(HEADER);
    out.push('\n');

    for &(size, real_time, cpu_time) in samples {
        let items = if cpu_time == 0.0 {
            String::new()
        } else {
            format!("{}", size as f64 * 1e9 / cpu_time)
        };
        out.push_str(&format!(
            "\"{}/{}\",1000,{},{},ns,,{},,,\n",
            case, size, real_time, cpu_time, items
        ));
    }

    if let Some(fit) = fit {
        out.push_str(&format!(
            "\"{}_BigO\",,{},{},{},,,,,\n",
            case, fit.real_time, fit.cpu_time, fit.label
        ));
        out.push_str(&format!(
            "\"{}_RMS\",,{},{},,,,,,\n",
            case, fit.rms_real_time, fit.rms_cpu_time
        ));
    }

    out
}

fn scaled(times: [f64; 4]) -> Vec<(u64, f64, f64)> {
    SIZES
        .iter()
        .zip(times)
        .map(|(&size, t)| (size, t, t))
        .collect()
}

/// `std::list` push_back; the baseline of the push_back case.
pub fn std_list_push_back() -> String {
    result_file(
        "BM_push_back<std::list<int>>",
        &scaled([40.0, 310.0, 2480.0, 19900.0]),
        Some(Fit {
            label: "N",
            real_time: 4.86,
            cpu_time: 4.85,
            rms_real_time: 0.02,
            rms_cpu_time: 0.02,
        }),
    )
}

/// `flat_list` push_back: twice as fast as `std::list`.
///
/// The case name contains a comma, so it only survives quoted.
pub fn flat_list_push_back() -> String {
    result_file(
        "BM_push_back<flat_list<int, uint32_t>>",
        &scaled([20.0, 155.0, 1240.0, 9950.0]),
        Some(Fit {
            label: "N",
            real_time: 2.43,
            cpu_time: 2.43,
            rms_real_time: 0.03,
            rms_cpu_time: 0.03,
        }),
    )
}

/// `split_list` push_back: half as fast as `std::list`.
pub fn split_list_push_back() -> String {
    result_file(
        "BM_push_back<split_list<int, uint32_t>>",
        &scaled([80.0, 620.0, 4960.0, 39800.0]),
        Some(Fit {
            label: "NlgN",
            real_time: 0.81,
            cpu_time: 0.8,
            rms_real_time: 0.11,
            rms_cpu_time: 0.1,
        }),
    )
}

/// `std::list` push_back after reserve; no complexity fit.
pub fn std_list_push_back_with_reserve() -> String {
    result_file(
        "BM_push_back_with_reserve<std::list<int>>",
        &scaled([42.0, 320.0, 2500.0, 20000.0]),
        None,
    )
}

/// `flat_list` push_back after reserve; no complexity fit.
pub fn flat_list_push_back_with_reserve() -> String {
    result_file(
        "BM_push_back_with_reserve<flat_list<int, uint32_t>>",
        &scaled([10.5, 80.0, 625.0, 5000.0]),
        None,
    )
}

/// Only three sizes: misaligned with every other fixture.
pub fn short_list_push_back() -> String {
    result_file(
        "BM_push_back<short_list<int>>",
        &SIZES[..3]
            .iter()
            .map(|&size| (size, 10.0, 10.0))
            .collect::<Vec<_>>(),
        None,
    )
}

/// Aligned with the push_back fixtures but measured 0 at size 64.
pub fn zero_list_push_back() -> String {
    result_file(
        "BM_push_back<zero_list<int>>",
        &scaled([20.0, 0.0, 1240.0, 9950.0]),
        None,
    )
}

/// Two sized rows with different case names.
pub fn inconsistent() -> String {
    format!("{}\n\"A/8\",1,10,10,ns,,,,,\n\"B/16\",1,20,20,ns,,,,,\n", HEADER)
}

/// A row missing fields.
pub fn truncated() -> String {
    format!("{}\n\"A/8\",1,10,10\n", HEADER)
}

/// All fixtures as `(relative path, text)` pairs.
pub fn all() -> Vec<(&'static str, String)> {
    vec![
        ("list/push_back/std_list.csv", std_list_push_back()),
        ("list/push_back/flat_list.csv", flat_list_push_back()),
        ("list/push_back/split_list.csv", split_list_push_back()),
        (
            "list/push_back_with_reserve/std_list.csv",
            std_list_push_back_with_reserve(),
        ),
        (
            "list/push_back_with_reserve/flat_list.csv",
            flat_list_push_back_with_reserve(),
        ),
        ("broken/short_list.csv", short_list_push_back()),
        ("broken/zero_list.csv", zero_list_push_back()),
        ("broken/inconsistent.csv", inconsistent()),
        ("broken/truncated.csv", truncated()),
    ]
}
