// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Size-sweep benchmark for the parallel cover kernel.
//!
//! For each problem size (positive integers given on the command line, or
//! a default sweep) the driver generates a seeded instance, times the
//! serial greedy and the parallel kernel with its per-phase breakdown,
//! checks that both selections agree bit-for-bit and form a minimal
//! cover, and appends a row to a JSON report.

use range_cover_model::generator::{GenConfigBuilder, InstanceGenerator};
use range_cover_model::problem::CoverProblem;
use range_cover_solver::greedy::greedy_cover;
use range_cover_solver::kernel::CoverKernel;
use range_cover_solver::par::num_workers;
use serde::Serialize;
use std::time::{Duration, Instant};
use std::{env, fs::File, io::BufWriter, process::ExitCode};
use tracing_subscriber::EnvFilter;

const REPORT_PATH: &str = "cover-bench-report.json";
const DEFAULT_SIZES: [usize; 5] = [1_000, 10_000, 100_000, 1_000_000, 10_000_000];

#[derive(Debug, Clone, Serialize)]
struct RunResult {
    n: usize,
    seed: u64,
    selected: usize,
    serial_ms: f64,
    parallel_total_ms: f64,
    furthest_ms: f64,
    build_chain_ms: f64,
    scan_ms: f64,
    extract_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
struct BenchmarkReport {
    description: String,
    threads: usize,
    runs: Vec<RunResult>,
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[inline]
fn ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1e3
}

fn generate(n: usize, seed: u64) -> CoverProblem<i64> {
    let config = GenConfigBuilder::<i64>::new()
        .seed(seed)
        .build()
        .expect("default workload config is valid");
    InstanceGenerator::new(config).generate(n)
}

fn run_size(n: usize, seed: u64) -> RunResult {
    tracing::info!(n, seed, "generating instance");
    let problem = generate(n, seed);

    let serial_start = Instant::now();
    let serial = greedy_cover(problem.len(), &|i| problem.left(i), &|i| problem.right(i));
    let serial_elapsed = serial_start.elapsed();

    let mut kernel = CoverKernel::new(
        problem.len(),
        |i| problem.left(i),
        |i| problem.right(i),
    );
    let timings = kernel.run_timed();

    assert_eq!(
        kernel.selection(),
        &serial[..],
        "parallel selection diverged from serial greedy (n = {n})"
    );
    let selection = kernel.into_selection();
    assert!(selection.verify_cover(&problem), "selection is not a cover");
    assert!(selection.verify_minimal(&problem), "selection is not minimal");

    let result = RunResult {
        n,
        seed,
        selected: selection.selected_count(),
        serial_ms: ms(serial_elapsed),
        parallel_total_ms: ms(timings.total),
        furthest_ms: ms(timings.furthest),
        build_chain_ms: ms(timings.build_chain),
        scan_ms: ms(timings.scan),
        extract_ms: ms(timings.extract),
    };
    tracing::info!(
        n,
        selected = result.selected,
        serial_ms = result.serial_ms,
        parallel_ms = result.parallel_total_ms,
        "run finished"
    );
    result
}

fn parse_sizes() -> Result<Vec<usize>, String> {
    let mut sizes = Vec::new();
    for arg in env::args().skip(1) {
        match arg.parse::<usize>() {
            Ok(v) if v > 0 => sizes.push(v),
            _ => return Err(arg),
        }
    }
    if sizes.is_empty() {
        sizes.extend_from_slice(&DEFAULT_SIZES);
    }
    Ok(sizes)
}

fn main() -> ExitCode {
    enable_tracing();

    let sizes = match parse_sizes() {
        Ok(sizes) => sizes,
        Err(arg) => {
            tracing::error!(%arg, "problem sizes must be positive integers");
            return ExitCode::FAILURE;
        }
    };

    let threads = num_workers();
    tracing::info!(threads, ?sizes, "starting sweep");

    let runs: Vec<RunResult> = sizes
        .iter()
        .enumerate()
        .map(|(idx, &n)| run_size(n, 42 + idx as u64))
        .collect();

    let report = BenchmarkReport {
        description: "serial greedy vs parallel kernel, per-phase breakdown".to_string(),
        threads,
        runs,
    };

    let file = File::create(REPORT_PATH).expect("create report file");
    serde_json::to_writer_pretty(BufWriter::new(file), &report).expect("write report");
    tracing::info!(path = REPORT_PATH, "report written");

    ExitCode::SUCCESS
}
