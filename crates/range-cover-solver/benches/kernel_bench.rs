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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use range_cover_model::generator::{GenConfigBuilder, InstanceGenerator};
use range_cover_model::problem::CoverProblem;
use range_cover_solver::greedy::greedy_cover;
use range_cover_solver::kernel::CoverKernel;
use std::hint::black_box;

fn instance(n: usize, seed: u64) -> CoverProblem<i64> {
    let config = GenConfigBuilder::<i64>::new()
        .seed(seed)
        .build()
        .expect("default workload config is valid");
    InstanceGenerator::new(config).generate(n)
}

fn bench_kernel(c: &mut Criterion) {
    let mut seeds = ChaCha8Rng::seed_from_u64(7);
    let mut group = c.benchmark_group("cover_kernel");

    for &n in &[10_000usize, 100_000, 1_000_000] {
        let problem = instance(n, seeds.random());
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("serial", n), &problem, |b, p| {
            b.iter(|| {
                black_box(greedy_cover(
                    p.len(),
                    &|i| p.left(i),
                    &|i| p.right(i),
                ))
            })
        });

        group.bench_with_input(BenchmarkId::new("parallel", n), &problem, |b, p| {
            b.iter(|| {
                let mut kernel =
                    CoverKernel::new(p.len(), |i| p.left(i), |i| p.right(i));
                kernel.run();
                black_box(kernel.selection().len())
            })
        });
    }
    group.finish();
}

fn bench_phases(c: &mut Criterion) {
    let mut group = c.benchmark_group("cover_kernel_phases");
    let problem = instance(1_000_000, 11);

    group.bench_function("furthest", |b| {
        b.iter(|| {
            black_box(range_cover_solver::furthest::build_furthest(
                problem.len(),
                &|i| problem.left(i),
                &|i| problem.right(i),
            ))
        })
    });

    let furthest = range_cover_solver::furthest::build_furthest(
        problem.len(),
        &|i| problem.left(i),
        &|i| problem.right(i),
    );
    group.bench_function("build_chain", |b| {
        b.iter(|| {
            black_box(range_cover_solver::chain::build_chain(
                problem.len(),
                &furthest,
            ))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_kernel, bench_phases);
criterion_main!(benches);
