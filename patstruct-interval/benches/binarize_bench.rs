// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Binarization throughput for interval data.
//!
//! Run with: cargo bench -p patstruct-interval --bench binarize_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use patstruct_core::{BinarizeConfig, PatternAlgebra};
use patstruct_interval::{Interval, IntervalAlgebra, IntervalPattern};

fn generate_dataset(n_rows: usize, n_values: usize) -> Vec<IntervalPattern> {
    (0..n_rows)
        .map(|i| {
            let lower = ((i * 7) % n_values) as f64;
            let width = ((i * 13) % 17) as f64;
            Some(Interval::new(lower, lower + width))
        })
        .collect()
}

fn bench_binarize(c: &mut Criterion) {
    let algebra = IntervalAlgebra::new();
    let mut group = c.benchmark_group("binarize");

    for size in [100usize, 1_000, 10_000].iter() {
        let data = generate_dataset(*size, 200);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("sequential", size), &data, |b, data| {
            let config = BinarizeConfig::sequential();
            b.iter(|| algebra.binarize_with(black_box(data), &config).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &data, |b, data| {
            let config = BinarizeConfig::default().with_parallel_row_threshold(0);
            b.iter(|| algebra.binarize_with(black_box(data), &config).unwrap());
        });
    }

    group.finish();
}

fn bench_attribute_count(c: &mut Criterion) {
    let algebra = IntervalAlgebra::new();
    let data = generate_dataset(10_000, 500);

    c.bench_function("n_bin_attributes_closed_form", |b| {
        b.iter(|| algebra.n_bin_attributes(black_box(&data)).unwrap());
    });
    c.bench_function("n_bin_attributes_enumerated", |b| {
        b.iter(|| algebra.iter_bin_attributes(black_box(&data)).unwrap().count());
    });
}

criterion_group!(benches, bench_binarize, bench_attribute_count);
criterion_main!(benches);
