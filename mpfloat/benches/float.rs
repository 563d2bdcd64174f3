// Copyright Materialize, Inc. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository, or online at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use criterion::{criterion_group, criterion_main, Bencher, Criterion};
use rand::{thread_rng, Rng};

use mpfloat::{ops, Float, Rounding};

fn bench_format(f: &Float, b: &mut Bencher) {
    b.iter(|| f.to_string())
}

fn bench_parse(s: &str, b: &mut Bencher) {
    b.iter(|| s.parse::<Float>())
}

fn bench_fold(operands: &[Float], b: &mut Bencher) {
    b.iter_with_setup(Float::new, |mut acc| {
        acc.add_all(operands);
        acc
    })
}

fn bench_pairwise(operands: &[Float], b: &mut Bencher) {
    b.iter(|| {
        operands
            .windows(2)
            .map(|w| ops::add(&w[0], &w[1], Rounding::HalfEven))
            .count()
    })
}

pub fn bench_codec(c: &mut Criterion) {
    let mut rng = thread_rng();
    let f = Float::from(rng.gen::<f64>());
    c.bench_function("format", |b| bench_format(&f, b));

    let s = f.to_string();
    c.bench_function("parse", |b| bench_parse(&s, b));

    let wide = Float::from(rng.gen::<i64>());
    c.bench_function("format_integer", |b| bench_format(&wide, b));
}

pub fn bench_arithmetic(c: &mut Criterion) {
    let mut rng = thread_rng();
    let operands: Vec<Float> = (0..64).map(|_| Float::from(rng.gen::<f64>())).collect();
    c.bench_function("fold_add", |b| bench_fold(&operands, b));
    c.bench_function("pairwise_add", |b| bench_pairwise(&operands, b));
}

criterion_group!(benches, bench_codec, bench_arithmetic);
criterion_main!(benches);
