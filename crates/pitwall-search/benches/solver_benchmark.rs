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

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pitwall_model::race::{Race, RaceBuilder};
use pitwall_search::solver::StrategySolverBuilder;
use std::hint::black_box;

/// A three-compound race in the shape of a typical grand prix.
fn grand_prix(laps: u32) -> Race<i64> {
    let mut builder = RaceBuilder::<i64>::new(laps, 92_000, 21_500);
    builder.add_tyre_type("soft", 0, 18);
    builder.add_tyre_type("medium", 650, 9);
    builder.add_tyre_type("hard", 1_400, 4);
    builder.build()
}

fn bench_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver_benchmark");

    for laps in [20_u32, 30, 40] {
        let race = grand_prix(laps);
        let solver = StrategySolverBuilder::<i64>::new().build();

        for max_stops in [1_u32, 2] {
            group.bench_with_input(
                BenchmarkId::new(format!("{}laps", laps), max_stops),
                &max_stops,
                |b, &max_stops| {
                    b.iter(|| {
                        let outcome = solver.solve(black_box(&race), black_box(max_stops));
                        black_box(outcome)
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_solver);
criterion_main!(benches);
