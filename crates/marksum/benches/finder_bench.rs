//! Criterion benchmarks for the combination finder.
//! Focus sizes: n in {8, 12, 16, 20} with planted targets.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use marksum::finder::{validate, Marks};
use marksum::instances::{draw_instance, ElementCount, InstanceCfg, ReplayToken, TargetChoice};
use marksum::prelude::find_combinations;

fn instance_cfg(n: usize) -> InstanceCfg {
    InstanceCfg {
        element_count: ElementCount::Fixed(n),
        value_max: 1000,
        target: TargetChoice::Planted,
    }
}

fn bench_finder(c: &mut Criterion) {
    let mut group = c.benchmark_group("finder");
    for &n in &[8usize, 12, 16, 20] {
        group.bench_with_input(BenchmarkId::new("marks_build", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let inst = draw_instance(instance_cfg(n), ReplayToken { seed: 43, index: 0 });
                    validate(inst.target, &inst.elements).unwrap()
                },
                |(target, values)| {
                    let _marks = Marks::build(target, &values);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("find_combinations", n), &n, |b, &n| {
            b.iter_batched(
                || draw_instance(instance_cfg(n), ReplayToken { seed: 44, index: 0 }),
                |inst| {
                    let _res = find_combinations(inst.target, &inst.elements).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_finder);
criterion_main!(benches);
