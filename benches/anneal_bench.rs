//! Criterion benchmarks for the knapsack annealer.
//!
//! Uses synthetic instances of increasing size to measure loop overhead
//! independent of any particular dataset.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use knapsack_anneal::knapsack::{Item, Knapsack};
use knapsack_anneal::sa::{SaConfig, SaRunner};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn synthetic_instance(n: usize) -> Knapsack {
    let mut rng = StdRng::seed_from_u64(7);
    let items: Vec<Item> = (0..n)
        .map(|_| Item::new(rng.random_range(1.0..100.0), rng.random_range(1.0..50.0)))
        .collect();
    // Half the total weight keeps roughly half of all candidates feasible.
    let capacity = items.iter().map(|item| item.weight).sum::<f64>() / 2.0;
    Knapsack::new(items, capacity)
}

fn bench_anneal(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_knapsack");
    group.sample_size(10);

    for &n in &[10, 50, 200] {
        let instance = synthetic_instance(n);
        let config = SaConfig::default()
            .with_max_iterations(10_000)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(instance, config),
            |b, (i, c)| {
                b.iter(|| {
                    let result = SaRunner::run(black_box(i), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_anneal);
criterion_main!(benches);
