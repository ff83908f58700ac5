//! Criterion benchmarks for the refinement controllers.
//!
//! Uses seeded uniform random instances in a 1000 x 1000 square and
//! iteration caps so that runs do not depend on the wall clock.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use tsp_refine::construct::{nearest_neighbor, random_tour};
use tsp_refine::instance::Instance;
use tsp_refine::opt2::{TwoOptConfig, TwoOptRunner};
use tsp_refine::settings::Settings;
use tsp_refine::tabu::{TabuConfig, TabuRunner, TenurePolicy};
use tsp_refine::vns::{VnsConfig, VnsRunner};

fn random_instance(n: usize, seed: u64) -> Instance {
    let mut rng = u_numflow::random::create_rng(seed);
    let coords: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0)))
        .collect();
    Instance::from_coords(&coords).expect("benchmark instance has at least 3 nodes")
}

fn bench_two_opt(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_opt_descent");
    group.sample_size(10);

    for &n in &[50, 100, 200] {
        let inst = random_instance(n, 42);
        let mut rng = u_numflow::random::create_rng(42);
        let start = random_tour(&inst, &mut rng);
        let settings = Settings::default();
        let config = TwoOptConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &start, |b, s| {
            b.iter(|| {
                let result = TwoOptRunner::run(&inst, s.clone(), &settings, black_box(&config));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_tabu(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu_200_iters");
    group.sample_size(10);

    for &n in &[100, 200] {
        let inst = random_instance(n, 7);
        let start = nearest_neighbor(&inst, 0).expect("node 0 exists");
        let settings = Settings::default();
        for policy in [TenurePolicy::Constant, TenurePolicy::Triangular] {
            let config = TabuConfig::default()
                .with_policy(policy)
                .with_max_iterations(200);
            group.bench_with_input(
                BenchmarkId::new(policy.name(), n),
                &start,
                |b, s| {
                    b.iter(|| {
                        let result = TabuRunner::run(&inst, s.clone(), &settings, black_box(&config));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_vns(c: &mut Criterion) {
    let mut group = c.benchmark_group("vns_20_iters");
    group.sample_size(10);

    for &n in &[100, 200] {
        let inst = random_instance(n, 11);
        let start = nearest_neighbor(&inst, 0).expect("node 0 exists");
        let settings = Settings::default().with_seed(11);
        let config = VnsConfig::default().with_max_iterations(20);
        group.bench_with_input(BenchmarkId::from_parameter(n), &start, |b, s| {
            b.iter(|| {
                let result = VnsRunner::run(&inst, s.clone(), &settings, black_box(&config));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_two_opt, bench_tabu, bench_vns);
criterion_main!(benches);
