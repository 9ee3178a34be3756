//! Criterion benchmarks for the Monte Carlo engine.
//!
//! Benchmarks cover:
//! - Normal draws (antithetic pseudorandom vs. scrambled Sobol)
//! - Full pricing runs with varying path counts
//! - Finite-difference Greeks, sequential vs. rayon

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::instruments::{OptionContract, OptionKind};
use pricer_pricing::greeks::{estimate_greeks, GreekConfig, RandomNumberPolicy};
use pricer_pricing::mc::{antithetic_normals, sobol_normals, MonteCarloPricer, SamplingMethod, SimulationSpec};
use pricer_pricing::rng::PricerRng;

fn contract() -> OptionContract {
    OptionContract::new(100.0, 105.0, 1.0, 0.05, OptionKind::Call).unwrap()
}

/// Benchmark the two sources of standard normals.
fn bench_normal_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("normal_generation");

    for n in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("antithetic", n), &n, |b, &n| {
            let mut rng = PricerRng::from_seed(42);
            b.iter(|| black_box(antithetic_normals(n, &mut rng)));
        });
        group.bench_with_input(BenchmarkId::new("sobol", n), &n, |b, &n| {
            let mut rng = PricerRng::from_seed(42);
            b.iter(|| black_box(sobol_normals(n, &mut rng)));
        });
    }

    group.finish();
}

/// Benchmark a full simulate → payoff → interval run.
fn bench_mc_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("mc_pricing");
    group.sample_size(30);

    let contract = contract();
    for sampling in [SamplingMethod::Pseudorandom, SamplingMethod::QuasiRandom] {
        for n_paths in [1_000, 10_000, 100_000] {
            group.bench_with_input(
                BenchmarkId::new(sampling.as_str(), n_paths),
                &n_paths,
                |b, &n| {
                    let spec = SimulationSpec::new(n, sampling, 0.2).unwrap();
                    let pricer = MonteCarloPricer::new(spec);
                    let mut rng = PricerRng::from_seed(42);
                    b.iter(|| pricer.run(black_box(&contract), &mut rng).unwrap());
                },
            );
        }
    }

    group.finish();
}

/// Benchmark delta and vega, four bumped runs each iteration.
fn bench_greeks(c: &mut Criterion) {
    let mut group = c.benchmark_group("greeks");
    group.sample_size(20);

    let contract = contract();
    let spec = SimulationSpec::new(50_000, SamplingMethod::Pseudorandom, 0.2).unwrap();
    for parallel in [false, true] {
        let config = GreekConfig::default()
            .with_random_numbers(RandomNumberPolicy::Common)
            .with_parallel(parallel);
        let label = if parallel { "parallel" } else { "sequential" };
        group.bench_function(label, |b| {
            let mut rng = PricerRng::from_seed(7);
            b.iter(|| estimate_greeks(black_box(&contract), &spec, &config, &mut rng).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normal_generation, bench_mc_pricing, bench_greeks);
criterion_main!(benches);
