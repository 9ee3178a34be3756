//! Confidence interval width shrinks as 1/√N.

use pricer_models::instruments::{OptionContract, OptionKind};
use pricer_pricing::analysis::{convergence_profile, DEFAULT_CONVERGENCE_LADDER};
use pricer_pricing::mc::{run_simulation, SamplingMethod, SimulationSpec};
use pricer_pricing::rng::PricerRng;

fn contract() -> OptionContract {
    OptionContract::new(100.0, 105.0, 1.0, 0.05, OptionKind::Call).unwrap()
}

#[test]
fn test_interval_width_thousand_vs_million_paths() {
    for sampling in [SamplingMethod::Pseudorandom, SamplingMethod::QuasiRandom] {
        let small = SimulationSpec::new(1_000, sampling, 0.2).unwrap();
        let large = SimulationSpec::new(1_000_000, sampling, 0.2).unwrap();

        let small = run_simulation(&contract(), &small, &mut PricerRng::from_seed(42)).unwrap();
        let large = run_simulation(&contract(), &large, &mut PricerRng::from_seed(42)).unwrap();

        let small_width = small.confidence_interval.width();
        let large_width = large.confidence_interval.width();

        // √(10⁶ / 10³) ≈ 31.6
        let ratio = small_width / large_width;
        assert!(
            ratio > 20.0 && ratio < 45.0,
            "{}: width ratio {} (N=1e3 width {}, N=1e6 width {})",
            sampling,
            ratio,
            small_width,
            large_width
        );
        assert!((large.price - 8.0214).abs() < 3.0 * large_width);
    }
}

#[test]
fn test_default_ladder_profile() {
    let spec = SimulationSpec::new(1, SamplingMethod::Pseudorandom, 0.2).unwrap();
    let profile = convergence_profile(
        &contract(),
        &spec,
        &DEFAULT_CONVERGENCE_LADDER,
        &mut PricerRng::from_seed(2024),
    )
    .unwrap();

    assert_eq!(profile.len(), DEFAULT_CONVERGENCE_LADDER.len());
    let first = profile.first().unwrap();
    let last = profile.last().unwrap();
    assert_eq!(last.n_paths, 1_000_000);
    assert!(first.confidence_interval.width() > 50.0 * last.confidence_interval.width());
    assert!((last.price - 8.0214).abs() < 0.05);
}
