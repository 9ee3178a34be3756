//! Terminal price generation for European payoffs.
//!
//! A European payoff depends only on S(T), so each path is a single draw
//! from the exact lognormal solution of GBM:
//!
//! ```text
//! S(T) = S₀ × exp((r - σ²/2)T + σ√T × Z),   Z ~ N(0, 1)
//! ```
//!
//! The normals `Z` come either from antithetic pseudorandom pairs or from a
//! scrambled Sobol sequence mapped through the inverse normal CDF.

use pricer_models::analytical::norm_ppf;
use pricer_models::instruments::OptionContract;

use super::config::{SamplingMethod, SimulationSpec};
use crate::rng::{PricerRng, SobolSequence};

/// Parameters for Geometric Brownian Motion under the risk-neutral measure.
///
/// # Model
///
/// ```text
/// dS = r S dt + σ S dW
/// ```
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.05, 0.2, 1.0);
/// // A zero shock grows the spot at (r - σ²/2)T.
/// assert!((params.terminal_price(0.0) - 100.0 * 0.03_f64.exp()).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Risk-free rate (r) - annualised.
    pub rate: f64,
    /// Volatility (σ) - annualised.
    pub volatility: f64,
    /// Time to maturity (T) - in years.
    pub maturity: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    #[inline]
    pub fn new(spot: f64, rate: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            rate,
            volatility,
            maturity,
        }
    }

    /// Dynamics for a contract under the spec's volatility.
    #[inline]
    pub fn from_contract(contract: &OptionContract, spec: &SimulationSpec) -> Self {
        Self::new(
            contract.spot(),
            contract.rate(),
            spec.volatility(),
            contract.expiry(),
        )
    }

    /// Log-space drift over the horizon, (r - σ²/2)T.
    #[inline]
    pub fn drift(&self) -> f64 {
        (self.rate - 0.5 * self.volatility * self.volatility) * self.maturity
    }

    /// Log-space diffusion scale, σ√T.
    #[inline]
    pub fn diffusion(&self) -> f64 {
        self.volatility * self.maturity.sqrt()
    }

    /// S(T) for a single standard normal shock.
    #[inline]
    pub fn terminal_price(&self, z: f64) -> f64 {
        self.spot * (self.drift() + self.diffusion() * z).exp()
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.05,
            volatility: 0.2,
            maturity: 1.0,
        }
    }
}

/// `n` antithetic standard normals.
///
/// Draws ⌈n/2⌉ normals, appends their negations, and truncates to exactly
/// `n`. For even `n` the sample mean is zero up to rounding.
///
/// ```rust
/// use pricer_pricing::mc::antithetic_normals;
/// use pricer_pricing::rng::PricerRng;
///
/// let z = antithetic_normals(4, &mut PricerRng::from_seed(1));
/// assert_eq!(z[0], -z[2]);
/// assert_eq!(z[1], -z[3]);
/// ```
pub fn antithetic_normals(n: usize, rng: &mut PricerRng) -> Vec<f64> {
    let half = n.div_ceil(2);
    let mut normals = vec![0.0; half];
    rng.fill_normal(&mut normals);
    normals.reserve(half);
    for i in 0..half {
        normals.push(-normals[i]);
    }
    normals.truncate(n);
    normals
}

/// `n` quasi-random standard normals from a scrambled Sobol sequence.
///
/// The digital-shift seed is drawn from `rng`, so a fixed parent seed
/// reproduces the same point set.
pub fn sobol_normals(n: usize, rng: &mut PricerRng) -> Vec<f64> {
    let mut sobol = SobolSequence::new(rng.next_seed());
    let mut normals = vec![0.0; n];
    sobol.fill_uniform(&mut normals);
    for value in normals.iter_mut() {
        *value = norm_ppf(*value);
    }
    normals
}

/// Simulates `spec.n_paths()` terminal prices for `contract`.
///
/// Output length is exactly `n_paths`; every price is strictly positive.
/// Identical contract, spec and RNG state give bit-identical output.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{OptionContract, OptionKind};
/// use pricer_pricing::mc::{simulate_terminal_prices, SamplingMethod, SimulationSpec};
/// use pricer_pricing::rng::PricerRng;
///
/// let contract = OptionContract::new(100.0, 105.0, 1.0, 0.05, OptionKind::Call).unwrap();
/// let spec = SimulationSpec::new(1_001, SamplingMethod::Pseudorandom, 0.2).unwrap();
///
/// let prices = simulate_terminal_prices(&contract, &spec, &mut PricerRng::from_seed(42));
/// assert_eq!(prices.len(), 1_001);
/// assert!(prices.iter().all(|&s| s > 0.0));
/// ```
pub fn simulate_terminal_prices(
    contract: &OptionContract,
    spec: &SimulationSpec,
    rng: &mut PricerRng,
) -> Vec<f64> {
    let params = GbmParams::from_contract(contract, spec);
    let n = spec.n_paths();

    let normals = match spec.sampling() {
        SamplingMethod::Pseudorandom => antithetic_normals(n, rng),
        SamplingMethod::QuasiRandom => sobol_normals(n, rng),
    };

    let drift = params.drift();
    let diffusion = params.diffusion();
    let terminal: Vec<f64> = normals
        .iter()
        .map(|&z| params.spot * (drift + diffusion * z).exp())
        .collect();

    tracing::trace!(
        n_paths = n,
        sampling = %spec.sampling(),
        volatility = spec.volatility(),
        "simulated terminal prices"
    );

    terminal
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_models::instruments::OptionKind;

    fn contract() -> OptionContract {
        OptionContract::new(100.0, 105.0, 1.0, 0.05, OptionKind::Call).unwrap()
    }

    fn spec(n: usize, sampling: SamplingMethod) -> SimulationSpec {
        SimulationSpec::new(n, sampling, 0.2).unwrap()
    }

    #[test]
    fn test_gbm_params_from_contract() {
        let params = GbmParams::from_contract(&contract(), &spec(10, SamplingMethod::Pseudorandom));
        assert_eq!(params, GbmParams::default());
        assert_relative_eq!(params.drift(), 0.03, epsilon = 1e-15);
        assert_relative_eq!(params.diffusion(), 0.2, epsilon = 1e-15);
    }

    #[test]
    fn test_antithetic_symmetry_even() {
        let mut rng = PricerRng::from_seed(42);
        let z = antithetic_normals(1000, &mut rng);
        assert_eq!(z.len(), 1000);
        for i in 0..500 {
            assert_eq!(z[i], -z[i + 500]);
        }
        let mean = z.iter().sum::<f64>() / z.len() as f64;
        assert!(mean.abs() < 1e-12);
    }

    #[test]
    fn test_antithetic_odd_length() {
        let mut rng = PricerRng::from_seed(7);
        let z = antithetic_normals(5, &mut rng);
        assert_eq!(z.len(), 5);
        assert_eq!(z[0], -z[3]);
        assert_eq!(z[1], -z[4]);
    }

    #[test]
    fn test_antithetic_single_and_empty() {
        let mut rng = PricerRng::from_seed(7);
        assert_eq!(antithetic_normals(1, &mut rng).len(), 1);
        assert!(antithetic_normals(0, &mut rng).is_empty());
    }

    #[test]
    fn test_antithetic_terminal_prices_pair_up() {
        // ln(ST_i / S0) + ln(ST_{i+n/2} / S0) = 2(r - σ²/2)T
        let c = contract();
        let prices = simulate_terminal_prices(
            &c,
            &spec(200, SamplingMethod::Pseudorandom),
            &mut PricerRng::from_seed(3),
        );
        for i in 0..100 {
            let sum = (prices[i] / 100.0).ln() + (prices[i + 100] / 100.0).ln();
            assert_relative_eq!(sum, 0.06, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sobol_normals_are_balanced() {
        let mut rng = PricerRng::from_seed(42);
        let z = sobol_normals(4096, &mut rng);
        assert_eq!(z.len(), 4096);
        assert!(z.iter().all(|v| v.is_finite()));
        let mean = z.iter().sum::<f64>() / z.len() as f64;
        let var = z.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (z.len() as f64 - 1.0);
        assert!(mean.abs() < 5e-3, "mean = {}", mean);
        assert!((var - 1.0).abs() < 2e-2, "variance = {}", var);
    }

    #[test]
    fn test_sobol_draws_one_seed_from_parent() {
        let mut rng = PricerRng::from_seed(9);
        sobol_normals(10, &mut rng);
        let mut replay = PricerRng::from_seed(9);
        replay.next_seed();
        assert_eq!(rng.next_seed(), replay.next_seed());
    }

    #[test]
    fn test_terminal_prices_positive_and_sized() {
        for sampling in [SamplingMethod::Pseudorandom, SamplingMethod::QuasiRandom] {
            for n in [1, 2, 3, 1000] {
                let prices =
                    simulate_terminal_prices(&contract(), &spec(n, sampling), &mut PricerRng::from_seed(1));
                assert_eq!(prices.len(), n);
                assert!(prices.iter().all(|&s| s > 0.0 && s.is_finite()));
            }
        }
    }

    #[test]
    fn test_same_seed_bit_identical() {
        for sampling in [SamplingMethod::Pseudorandom, SamplingMethod::QuasiRandom] {
            let a = simulate_terminal_prices(&contract(), &spec(512, sampling), &mut PricerRng::from_seed(77));
            let b = simulate_terminal_prices(&contract(), &spec(512, sampling), &mut PricerRng::from_seed(77));
            let a_bits: Vec<u64> = a.iter().map(|x| x.to_bits()).collect();
            let b_bits: Vec<u64> = b.iter().map(|x| x.to_bits()).collect();
            assert_eq!(a_bits, b_bits);
        }
    }

    #[test]
    fn test_risk_neutral_forward() {
        // E[S(T)] = S₀·e^{rT}
        let prices = simulate_terminal_prices(
            &contract(),
            &spec(200_000, SamplingMethod::Pseudorandom),
            &mut PricerRng::from_seed(2024),
        );
        let mean = prices.iter().sum::<f64>() / prices.len() as f64;
        assert_relative_eq!(mean, 100.0 * 0.05_f64.exp(), max_relative = 5e-3);
    }
}
