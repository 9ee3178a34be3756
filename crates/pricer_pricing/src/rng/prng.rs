//! Pseudo-random number generator wrapper for Monte Carlo simulations.
//!
//! This module provides [`PricerRng`], a seeded PRNG wrapper that fills
//! normal buffers and hands out child seeds reproducibly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Monte Carlo simulation random number generator.
///
/// Provides seeded, reproducible batch generation of standard normal
/// variates, plus child seeds for derived streams. All entropy used
/// by the simulator is drawn from an explicit `&mut PricerRng`, so two runs
/// started from the same seed produce bit-identical results.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::PricerRng;
///
/// let mut rng = PricerRng::from_seed(42);
///
/// // Batch generation (zero allocation)
/// let mut buffer = vec![0.0; 100];
/// rng.fill_normal(&mut buffer);
///
/// // Child stream for an independent consumer
/// let child = rng.fork();
/// assert_ne!(child.seed(), 42);
/// ```
#[derive(Debug, Clone)]
pub struct PricerRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl PricerRng {
    /// Creates a new RNG instance initialised with the given seed.
    ///
    /// The same seed will always produce the same sequence of random numbers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::rng::PricerRng;
    ///
    /// let mut rng1 = PricerRng::from_seed(12345);
    /// let mut rng2 = PricerRng::from_seed(12345);
    ///
    /// assert_eq!(rng1.next_seed(), rng2.next_seed());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates an RNG seeded from operating-system entropy.
    ///
    /// The chosen seed is still recorded and available via [`seed`](Self::seed),
    /// so an unseeded run can be replayed.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random::<u64>())
    }

    /// Returns the seed used for initialisation.
    ///
    /// ```rust
    /// use pricer_pricing::rng::PricerRng;
    ///
    /// let rng = PricerRng::from_seed(42);
    /// assert_eq!(rng.seed(), 42);
    /// ```
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws a fresh 64-bit seed from this stream.
    ///
    /// Used to derive independent child streams (per bumped Greek run, per
    /// convergence rung) and the Sobol scramble, keeping every consumer
    /// reproducible from the parent seed alone.
    #[inline]
    pub fn next_seed(&mut self) -> u64 {
        self.inner.gen()
    }

    /// Derives a child generator seeded from [`next_seed`](Self::next_seed).
    ///
    /// ```rust
    /// use pricer_pricing::rng::PricerRng;
    ///
    /// let mut parent_a = PricerRng::from_seed(7);
    /// let mut parent_b = PricerRng::from_seed(7);
    /// assert_eq!(parent_a.fork().seed(), parent_b.fork().seed());
    /// ```
    #[inline]
    pub fn fork(&mut self) -> Self {
        Self::from_seed(self.next_seed())
    }

    /// Fills the buffer with standard normal (mean=0, std=1) variates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::rng::PricerRng;
    ///
    /// let mut rng = PricerRng::from_seed(42);
    /// let mut buffer = vec![0.0; 1000];
    /// rng.fill_normal(&mut buffer);
    /// assert!(buffer.iter().all(|z| z.is_finite()));
    /// ```
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}
