//! Quasi-Monte Carlo low-discrepancy sequences.
//!
//! Provides a one-dimensional Sobol sequence with a random digital-shift
//! scramble. Terminal-price sampling needs a single normal draw per path,
//! so the first Sobol dimension (van der Corput in base 2) is sufficient.

/// 2^-52, the spacing of the output grid.
const INV_2_POW_52: f64 = 1.0 / 4_503_599_627_370_496.0;

/// Scrambled one-dimensional Sobol sequence.
///
/// Points are generated in Gray-code order (Antonov-Saleev), so each step
/// costs one XOR. The scramble is a digital shift: every raw point is XORed
/// with a fixed 64-bit mask derived from the seed, which preserves the
/// (0, m, 1)-net structure while randomising the point set.
///
/// Outputs are mapped to the midpoints of a 2^-52 grid, so they never reach
/// 0 or 1 and can be fed straight into an inverse normal CDF.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::SobolSequence;
///
/// let mut sobol = SobolSequence::new(42);
/// let mut buffer = vec![0.0; 8];
/// sobol.fill_uniform(&mut buffer);
///
/// // The first 2^k points hit every interval of width 2^-k exactly once.
/// let mut halves = [0usize; 2];
/// for &u in &buffer[..2] {
///     halves[(u * 2.0) as usize] += 1;
/// }
/// assert_eq!(halves, [1, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct SobolSequence {
    index: u64,
    state: u64,
    scramble: u64,
}

impl SobolSequence {
    /// Creates a scrambled sequence; the digital shift is derived from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            index: 0,
            state: 0,
            scramble: splitmix64(seed),
        }
    }

    /// Advances and returns the next coordinate.
    #[inline]
    pub fn next_value(&mut self) -> f64 {
        let value = to_unit_interval(self.state ^ self.scramble);
        self.index = self.index.wrapping_add(1);
        // Direction number j is 2^(63-j); flip the bit chosen by the Gray code.
        let c = self.index.trailing_zeros().min(63);
        self.state ^= 1_u64 << (63 - c);
        value
    }

    /// Fills `buffer` with consecutive points of the sequence.
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_value();
        }
    }
}

/// Map the top 52 bits onto the midpoint grid ((k + 1/2)·2^-52).
#[inline]
fn to_unit_interval(bits: u64) -> f64 {
    ((bits >> 12) as f64 + 0.5) * INV_2_POW_52
}

#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscrambled_van_der_corput_prefix() {
        let mut seq = SobolSequence::new(0);
        seq.scramble = 0;
        let half_cell = 0.5 * INV_2_POW_52;
        let expected = [0.0, 0.5, 0.75, 0.25, 0.375, 0.875, 0.625, 0.125];
        for &e in &expected {
            let u = seq.next_value();
            assert!((u - (e + half_cell)).abs() < 1e-15, "u = {}, expected {}", u, e);
        }
    }

    #[test]
    fn test_points_strictly_inside_unit_interval() {
        for seed in [0_u64, 1, 42, u64::MAX] {
            let mut seq = SobolSequence::new(seed);
            for _ in 0..4096 {
                let u = seq.next_value();
                assert!(u > 0.0 && u < 1.0, "u = {}", u);
            }
        }
        assert!(to_unit_interval(u64::MAX) < 1.0);
        assert!(to_unit_interval(0) > 0.0);
    }

    #[test]
    fn test_stratification_survives_scrambling() {
        let mut seq = SobolSequence::new(123);
        let mut buffer = vec![0.0; 1024];
        seq.fill_uniform(&mut buffer);
        let mut counts = [0usize; 1024];
        for &u in &buffer {
            counts[(u * 1024.0) as usize] += 1;
        }
        assert!(counts.iter().all(|&c| c == 1));
    }

    #[test]
    fn test_same_seed_reproducible() {
        let mut a = SobolSequence::new(99);
        let mut b = SobolSequence::new(99);
        for _ in 0..100 {
            assert_eq!(a.next_value().to_bits(), b.next_value().to_bits());
        }
    }

    #[test]
    fn test_different_seeds_shift_points() {
        let mut a = SobolSequence::new(1);
        let mut b = SobolSequence::new(2);
        assert_ne!(a.scramble, b.scramble);
        assert_ne!(a.next_value(), b.next_value());
    }
}
