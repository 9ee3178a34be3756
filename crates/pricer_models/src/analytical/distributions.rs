//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function Φ, accurate to double
//!   precision through `statrs`' complementary error function
//! - `norm_ppf`: Quantile (inverse CDF) Φ⁻¹, used to map quasi-random
//!   uniforms onto normal variates

use statrs::function::erf::erfc;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Standard normal cumulative distribution function.
///
/// Φ(x) = ½·erfc(−x/√2). Evaluating through erfc keeps full relative
/// precision in the lower tail, where deep out-of-the-money prices live.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.0) - 0.8413447460685429).abs() < 1e-14);
/// assert!(norm_cdf(-8.0) > 0.0);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

// Acklam's rational approximation coefficients.
const PPF_A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_69e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];
const PPF_B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];
const PPF_C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];
const PPF_D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
];
const PPF_P_LOW: f64 = 0.024_25;
const PPF_P_HIGH: f64 = 1.0 - PPF_P_LOW;

/// Standard normal quantile function Φ⁻¹(p).
///
/// Acklam's rational approximation with relative error below 1.2e-9 on
/// the open interval (0, 1).
///
/// # Returns
/// - `-∞` for `p == 0`, `+∞` for `p == 1`
/// - `NaN` for `p` outside `[0, 1]` or NaN
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_ppf;
///
/// assert!(norm_ppf(0.5).abs() < 1e-12);
/// assert!((norm_ppf(0.975) - 1.959963984540054).abs() < 1e-8);
/// ```
pub fn norm_ppf(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }

    if p < PPF_P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        tail_quantile(q)
    } else if p <= PPF_P_HIGH {
        let q = p - 0.5;
        let r = q * q;
        let num = ((((PPF_A[0] * r + PPF_A[1]) * r + PPF_A[2]) * r + PPF_A[3]) * r + PPF_A[4])
            * r
            + PPF_A[5];
        let den =
            ((((PPF_B[0] * r + PPF_B[1]) * r + PPF_B[2]) * r + PPF_B[3]) * r + PPF_B[4]) * r + 1.0;
        num * q / den
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -tail_quantile(q)
    }
}

#[inline]
fn tail_quantile(q: f64) -> f64 {
    let num =
        ((((PPF_C[0] * q + PPF_C[1]) * q + PPF_C[2]) * q + PPF_C[3]) * q + PPF_C[4]) * q + PPF_C[5];
    let den = (((PPF_D[0] * q + PPF_D[1]) * q + PPF_D[2]) * q + PPF_D[3]) * q + 1.0;
    num / den
}
