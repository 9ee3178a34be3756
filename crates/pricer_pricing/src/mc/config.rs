//! Monte Carlo simulation configuration.
//!
//! This module provides [`SimulationSpec`] and its builder, describing how
//! many terminal prices to draw, which sampling regime to use, and the
//! volatility driving the simulated asset.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Default number of simulation paths.
pub const DEFAULT_PATHS: usize = 10_000;

/// Source of the standard normal draws.
///
/// - `Pseudorandom`: `StdRng` normals with antithetic pairing
/// - `QuasiRandom`: Scrambled Sobol points through the inverse normal CDF
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SamplingMethod {
    /// Pseudorandom normals with antithetic variates.
    #[default]
    Pseudorandom,
    /// Scrambled Sobol quasi-random sampling.
    QuasiRandom,
}

impl SamplingMethod {
    /// Short label used in logs and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SamplingMethod::Pseudorandom => "pseudorandom",
            SamplingMethod::QuasiRandom => "quasi_random",
        }
    }
}

impl std::fmt::Display for SamplingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SamplingMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "pseudorandom" | "pseudo" | "antithetic" => Ok(SamplingMethod::Pseudorandom),
            "quasi_random" | "quasirandom" | "quasi" | "sobol" => Ok(SamplingMethod::QuasiRandom),
            other => Err(format!(
                "unknown sampling method '{}', expected pseudorandom or sobol",
                other
            )),
        }
    }
}

/// Validated simulation request.
///
/// Immutable once built. Use [`SimulationSpec::builder`] or
/// [`SimulationSpec::new`].
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{SamplingMethod, SimulationSpec};
///
/// let spec = SimulationSpec::builder()
///     .n_paths(50_000)
///     .sampling(SamplingMethod::QuasiRandom)
///     .volatility(0.2)
///     .build()
///     .expect("valid spec");
///
/// assert_eq!(spec.n_paths(), 50_000);
/// assert!(SimulationSpec::new(0, SamplingMethod::Pseudorandom, 0.2).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSimulationSpec"))]
pub struct SimulationSpec {
    n_paths: usize,
    sampling: SamplingMethod,
    volatility: f64,
}

impl SimulationSpec {
    /// Creates a validated spec.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidPathCount` if `n_paths` is 0 or above [`MAX_PATHS`]
    /// - `ConfigError::InvalidVolatility` if `volatility` is not positive and finite
    pub fn new(
        n_paths: usize,
        sampling: SamplingMethod,
        volatility: f64,
    ) -> Result<Self, ConfigError> {
        let spec = Self {
            n_paths,
            sampling,
            volatility,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Creates a new builder.
    #[inline]
    pub fn builder() -> SimulationSpecBuilder {
        SimulationSpecBuilder::default()
    }

    /// Returns the number of simulated terminal prices.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the sampling regime.
    #[inline]
    pub fn sampling(&self) -> SamplingMethod {
        self.sampling
    }

    /// Returns the volatility σ.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Copy with a different volatility, re-validated.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self, ConfigError> {
        Self::new(self.n_paths, self.sampling, volatility)
    }

    /// Copy with a different path count, re-validated.
    pub fn with_paths(&self, n_paths: usize) -> Result<Self, ConfigError> {
        Self::new(n_paths, self.sampling, self.volatility)
    }

    /// Validates the spec.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if !(self.volatility > 0.0) || !self.volatility.is_finite() {
            return Err(ConfigError::InvalidVolatility(self.volatility));
        }
        Ok(())
    }
}

/// Unvalidated wire form; deserialisation goes through `SimulationSpec::new`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSimulationSpec {
    n_paths: usize,
    sampling: SamplingMethod,
    volatility: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSimulationSpec> for SimulationSpec {
    type Error = ConfigError;

    fn try_from(raw: RawSimulationSpec) -> Result<Self, Self::Error> {
        Self::new(raw.n_paths, raw.sampling, raw.volatility)
    }
}

/// Builder for [`SimulationSpec`].
///
/// `n_paths` defaults to [`DEFAULT_PATHS`] and sampling to pseudorandom;
/// the volatility must be set.
#[derive(Clone, Debug, Default)]
pub struct SimulationSpecBuilder {
    n_paths: Option<usize>,
    sampling: SamplingMethod,
    volatility: Option<f64>,
}

impl SimulationSpecBuilder {
    /// Sets the number of simulation paths.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the sampling regime.
    #[inline]
    pub fn sampling(mut self, sampling: SamplingMethod) -> Self {
        self.sampling = sampling;
        self
    }

    /// Sets the volatility.
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Builds the spec.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the volatility is missing or any value is invalid.
    pub fn build(self) -> Result<SimulationSpec, ConfigError> {
        let volatility = self.volatility.ok_or(ConfigError::InvalidParameter {
            name: "volatility",
            value: "must be specified".to_string(),
        })?;

        SimulationSpec::new(
            self.n_paths.unwrap_or(DEFAULT_PATHS),
            self.sampling,
            volatility,
        )
    }
}
