//! Configuration for finite-difference Greeks.

use crate::mc::ConfigError;

/// Default central-difference bump, applied in absolute terms to spot and volatility.
pub const DEFAULT_BUMP: f64 = 0.01;

/// How the bumped runs of a Greek source their random numbers.
///
/// - `Independent`: each of the up and down runs draws its own child seed,
///   so the difference quotient carries the noise of two unrelated samples
/// - `Common`: the up and down runs of one Greek share a child seed, so the
///   same normals drive both legs and most of the noise cancels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RandomNumberPolicy {
    /// Fresh draws for every bumped run.
    #[default]
    Independent,
    /// Common random numbers across the ± legs.
    Common,
}

impl RandomNumberPolicy {
    /// Short label used in logs and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            RandomNumberPolicy::Independent => "independent",
            RandomNumberPolicy::Common => "common",
        }
    }
}

impl std::fmt::Display for RandomNumberPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RandomNumberPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "independent" | "fresh" => Ok(RandomNumberPolicy::Independent),
            "common" | "crn" => Ok(RandomNumberPolicy::Common),
            other => Err(format!(
                "unknown random number policy '{}', expected independent or common",
                other
            )),
        }
    }
}

/// Settings for [`estimate_greeks`](super::estimate_greeks) and friends.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::greeks::{GreekConfig, RandomNumberPolicy};
///
/// let config = GreekConfig::default()
///     .with_bump(0.05)
///     .with_random_numbers(RandomNumberPolicy::Common)
///     .with_parallel(true);
/// assert!(config.validate().is_ok());
/// assert!(GreekConfig::default().with_bump(0.0).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreekConfig {
    /// Absolute bump ε for spot and volatility.
    pub bump: f64,
    /// Random number sharing between the ± legs.
    pub random_numbers: RandomNumberPolicy,
    /// Evaluate bumped runs on the rayon pool.
    pub parallel: bool,
}

impl Default for GreekConfig {
    fn default() -> Self {
        Self {
            bump: DEFAULT_BUMP,
            random_numbers: RandomNumberPolicy::Independent,
            parallel: false,
        }
    }
}

impl GreekConfig {
    /// Sets the bump size.
    #[inline]
    pub fn with_bump(mut self, bump: f64) -> Self {
        self.bump = bump;
        self
    }

    /// Sets the random number policy.
    #[inline]
    pub fn with_random_numbers(mut self, policy: RandomNumberPolicy) -> Self {
        self.random_numbers = policy;
        self
    }

    /// Enables or disables parallel evaluation.
    #[inline]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the bump.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidParameter` if the bump is not positive and finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.bump > 0.0) || !self.bump.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "bump",
                value: format!("{} must be positive and finite", self.bump),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GreekConfig::default();
        assert_eq!(config.bump, 0.01);
        assert_eq!(config.random_numbers, RandomNumberPolicy::Independent);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_bumps() {
        for bump in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            let err = GreekConfig::default().with_bump(bump).validate().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidParameter { name: "bump", .. }));
        }
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("crn".parse::<RandomNumberPolicy>(), Ok(RandomNumberPolicy::Common));
        assert_eq!(
            "Independent".parse::<RandomNumberPolicy>(),
            Ok(RandomNumberPolicy::Independent)
        );
        assert!("shared".parse::<RandomNumberPolicy>().is_err());
        assert_eq!(RandomNumberPolicy::Common.to_string(), "common");
    }
}
