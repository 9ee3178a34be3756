//! CLI configuration management
//!
//! Settings are layered, highest priority first:
//! 1. Command-line flags
//! 2. `MC_PRICER_*` environment variables
//! 3. TOML configuration file (`mc-pricer.toml` by default)
//! 4. Built-in defaults

use pricer_core::types::PricingError;
use pricer_models::instruments::{MarketObservation, OptionContract, OptionKind};
use pricer_pricing::greeks::{GreekConfig, RandomNumberPolicy, DEFAULT_BUMP};
use pricer_pricing::mc::{SamplingMethod, SimulationSpec, DEFAULT_PATHS, MAX_PATHS};
use pricer_pricing::rng::PricerRng;
use pricer_pricing::statistics::DEFAULT_CONFIDENCE_MULTIPLIER;
use pricer_pricing::valuation::ValuationSettings;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Default configuration file, read when present.
pub const DEFAULT_CONFIG_FILE: &str = "mc-pricer.toml";

/// Prefix of the environment variables read by [`CliConfig::apply_env`].
pub const ENV_PREFIX: &str = "MC_PRICER_";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable {name}={value}: {reason}")]
    EnvError {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Invalid setting '{field}': {reason}")]
    InvalidSetting { field: &'static str, reason: String },
}

/// Log levels accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

/// Pricer configuration.
///
/// Defaults reproduce the reference run: S₀ 100, K 105, T 1, r 0.05, a call
/// quoted at 7.2, 10,000 pseudorandom paths.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Spot price S₀
    pub spot: f64,
    /// Strike K
    pub strike: f64,
    /// Time to expiry in years
    pub expiry: f64,
    /// Continuously compounded risk-free rate
    pub rate: f64,
    /// Call or put
    #[serde(deserialize_with = "deserialize_from_str")]
    pub kind: OptionKind,
    /// Observed option premium
    pub market_price: f64,
    /// Number of simulated paths
    pub n_paths: usize,
    /// Sampling regime
    #[serde(deserialize_with = "deserialize_from_str")]
    pub sampling: SamplingMethod,
    /// Seed of the root generator; drawn from the OS when absent
    pub seed: Option<u64>,
    /// Interval multiplier z
    pub confidence_multiplier: f64,
    /// Finite-difference bump
    pub bump: f64,
    /// Random number sharing between Greek legs
    #[serde(deserialize_with = "deserialize_from_str")]
    pub random_numbers: RandomNumberPolicy,
    /// Run Greek legs on the rayon pool
    pub parallel: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            spot: 100.0,
            strike: 105.0,
            expiry: 1.0,
            rate: 0.05,
            kind: OptionKind::Call,
            market_price: 7.2,
            n_paths: DEFAULT_PATHS,
            sampling: SamplingMethod::Pseudorandom,
            seed: None,
            confidence_multiplier: DEFAULT_CONFIDENCE_MULTIPLIER,
            bump: DEFAULT_BUMP,
            random_numbers: RandomNumberPolicy::Independent,
            parallel: false,
        }
    }
}

/// Overrides collected from command-line flags
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub log_level: Option<String>,
    pub spot: Option<f64>,
    pub strike: Option<f64>,
    pub expiry: Option<f64>,
    pub rate: Option<f64>,
    pub kind: Option<OptionKind>,
    pub market_price: Option<f64>,
    pub n_paths: Option<usize>,
    pub sampling: Option<SamplingMethod>,
    pub seed: Option<u64>,
    pub confidence_multiplier: Option<f64>,
    pub bump: Option<f64>,
    pub random_numbers: Option<RandomNumberPolicy>,
    pub parallel: bool,
}

fn env_value<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let name = format!("{}{}", ENV_PREFIX, key);
    match lookup(&name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::EnvError {
                name,
                value,
                reason: e.to_string(),
            }),
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply `MC_PRICER_*` variables from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|name| std::env::var(name).ok())
    }

    /// Apply `MC_PRICER_*` variables using a custom lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = env_value(&lookup, "LOG_LEVEL")? {
            self.log_level = v;
        }
        if let Some(v) = env_value(&lookup, "SPOT")? {
            self.spot = v;
        }
        if let Some(v) = env_value(&lookup, "STRIKE")? {
            self.strike = v;
        }
        if let Some(v) = env_value(&lookup, "EXPIRY")? {
            self.expiry = v;
        }
        if let Some(v) = env_value(&lookup, "RATE")? {
            self.rate = v;
        }
        if let Some(v) = env_value(&lookup, "KIND")? {
            self.kind = v;
        }
        if let Some(v) = env_value(&lookup, "MARKET_PRICE")? {
            self.market_price = v;
        }
        if let Some(v) = env_value(&lookup, "PATHS")? {
            self.n_paths = v;
        }
        if let Some(v) = env_value(&lookup, "SAMPLING")? {
            self.sampling = v;
        }
        if let Some(v) = env_value(&lookup, "SEED")? {
            self.seed = Some(v);
        }
        if let Some(v) = env_value(&lookup, "CONFIDENCE_MULTIPLIER")? {
            self.confidence_multiplier = v;
        }
        if let Some(v) = env_value(&lookup, "BUMP")? {
            self.bump = v;
        }
        if let Some(v) = env_value(&lookup, "RANDOM_NUMBERS")? {
            self.random_numbers = v;
        }
        if let Some(v) = env_value(&lookup, "PARALLEL")? {
            self.parallel = v;
        }
        Ok(())
    }

    /// Merge with CLI flags (flags take precedence)
    pub fn merge_overrides(&mut self, overrides: &Overrides) -> Result<(), ConfigError> {
        if let Some(level) = &overrides.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(v) = overrides.spot {
            self.spot = v;
        }
        if let Some(v) = overrides.strike {
            self.strike = v;
        }
        if let Some(v) = overrides.expiry {
            self.expiry = v;
        }
        if let Some(v) = overrides.rate {
            self.rate = v;
        }
        if let Some(v) = overrides.kind {
            self.kind = v;
        }
        if let Some(v) = overrides.market_price {
            self.market_price = v;
        }
        if let Some(v) = overrides.n_paths {
            self.n_paths = v;
        }
        if let Some(v) = overrides.sampling {
            self.sampling = v;
        }
        if let Some(v) = overrides.seed {
            self.seed = Some(v);
        }
        if let Some(v) = overrides.confidence_multiplier {
            self.confidence_multiplier = v;
        }
        if let Some(v) = overrides.bump {
            self.bump = v;
        }
        if let Some(v) = overrides.random_numbers {
            self.random_numbers = v;
        }
        if overrides.parallel {
            self.parallel = true;
        }
        Ok(())
    }

    /// Validate settings that are not tied to a contract
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidSetting {
                field: "n_paths",
                reason: format!("{} is outside [1, {}]", self.n_paths, MAX_PATHS),
            });
        }
        if !(self.confidence_multiplier >= 0.0) || !self.confidence_multiplier.is_finite() {
            return Err(ConfigError::InvalidSetting {
                field: "confidence_multiplier",
                reason: format!("{} must be non-negative and finite", self.confidence_multiplier),
            });
        }
        if !(self.bump > 0.0) || !self.bump.is_finite() {
            return Err(ConfigError::InvalidSetting {
                field: "bump",
                reason: format!("{} must be positive and finite", self.bump),
            });
        }
        Ok(())
    }

    /// The configured contract
    pub fn contract(&self) -> Result<OptionContract, PricingError> {
        Ok(OptionContract::new(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.kind,
        )?)
    }

    /// The configured contract paired with the market price
    pub fn observation(&self) -> Result<MarketObservation, PricingError> {
        Ok(MarketObservation::new(self.market_price, self.contract()?)?)
    }

    /// Simulation spec at the given volatility
    pub fn spec(&self, volatility: f64) -> Result<SimulationSpec, PricingError> {
        Ok(SimulationSpec::new(self.n_paths, self.sampling, volatility)?)
    }

    /// Finite-difference settings
    pub fn greek_config(&self) -> GreekConfig {
        GreekConfig::default()
            .with_bump(self.bump)
            .with_random_numbers(self.random_numbers)
            .with_parallel(self.parallel)
    }

    /// Settings for the full calibrate-simulate-Greeks pipeline
    pub fn valuation_settings(&self) -> ValuationSettings {
        ValuationSettings {
            n_paths: self.n_paths,
            sampling: self.sampling,
            confidence_multiplier: self.confidence_multiplier,
            greeks: self.greek_config(),
            ..Default::default()
        }
    }

    /// Root generator, seeded from configuration or the OS
    pub fn rng(&self) -> PricerRng {
        self.seed
            .map(PricerRng::from_seed)
            .unwrap_or_else(PricerRng::from_entropy)
    }
}

/// Build configuration from all sources
///
/// An explicitly named file must exist; the default file is optional.
pub fn build_config(
    config_file: Option<&Path>,
    overrides: &Overrides,
) -> Result<CliConfig, ConfigError> {
    let mut config = match config_file {
        Some(path) => CliConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            CliConfig::from_file(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => CliConfig::default(),
    };

    config.apply_env()?;
    config.merge_overrides(overrides)?;
    config.validate()?;

    Ok(config)
}
