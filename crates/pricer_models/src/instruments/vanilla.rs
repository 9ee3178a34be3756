//! European vanilla option definitions.
//!
//! This module provides the validated contract description consumed by the
//! calibration and simulation layers, together with the observed market
//! price used to calibrate volatility.

use super::error::InstrumentError;

/// Direction of a vanilla European option.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionKind;
///
/// assert_eq!(OptionKind::Call.payoff(110.0, 100.0), 10.0);
/// assert_eq!(OptionKind::Put.payoff(110.0, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Call option: max(S - K, 0)
    #[default]
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionKind {
    /// Short lowercase label ("call" or "put").
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OptionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionKind::Call),
            "put" | "p" => Ok(OptionKind::Put),
            other => Err(format!("unknown option kind '{}', expected call or put", other)),
        }
    }
}

/// Validated European option contract.
///
/// Immutable once constructed. Spot, strike and expiry are strictly positive
/// and finite; the risk-free rate may be any finite real (negative rates are
/// allowed).
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionContract, OptionKind};
///
/// let contract = OptionContract::new(100.0, 105.0, 1.0, 0.05, OptionKind::Call).unwrap();
/// assert_eq!(contract.strike(), 105.0);
///
/// assert!(OptionContract::new(0.0, 105.0, 1.0, 0.05, OptionKind::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawOptionContract"))]
pub struct OptionContract {
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    kind: OptionKind,
}

impl OptionContract {
    /// Creates a new contract with validation.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price S0 (must be positive)
    /// * `strike` - Strike price K (must be positive)
    /// * `expiry` - Time to expiry in years T (must be positive)
    /// * `rate` - Continuously compounded risk-free rate r (must be finite)
    /// * `kind` - Call or put
    ///
    /// # Errors
    /// Returns the `InstrumentError` variant naming the first rejected field.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        kind: OptionKind,
    ) -> Result<Self, InstrumentError> {
        if !(spot > 0.0) || !spot.is_finite() {
            return Err(InstrumentError::InvalidSpot { spot });
        }
        if !(strike > 0.0) || !strike.is_finite() {
            return Err(InstrumentError::InvalidStrike { strike });
        }
        if !(expiry > 0.0) || !expiry.is_finite() {
            return Err(InstrumentError::InvalidExpiry { expiry });
        }
        if !rate.is_finite() {
            return Err(InstrumentError::InvalidRate { rate });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            kind,
        })
    }

    /// Returns the spot price S0.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price K.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to expiry T in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the risk-free rate r.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Returns a copy with a different spot price, re-validated.
    ///
    /// # Errors
    /// `InstrumentError::InvalidSpot` if `spot` is non-positive or non-finite.
    pub fn with_spot(&self, spot: f64) -> Result<Self, InstrumentError> {
        Self::new(spot, self.strike, self.expiry, self.rate, self.kind)
    }
}

/// Observed market price of an option contract.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{MarketObservation, OptionContract, OptionKind};
///
/// let contract = OptionContract::new(100.0, 105.0, 1.0, 0.05, OptionKind::Call).unwrap();
/// let quote = MarketObservation::new(7.2, contract).unwrap();
/// assert_eq!(quote.premium(), 7.2);
///
/// assert!(MarketObservation::new(-1.0, contract).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMarketObservation"))]
pub struct MarketObservation {
    premium: f64,
    contract: OptionContract,
}

impl MarketObservation {
    /// Creates a new observation.
    ///
    /// # Errors
    /// `InstrumentError::InvalidPremium` for a negative or non-finite premium.
    pub fn new(premium: f64, contract: OptionContract) -> Result<Self, InstrumentError> {
        if !(premium >= 0.0) || !premium.is_finite() {
            return Err(InstrumentError::InvalidPremium { premium });
        }
        Ok(Self { premium, contract })
    }

    /// Returns the observed premium.
    #[inline]
    pub fn premium(&self) -> f64 {
        self.premium
    }

    /// Returns the observed contract.
    #[inline]
    pub fn contract(&self) -> &OptionContract {
        &self.contract
    }
}

/// Unvalidated wire form; deserialisation goes through `OptionContract::new`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOptionContract {
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    kind: OptionKind,
}

#[cfg(feature = "serde")]
impl TryFrom<RawOptionContract> for OptionContract {
    type Error = InstrumentError;

    fn try_from(raw: RawOptionContract) -> Result<Self, Self::Error> {
        Self::new(raw.spot, raw.strike, raw.expiry, raw.rate, raw.kind)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMarketObservation {
    premium: f64,
    contract: OptionContract,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMarketObservation> for MarketObservation {
    type Error = InstrumentError;

    fn try_from(raw: RawMarketObservation) -> Result<Self, Self::Error> {
        Self::new(raw.premium, raw.contract)
    }
}
