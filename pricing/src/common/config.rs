#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::analytic::normal::CdfApproximation;
#[cfg(feature = "serde")]
use crate::common::error::PricingError;

/// Settings of a [`BlackScholesPricer`](crate::analytic::black_scholes::BlackScholesPricer).
///
/// ```toml
/// cdf = "hastings_truncated_pi"
/// validate = false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PricingConfig {
    /// normal CDF used for N(d1) and N(d2)
    pub cdf: CdfApproximation,
    /// reject parameters failing `OptionParameters::validate` before pricing
    pub validate: bool,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            cdf: CdfApproximation::default(),
            validate: true,
        }
    }
}

impl PricingConfig {
    /// Same formulas and CDF as the plain `price_call` / `price_put` functions.
    pub fn permissive() -> Self {
        Self {
            validate: false,
            ..Self::default()
        }
    }

    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> Result<Self, PricingError> {
        Ok(toml::from_str(s)?)
    }
}
