#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::common::error::PricingError;

/// Which side of a vanilla option to price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    Call,
    Put,
}

/// Contract and market inputs of a European vanilla option.
///
/// Values are stored exactly as given. [`OptionParameters::new`] accepts anything,
/// including values the pricing formulas cannot make sense of; use
/// [`OptionParameters::try_new`] or [`OptionParameters::validate`] to reject them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptionParameters {
    /// the strike or exercise price of the asset
    strike: f64,
    /// the annualized, continuously compounded risk-free interest rate
    risk_free_rate: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    maturity: f64,
    /// the asset's price at time t
    spot: f64,
    /// the annualized standard deviation of the asset's log returns
    volatility: f64,
}

impl Default for OptionParameters {
    /// At the money, one year to expiry, 5% rate and 20% volatility.
    fn default() -> Self {
        Self {
            strike: 100.0,
            risk_free_rate: 0.05,
            maturity: 1.0,
            spot: 100.0,
            volatility: 0.2,
        }
    }
}

impl OptionParameters {
    pub fn new(
        strike: f64,
        risk_free_rate: f64,
        maturity: f64,
        spot: f64,
        volatility: f64,
    ) -> Self {
        Self {
            strike,
            risk_free_rate,
            maturity,
            spot,
            volatility,
        }
    }

    /// Like [`OptionParameters::new`], but fails for inputs rejected by [`OptionParameters::validate`].
    pub fn try_new(
        strike: f64,
        risk_free_rate: f64,
        maturity: f64,
        spot: f64,
        volatility: f64,
    ) -> Result<Self, PricingError> {
        let params = Self::new(strike, risk_free_rate, maturity, spot, volatility);
        params.validate()?;
        Ok(params)
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    pub fn spot(&self) -> f64 {
        self.spot
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Checks that strike, spot, maturity and volatility are finite and strictly positive.
    /// The rate only has to be finite, negative rates are allowed.
    pub fn validate(&self) -> Result<(), PricingError> {
        let positive = [
            ("strike", self.strike),
            ("spot", self.spot),
            ("maturity", self.maturity),
            ("volatility", self.volatility),
        ];
        for (name, value) in positive {
            if !value.is_finite() {
                return Err(PricingError::non_finite(name, value));
            }
            if value <= 0.0 {
                return Err(PricingError::InvalidParameter {
                    name,
                    value,
                    reason: "must be strictly positive",
                });
            }
        }
        if !self.risk_free_rate.is_finite() {
            return Err(PricingError::non_finite("risk_free_rate", self.risk_free_rate));
        }
        Ok(())
    }

    /// exp(-r * T)
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.maturity).exp()
    }

    /// Payoff if the option were exercised at the current spot.
    pub fn intrinsic_value(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => (self.spot - self.strike).max(0.0),
            OptionType::Put => (self.strike - self.spot).max(0.0),
        }
    }
}
