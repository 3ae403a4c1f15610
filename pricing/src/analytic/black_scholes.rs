use tracing::{debug, trace};

use crate::analytic::normal::{standard_normal_cdf, CdfApproximation};
use crate::common::config::PricingConfig;
use crate::common::error::PricingError;
use crate::common::models::{OptionParameters, OptionType};

pub trait OptionPrice {
    type Params;
    fn put(params: &Self::Params) -> f64;
    fn call(params: &Self::Params) -> f64;
}

/// d1 and d2 of the Black-Scholes formula.
fn d1_d2(op: &OptionParameters) -> (f64, f64) {
    let sigma_sqrt_t = op.volatility() * op.maturity().sqrt();
    let d1 = ((op.spot() / op.strike()).ln()
        + (op.risk_free_rate() + op.volatility().powi(2) / 2.0) * op.maturity())
        / sigma_sqrt_t;
    let d2 = d1 - sigma_sqrt_t;
    (d1, d2)
}

fn call_with(op: &OptionParameters, cdf: impl Fn(f64) -> f64) -> f64 {
    let (d1, d2) = d1_d2(op);
    let price = op.spot() * cdf(d1) - op.strike() * op.discount_factor() * cdf(d2);
    trace!(d1, d2, price, "call");
    price
}

fn put_with(op: &OptionParameters, cdf: impl Fn(f64) -> f64) -> f64 {
    let (d1, d2) = d1_d2(op);
    let price = op.strike() * op.discount_factor() * cdf(-d2) - op.spot() * cdf(-d1);
    trace!(d1, d2, price, "put");
    price
}

/// Black-Scholes price of a European call.
///
/// Nothing is validated: a non-positive strike, spot, maturity or volatility yields NaN or
/// an infinite value instead of an error. Use [`BlackScholesPricer`] to reject such inputs.
pub fn price_call(op: &OptionParameters) -> f64 {
    call_with(op, standard_normal_cdf)
}

/// Black-Scholes price of a European put. Unvalidated, see [`price_call`].
pub fn price_put(op: &OptionParameters) -> f64 {
    put_with(op, standard_normal_cdf)
}

/// European Put and Call option prices for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl OptionPrice for BlackScholesMerton {
    type Params = OptionParameters;

    fn call(op: &OptionParameters) -> f64 {
        price_call(op)
    }

    fn put(op: &OptionParameters) -> f64 {
        price_put(op)
    }
}

/// Black-Scholes pricing with a configurable normal cdf and optional input validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholesPricer {
    config: PricingConfig,
}

impl BlackScholesPricer {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn call(&self, op: &OptionParameters) -> Result<f64, PricingError> {
        self.price(OptionType::Call, op)
    }

    pub fn put(&self, op: &OptionParameters) -> Result<f64, PricingError> {
        self.price(OptionType::Put, op)
    }

    pub fn price(
        &self,
        option_type: OptionType,
        op: &OptionParameters,
    ) -> Result<f64, PricingError> {
        if self.config.validate {
            if let Err(err) = op.validate() {
                debug!(?option_type, ?op, %err, "rejected option parameters");
                return Err(err);
            }
        }
        let cdf = |x| self.config.cdf.cdf(x);
        let price = match option_type {
            OptionType::Call => call_with(op, cdf),
            OptionType::Put => put_with(op, cdf),
        };
        Ok(price)
    }
}

impl From<CdfApproximation> for BlackScholesPricer {
    fn from(cdf: CdfApproximation) -> Self {
        Self::new(PricingConfig {
            cdf,
            ..PricingConfig::default()
        })
    }
}
