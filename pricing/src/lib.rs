//! Closed-form Black-Scholes prices of European vanilla options.
//!
//! ```
//! use pricing::{price_call, price_put, OptionParameters};
//!
//! let op = OptionParameters::new(100.0, 0.05, 1.0, 100.0, 0.2);
//! let parity = price_call(&op) - price_put(&op);
//! assert!((parity - (op.spot() - op.strike() * op.discount_factor())).abs() < 1e-9);
//! ```

pub mod analytic;
pub mod common;

pub use analytic::black_scholes::{
    price_call, price_put, BlackScholesMerton, BlackScholesPricer, OptionPrice,
};
pub use analytic::normal::{standard_normal_cdf, CdfApproximation};
pub use common::config::PricingConfig;
pub use common::error::PricingError;
pub use common::models::{OptionParameters, OptionType};
