use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[cfg(feature = "serde")]
    #[error("invalid pricing config: {0}")]
    Config(#[from] toml::de::Error),
}

impl PricingError {
    pub(crate) fn non_finite(name: &'static str, value: f64) -> Self {
        PricingError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        }
    }
}
