use probability::distribution::{Distribution, Gaussian};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 1 / sqrt(2 pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Polynomial approximation of the normal cdf, Abramowitz & Stegun 26.2.16 (Hastings).
/// https://en.wikipedia.org/wiki/Normal_distribution#Numerical_approximations_for_the_normal_cumulative_distribution_function
const P: f64 = 0.231_641_9;
const B1: f64 = 0.319_381_530;
const B2: f64 = -0.356_563_782;
const B3: f64 = 1.781_477_937;
const B4: f64 = -1.821_255_978;
const B5: f64 = 1.330_274_429;

/// Which approximation of the standard normal cdf to price with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CdfApproximation {
    /// Hastings polynomial, absolute error below 7.5e-8.
    #[default]
    Hastings,
    /// Hastings polynomial normalised with sqrt(2 * 3.1415) instead of sqrt(2 pi).
    /// Only useful to reproduce historical prices that were computed this way.
    HastingsTruncatedPi,
    /// Full precision Gaussian cdf.
    Exact,
}

impl CdfApproximation {
    pub fn cdf(&self, x: f64) -> f64 {
        match self {
            CdfApproximation::Hastings => hastings(x, FRAC_1_SQRT_2PI),
            CdfApproximation::HastingsTruncatedPi => {
                hastings(x, 1.0 / (2.0 * 3.1415_f64).powf(0.5))
            }
            CdfApproximation::Exact => exact_cdf(x),
        }
    }
}

/// Standard normal cdf N(x) using the Hastings approximation.
pub fn standard_normal_cdf(x: f64) -> f64 {
    hastings(x, FRAC_1_SQRT_2PI)
}

fn hastings(x: f64, density_norm: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x >= 0.0 {
        let k = 1.0 / (1.0 + P * x);
        let k_sum = k * (B1 + k * (B2 + k * (B3 + k * (B4 + B5 * k))));
        1.0 - density_norm * (-0.5 * x * x).exp() * k_sum
    } else {
        // N(x) = 1 - N(-x), -x is positive here
        1.0 - hastings(-x, density_norm)
    }
}

pub(crate) fn exact_cdf(x: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1e-6;

    const ALL: [CdfApproximation; 3] = [
        CdfApproximation::Hastings,
        CdfApproximation::HastingsTruncatedPi,
        CdfApproximation::Exact,
    ];

    #[test]
    fn normal_cdf() {
        let center_value = standard_normal_cdf(0.0);
        assert_approx_eq!(center_value, 0.5, TOLERANCE);

        let sigma_top = standard_normal_cdf(1.0); // mu + 1 sigma
        assert_approx_eq!(sigma_top, 0.8413, 0.0001); // table value for 1.0
        assert_approx_eq!(standard_normal_cdf(-1.96), 0.025, 0.0001);
    }

    #[test]
    fn hastings_close_to_exact() {
        let mut x = -8.0;
        while x <= 8.0 {
            assert_approx_eq!(standard_normal_cdf(x), exact_cdf(x), 1e-7);
            x += 0.05;
        }
    }

    #[test]
    fn truncated_pi_shifts_the_center() {
        let truncated = CdfApproximation::HastingsTruncatedPi.cdf(0.0);
        // 1 / sqrt(6.283) is larger than 1 / sqrt(2 pi), so more tail mass is subtracted
        assert!(truncated < standard_normal_cdf(0.0));
        assert_approx_eq!(truncated, 0.5, 1e-4);
    }

    #[test]
    fn limits() {
        for approx in ALL {
            assert_approx_eq!(approx.cdf(40.0), 1.0, 1e-12);
            assert_approx_eq!(approx.cdf(-40.0), 0.0, 1e-12);
        }
        assert_eq!(standard_normal_cdf(f64::INFINITY), 1.0);
        assert_eq!(standard_normal_cdf(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn nan_propagates() {
        assert!(standard_normal_cdf(f64::NAN).is_nan());
        assert!(CdfApproximation::HastingsTruncatedPi.cdf(f64::NAN).is_nan());
    }

    #[test]
    fn non_decreasing() {
        for approx in ALL {
            let mut prev = approx.cdf(-10.0);
            let mut x = -10.0;
            while x < 10.0 {
                x += 0.01;
                let curr = approx.cdf(x);
                assert!(curr >= prev, "{approx:?} decreases at {x}: {prev} > {curr}");
                prev = curr;
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn reflection(x in -10.0_f64..10.0) {
            prop_assume!(x != 0.0);
            prop_assert!((standard_normal_cdf(x) + standard_normal_cdf(-x) - 1.0).abs() < 1e-9);
        }

        #[test]
        fn bounded(x in -50.0_f64..50.0) {
            for approx in ALL {
                let p = approx.cdf(x);
                prop_assert!((0.0..=1.0).contains(&p));
            }
        }
    }
}
