//! Normal CDF and Error Function
//!
//! The Gauss error function is evaluated with the Numerical Recipes rational
//! approximation of erfc (maximum absolute error about 1.2e-7), which is
//! plenty for two-tailed p-values at a 0.05 threshold. Large |x| underflow is
//! graceful: the exp(-x^2 - ...) factor goes to zero long before anything
//! overflows.

/// Gauss error function erf(x).
///
/// Odd (erf(-x) = -erf(x)), bounded in (-1, 1), erf(0) = 0.
pub fn erf(x: f64) -> f64 {
    let t = 1.0 / (1.0 + 0.5 * x.abs());
    let tau = t
        * (-x * x - 1.26551223
            + t * (1.00002368
                + t * (0.37409196
                    + t * (0.09678418
                        + t * (-0.18628806
                            + t * (0.27886807
                                + t * (-1.13520398
                                    + t * (1.48851587
                                        + t * (-0.82215223 + t * 0.17087277)))))))))
        .exp();
    if x >= 0.0 { 1.0 - tau } else { tau - 1.0 }
}

/// Standard normal CDF: 0.5 * (1 + erf(z / sqrt(2))).
pub fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / std::f64::consts::SQRT_2))
}

/// Two-tailed p-value of a statistic under the standard normal: 2 * (1 - cdf(|stat|)).
///
/// A statistic of 0 yields the maximal p-value of 1.
pub fn two_tailed_p(statistic: f64) -> f64 {
    (2.0 * (1.0 - normal_cdf(statistic.abs()))).clamp(0.0, 1.0)
}
