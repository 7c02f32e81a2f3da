//! Hypothesis-Test Statistics
//!
//! The five test-statistic formulas. Each is a stateless pure function over
//! borrowed samples plus scalar parameters; preconditions are checked up
//! front and surfaced as [`StatsError`] values, never as silent defaults.
//!
//! None of these decide significance: converting a statistic to a p-value and
//! a verdict is the report layer's job.

use crate::descriptive::{mean, sample_std, sample_variance};
use crate::StatsError;

/// One-sample Z statistic: (mean - mu) / (sigma / sqrt(n)).
///
/// `mu` and `sigma` are independent parameters so callers can supply true
/// population values. Deriving them from the sample itself (which collapses
/// the statistic to 0) is a caller policy, not something done here.
pub fn one_sample_z(sample: &[f64], mu: f64, sigma: f64) -> Result<f64, StatsError> {
    if sigma <= 0.0 {
        return Err(StatsError::InvalidParameter {
            name: "sigma",
            value: sigma,
        });
    }
    let m = mean(sample)?;
    let n = sample.len() as f64;
    Ok((m - mu) / (sigma / n.sqrt()))
}

/// One-sample T statistic: (mean - mu) / (sample_std / sqrt(n)). Needs n >= 2.
pub fn one_sample_t(sample: &[f64], mu: f64) -> Result<f64, StatsError> {
    let m = mean(sample)?;
    let sd = sample_std(sample)?;
    let n = sample.len() as f64;
    Ok((m - mu) / (sd / n.sqrt()))
}

/// Two-sample T statistic, Welch-style: unpooled, unequal variances.
///
/// (mean(a) - mean(b)) / sqrt(var(a)/n_a + var(b)/n_b), with sample
/// variances. Both samples need n >= 2.
pub fn two_sample_t(a: &[f64], b: &[f64]) -> Result<f64, StatsError> {
    let va = sample_variance(a)?;
    let vb = sample_variance(b)?;
    let se = (va / a.len() as f64 + vb / b.len() as f64).sqrt();
    Ok((mean(a)? - mean(b)?) / se)
}

/// F statistic: ratio of the two sample variances, larger over smaller.
///
/// Swap-invariant and always >= 1 by construction. Errors with
/// [`StatsError::DegenerateVariance`] if either variance is exactly zero.
pub fn f_test(a: &[f64], b: &[f64]) -> Result<f64, StatsError> {
    let va = sample_variance(a)?;
    let vb = sample_variance(b)?;
    if va == 0.0 || vb == 0.0 {
        return Err(StatsError::DegenerateVariance);
    }
    Ok(va.max(vb) / va.min(vb))
}

/// Z statistic for a difference of means with known population stds.
///
/// (mean(a) - mean(b)) / sqrt(sigma_a^2/n_a + sigma_b^2/n_b).
pub fn z_difference(a: &[f64], b: &[f64], sigma_a: f64, sigma_b: f64) -> Result<f64, StatsError> {
    if sigma_a <= 0.0 {
        return Err(StatsError::InvalidParameter {
            name: "sigma_a",
            value: sigma_a,
        });
    }
    if sigma_b <= 0.0 {
        return Err(StatsError::InvalidParameter {
            name: "sigma_b",
            value: sigma_b,
        });
    }
    let se = (sigma_a * sigma_a / a.len() as f64 + sigma_b * sigma_b / b.len() as f64).sqrt();
    Ok((mean(a)? - mean(b)?) / se)
}

/// Welch-Satterthwaite degrees of freedom for the two-sample T statistic.
///
/// Only needed when the true Student-t tail is requested; the legacy normal
/// tail ignores degrees of freedom entirely.
pub fn welch_df(a: &[f64], b: &[f64]) -> Result<f64, StatsError> {
    let va = sample_variance(a)? / a.len() as f64;
    let vb = sample_variance(b)? / b.len() as f64;
    let denom =
        va * va / (a.len() as f64 - 1.0) + vb * vb / (b.len() as f64 - 1.0);
    if denom == 0.0 {
        return Err(StatsError::DegenerateVariance);
    }
    Ok((va + vb).powi(2) / denom)
}
