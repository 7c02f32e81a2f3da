//! Descriptive Statistics
//!
//! Mean, variance, and standard deviation over a numeric sample.
//!
//! The sample (unbiased) variance is derived by rescaling the population
//! (biased) estimator with n/(n-1) instead of summing squared deviations over
//! an n-1 divisor directly. The two forms are algebraically identical but
//! round differently; the rescaled form is the contract here.

use crate::StatsError;

/// On-demand summary of one sample.
///
/// Materialized once per CLI invocation so the report can echo what the test
/// actually consumed; the test functions themselves recompute from the raw
/// slice and never read this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSummary {
    /// Number of observations.
    pub len: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Variance with divisor n.
    pub population_variance: f64,
    /// Square root of the population variance.
    pub population_std: f64,
    /// Variance rescaled to divisor n-1; `None` when n < 2.
    pub sample_variance: Option<f64>,
    /// Square root of the sample variance; `None` when n < 2.
    pub sample_std: Option<f64>,
}

/// Arithmetic mean of the sample.
///
/// Errors with [`StatsError::EmptySample`] on a zero-length sample rather
/// than returning 0.
pub fn mean(samples: &[f64]) -> Result<f64, StatsError> {
    if samples.is_empty() {
        return Err(StatsError::EmptySample);
    }
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Biased variance: average squared deviation from the mean, divisor n.
pub fn population_variance(samples: &[f64]) -> Result<f64, StatsError> {
    let m = mean(samples)?;
    Ok(samples.iter().map(|x| (x - m).powi(2)).sum::<f64>() / samples.len() as f64)
}

/// Square root of [`population_variance`].
pub fn population_std(samples: &[f64]) -> Result<f64, StatsError> {
    population_variance(samples).map(f64::sqrt)
}

/// Unbiased variance, obtained as `population_variance * n / (n - 1)`.
///
/// Errors with [`StatsError::InsufficientSampleSize`] when n < 2.
pub fn sample_variance(samples: &[f64]) -> Result<f64, StatsError> {
    let n = samples.len();
    if n < 2 {
        return Err(StatsError::InsufficientSampleSize { got: n, min: 2 });
    }
    Ok(population_variance(samples)? * n as f64 / (n as f64 - 1.0))
}

/// Square root of [`sample_variance`].
pub fn sample_std(samples: &[f64]) -> Result<f64, StatsError> {
    sample_variance(samples).map(f64::sqrt)
}

/// Compute a full [`SampleSummary`] in one pass over the derived quantities.
///
/// The sample-variance fields degrade to `None` for single-observation
/// samples instead of failing the whole summary; an empty sample is still an
/// error.
pub fn summarize(samples: &[f64]) -> Result<SampleSummary, StatsError> {
    let m = mean(samples)?;
    let pv = population_variance(samples)?;
    let sv = sample_variance(samples).ok();
    Ok(SampleSummary {
        len: samples.len(),
        mean: m,
        population_variance: pv,
        population_std: pv.sqrt(),
        sample_variance: sv,
        sample_std: sv.map(f64::sqrt),
    })
}
