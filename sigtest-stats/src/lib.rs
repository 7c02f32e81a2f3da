#![warn(missing_docs)]
//! SigTest Statistical Core
//!
//! Provides the numerical engine for hypothesis testing:
//! - Descriptive statistics (mean, population/sample variance and std)
//! - Error-function approximation and the standard normal CDF
//! - Student-t and F distribution tails for exact p-values
//! - The five test-statistic formulas (one-sample Z/T, two-sample T, F, Z-diff)
//!
//! Every function here is pure: no shared state, no I/O, same inputs give
//! the same outputs. Callers own their samples; nothing is mutated.

mod descriptive;
mod hypothesis;
mod normal;
mod student;

pub use descriptive::{
    mean, population_std, population_variance, sample_std, sample_variance, summarize,
    SampleSummary,
};
pub use hypothesis::{f_test, one_sample_t, one_sample_z, two_sample_t, welch_df, z_difference};
pub use normal::{erf, normal_cdf, two_tailed_p};
pub use student::{f_cdf, student_t_cdf};

use thiserror::Error;

/// Fixed two-tailed significance threshold: p below this rejects H0.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Precondition failures surfaced by the statistical core.
///
/// The core never substitutes defaults for bad input: an empty sample is an
/// error, not a mean of zero.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// A mean or variance was requested on a zero-length sample.
    #[error("sample is empty")]
    EmptySample,

    /// A sample-variance-dependent operation needs more observations.
    #[error("not enough observations: got {got}, need at least {min}")]
    InsufficientSampleSize {
        /// Observations supplied.
        got: usize,
        /// Observations required.
        min: usize,
    },

    /// A scalar parameter was non-positive where positivity is required.
    #[error("invalid parameter {name}: {value} (must be positive)")]
    InvalidParameter {
        /// Parameter name as it appears in the test signature.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// An F ratio was requested with a zero sample variance in play.
    #[error("sample variance is zero; variance ratio is undefined")]
    DegenerateVariance,
}
