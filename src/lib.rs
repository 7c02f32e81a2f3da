#![warn(missing_docs)]
//! # SigTest
//!
//! Statistical hypothesis testing over numeric samples.
//!
//! SigTest covers the common parametric tests end to end:
//! - **Descriptive Statistics**: mean, population and sample variance and std
//! - **One-Sample Tests**: Z test (known std) and T test (estimated std)
//! - **Two-Sample Tests**: Welch T test, F variance-ratio test, Z difference test
//! - **Evaluation**: erf-based normal CDF, two-tailed p-values, alpha-0.05 verdicts
//! - **Reporting**: JSON and human-readable reports with run metadata
//!
//! ## Quick Start
//!
//! ```
//! use sigtest::prelude::*;
//!
//! let sample = [10.0, 12.0, 9.0, 11.0, 10.0];
//! let t = one_sample_t(&sample, 10.0).unwrap();
//! let result = evaluate(t, Distribution::T { df: 4.0 }, &EvalOptions::default());
//! assert!(!result.significant);
//! ```
//!
//! ## Picking a Tail Model
//!
//! By default T statistics are evaluated against the standard normal tail,
//! which overstates significance for small samples. Opt into the exact
//! Student-t tail via [`EvalOptions`]:
//!
//! ```
//! use sigtest::prelude::*;
//!
//! let opts = EvalOptions { tail_model: TailModel::StudentT, ..Default::default() };
//! let result = evaluate(2.0, Distribution::T { df: 4.0 }, &opts);
//! assert!(result.p_value > 0.05);
//! ```

// Re-export the statistical core
pub use sigtest_stats::{
    DEFAULT_ALPHA, SampleSummary, StatsError, erf, f_cdf, f_test, mean, normal_cdf, one_sample_t,
    one_sample_z, population_std, population_variance, sample_std, sample_variance, student_t_cdf,
    summarize, two_sample_t, two_tailed_p, welch_df, z_difference,
};

// Re-export evaluation and reporting
pub use sigtest_report::{
    Distribution, EvalOptions, OutputFormat, Report, ReportConfig, ReportMeta, SampleInfo,
    TailModel, TestOutcome, TestResult, evaluate, evaluate_f, format_human_output,
    generate_json_report,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Distribution, EvalOptions, TailModel, TestOutcome, TestResult, evaluate, evaluate_f,
        f_test, mean, one_sample_t, one_sample_z, summarize, two_sample_t, welch_df, z_difference,
    };
}
