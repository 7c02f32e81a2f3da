//! Statistic Evaluation
//!
//! Maps a statistic and its distribution family to a two-tailed p-value and a
//! significance verdict at the fixed 0.05 threshold.
//!
//! The reference semantics use the normal CDF for both Z and T statistics;
//! that remains the default so numeric outputs are unchanged for existing
//! callers. The true Student-t tail is available behind
//! [`TailModel::StudentT`] for callers that want degrees-of-freedom-aware
//! p-values.

use crate::report::TestResult;
use serde::{Deserialize, Serialize};
use sigtest_stats::{f_cdf, student_t_cdf, two_tailed_p, DEFAULT_ALPHA};

/// Distribution family of a computed statistic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    /// Standard normal (known population std).
    Z,
    /// Student-t with the given degrees of freedom (estimated std).
    T {
        /// Degrees of freedom; only consulted under [`TailModel::StudentT`].
        df: f64,
    },
}

/// Which CDF converts a T statistic into a p-value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TailModel {
    /// Normal CDF for both Z and T statistics (reference behavior).
    #[default]
    Normal,
    /// True Student-t tail for T statistics; Z statistics keep the normal CDF.
    StudentT,
}

/// Evaluation knobs. `alpha` defaults to the fixed 0.05 threshold.
#[derive(Debug, Clone, Copy)]
pub struct EvalOptions {
    /// Tail model for T statistics.
    pub tail_model: TailModel,
    /// Two-tailed significance threshold.
    pub alpha: f64,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            tail_model: TailModel::default(),
            alpha: DEFAULT_ALPHA,
        }
    }
}

/// Evaluate a Z or T statistic into a [`TestResult`].
pub fn evaluate(statistic: f64, dist: Distribution, opts: &EvalOptions) -> TestResult {
    let p_value = match (opts.tail_model, dist) {
        (TailModel::StudentT, Distribution::T { df }) => {
            (2.0 * (1.0 - student_t_cdf(statistic.abs(), df))).clamp(0.0, 1.0)
        }
        _ => two_tailed_p(statistic),
    };

    TestResult {
        statistic,
        is_z_distributed: matches!(dist, Distribution::Z),
        degrees_of_freedom: match dist {
            Distribution::T { df } => Some(df),
            Distribution::Z => None,
        },
        p_value,
        significant: p_value < opts.alpha,
    }
}

/// Evaluate an F statistic (larger variance over smaller, so always >= 1)
/// into a [`TestResult`] using the F-distribution tail.
///
/// Only called when the F verdict is explicitly enabled; the default F-test
/// output remains the bare statistic.
pub fn evaluate_f(statistic: f64, df_num: f64, df_den: f64, opts: &EvalOptions) -> TestResult {
    let p_value = (2.0 * (1.0 - f_cdf(statistic, df_num, df_den))).clamp(0.0, 1.0);
    TestResult {
        statistic,
        is_z_distributed: false,
        degrees_of_freedom: None,
        p_value,
        significant: p_value < opts.alpha,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_statistic_is_never_significant() {
        let result = evaluate(0.0, Distribution::Z, &EvalOptions::default());
        assert!((result.p_value - 1.0).abs() < 1e-7);
        assert!(!result.significant);
    }

    #[test]
    fn test_large_statistic_is_significant() {
        let result = evaluate(3.0, Distribution::Z, &EvalOptions::default());
        assert!(result.p_value < 0.01);
        assert!(result.significant);
        assert!(result.is_z_distributed);
    }

    #[test]
    fn test_legacy_tail_treats_t_like_z() {
        let opts = EvalOptions::default();
        let z = evaluate(1.5, Distribution::Z, &opts);
        let t = evaluate(1.5, Distribution::T { df: 4.0 }, &opts);
        assert_eq!(z.p_value, t.p_value);
        assert!(!t.is_z_distributed);
        assert_eq!(t.degrees_of_freedom, Some(4.0));
    }

    #[test]
    fn test_student_tail_is_heavier_than_normal() {
        let normal = evaluate(2.0, Distribution::T { df: 5.0 }, &EvalOptions::default());
        let student = evaluate(
            2.0,
            Distribution::T { df: 5.0 },
            &EvalOptions {
                tail_model: TailModel::StudentT,
                ..Default::default()
            },
        );
        // Fat tails mean a larger p-value for the same statistic.
        assert!(student.p_value > normal.p_value);
    }

    #[test]
    fn test_student_tail_ignores_df_for_z() {
        let opts = EvalOptions {
            tail_model: TailModel::StudentT,
            ..Default::default()
        };
        let z = evaluate(1.8, Distribution::Z, &opts);
        assert_eq!(z.p_value, sigtest_stats::two_tailed_p(1.8));
    }

    #[test]
    fn test_significance_boundary() {
        // z = 1.96 sits at p just over/under 0.05 depending on tail precision;
        // z = 2.0 is clearly under the threshold.
        let result = evaluate(2.0, Distribution::Z, &EvalOptions::default());
        assert!(result.significant);
        let result = evaluate(1.5, Distribution::Z, &EvalOptions::default());
        assert!(!result.significant);
    }

    #[test]
    fn test_f_verdict_of_unit_ratio() {
        // Equal variances: statistic 1, p = 2 * (1 - 0.5) = 1.
        let result = evaluate_f(1.0, 4.0, 4.0, &EvalOptions::default());
        assert!((result.p_value - 1.0).abs() < 1e-7);
        assert!(!result.significant);
    }

    #[test]
    fn test_f_verdict_extreme_ratio() {
        let result = evaluate_f(50.0, 4.0, 4.0, &EvalOptions::default());
        assert!(result.p_value < 0.05);
        assert!(result.significant);
    }

    #[test]
    fn test_tail_model_serde_names() {
        assert_eq!(
            serde_json::to_string(&TailModel::StudentT).unwrap(),
            "\"student-t\""
        );
        let parsed: TailModel = serde_json::from_str("\"normal\"").unwrap();
        assert_eq!(parsed, TailModel::Normal);
    }
}
