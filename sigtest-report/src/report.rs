//! Report Data Structures

use crate::eval::TailModel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete report for one test invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata.
    pub meta: ReportMeta,
    /// One entry per input sample, in argument order.
    pub samples: Vec<SampleInfo>,
    /// The test outcome.
    pub outcome: TestOutcome,
}

/// Report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Bumped on breaking report-shape changes.
    pub schema_version: u32,
    /// Crate version that produced the report.
    pub version: String,
    /// When the test ran.
    pub timestamp: DateTime<Utc>,
    /// Human-readable test name, e.g. "One-sample T test".
    pub test: String,
    /// Evaluation configuration in effect.
    pub config: ReportConfig,
}

/// Evaluation configuration captured in report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Significance threshold.
    pub alpha: f64,
    /// Tail model used for T statistics.
    pub tail_model: TailModel,
    /// Whether the F-test emits a p-value and verdict.
    pub emit_f_verdict: bool,
}

/// Provenance and descriptive summary of one input sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleInfo {
    /// Source file path as given on the command line.
    pub source: String,
    /// 0-based column index the values came from.
    pub column: usize,
    /// Cells that parsed as finite numbers.
    pub accepted: usize,
    /// Cells dropped: missing, non-numeric, or non-finite.
    pub rejected: usize,
    /// Observations used by the test (same as `accepted`).
    pub len: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Standard deviation with divisor n.
    pub population_std: f64,
    /// Standard deviation with divisor n-1; absent when n < 2.
    pub sample_std: Option<f64>,
}

/// Result of evaluating a statistic: p-value plus verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// The computed statistic.
    pub statistic: f64,
    /// True for Z statistics (known population std), false for T and F.
    pub is_z_distributed: bool,
    /// Degrees of freedom for T statistics; informational under the
    /// legacy normal tail, load-bearing under the Student-t tail.
    pub degrees_of_freedom: Option<f64>,
    /// Two-tailed p-value in [0, 1].
    pub p_value: f64,
    /// Whether p_value fell below the significance threshold.
    pub significant: bool,
}

/// Outcome of a test run.
///
/// The F-test historically reported only the bare statistic; that stays the
/// default, with the evaluated form opt-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TestOutcome {
    /// Z or T statistic with p-value and verdict.
    Evaluated(TestResult),
    /// Legacy F-test output: the variance ratio, nothing else.
    FStatistic {
        /// max(var_a, var_b) / min(var_a, var_b).
        value: f64,
    },
    /// F statistic with an F-distribution p-value and verdict.
    FVerdict(TestResult),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_result() -> TestResult {
        TestResult {
            statistic: 1.5,
            is_z_distributed: false,
            degrees_of_freedom: Some(4.0),
            p_value: 0.1336,
            significant: false,
        }
    }

    #[test]
    fn test_outcome_round_trips_through_json() {
        let outcome = TestOutcome::Evaluated(dummy_result());
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"kind\":\"evaluated\""));
        let back: TestOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }

    #[test]
    fn test_bare_f_statistic_serialization() {
        let outcome = TestOutcome::FStatistic { value: 4.0 };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"kind\":\"f-statistic\""));
        assert!(json.contains("\"value\":4.0"));
    }
}
