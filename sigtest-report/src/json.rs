//! JSON Output

use crate::report::Report;

/// Generate a prettified JSON report.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ReportConfig, ReportMeta, TestOutcome, TestResult};
    use crate::TailModel;

    #[test]
    fn test_json_report_parses_back() {
        let report = Report {
            meta: ReportMeta {
                schema_version: 1,
                version: "0.1.0".to_string(),
                timestamp: chrono::Utc::now(),
                test: "One-sample Z test".to_string(),
                config: ReportConfig {
                    alpha: 0.05,
                    tail_model: TailModel::Normal,
                    emit_f_verdict: false,
                },
            },
            samples: vec![],
            outcome: TestOutcome::Evaluated(TestResult {
                statistic: 0.0,
                is_z_distributed: true,
                degrees_of_freedom: None,
                p_value: 1.0,
                significant: false,
            }),
        };

        let json = generate_json_report(&report).unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back.meta.test, "One-sample Z test");
        assert_eq!(back.outcome, report.outcome);
    }
}
