//! Human-Readable Output
//!
//! Terminal rendering of a [`Report`]: sample provenance, the statistic with
//! its distribution letter, the p-value, and the conclusion line.

use crate::report::{Report, TestOutcome, TestResult};

/// Format a report for human-readable terminal display.
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str(&format!("=== {} ===\n", report.meta.test));

    for sample in &report.samples {
        output.push_str(&format!(
            "Sample: {} (column {})\n",
            sample.source, sample.column
        ));
        output.push_str(&format!(
            "    n: {}  accepted: {}  rejected: {}\n",
            sample.len, sample.accepted, sample.rejected
        ));
        let sample_std = sample
            .sample_std
            .map(|s| format!("{:.4}", s))
            .unwrap_or_else(|| "n/a".to_string());
        output.push_str(&format!(
            "    mean: {:.4}  population std: {:.4}  sample std: {}\n",
            sample.mean, sample.population_std, sample_std
        ));
    }

    match &report.outcome {
        TestOutcome::Evaluated(result) => {
            let letter = if result.is_z_distributed { "Z" } else { "T" };
            push_verdict_block(&mut output, letter, result);
        }
        TestOutcome::FStatistic { value } => {
            output.push_str(&format!("F statistic  : {:.6}\n", value));
        }
        TestOutcome::FVerdict(result) => {
            push_verdict_block(&mut output, "F", result);
        }
    }

    output.push_str(&"-".repeat(40));
    output.push('\n');
    output
}

fn push_verdict_block(output: &mut String, letter: &str, result: &TestResult) {
    output.push_str(&format!("{} statistic  : {:.6}\n", letter, result.statistic));
    if let Some(df) = result.degrees_of_freedom {
        output.push_str(&format!("df           : {:.2}\n", df));
    }
    output.push_str(&format!("P-value      : {:.6}\n", result.p_value));
    let conclusion = if result.significant {
        "Significant (reject H0)"
    } else {
        "Not significant (fail to reject H0)"
    };
    output.push_str(&format!("Conclusion   : {}\n", conclusion));
}
