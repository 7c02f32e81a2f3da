#![warn(missing_docs)]
//! SigTest Report - Evaluation and Output
//!
//! Turns a bare test statistic into a [`TestResult`] (p-value plus verdict)
//! and renders complete reports:
//! - JSON (machine-readable)
//! - Human-readable terminal output
//!
//! The evaluation layer is the only place a significance decision is made;
//! the statistical core produces numbers, this crate produces verdicts.

mod eval;
mod human;
mod json;
mod report;

pub use eval::{evaluate, evaluate_f, Distribution, EvalOptions, TailModel};
pub use human::format_human_output;
pub use json::generate_json_report;
pub use report::{Report, ReportConfig, ReportMeta, SampleInfo, TestOutcome, TestResult};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON with full schema
    Json,
    /// Human-readable terminal output
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
