#![warn(missing_docs)]
//! SigTest CLI Library
//!
//! Non-interactive command surface over the statistical core: one subcommand
//! per hypothesis test, CSV paths and column indices as typed arguments, a
//! report on stdout or to a file. The core never reads from a shared input
//! stream; everything it needs arrives as parameters resolved here.

mod config;
mod ingest;

pub use config::{OutputConfig, SigConfig, TestConfig};
pub use ingest::{ColumnExtraction, CsvTable, IngestError};

use anyhow::Context;
use clap::{Parser, Subcommand};
use sigtest_report::{
    evaluate, evaluate_f, format_human_output, generate_json_report, Distribution, EvalOptions,
    OutputFormat, Report, ReportConfig, ReportMeta, SampleInfo, TailModel, TestOutcome,
};
use sigtest_stats::{sample_variance, summarize, DEFAULT_ALPHA};
use std::io::Write;
use std::path::{Path, PathBuf};

/// SigTest CLI arguments
#[derive(Parser, Debug)]
#[command(name = "sigtest")]
#[command(author, version, about = "SigTest - hypothesis testing over CSV samples")]
pub struct Cli {
    /// Which test to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json or human (overrides sigtest.toml)
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Use the true Student-t tail for T statistics instead of the
    /// legacy normal approximation
    #[arg(long, global = true)]
    pub student_t: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// CLI subcommands, one per test
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// One-sample Z test (known population std)
    Z1 {
        /// CSV file with the sample
        file: PathBuf,
        /// 0-based column to use
        #[arg(long, default_value_t = 0)]
        column: usize,
        /// Hypothesized mean; derived from the sample itself when omitted,
        /// which drives the statistic to 0
        #[arg(long)]
        mu: Option<f64>,
        /// Known population std; the sample's own population std when omitted
        #[arg(long)]
        sigma: Option<f64>,
    },
    /// One-sample T test (estimated std)
    T1 {
        /// CSV file with the sample
        file: PathBuf,
        /// 0-based column to use
        #[arg(long, default_value_t = 0)]
        column: usize,
        /// Hypothesized population mean
        #[arg(long)]
        mu: f64,
    },
    /// Two-sample T test (Welch, unpooled variances)
    T2 {
        /// CSV file with the first sample
        file_a: PathBuf,
        /// CSV file with the second sample
        file_b: PathBuf,
        /// 0-based column in the first file
        #[arg(long, default_value_t = 0)]
        column_a: usize,
        /// 0-based column in the second file
        #[arg(long, default_value_t = 0)]
        column_b: usize,
    },
    /// F test for equality of variances
    F {
        /// CSV file with the first sample
        file_a: PathBuf,
        /// CSV file with the second sample
        file_b: PathBuf,
        /// 0-based column in the first file
        #[arg(long, default_value_t = 0)]
        column_a: usize,
        /// 0-based column in the second file
        #[arg(long, default_value_t = 0)]
        column_b: usize,
        /// Emit an F-distribution p-value and verdict instead of the bare
        /// statistic (also settable via sigtest.toml)
        #[arg(long)]
        verdict: bool,
    },
    /// Z test for a difference of means (known population stds)
    Zdiff {
        /// CSV file with the first sample
        file_a: PathBuf,
        /// CSV file with the second sample
        file_b: PathBuf,
        /// 0-based column in the first file
        #[arg(long, default_value_t = 0)]
        column_a: usize,
        /// 0-based column in the second file
        #[arg(long, default_value_t = 0)]
        column_b: usize,
        /// Known population std of the first sample; derived when omitted
        #[arg(long)]
        sigma_a: Option<f64>,
        /// Known population std of the second sample; derived when omitted
        #[arg(long)]
        sigma_b: Option<f64>,
    },
}

/// Run the SigTest CLI. This is the binary's entry point.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("sigtest=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("sigtest=info")
            .init();
    }

    run_with_cli(cli)
}

/// Run with pre-parsed arguments (no logging init, so tests can call it).
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Discover sigtest.toml (CLI flags override)
    let config = SigConfig::discover().unwrap_or_default();

    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let tail_model = if cli.student_t {
        TailModel::StudentT
    } else {
        config.test.tail_model
    };
    let opts = EvalOptions {
        tail_model,
        alpha: DEFAULT_ALPHA,
    };

    let report = execute_command(&cli.command, &config, &opts)?;

    let output = match format {
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Human => format_human_output(&report),
    };

    if let Some(ref path) = cli.output {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        file.write_all(output.as_bytes())?;
        println!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }

    Ok(())
}

/// One loaded sample: the raw values plus its report entry.
struct LoadedSample {
    values: Vec<f64>,
    info: SampleInfo,
}

fn load_sample(path: &Path, column: usize) -> anyhow::Result<LoadedSample> {
    let table = CsvTable::load(path)?;
    let extraction = table.extract_column(column)?;

    if extraction.rejected > 0 {
        tracing::warn!(
            accepted = extraction.accepted,
            rejected = extraction.rejected,
            "dropped non-numeric cells from column {} of {}",
            column,
            path.display()
        );
    } else {
        tracing::debug!(
            accepted = extraction.accepted,
            "loaded column {} of {}",
            column,
            path.display()
        );
    }

    let summary = summarize(&extraction.values)
        .with_context(|| format!("column {} of {} has no numeric cells", column, path.display()))?;

    Ok(LoadedSample {
        info: SampleInfo {
            source: path.display().to_string(),
            column,
            accepted: extraction.accepted,
            rejected: extraction.rejected,
            len: summary.len,
            mean: summary.mean,
            population_std: summary.population_std,
            sample_std: summary.sample_std,
        },
        values: extraction.values,
    })
}

fn execute_command(
    command: &Commands,
    config: &SigConfig,
    opts: &EvalOptions,
) -> anyhow::Result<Report> {
    match command {
        Commands::Z1 {
            file,
            column,
            mu,
            sigma,
        } => {
            let s = load_sample(file, *column)?;
            let mu = mu.unwrap_or_else(|| {
                tracing::warn!(
                    "--mu not given; using the sample mean, which drives the statistic to 0"
                );
                s.info.mean
            });
            let sigma = sigma.unwrap_or_else(|| {
                tracing::warn!("--sigma not given; using the sample's own population std");
                s.info.population_std
            });
            let statistic = sigtest_stats::one_sample_z(&s.values, mu, sigma)?;
            let result = evaluate(statistic, Distribution::Z, opts);
            Ok(build_report(
                "One-sample Z test",
                vec![s.info],
                TestOutcome::Evaluated(result),
                opts,
            ))
        }

        Commands::T1 { file, column, mu } => {
            let s = load_sample(file, *column)?;
            let statistic = sigtest_stats::one_sample_t(&s.values, *mu)?;
            let df = (s.values.len() - 1) as f64;
            let result = evaluate(statistic, Distribution::T { df }, opts);
            Ok(build_report(
                "One-sample T test",
                vec![s.info],
                TestOutcome::Evaluated(result),
                opts,
            ))
        }

        Commands::T2 {
            file_a,
            file_b,
            column_a,
            column_b,
        } => {
            let a = load_sample(file_a, *column_a)?;
            let b = load_sample(file_b, *column_b)?;
            let statistic = sigtest_stats::two_sample_t(&a.values, &b.values)?;
            let df = sigtest_stats::welch_df(&a.values, &b.values)?;
            let result = evaluate(statistic, Distribution::T { df }, opts);
            Ok(build_report(
                "Two-sample T test",
                vec![a.info, b.info],
                TestOutcome::Evaluated(result),
                opts,
            ))
        }

        Commands::F {
            file_a,
            file_b,
            column_a,
            column_b,
            verdict,
        } => {
            let a = load_sample(file_a, *column_a)?;
            let b = load_sample(file_b, *column_b)?;
            let statistic = sigtest_stats::f_test(&a.values, &b.values)?;

            let outcome = if *verdict || config.test.emit_f_verdict {
                let (df_num, df_den) = f_degrees_of_freedom(&a.values, &b.values)?;
                TestOutcome::FVerdict(evaluate_f(statistic, df_num, df_den, opts))
            } else {
                TestOutcome::FStatistic { value: statistic }
            };
            Ok(build_report(
                "F test",
                vec![a.info, b.info],
                outcome,
                opts,
            ))
        }

        Commands::Zdiff {
            file_a,
            file_b,
            column_a,
            column_b,
            sigma_a,
            sigma_b,
        } => {
            let a = load_sample(file_a, *column_a)?;
            let b = load_sample(file_b, *column_b)?;
            let sigma_a = sigma_a.unwrap_or_else(|| {
                tracing::info!("--sigma-a not given; using the first sample's population std");
                a.info.population_std
            });
            let sigma_b = sigma_b.unwrap_or_else(|| {
                tracing::info!("--sigma-b not given; using the second sample's population std");
                b.info.population_std
            });
            let statistic = sigtest_stats::z_difference(&a.values, &b.values, sigma_a, sigma_b)?;
            let result = evaluate(statistic, Distribution::Z, opts);
            Ok(build_report(
                "Z test (difference of means)",
                vec![a.info, b.info],
                TestOutcome::Evaluated(result),
                opts,
            ))
        }
    }
}

/// Degrees of freedom for the F verdict: the sample with the larger variance
/// supplies the numerator df, matching the max/min statistic orientation.
fn f_degrees_of_freedom(a: &[f64], b: &[f64]) -> anyhow::Result<(f64, f64)> {
    let va = sample_variance(a)?;
    let vb = sample_variance(b)?;
    let (num, den) = if va >= vb {
        (a.len() - 1, b.len() - 1)
    } else {
        (b.len() - 1, a.len() - 1)
    };
    Ok((num as f64, den as f64))
}

fn build_report(
    test: &str,
    samples: Vec<SampleInfo>,
    outcome: TestOutcome,
    opts: &EvalOptions,
) -> Report {
    Report {
        meta: ReportMeta {
            schema_version: 1,
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now(),
            test: test.to_string(),
            config: ReportConfig {
                alpha: opts.alpha,
                tail_model: opts.tail_model,
                emit_f_verdict: matches!(outcome, TestOutcome::FVerdict(_)),
            },
        },
        samples,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_cli_parses_one_sample_t() {
        let cli = Cli::try_parse_from(["sigtest", "t1", "data.csv", "--column", "2", "--mu", "5"])
            .unwrap();
        match cli.command {
            Commands::T1 { column, mu, .. } => {
                assert_eq!(column, 2);
                assert!((mu - 5.0).abs() < f64::EPSILON);
            }
            other => panic!("parsed wrong command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_requires_mu_for_t1() {
        assert!(Cli::try_parse_from(["sigtest", "t1", "data.csv"]).is_err());
    }

    #[test]
    fn test_cli_defaults_columns_to_zero() {
        let cli = Cli::try_parse_from(["sigtest", "f", "a.csv", "b.csv"]).unwrap();
        match cli.command {
            Commands::F {
                column_a,
                column_b,
                verdict,
                ..
            } => {
                assert_eq!(column_a, 0);
                assert_eq!(column_b, 0);
                assert!(!verdict);
            }
            other => panic!("parsed wrong command: {:?}", other),
        }
    }

    #[test]
    fn test_z1_derives_parameters_from_sample() {
        let file = write_csv("2\n4\n4\n4\n5\n5\n7\n9\n");
        let command = Commands::Z1 {
            file: file.path().to_path_buf(),
            column: 0,
            mu: None,
            sigma: None,
        };
        let report = execute_command(
            &command,
            &SigConfig::default(),
            &EvalOptions::default(),
        )
        .unwrap();

        match report.outcome {
            TestOutcome::Evaluated(result) => {
                // mu defaults to the sample mean, so the statistic is 0.
                assert!(result.statistic.abs() < 1e-12);
                assert!((result.p_value - 1.0).abs() < 1e-7);
                assert!(!result.significant);
                assert!(result.is_z_distributed);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_t1_known_statistic() {
        let file = write_csv("10\n12\n9\n11\n10\n");
        let command = Commands::T1 {
            file: file.path().to_path_buf(),
            column: 0,
            mu: 10.0,
        };
        let report = execute_command(
            &command,
            &SigConfig::default(),
            &EvalOptions::default(),
        )
        .unwrap();

        match report.outcome {
            TestOutcome::Evaluated(result) => {
                assert!((result.statistic - 0.78446).abs() < 1e-4);
                assert_eq!(result.degrees_of_freedom, Some(4.0));
                assert!(!result.significant);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_f_defaults_to_bare_statistic() {
        let a = write_csv("1\n2\n3\n4\n5\n");
        let b = write_csv("2\n4\n6\n8\n10\n");
        let command = Commands::F {
            file_a: a.path().to_path_buf(),
            file_b: b.path().to_path_buf(),
            column_a: 0,
            column_b: 0,
            verdict: false,
        };
        let report = execute_command(
            &command,
            &SigConfig::default(),
            &EvalOptions::default(),
        )
        .unwrap();

        match report.outcome {
            TestOutcome::FStatistic { value } => assert!((value - 4.0).abs() < 1e-10),
            other => panic!("expected bare statistic, got {:?}", other),
        }
    }

    #[test]
    fn test_f_verdict_flag_upgrades_outcome() {
        let a = write_csv("1\n2\n3\n4\n5\n");
        let b = write_csv("2\n4\n6\n8\n10\n");
        let command = Commands::F {
            file_a: a.path().to_path_buf(),
            file_b: b.path().to_path_buf(),
            column_a: 0,
            column_b: 0,
            verdict: true,
        };
        let report = execute_command(
            &command,
            &SigConfig::default(),
            &EvalOptions::default(),
        )
        .unwrap();

        match report.outcome {
            TestOutcome::FVerdict(result) => {
                assert!((result.statistic - 4.0).abs() < 1e-10);
                assert!(result.p_value > 0.0 && result.p_value < 1.0);
            }
            other => panic!("expected F verdict, got {:?}", other),
        }
        assert!(report.meta.config.emit_f_verdict);
    }

    #[test]
    fn test_degenerate_variance_surfaces_as_error() {
        let a = write_csv("1\n2\n3\n4\n5\n");
        let b = write_csv("2\n2\n2\n2\n2\n");
        let command = Commands::F {
            file_a: a.path().to_path_buf(),
            file_b: b.path().to_path_buf(),
            column_a: 0,
            column_b: 0,
            verdict: false,
        };
        let err = execute_command(
            &command,
            &SigConfig::default(),
            &EvalOptions::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("variance"));
    }

    #[test]
    fn test_report_carries_rejection_counts() {
        let file = write_csv("value\n10\n12\nbad\n9\n11\n10\n");
        let command = Commands::T1 {
            file: file.path().to_path_buf(),
            column: 0,
            mu: 10.0,
        };
        let report = execute_command(
            &command,
            &SigConfig::default(),
            &EvalOptions::default(),
        )
        .unwrap();

        assert_eq!(report.samples.len(), 1);
        assert_eq!(report.samples[0].accepted, 5);
        assert_eq!(report.samples[0].rejected, 2);
    }

    #[test]
    fn test_f_degrees_of_freedom_orientation() {
        let low_var = [1.0, 2.0, 3.0];
        let high_var = [0.0, 10.0, 20.0, 30.0];
        // Larger variance supplies the numerator df regardless of order.
        assert_eq!(
            f_degrees_of_freedom(&low_var, &high_var).unwrap(),
            (3.0, 2.0)
        );
        assert_eq!(
            f_degrees_of_freedom(&high_var, &low_var).unwrap(),
            (3.0, 2.0)
        );
    }
}
