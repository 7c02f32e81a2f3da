//! Configuration loading from sigtest.toml
//!
//! Configuration can be specified in a `sigtest.toml` file, discovered by
//! walking up from the current directory. CLI flags override file values.

use serde::{Deserialize, Serialize};
use sigtest_report::TailModel;
use std::path::Path;

/// SigTest configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SigConfig {
    /// Test evaluation configuration
    #[serde(default)]
    pub test: TestConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Test evaluation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TestConfig {
    /// Tail model for T statistics: "normal" (legacy) or "student-t"
    #[serde(default)]
    pub tail_model: TailModel,
    /// Emit an F-distribution p-value and verdict for the F-test instead of
    /// the bare statistic
    #[serde(default)]
    pub emit_f_verdict: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl SigConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from the current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("sigtest.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# SigTest Configuration

[test]
# Tail model for T statistics: "normal" (legacy, matches Z) or "student-t"
tail_model = "normal"
# Report an F-distribution p-value and verdict for the F-test
emit_f_verdict = false

[output]
# Default output format: human or json
format = "human"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SigConfig::default();
        assert_eq!(config.test.tail_model, TailModel::Normal);
        assert!(!config.test.emit_f_verdict);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [test]
            tail_model = "student-t"
        "#;

        let config: SigConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.test.tail_model, TailModel::StudentT);
        // Defaults should still apply
        assert!(!config.test.emit_f_verdict);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_parse_f_verdict_flag() {
        let toml_str = r#"
            [test]
            emit_f_verdict = true

            [output]
            format = "json"
        "#;

        let config: SigConfig = toml::from_str(toml_str).unwrap();
        assert!(config.test.emit_f_verdict);
        assert_eq!(config.output.format, "json");
    }

    #[test]
    fn test_default_toml_parses() {
        let config: SigConfig = toml::from_str(&SigConfig::default_toml()).unwrap();
        assert_eq!(config.test.tail_model, TailModel::Normal);
    }
}
