//! Configuration loading from stair.toml
//!
//! Configuration can be specified in a `stair.toml` file, discovered by
//! walking up from the current directory. Every field has a default; CLI
//! flags override file values.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// StairBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StairConfig {
    /// Trial execution configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Input-size source configuration
    #[serde(default)]
    pub inputs: InputsConfig,
    /// Report output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Trial execution configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Trials per (algorithm, size) configuration
    #[serde(default = "default_repetitions")]
    pub repetitions: u32,
    /// Pin the measurement thread to this CPU core (Linux only)
    #[serde(default)]
    pub pin_cpu: Option<usize>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            repetitions: default_repetitions(),
            pin_cpu: None,
        }
    }
}

fn default_repetitions() -> u32 {
    30
}

/// Input-size source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputsConfig {
    /// File holding one staircase size per line
    #[serde(default = "default_input_path")]
    pub path: String,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

fn default_input_path() -> String {
    "inputs.txt".to_string()
}

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the report artifacts are written into
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Detailed text report file name
    #[serde(default = "default_text_file")]
    pub text_file: String,
    /// CSV report file name
    #[serde(default = "default_csv_file")]
    pub csv_file: String,
    /// JSON report file name; None disables the JSON artifact
    #[serde(default)]
    pub json_file: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            text_file: default_text_file(),
            csv_file: default_csv_file(),
            json_file: None,
        }
    }
}

fn default_output_dir() -> String {
    ".".to_string()
}
fn default_text_file() -> String {
    "benchmark_results.txt".to_string()
}
fn default_csv_file() -> String {
    "benchmark_results.csv".to_string()
}

impl StairConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from the
    /// current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("stair.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as a TOML string
    pub fn default_toml() -> String {
        r#"# StairBench Configuration

[runner]
# Trials per (algorithm, size) configuration
repetitions = 30
# Pin the measurement thread to a CPU core, Linux only (uncomment to enable)
# pin_cpu = 0

[inputs]
# One staircase size per line; '#' comments and blank lines are skipped
path = "inputs.txt"

[output]
# Directory the report artifacts are written into
directory = "."
# Report file names
text_file = "benchmark_results.txt"
csv_file = "benchmark_results.csv"
# JSON artifact (uncomment to enable)
# json_file = "benchmark_results.json"
"#
        .to_string()
    }
}
