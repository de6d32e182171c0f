//! Configuration for Armstrong benchmark sweeps.
//!
//! Load sweep settings from TOML or YAML files so the sample bound, dataset
//! range and output paths can change without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use armstrong_config::SweepConfig;
//!
//! let config = SweepConfig::from_toml_str(r#"
//!     max_n = 2000
//!     random_seed = 7
//!
//!     [dataset]
//!     min_value = 1000
//!     max_value = 99999
//!
//!     [output]
//!     csv_path = "sweep.csv"
//! "#).unwrap();
//!
//! assert_eq!(config.max_n, 2000);
//! assert_eq!(config.dataset.value_range(), 1000..=99999);
//! assert_eq!(config.output.csv_path.as_deref(), Some("sweep.csv"));
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use armstrong_config::SweepConfig;
//!
//! let config = SweepConfig::load("armstrong.toml").unwrap_or_default();
//! assert_eq!(config.max_n, 500);
//! ```

use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default upper bound on the sample size.
pub const DEFAULT_MAX_N: i64 = 500;

/// Default smallest generated candidate (3 digits).
pub const DEFAULT_MIN_VALUE: u64 = 100;

/// Default largest generated candidate (4 digits).
pub const DEFAULT_MAX_VALUE: u64 = 9999;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for one benchmark sweep.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SweepConfig {
    /// Largest sample size. Non-positive values produce an empty sweep.
    #[serde(default = "default_max_n")]
    pub max_n: i64,

    /// Random seed for a reproducible dataset sequence.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Range the random candidates are drawn from.
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Optional report files.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_max_n() -> i64 {
    DEFAULT_MAX_N
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            max_n: DEFAULT_MAX_N,
            random_seed: None,
            dataset: DatasetConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl SweepConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a file, picking YAML for `.yaml` / `.yml`
    /// extensions and TOML otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the dataset range is not inverted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dataset.min_value > self.dataset.max_value {
            return Err(ConfigError::Invalid(format!(
                "dataset.min_value ({}) exceeds dataset.max_value ({})",
                self.dataset.min_value, self.dataset.max_value
            )));
        }
        Ok(())
    }

    /// Replaces every field that `overrides` sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use armstrong_config::{SweepConfig, SweepOverrides};
    ///
    /// let config = SweepConfig::from_toml_str("max_n = 100\nrandom_seed = 1").unwrap()
    ///     .with_overrides(SweepOverrides {
    ///         max_n: Some(900),
    ///         ..SweepOverrides::default()
    ///     });
    ///
    /// assert_eq!(config.max_n, 900);
    /// assert_eq!(config.random_seed, Some(1));
    /// ```
    pub fn with_overrides(mut self, overrides: SweepOverrides) -> Self {
        if let Some(max_n) = overrides.max_n {
            self.max_n = max_n;
        }
        if let Some(seed) = overrides.random_seed {
            self.random_seed = Some(seed);
        }
        if let Some(path) = overrides.csv_path {
            self.output.csv_path = Some(path);
        }
        if let Some(path) = overrides.markdown_path {
            self.output.markdown_path = Some(path);
        }
        self
    }

    /// Sets the largest sample size.
    pub fn with_max_n(mut self, max_n: i64) -> Self {
        self.max_n = max_n;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the inclusive candidate range.
    pub fn with_value_range(mut self, min_value: u64, max_value: u64) -> Self {
        self.dataset = DatasetConfig {
            min_value,
            max_value,
        };
        self
    }

    /// Sets the output path for CSV export.
    pub fn with_csv_output(mut self, path: impl Into<String>) -> Self {
        self.output.csv_path = Some(path.into());
        self
    }

    /// Sets the output path for the Markdown report.
    pub fn with_markdown_output(mut self, path: impl Into<String>) -> Self {
        self.output.markdown_path = Some(path.into());
        self
    }
}

/// Values that take precedence over a loaded configuration.
///
/// Unset fields leave the configuration untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepOverrides {
    /// Replaces `max_n`.
    pub max_n: Option<i64>,
    /// Replaces `random_seed`.
    pub random_seed: Option<u64>,
    /// Replaces `output.csv_path`.
    pub csv_path: Option<String>,
    /// Replaces `output.markdown_path`.
    pub markdown_path: Option<String>,
}

/// Inclusive range of generated candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DatasetConfig {
    /// Smallest candidate.
    #[serde(default = "default_min_value")]
    pub min_value: u64,

    /// Largest candidate.
    #[serde(default = "default_max_value")]
    pub max_value: u64,
}

fn default_min_value() -> u64 {
    DEFAULT_MIN_VALUE
}

fn default_max_value() -> u64 {
    DEFAULT_MAX_VALUE
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
        }
    }
}

impl DatasetConfig {
    /// Returns the candidate range.
    pub fn value_range(&self) -> RangeInclusive<u64> {
        self.min_value..=self.max_value
    }
}

/// Report destinations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OutputConfig {
    /// Where to write the CSV table.
    #[serde(default)]
    pub csv_path: Option<String>,

    /// Where to write the Markdown report.
    #[serde(default)]
    pub markdown_path: Option<String>,
}
