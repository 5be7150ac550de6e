//! CLI configuration management
//!
//! Settings come from a TOML file, `CURVE_*` environment variables and
//! command-line flags. Later sources override earlier ones.

use curve_core::market_data::{Extrapolation, Interpolation};
use curve_core::rates::{Compounding, Frequency};
use curve_core::types::DayCountConvention;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::output::OutputFormat;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },

    #[error("Invalid conventions: {0}")]
    InvalidConventions(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format for command results
    pub format: OutputFormat,
    /// Day count used to turn dates into year fractions
    pub day_count: DayCountConvention,
    /// Compounding rule for reported rates
    pub compounding: Compounding,
    /// Compounding frequency for reported rates
    pub frequency: Frequency,
    /// Behaviour outside the anchor range
    pub extrapolation: Extrapolation,
    /// Interpolation between discount curve anchors
    pub interpolation: Interpolation,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            format: OutputFormat::Table,
            day_count: DayCountConvention::Actual360,
            compounding: Compounding::Continuous,
            frequency: Frequency::Annual,
            extrapolation: Extrapolation::FlatForward,
            interpolation: Interpolation::LogLinearDiscount,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply `CURVE_*` variables reported by `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("CURVE_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(format) = lookup("CURVE_FORMAT") {
            self.format = parse_value("CURVE_FORMAT", &format)?;
        }
        if let Some(day_count) = lookup("CURVE_DAY_COUNT") {
            self.day_count = parse_value("CURVE_DAY_COUNT", &day_count)?;
        }
        if let Some(compounding) = lookup("CURVE_COMPOUNDING") {
            self.compounding = parse_value("CURVE_COMPOUNDING", &compounding)?;
        }
        if let Some(frequency) = lookup("CURVE_FREQUENCY") {
            self.frequency = parse_value("CURVE_FREQUENCY", &frequency)?;
        }
        if let Some(extrapolation) = lookup("CURVE_EXTRAPOLATION") {
            self.extrapolation = parse_value("CURVE_EXTRAPOLATION", &extrapolation)?;
        }
        if let Some(interpolation) = lookup("CURVE_INTERPOLATION") {
            self.interpolation = parse_value("CURVE_INTERPOLATION", &interpolation)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if cli.verbose {
            self.log_level = self.log_level.max(LogLevel::Debug);
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(day_count) = cli.day_count {
            self.day_count = day_count;
        }
        if let Some(compounding) = cli.compounding {
            self.compounding = compounding;
        }
        if let Some(frequency) = cli.frequency {
            self.frequency = frequency;
        }
        if let Some(extrapolation) = cli.extrapolation {
            self.extrapolation = extrapolation;
        }
        if let Some(interpolation) = cli.interpolation {
            self.interpolation = interpolation;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.compounding
            .check_frequency(self.frequency)
            .map_err(|e| ConfigError::InvalidConventions(e.to_string()))
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            message: e.to_string(),
        })
}

/// Overrides taken from the command line
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Raise the log level to at least `debug`
    pub verbose: bool,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Day count override
    pub day_count: Option<DayCountConvention>,
    /// Compounding override
    pub compounding: Option<Compounding>,
    /// Frequency override
    pub frequency: Option<Frequency>,
    /// Extrapolation override
    pub extrapolation: Option<Extrapolation>,
    /// Interpolation override
    pub interpolation: Option<Interpolation>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config<F>(cli: &CliArgs, env: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env(env)?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}
