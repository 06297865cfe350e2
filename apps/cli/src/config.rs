//! Layered CLI configuration.
//!
//! Sources, lowest to highest precedence:
//! 1. built-in defaults
//! 2. `datavalid.toml` in the working directory, or the file given by `--config`
//! 3. `DATAVALID_*` environment variables (`DATAVALID_FORMAT=json`)
//! 4. command-line flags, applied by the caller after [`load`]

use std::path::Path;

use anyhow::{Context, ensure};
use clap::ValueEnum;
use datavalid_validator::validators::LeapYearRule;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "datavalid.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "DATAVALID_";

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per result.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// `--leap-years` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LeapYearsArg {
    /// Gregorian rule for every year.
    Gregorian,
    /// Accept Feb 29 only in 1900–2199.
    LegacyWindow,
}

impl From<LeapYearsArg> for LeapYearRule {
    fn from(arg: LeapYearsArg) -> Self {
        match arg {
            LeapYearsArg::Gregorian => Self::Gregorian,
            LeapYearsArg::LegacyWindow => Self::LegacyWindow,
        }
    }
}

/// Resolved CLI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Output format.
    pub format: OutputFormat,
    /// Log filter directive used when `RUST_LOG` is unset (e.g. "warn", "debug").
    pub log_level: String,
    /// Leap-year rule for date checks.
    pub leap_years: LeapYearRule,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            log_level: "warn".to_owned(),
            leap_years: LeapYearRule::Gregorian,
        }
    }
}

/// Builds the figment for the given explicit config path, if any.
fn figment(path: Option<&Path>) -> Figment {
    let base = Figment::from(Serialized::defaults(CliConfig::default()));
    let with_file = match path {
        Some(path) => base.merge(Toml::file(path)),
        None => base.merge(Toml::file(CONFIG_FILE)),
    };
    with_file.merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]))
}

/// Loads configuration from defaults, file and environment.
///
/// An explicit `path` must exist; the default file is optional.
pub fn load(path: Option<&Path>) -> anyhow::Result<CliConfig> {
    if let Some(path) = path {
        ensure!(path.is_file(), "config file not found: {}", path.display());
    }

    figment(path)
        .extract()
        .context("failed to load configuration")
}
