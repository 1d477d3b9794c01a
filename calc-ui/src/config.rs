//! Configuration loaded from a TOML file.
//!
//! Every section and field is optional; anything left out takes its
//! built-in default. The file is looked up at `--config`, then at
//! `<config dir>/site-calc/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use calc_core::PtkpStatus;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const APP_DIR: &str = "site-calc";
const CONFIG_FILE: &str = "config.toml";
const PREFS_FILE: &str = "prefs.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: InputDefaults,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values substituted for missing or unparsable calculator input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputDefaults {
    pub gross_income: Decimal,
    pub ptkp: Decimal,
    pub property_price: Decimal,
    pub down_payment_percent: Decimal,
    pub yearly_rate_percent: Decimal,
    pub tenor_years: u32,
    pub monthly_expenses: Decimal,
    pub monthly_savings: Decimal,
    pub billable_hours: Decimal,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            gross_income: Decimal::ZERO,
            ptkp: PtkpStatus::Single.amount(),
            property_price: Decimal::ZERO,
            down_payment_percent: dec!(20),
            yearly_rate_percent: dec!(8.5),
            tenor_years: 15,
            monthly_expenses: Decimal::ZERO,
            monthly_savings: Decimal::ZERO,
            billable_hours: dec!(120),
        }
    }
}

/// Which key-value store backs the preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StoreBackend,
    pub prefs_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            prefs_path: app_dir().join(PREFS_FILE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Optional file that receives a copy of every log record.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

fn app_dir() -> PathBuf {
    dirs::config_dir()
        .map(|p| p.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(".").join(APP_DIR))
}

/// Default location of the config file.
pub fn default_config_path() -> PathBuf {
    app_dir().join(CONFIG_FILE)
}

impl Config {
    /// Parses configuration from TOML text.
    pub fn from_toml(
        text: &str,
        origin: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Loads configuration from `path`, or from the default location when
    /// `path` is `None`. A missing file yields the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml(&text, &path)
    }
}
