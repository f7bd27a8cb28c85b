use crate::error::{Result, StockError};
use crate::store::fs::to_pretty_json;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY: &str = "$";
const DEFAULT_DATA_FILE: &str = "products.json";
const DEFAULT_THRESHOLD: u32 = 10;

/// Keys accepted by [`StockConfig::get`] and [`StockConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["currency", "data-file", "threshold"];

/// Configuration for stockpile, stored in `config.json` next to the data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockConfig {
    /// Symbol printed before prices (e.g. "$", "€")
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Name of the products file inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Threshold used by low-stock checks when none is given
    #[serde(default = "default_threshold")]
    pub low_stock_threshold: u32,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_threshold() -> u32 {
    DEFAULT_THRESHOLD
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            data_file: default_data_file(),
            low_stock_threshold: default_threshold(),
        }
    }
}

impl StockConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockError::Io)?;
        let config: StockConfig =
            serde_json::from_str(&content).map_err(StockError::Serialization)?;
        log::debug!("loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = to_pretty_json(self)?;
        fs::write(config_path, content).map_err(StockError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "currency" => Some(self.currency.clone()),
            "data-file" => Some(self.data_file.clone()),
            "threshold" => Some(self.low_stock_threshold.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "currency" => {
                self.currency = value.to_string();
            }
            "data-file" => {
                let value = value.trim();
                if value.is_empty() || value.contains(['/', '\\']) {
                    return Err(StockError::Config(format!(
                        "data-file must be a plain file name, got {:?}",
                        value
                    )));
                }
                self.data_file = value.to_string();
            }
            "threshold" => {
                let threshold: u32 = value.trim().parse().map_err(|_| {
                    StockError::Config(format!("threshold must be a whole number, got {:?}", value))
                })?;
                if threshold == 0 {
                    return Err(StockError::Config("threshold must be positive".to_string()));
                }
                self.low_stock_threshold = threshold;
            }
            other => {
                return Err(StockError::Config(format!(
                    "Unknown config key: {} (expected one of: {})",
                    other,
                    CONFIG_KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }

    /// `price` formatted for display, e.g. `$120.05`.
    pub fn format_price(&self, price: f64) -> String {
        format!("{}{:.2}", self.currency, price)
    }
}
