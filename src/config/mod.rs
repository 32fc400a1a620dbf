use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    core::{DEFAULT_RANGE_DAYS, MAX_RANGE_DAYS},
    domain::ComparisonPeriod,
    errors::OverviewError,
    format::LocaleConfig,
    storage::write_json,
    utils::{app_data_dir, config_file_in},
};

/// Keys accepted by [`Config::set_value`].
pub const CONFIG_KEYS: [&str; 6] = [
    "locale",
    "currency",
    "period",
    "range-days",
    "data",
    "color",
];

/// User preferences persisted between sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub comparison_period: ComparisonPeriod,
    #[serde(default = "Config::default_range_days")]
    pub range_days: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            comparison_period: ComparisonPeriod::default(),
            range_days: Self::default_range_days(),
            data_path: None,
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_range_days() -> u32 {
        DEFAULT_RANGE_DAYS
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn locale_config(&self) -> LocaleConfig {
        LocaleConfig::for_tag(&self.locale)
    }

    /// Updates one preference from its textual form.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), OverviewError> {
        let value = value.trim();
        match key {
            "locale" => self.locale = value.to_string(),
            "currency" => {
                if value.len() != 3 || !value.chars().all(|ch| ch.is_ascii_alphabetic()) {
                    return Err(OverviewError::InvalidInput(format!(
                        "currency must be a three-letter ISO code, got `{value}`"
                    )));
                }
                self.currency = value.to_ascii_uppercase();
            }
            "period" => self.comparison_period = value.parse()?,
            "range-days" => {
                self.range_days = value
                    .parse::<u32>()
                    .ok()
                    .filter(|days| (1..=MAX_RANGE_DAYS).contains(days))
                    .ok_or_else(|| {
                        OverviewError::InvalidInput(format!(
                            "range-days must be between 1 and {MAX_RANGE_DAYS}, got `{value}`"
                        ))
                    })?;
            }
            "data" => {
                self.data_path = match value {
                    "" | "none" | "bundled" => None,
                    path => Some(PathBuf::from(path)),
                }
            }
            "color" => {
                self.ui_color_enabled = match value.to_ascii_lowercase().as_str() {
                    "on" | "true" | "yes" => true,
                    "off" | "false" | "no" => false,
                    _ => {
                        return Err(OverviewError::InvalidInput(format!(
                            "color expects on/off, got `{value}`"
                        )))
                    }
                }
            }
            other => {
                return Err(OverviewError::InvalidInput(format!(
                    "unknown config key `{other}` (expected one of: {})",
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

/// Loads and saves [`Config`] under the application data directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, OverviewError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, OverviewError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    pub fn load(&self) -> Result<Config, OverviewError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), OverviewError> {
        write_json(config, &self.path)?;
        tracing::debug!(path = %self.path.display(), "saved config");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_value_rejects_unknown_period() {
        let mut config = Config::default();
        assert!(config.set_value("period", "last-month").is_err());
        config.set_value("period", "previous-period").unwrap();
        assert_eq!(config.comparison_period, ComparisonPeriod::PreviousPeriod);
    }

    #[test]
    fn set_value_validates_numbers_and_codes() {
        let mut config = Config::default();
        assert!(config.set_value("range-days", "0").is_err());
        assert!(config.set_value("range-days", "100000000").is_err());
        assert_eq!(config.range_days, DEFAULT_RANGE_DAYS);
        assert!(config.set_value("currency", "dollars").is_err());
        config.set_value("range-days", "14").unwrap();
        config.set_value("currency", "eur").unwrap();
        assert_eq!(config.range_days, 14);
        assert_eq!(config.currency, "EUR");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"locale":"de-DE","currency":"EUR"}"#).unwrap();
        assert_eq!(config.range_days, DEFAULT_RANGE_DAYS);
        assert_eq!(config.comparison_period, ComparisonPeriod::LastYear);
        assert!(config.ui_color_enabled);
    }
}
