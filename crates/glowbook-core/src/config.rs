// Rust guideline compliant 2026-10-12

//! Configuration management for Glowbook.

use crate::calendar::BlockMetrics;
use crate::pricing::MarkupRate;
use crate::slots::BusinessHours;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for Glowbook behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Markup applied to emergency bookings, as a fraction (0.25 = 25%).
    #[serde(default = "default_markup_rate")]
    pub emergency_markup_rate: f64,

    /// First hour an emergency slot may start.
    #[serde(default = "default_open_hour")]
    pub business_open_hour: u32,

    /// Last hour an emergency slot may start.
    #[serde(default = "default_close_hour")]
    pub business_close_hour: u32,

    /// Pixel height of one hour in the week view.
    #[serde(default = "default_hour_height")]
    pub calendar_hour_height: u32,

    /// Minimum pixel height of a booking block in the week view.
    #[serde(default = "default_min_block_height")]
    pub calendar_min_block_height: u32,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_markup_rate() -> f64 {
    MarkupRate::DEFAULT.as_fraction()
}

fn default_open_hour() -> u32 {
    BusinessHours::DEFAULT.open_hour()
}

fn default_close_hour() -> u32 {
    BusinessHours::DEFAULT.close_hour()
}

fn default_hour_height() -> u32 {
    BlockMetrics::default().hour_height
}

fn default_min_block_height() -> u32 {
    BlockMetrics::default().min_block_height
}

impl Default for Config {
    fn default() -> Self {
        Self {
            emergency_markup_rate: default_markup_rate(),
            business_open_hour: default_open_hour(),
            business_close_hour: default_close_hour(),
            calendar_hour_height: default_hour_height(),
            calendar_min_block_height: default_min_block_height(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.glowbook/config.toml`
    /// 3. Environment variables with `GLOWBOOK_` prefix
    ///
    /// # Arguments
    ///
    /// * `glowbook_dir` - Path to the `.glowbook` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(glowbook_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = glowbook_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `GLOWBOOK_EMERGENCY_MARKUP_RATE` - Markup fraction (0-1)
    /// - `GLOWBOOK_BUSINESS_OPEN_HOUR` - Opening hour (0-23)
    /// - `GLOWBOOK_BUSINESS_CLOSE_HOUR` - Closing hour (0-23)
    /// - `GLOWBOOK_CALENDAR_HOUR_HEIGHT` - Week view hour height
    /// - `GLOWBOOK_CALENDAR_MIN_BLOCK_HEIGHT` - Week view block floor
    /// - `GLOWBOOK_OUTPUT_FORMAT` - Output format (json/table/plain)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values cannot be parsed.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("GLOWBOOK_EMERGENCY_MARKUP_RATE") {
            self.emergency_markup_rate = val.parse().map_err(|_| {
                Error::InvalidConfig(
                    "GLOWBOOK_EMERGENCY_MARKUP_RATE must be a number between 0 and 1".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("GLOWBOOK_BUSINESS_OPEN_HOUR") {
            self.business_open_hour = parse_hour("GLOWBOOK_BUSINESS_OPEN_HOUR", &val)?;
        }

        if let Ok(val) = std::env::var("GLOWBOOK_BUSINESS_CLOSE_HOUR") {
            self.business_close_hour = parse_hour("GLOWBOOK_BUSINESS_CLOSE_HOUR", &val)?;
        }

        if let Ok(val) = std::env::var("GLOWBOOK_CALENDAR_HOUR_HEIGHT") {
            self.calendar_hour_height = val.parse().map_err(|_| {
                Error::InvalidConfig(
                    "GLOWBOOK_CALENDAR_HOUR_HEIGHT must be a positive number".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("GLOWBOOK_CALENDAR_MIN_BLOCK_HEIGHT") {
            self.calendar_min_block_height = val.parse().map_err(|_| {
                Error::InvalidConfig(
                    "GLOWBOOK_CALENDAR_MIN_BLOCK_HEIGHT must be a positive number".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("GLOWBOOK_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::InvalidConfig(
                        "GLOWBOOK_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - emergency_markup_rate is outside 0-1
    /// - business hours do not satisfy open < close <= 23
    /// - a calendar height is zero or the block floor exceeds the hour height
    fn validate(&self) -> Result<()> {
        self.markup_rate()?;
        self.business_hours()?;

        if self.calendar_hour_height == 0 || self.calendar_min_block_height == 0 {
            return Err(Error::InvalidConfig(
                "calendar heights must be greater than 0".to_string(),
            ));
        }

        if self.calendar_min_block_height > self.calendar_hour_height {
            return Err(Error::InvalidConfig(format!(
                "calendar_min_block_height ({}) cannot exceed calendar_hour_height ({})",
                self.calendar_min_block_height, self.calendar_hour_height
            )));
        }

        Ok(())
    }

    /// Returns the emergency markup rate.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured fraction is outside 0-1.
    pub fn markup_rate(&self) -> Result<MarkupRate> {
        MarkupRate::from_fraction(self.emergency_markup_rate)
            .map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Returns the business hours used for emergency slots.
    ///
    /// # Errors
    ///
    /// Returns an error if open < close <= 23 does not hold.
    pub fn business_hours(&self) -> Result<BusinessHours> {
        BusinessHours::new(self.business_open_hour, self.business_close_hour)
            .map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Returns the week-view block geometry.
    pub fn block_metrics(&self) -> BlockMetrics {
        BlockMetrics {
            hour_height: self.calendar_hour_height,
            min_block_height: self.calendar_min_block_height,
        }
    }

    /// Saves the configuration to `config.toml` in `glowbook_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, glowbook_dir: &Path) -> Result<()> {
        let config_path = glowbook_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

fn parse_hour(name: &str, value: &str) -> Result<u32> {
    value
        .parse::<u32>()
        .ok()
        .filter(|hour| *hour <= 23)
        .ok_or_else(|| Error::InvalidConfig(format!("{} must be an hour 0-23", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests mutate process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "GLOWBOOK_EMERGENCY_MARKUP_RATE",
        "GLOWBOOK_BUSINESS_OPEN_HOUR",
        "GLOWBOOK_BUSINESS_CLOSE_HOUR",
        "GLOWBOOK_CALENDAR_HOUR_HEIGHT",
        "GLOWBOOK_CALENDAR_MIN_BLOCK_HEIGHT",
        "GLOWBOOK_OUTPUT_FORMAT",
    ];

    fn clear_all_env_vars() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.emergency_markup_rate, 0.25);
        assert_eq!(config.business_open_hour, 8);
        assert_eq!(config.business_close_hour, 22);
        assert_eq!(config.calendar_hour_height, 60);
        assert_eq!(config.calendar_min_block_height, 20);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.markup_rate().unwrap(), MarkupRate::DEFAULT);
        assert_eq!(config.business_hours().unwrap(), BusinessHours::DEFAULT);
    }

    #[test]
    fn test_config_load_missing_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
emergency_markup_rate = 0.3
business_open_hour = 9
business_close_hour = 20
calendar_hour_height = 48
calendar_min_block_height = 16
output_format = "json"
"#;
        std::fs::write(temp_dir.path().join("config.toml"), content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.markup_rate().unwrap().basis_points(), 3_000);
        assert_eq!(config.business_hours().unwrap(), BusinessHours::new(9, 20).unwrap());
        assert_eq!(config.block_metrics().hour_height, 48);
        assert_eq!(config.block_metrics().min_block_height, 16);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_config_validation_rejects_bad_values() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        for content in [
            "emergency_markup_rate = 1.5",
            "business_open_hour = 22\nbusiness_close_hour = 8",
            "business_close_hour = 24",
            "calendar_hour_height = 0",
            "calendar_hour_height = 10\ncalendar_min_block_height = 20",
        ] {
            let temp_dir = TempDir::new().unwrap();
            std::fs::write(temp_dir.path().join("config.toml"), content).unwrap();
            let result = Config::load(temp_dir.path());
            assert!(
                matches!(result, Err(Error::InvalidConfig(_))),
                "expected rejection of {:?}",
                content
            );
        }
    }

    #[test]
    fn test_config_file_overridden_by_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "emergency_markup_rate = 0.2",
        )
        .unwrap();

        std::env::set_var("GLOWBOOK_EMERGENCY_MARKUP_RATE", "0.3");
        std::env::set_var("GLOWBOOK_OUTPUT_FORMAT", "plain");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.emergency_markup_rate, 0.3);
        assert_eq!(config.output_format, OutputFormat::Plain);

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_invalid_values() {
        let _guard = ENV_LOCK.lock().unwrap();
        for (var, value) in [
            ("GLOWBOOK_EMERGENCY_MARKUP_RATE", "lots"),
            ("GLOWBOOK_BUSINESS_OPEN_HOUR", "25"),
            ("GLOWBOOK_OUTPUT_FORMAT", "yaml"),
        ] {
            clear_all_env_vars();
            let temp_dir = TempDir::new().unwrap();
            std::env::set_var(var, value);
            assert!(Config::load(temp_dir.path()).is_err(), "{}={}", var, value);
        }
        clear_all_env_vars();
    }

    #[test]
    fn test_config_save_and_load() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        let original = Config {
            emergency_markup_rate: 0.2,
            business_open_hour: 7,
            business_close_hour: 21,
            calendar_hour_height: 80,
            calendar_min_block_height: 24,
            output_format: OutputFormat::Json,
        };

        original.save(temp_dir.path()).unwrap();
        let loaded = Config::load(temp_dir.path()).unwrap();
        assert_eq!(original, loaded);
    }
}
