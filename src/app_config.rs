use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use url::Url;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Model identifier passed to the generation API
    #[serde(default = "default_model")]
    pub model: String,

    /// API key for the generation service
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Service endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of tokens to generate per stage
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Per-stage sampling temperatures
    #[serde(default)]
    pub temperatures: StageTemperatures,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Sampling temperature for each pipeline stage, each in [0.0, 2.0]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StageTemperatures {
    /// Literal translator temperature
    #[serde(default = "default_temperature")]
    pub literal: f32,

    /// Technical translator temperature
    #[serde(default = "default_temperature")]
    pub technical: f32,

    /// Plain-language editor temperature
    #[serde(default = "default_plain_language_temperature")]
    pub plain_language: f32,

    /// Quality estimator temperature
    #[serde(default = "default_temperature")]
    pub quality: f32,
}

impl Default for StageTemperatures {
    fn default() -> Self {
        Self {
            literal: default_temperature(),
            technical: default_temperature(),
            plain_language: default_plain_language_temperature(),
            quality: default_temperature(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_max_tokens() -> u32 {
    4096
}

fn default_temperature() -> f32 {
    0.7
}

fn default_plain_language_temperature() -> f32 {
    1.0
}

/// Accepted sampling temperature domain
pub const TEMPERATURE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=2.0;

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .context(format!("Failed to create config file: {}", path.display()))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .context(format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Load the configuration from a JSON file, writing a default one if it
    /// does not exist yet
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            let config = Config::default();
            config.save_to_file(path)?;
            Ok(config)
        }
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(anyhow!("Model identifier must not be empty"));
        }

        Url::parse(&self.endpoint)
            .map_err(|e| anyhow!("Invalid endpoint URL '{}': {}", self.endpoint, e))?;

        for (name, value) in [
            ("literal", self.temperatures.literal),
            ("technical", self.temperatures.technical),
            ("plain_language", self.temperatures.plain_language),
            ("quality", self.temperatures.quality),
        ] {
            if !TEMPERATURE_RANGE.contains(&value) {
                return Err(anyhow!(
                    "Temperature for the {} stage must be in [0.0, 2.0], got {}",
                    name,
                    value
                ));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            model: default_model(),
            api_key: String::new(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            max_tokens: default_max_tokens(),
            temperatures: StageTemperatures::default(),
            log_level: LogLevel::default(),
        }
    }
}
