use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::BlendWeights;

/// Engine configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub recommendation: RecommendationSettings,
    #[serde(default)]
    pub sampler: SamplerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_direct_weight")]
    pub direct: f64,
    #[serde(default = "default_semantic_weight")]
    pub semantic: f64,
}

impl WeightsConfig {
    pub fn blend(&self) -> BlendWeights {
        BlendWeights {
            direct: self.direct,
            semantic: self.semantic,
        }
    }
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            direct: default_direct_weight(),
            semantic: default_semantic_weight(),
        }
    }
}

fn default_direct_weight() -> f64 { 0.7 }
fn default_semantic_weight() -> f64 { 0.3 }

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RecommendationSettings {
    pub default_limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SamplerSettings {
    pub percentage: Option<u8>,
    pub min_count: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with GATHR_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with GATHR_)
            // e.g., GATHR_SAMPLER__PERCENTAGE -> sampler.percentage
            .add_source(
                Environment::with_prefix("GATHR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("GATHR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
