//! Configuration management for the Water Quality Advisor Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with WQA_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Forecast provider configuration
    pub forecast: ForecastConfig,

    /// Remote prediction endpoints
    pub prediction: PredictionConfig,

    /// Text-generation service configuration
    pub ai: AiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastConfig {
    /// Forecast API base URL
    pub base_url: String,

    /// Number of forecast days to request
    pub forecast_days: u8,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PredictionConfig {
    /// Contamination-probability service endpoint
    pub contamination_url: String,

    /// Disease-risk service endpoint
    pub disease_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AiConfig {
    /// Text-generation API base URL
    pub base_url: String,

    /// Text-generation API key
    pub api_key: String,

    /// Model identifier
    pub model: String,

    /// Maximum tokens per generation
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("WQA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("forecast.base_url", "https://api.open-meteo.com")?
            .set_default("forecast.forecast_days", 1)?
            .set_default(
                "prediction.contamination_url",
                "https://water-contamination-probability.onrender.com/predict",
            )?
            .set_default(
                "prediction.disease_url",
                "https://water-disease-prediction.onrender.com/predict",
            )?
            .set_default("ai.base_url", "https://api.cohere.ai")?
            .set_default("ai.api_key", "")?
            .set_default("ai.model", "command-r-plus")?
            .set_default("ai.max_tokens", 400)?
            .set_default("ai.temperature", 0.7)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (WQA_ prefix)
            .add_source(
                Environment::with_prefix("WQA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
