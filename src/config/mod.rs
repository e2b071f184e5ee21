//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `README_STUDIO_` prefix and nested values use underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use readme_studio::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Generating with {}", config.generator.model);
//! ```

mod error;
mod export;
mod generator;

pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use generator::GeneratorConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for README Studio.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Text generator configuration (Gemini)
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// README export configuration
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `README_STUDIO` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `README_STUDIO__GENERATOR__API_KEY=...` -> `generator.api_key = ...`
    /// - `README_STUDIO__EXPORT__OUTPUT_DIR=./out` -> `export.output_dir = ./out`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("README_STUDIO")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Performs semantic validation of configuration:
    /// - API key presence
    /// - Timeout constraints
    /// - Output directory shape
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.generator.validate()?;
        self.export.validate()?;
        Ok(())
    }
}
