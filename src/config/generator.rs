//! Text generator configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Text generator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Gemini API key
    pub api_key: Option<String>,

    /// Model to request
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on failure
    #[serde(default = "default_retries")]
    pub max_retries: u32,
}

impl GeneratorConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate generator configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired("GEMINI_API_KEY"));
        }

        if self.model.trim().is_empty() {
            return Err(ValidationError::EmptyModel);
        }

        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
        }
    }
}

fn default_model() -> String {
    "gemini-pro".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_retries() -> u32 {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_config_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_retries, 3);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_timeout_duration() {
        let config = GeneratorConfig {
            timeout_secs: 60,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_has_api_key_rejects_empty() {
        let config = GeneratorConfig {
            api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_validation_missing_key() {
        let config = GeneratorConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("GEMINI_API_KEY"))
        ));
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = GeneratorConfig {
            api_key: Some("AIza-test".to_string()),
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_validation_blank_model() {
        let config = GeneratorConfig {
            api_key: Some("AIza-test".to_string()),
            model: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::EmptyModel)));
    }

    #[test]
    fn test_validation_valid_config() {
        let config = GeneratorConfig {
            api_key: Some("AIza-test".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
