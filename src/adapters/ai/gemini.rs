//! Gemini Generator - Implementation of TextGenerator for the Google
//! Generative Language API.
//!
//! Talks to the `models/{model}:generateContent` REST endpoint with API-key
//! header authentication. Transient failures are retried with exponential
//! backoff up to the configured budget.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-pro")
//!     .with_timeout(Duration::from_secs(30));
//!
//! let generator = GeminiTextGenerator::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::ports::{
    GeneratedText, GenerationError, GenerationRequest, GeneratorInfo, TextGenerator,
};

/// Configuration for the Gemini generator.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gemini-pro").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-pro".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API generator implementation.
pub struct GeminiTextGenerator {
    config: GeminiConfig,
    client: Client,
}

impl GeminiTextGenerator {
    /// Creates a new Gemini generator with the given configuration.
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the generateContent endpoint URL.
    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// Converts our request to Gemini's format.
    fn to_gemini_request(&self, request: &GenerationRequest) -> GeminiRequest {
        let generation_config =
            if request.max_output_tokens.is_some() || request.temperature.is_some() {
                Some(GeminiGenerationConfig {
                    max_output_tokens: request.max_output_tokens,
                    temperature: request.temperature,
                })
            } else {
                None
            };

        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config,
        }
    }

    /// Sends a request and handles transport-level failures.
    async fn send_request(&self, request: &GenerationRequest) -> Result<Response, GenerationError> {
        let gemini_request = self.to_gemini_request(request);

        self.client
            .post(self.generate_url())
            .header("x-goog-api-key", self.config.api_key())
            .header("Content-Type", "application/json")
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    GenerationError::network(format!("Connection failed: {}", e))
                } else {
                    GenerationError::network(e.to_string())
                }
            })
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, GenerationError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(GenerationError::AuthenticationFailed),
            429 => {
                let retry_after = Self::parse_retry_after(&error_body);
                Err(GenerationError::rate_limited(retry_after))
            }
            400 | 404 => Err(GenerationError::invalid_request(error_body)),
            500..=599 => Err(GenerationError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(GenerationError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    /// Parses a retry delay from a 429 error body.
    fn parse_retry_after(error_body: &str) -> u32 {
        // Gemini reports RetryInfo as a "retryDelay" like "30s"
        if let Some(idx) = error_body.find("\"retryDelay\"") {
            let rest = &error_body[idx + 12..];
            if let Some(digits_start) = rest.find(|c: char| c.is_ascii_digit()) {
                let digits = &rest[digits_start..];
                if let Some(digits_end) = digits.find(|c: char| !c.is_ascii_digit()) {
                    if let Ok(secs) = digits[..digits_end].parse::<u32>() {
                        return secs;
                    }
                }
            }
        }
        30 // Default retry window
    }

    /// Parses a successful response into generated text.
    async fn parse_response(&self, response: Response) -> Result<GeneratedText, GenerationError> {
        let response = self.handle_response_status(response).await?;

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::parse(format!("Failed to parse response: {}", e)))?;

        let text = extract_text(gemini_response)?;
        Ok(GeneratedText::new(text, &self.config.model))
    }
}

#[async_trait]
impl TextGenerator for GeminiTextGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<GeneratedText, GenerationError> {
        debug!(model = %self.config.model, "Dispatching generation request");

        let mut last_error = GenerationError::network("No attempts made");
        let mut retry_count = 0;

        while retry_count <= self.config.max_retries {
            match self.send_request(&request).await {
                Ok(response) => match self.parse_response(response).await {
                    Ok(generated) => return Ok(generated),
                    Err(err) => {
                        if !err.is_retryable() || retry_count >= self.config.max_retries {
                            return Err(err);
                        }
                        last_error = err;
                    }
                },
                Err(err) => {
                    if !err.is_retryable() || retry_count >= self.config.max_retries {
                        return Err(err);
                    }
                    last_error = err;
                }
            }

            // Exponential backoff: 1s, 2s, 4s, ...
            let delay = Duration::from_secs(1 << retry_count);
            warn!(
                attempt = retry_count + 1,
                error = %last_error,
                "Generation attempt failed, backing off"
            );
            sleep(delay).await;
            retry_count += 1;
        }

        Err(last_error)
    }

    fn info(&self) -> GeneratorInfo {
        GeneratorInfo::new("gemini", &self.config.model)
    }
}

/// Extracts the first candidate's text, rejecting empty completions.
fn extract_text(response: GeminiResponse) -> Result<String, GenerationError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .map(|candidate| {
            candidate
                .content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(GenerationError::EmptyCompletion);
    }
    Ok(text)
}

// ----- Gemini API Types -----

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_works() {
        let config = GeminiConfig::new("test-key")
            .with_model("gemini-1.5-flash")
            .with_base_url("https://custom.api.com")
            .with_timeout(Duration::from_secs(10))
            .with_max_retries(5);

        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.base_url, "https://custom.api.com");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn generate_url_targets_the_configured_model() {
        let generator = GeminiTextGenerator::new(GeminiConfig::new("k").with_model("gemini-pro"));
        assert_eq!(
            generator.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn request_serializes_prompt_into_contents() {
        let generator = GeminiTextGenerator::new(GeminiConfig::new("k"));
        let request = GenerationRequest::new("Describe my project")
            .with_max_output_tokens(256)
            .with_temperature(0.5);

        let wire = generator.to_gemini_request(&request);
        let json = serde_json::to_value(&wire).unwrap();

        assert_eq!(
            json["contents"][0]["parts"][0]["text"],
            "Describe my project"
        );
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 256);
        assert_eq!(json["generationConfig"]["temperature"], 0.5);
    }

    #[test]
    fn request_omits_generation_config_when_unset() {
        let generator = GeminiTextGenerator::new(GeminiConfig::new("k"));
        let wire = generator.to_gemini_request(&GenerationRequest::new("p"));

        let json = serde_json::to_value(&wire).unwrap();
        assert!(json.get("generationConfig").is_none());
    }

    #[test]
    fn extract_text_joins_candidate_parts() {
        let response: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"A tool "},{"text":"for READMEs."}]}}]}"#,
        )
        .unwrap();

        assert_eq!(extract_text(response).unwrap(), "A tool for READMEs.");
    }

    #[test]
    fn extract_text_rejects_missing_candidates() {
        let response: GeminiResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(
            extract_text(response),
            Err(GenerationError::EmptyCompletion)
        ));
    }

    #[test]
    fn extract_text_rejects_whitespace_only_completions() {
        let response: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"  \n "}]}}]}"#,
        )
        .unwrap();

        assert!(matches!(
            extract_text(response),
            Err(GenerationError::EmptyCompletion)
        ));
    }

    #[test]
    fn parse_retry_after_reads_retry_delay() {
        let body = r#"{"error":{"details":[{"retryDelay":"42s"}]}}"#;
        assert_eq!(GeminiTextGenerator::parse_retry_after(body), 42);
    }

    #[test]
    fn parse_retry_after_defaults_without_delay_info() {
        assert_eq!(
            GeminiTextGenerator::parse_retry_after(r#"{"error":{"message":"slow down"}}"#),
            30
        );
    }

    #[test]
    fn info_reports_provider_and_model() {
        let generator =
            GeminiTextGenerator::new(GeminiConfig::new("k").with_model("gemini-1.5-flash"));
        let info = generator.info();

        assert_eq!(info.name, "gemini");
        assert_eq!(info.model, "gemini-1.5-flash");
    }
}
