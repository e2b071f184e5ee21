//! Text Generator Port - Interface for generative-text providers.
//!
//! This port abstracts the single asynchronous boundary of the system: the
//! call that turns a rendered prompt into replacement description text.
//! Implementations connect to an external LLM service; the core never sees
//! provider wire formats.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct CannedGenerator;
//!
//! #[async_trait]
//! impl TextGenerator for CannedGenerator {
//!     async fn generate(&self, request: GenerationRequest) -> Result<GeneratedText, GenerationError> {
//!         Ok(GeneratedText::new("A tiny library.", "canned"))
//!     }
//!
//!     fn info(&self) -> GeneratorInfo {
//!         GeneratorInfo::new("canned", "canned-1")
//!     }
//! }
//! ```

use async_trait::async_trait;

/// Port for generative-text interactions.
///
/// Implementations must return a non-blank completion or a typed error;
/// a blank completion is itself an error (`GenerationError::EmptyCompletion`)
/// so callers never have to decide what an empty success means.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a single completion for the given request.
    async fn generate(&self, request: GenerationRequest) -> Result<GeneratedText, GenerationError>;

    /// Get generator information (provider name, model).
    fn info(&self) -> GeneratorInfo;
}

/// Request for text generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// The fully rendered prompt text.
    pub prompt: String,
    /// Maximum tokens to generate, when the provider supports a cap.
    pub max_output_tokens: Option<u32>,
    /// Temperature for response randomness.
    pub temperature: Option<f32>,
}

impl GenerationRequest {
    /// Creates a request around a rendered prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_output_tokens: None,
            temperature: None,
        }
    }

    /// Sets the maximum output tokens.
    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = Some(max);
        self
    }

    /// Sets the temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// A successful generation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedText {
    /// The generated text.
    pub text: String,
    /// Model that produced it.
    pub model: String,
}

impl GeneratedText {
    /// Creates a generation result.
    pub fn new(text: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: model.into(),
        }
    }

    /// Returns true if the text is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Generator identity, used for logging and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorInfo {
    /// Provider name (e.g., "gemini", "mock").
    pub name: String,
    /// Model identifier.
    pub model: String,
}

impl GeneratorInfo {
    /// Creates generator info.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Text generation errors.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Rate limited by the provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse the provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },

    /// The provider returned empty or whitespace-only text.
    #[error("provider returned an empty completion")]
    EmptyCompletion,
}

impl GenerationError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Returns true if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GenerationError::RateLimited { .. }
                | GenerationError::Unavailable { .. }
                | GenerationError::Network(_)
                | GenerationError::Timeout { .. }
        )
    }
}
