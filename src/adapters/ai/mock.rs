//! Mock Text Generator for testing.
//!
//! Provides a configurable mock implementation of the TextGenerator port,
//! allowing tests to run without calling a real generative API.
//!
//! # Features
//!
//! - Pre-configured completions
//! - Simulated delays for timeout testing
//! - Error injection for resilience testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let generator = MockTextGenerator::new()
//!     .with_completion("A concise project description.")
//!     .with_delay(Duration::from_millis(100));
//!
//! let generated = generator.generate(request).await?;
//! assert_eq!(generated.text, "A concise project description.");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    GeneratedText, GenerationError, GenerationRequest, GeneratorInfo, TextGenerator,
};

/// Mock text generator for testing.
///
/// Configurable to return specific completions, simulate delays, or inject
/// errors.
#[derive(Debug, Clone)]
pub struct MockTextGenerator {
    /// Pre-configured replies (consumed in order).
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    /// Generator info to return.
    info: GeneratorInfo,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<GenerationRequest>>>,
}

/// A configured mock reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return a successful completion.
    Completion(String),
    /// Return an error.
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate network error.
    Network { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u32 },
    /// Simulate an empty completion from the provider.
    EmptyCompletion,
}

impl From<MockError> for GenerationError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => {
                GenerationError::rate_limited(retry_after_secs)
            }
            MockError::Unavailable { message } => GenerationError::unavailable(message),
            MockError::AuthenticationFailed => GenerationError::AuthenticationFailed,
            MockError::Network { message } => GenerationError::network(message),
            MockError::Timeout { timeout_secs } => GenerationError::Timeout { timeout_secs },
            MockError::EmptyCompletion => GenerationError::EmptyCompletion,
        }
    }
}

impl Default for MockTextGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTextGenerator {
    /// Creates a new mock generator with default settings.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            info: GeneratorInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful completion to the queue.
    pub fn with_completion(self, text: impl Into<String>) -> Self {
        let mut replies = self.replies.lock().unwrap();
        replies.push_back(MockReply::Completion(text.into()));
        drop(replies);
        self
    }

    /// Adds an error reply to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        let mut replies = self.replies.lock().unwrap();
        replies.push_back(MockReply::Error(error));
        drop(replies);
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the generator info.
    pub fn with_generator_info(mut self, info: GeneratorInfo) -> Self {
        self.info = info;
        self
    }

    /// Returns the number of calls made to this generator.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Gets the next reply or a default.
    fn next_reply(&self) -> MockReply {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockReply::Completion("Mock completion".to_string()))
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<GeneratedText, GenerationError> {
        // Record the call
        self.calls.lock().unwrap().push(request);

        // Simulate delay
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        // Get configured reply
        match self.next_reply() {
            MockReply::Completion(text) => Ok(GeneratedText::new(text, &self.info.model)),
            MockReply::Error(err) => Err(err.into()),
        }
    }

    fn info(&self) -> GeneratorInfo {
        self.info.clone()
    }
}
