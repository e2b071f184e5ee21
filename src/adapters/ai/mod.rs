//! Text Generator Adapters.
//!
//! Implementations of the TextGenerator port.
//!
//! ## Available Adapters
//!
//! - `GeminiTextGenerator` - Google Generative Language API (Gemini models)
//! - `MockTextGenerator` - Configurable mock for testing

mod gemini;
mod mock;

pub use gemini::{GeminiConfig, GeminiTextGenerator};
pub use mock::{MockError, MockReply, MockTextGenerator};
