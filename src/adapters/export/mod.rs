//! Export Adapters.
//!
//! Implementations of the ReadmeWriter port.
//!
//! ## Available Adapters
//!
//! - `LocalReadmeWriter` - Writes README.md to a local directory

mod local_file;

pub use local_file::LocalReadmeWriter;
