//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, validation errors)
//! - `readme` - README document aggregate, sections, templates, and the
//!   in-memory document store

pub mod foundation;
pub mod readme;
