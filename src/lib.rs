//! README Studio - README Authoring Engine
//!
//! This crate implements an in-memory README document model with a
//! deterministic Markdown composer, template-seeded sections, and an
//! AI-assisted description workflow.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
