//! `scrivener` — a small, focused batch transcription pipeline.
//!
//! This crate provides:
//! - Input discovery (explicit lists, list files, recursive directory scans)
//! - A pluggable transcription capability boundary
//! - Per-input transcript records with batch failure accounting
//! - Persisted transcript artifacts in a fixed text layout (plus JSON)
//!
//! The library is designed to be used by both CLI tools and larger jobs, with an
//! emphasis on predictable sequential processing and per-input failure isolation:
//! one corrupt recording never costs you the rest of the batch.

// High-level API (most consumers should start here).
pub mod opts;
pub mod pipeline;

// Input discovery.
pub mod input;

// Transcript data structures and batch accounting.
pub mod summary;
pub mod transcript;

// The capability boundary and built-in backends.
pub mod backends;
pub mod transcriber;

// Artifact format selection, encoding, and persistence.
pub mod json_encoder;
pub mod output_type;
pub mod persist;
pub mod text_encoder;
pub mod transcript_encoder;

// Language selection shared by the CLI and library code.
pub mod language;

// Logging configuration and control.
#[cfg(feature = "logging")]
pub mod logging;

pub mod error;

pub use error::{Error, Result};
