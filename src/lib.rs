//! # Quizkit
//!
//! A minimal, Rust-native toolkit for normalizing quiz question banks.
//! Converts raw question sources (CSV, JSONL) into the single JSON schema
//! consumed by the quiz application.
//!
//! ## Features
//!
//! - **CSV conversion**: header-indexed quiz CSVs to normalized question records
//! - **JSONL merging**: AI-generated and human-authored banks merged into one
//!   sequence with continuous IDs and positional authorship tags
//! - **Answer resolution**: lettered answers (A-D) resolved to choice text
//! - **Atomic output**: pretty-printed UTF-8 JSON, written all-or-nothing
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quizkit::convert::MergeConverter;
//! use quizkit::decode::{JsonlDecoder, RecordDecoder};
//! use quizkit::output::QuestionWriter;
//! use quizkit::Result;
//!
//! fn main() -> Result<()> {
//!     let ai = JsonlDecoder::new().decode(&std::fs::read_to_string("ai.jsonl")?)?;
//!     let human = JsonlDecoder::new().decode(&std::fs::read_to_string("human.jsonl")?)?;
//!
//!     let questions = MergeConverter::new().convert(&ai, &human)?;
//!     QuestionWriter::new().write(&questions, "questions.json")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      CLI / Runner                       │
//! │        csv          merge          validate             │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//! ┌──────────────┬───────────┴───────────┬─────────────────┐
//! │    Decode    │        Convert        │     Output      │
//! ├──────────────┼───────────────────────┼─────────────────┤
//! │ CSV          │ Row → Question        │ Pretty JSON     │
//! │ JSONL        │ Letter → answer text  │ Atomic write    │
//! │              │ Authorship banding    │                 │
//! └──────────────┴───────────────────────┴─────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the toolkit
pub mod error;

/// Common domain types and type aliases
pub mod types;

/// Source file decoders (CSV, JSONL)
pub mod decode;

/// Record-to-question conversion
pub mod convert;

/// JSON output writer
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::{AnswerLetter, AuthorshipBands, Question};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
