//! CLI module
//!
//! Command-line interface for the conversion commands.
//!
//! # Commands
//!
//! - `csv` - Convert a quiz CSV into the normalized question JSON
//! - `merge` - Merge AI and human JSONL banks into one JSON file
//! - `validate` - Parse inputs and report counts without writing

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
