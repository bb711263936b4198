//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quizkit - quiz bank normalization CLI
#[derive(Parser, Debug)]
#[command(name = "quizkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a quiz CSV into the normalized question JSON
    Csv {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,

        /// Category label stamped on every record
        #[arg(long, default_value = "ディズニー")]
        category: String,

        /// Authorship tag stamped on every record
        #[arg(long, default_value = "disney")]
        authored_by: String,
    },

    /// Merge AI and human JSONL question banks into one JSON file
    Merge {
        /// AI-generated question bank (JSONL)
        #[arg(long)]
        ai: PathBuf,

        /// Human-authored question bank (JSONL)
        #[arg(long)]
        human: PathBuf,

        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,

        /// Category label stamped on every record
        #[arg(long, default_value = "ディズニー")]
        category: String,
    },

    /// Parse and convert inputs, report counts, write nothing
    Validate {
        /// Quiz CSV file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// AI-generated question bank (JSONL)
        #[arg(long)]
        ai: Option<PathBuf>,

        /// Human-authored question bank (JSONL)
        #[arg(long)]
        human: Option<PathBuf>,
    },
}
