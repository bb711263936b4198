//! JSON question file writer
//!
//! Provides the writer for the normalized question JSON consumed by the
//! quiz application: a top-level array, 2-space indent, UTF-8 with
//! non-ASCII characters left unescaped.

use crate::error::{Error, Result};
use crate::types::Question;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Writer for the normalized question JSON file.
///
/// Output is pretty-printed with 2-space indentation. Writes are atomic:
/// the file is written to a temp path and renamed into place, so a failed
/// run never leaves a partially written question file behind.
#[derive(Debug, Clone, Default)]
pub struct QuestionWriter;

impl QuestionWriter {
    /// Create a new writer
    pub fn new() -> Self {
        Self
    }

    /// Render the question list as the output JSON text
    pub fn render(&self, questions: &[Question]) -> Result<String> {
        serde_json::to_string_pretty(questions)
            .map_err(|e| Error::output(format!("Failed to serialize questions: {e}")))
    }

    /// Write the question list to `path`
    pub fn write(&self, questions: &[Question], path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let contents = self.render(questions)?;

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &contents).map_err(|e| {
            Error::output(format!(
                "Failed to write {}: {e}",
                temp_path.display()
            ))
        })?;

        fs::rename(&temp_path, path).map_err(|e| {
            Error::output(format!("Failed to rename into {}: {e}", path.display()))
        })?;

        debug!("Wrote {} questions to {}", questions.len(), path.display());
        Ok(())
    }
}
