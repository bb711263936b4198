//! CSV row conversion

use crate::decode::SourceRecord;
use crate::error::Result;
use crate::types::Question;

/// Column holding the question prompt
pub const QUESTION_COLUMN: &str = "質問";

/// Column holding the correct answer letter
pub const CORRECT_COLUMN: &str = "正解";

/// Converts decoded quiz CSV rows into normalized questions.
///
/// Every record gets the same category and authorship tag. The correct
/// letter column must be present on every row, but the output schema for
/// CSV banks carries no `answer` field; the quiz application treats these
/// banks as classification-only.
#[derive(Debug, Clone)]
pub struct CsvConverter {
    category: String,
    authored_by: String,
}

impl Default for CsvConverter {
    fn default() -> Self {
        Self {
            category: "ディズニー".to_string(),
            authored_by: "disney".to_string(),
        }
    }
}

impl CsvConverter {
    /// Create a converter with default category and authorship tag
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category label stamped on every record
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the authorship tag stamped on every record
    #[must_use]
    pub fn with_authored_by(mut self, tag: impl Into<String>) -> Self {
        self.authored_by = tag.into();
        self
    }

    /// Convert decoded rows into questions with sequential IDs.
    ///
    /// Any row missing a required column fails the whole conversion.
    pub fn convert(&self, records: &[SourceRecord]) -> Result<Vec<Question>> {
        records
            .iter()
            .enumerate()
            .map(|(idx, record)| self.question_from_row(record, idx + 1))
            .collect()
    }

    fn question_from_row(&self, record: &SourceRecord, index: usize) -> Result<Question> {
        let choice = [
            record.require_str("A")?,
            record.require_str("B")?,
            record.require_str("C")?,
            record.require_str("D")?,
        ];
        let question = record.require_str(QUESTION_COLUMN)?;

        // The correct letter must exist even though it is not emitted
        record.require_str(CORRECT_COLUMN)?;

        Ok(Question {
            question_id: Question::sequential_id(index),
            keyword: String::new(),
            category: self.category.clone(),
            question,
            choice,
            answer: None,
            year: String::new(),
            reference_url: String::new(),
            authored_by: self.authored_by.clone(),
        })
    }
}
