//! JSONL bank merging

use crate::decode::SourceRecord;
use crate::error::{Error, Result};
use crate::types::{AnswerLetter, AuthorshipBands, Question};

/// Merges an AI-generated and a human-authored question bank into one
/// sequence with continuous IDs.
///
/// AI records are tagged by their position in the AI file via
/// [`AuthorshipBands`]; human records all get the same tag. The lettered
/// answer in each record is resolved to the text of the matching choice.
#[derive(Debug, Clone)]
pub struct MergeConverter {
    category: String,
    bands: AuthorshipBands,
    human_tag: String,
}

impl Default for MergeConverter {
    fn default() -> Self {
        Self {
            category: "ディズニー".to_string(),
            bands: AuthorshipBands::default(),
            human_tag: "human".to_string(),
        }
    }
}

impl MergeConverter {
    /// Create a converter with the default category, banding, and human tag
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category label stamped on every record
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the positional banding for AI records
    #[must_use]
    pub fn with_bands(mut self, bands: AuthorshipBands) -> Self {
        self.bands = bands;
        self
    }

    /// Set the tag for human-authored records
    #[must_use]
    pub fn with_human_tag(mut self, tag: impl Into<String>) -> Self {
        self.human_tag = tag.into();
        self
    }

    /// Merge both banks into one question list.
    ///
    /// IDs run sequentially across both files, AI records first. The
    /// banding position restarts per file and counts parsed records, so
    /// blank lines in the source never shift a band.
    pub fn convert(&self, ai: &[SourceRecord], human: &[SourceRecord]) -> Result<Vec<Question>> {
        let mut questions = Vec::with_capacity(ai.len() + human.len());

        for (position, record) in ai.iter().enumerate() {
            let tag = self.bands.tag_for(position + 1);
            questions.push(self.question_from_record(record, questions.len() + 1, tag)?);
        }

        for record in human {
            questions.push(self.question_from_record(
                record,
                questions.len() + 1,
                &self.human_tag,
            )?);
        }

        Ok(questions)
    }

    fn question_from_record(
        &self,
        record: &SourceRecord,
        id: usize,
        authored_by: &str,
    ) -> Result<Question> {
        let line = record.line;
        let question = record.require_str("question")?;
        let choice = require_choices(record)?;

        let letter_text = record.require_str("answer")?;
        let letter = AnswerLetter::parse(&letter_text)
            .ok_or_else(|| Error::invalid_letter(letter_text, line))?;
        let answer = choice[letter.index()].clone();

        Ok(Question {
            question_id: Question::sequential_id(id),
            keyword: String::new(),
            category: self.category.clone(),
            question,
            choice,
            answer: Some(answer),
            year: String::new(),
            reference_url: String::new(),
            authored_by: authored_by.to_string(),
        })
    }
}

/// Extract the `choices` field as exactly four strings
fn require_choices(record: &SourceRecord) -> Result<[String; 4]> {
    let line = record.line;
    let values = record
        .get("choices")
        .ok_or_else(|| Error::missing_field("choices", line))?
        .as_array()
        .ok_or_else(|| Error::malformed(line, "'choices' is not an array"))?;

    if values.len() != 4 {
        return Err(Error::malformed(
            line,
            format!("'choices' has {} entries, expected 4", values.len()),
        ));
    }

    let mut choices = Vec::with_capacity(4);
    for value in values {
        choices.push(
            value
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| Error::malformed(line, "'choices' entry is not a string"))?,
        );
    }

    choices
        .try_into()
        .map_err(|_| Error::malformed(line, "'choices' has wrong shape"))
}

/// Count questions per authorship tag, preserving first-seen order.
///
/// Summary lines are derived from the built records rather than counter
/// arithmetic, so they stay correct for any input size.
pub fn tag_counts(questions: &[Question]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for question in questions {
        match counts.iter_mut().find(|(tag, _)| *tag == question.authored_by) {
            Some((_, count)) => *count += 1,
            None => counts.push((question.authored_by.clone(), 1)),
        }
    }

    counts
}
