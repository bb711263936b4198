//! Common types used throughout Quizkit
//!
//! This module contains the normalized question schema, answer letter
//! mapping, and the positional authorship banding rule.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Question
// ============================================================================

/// A normalized quiz question as consumed by the quiz application.
///
/// Field order is the serialized field order. `answer` is optional: the
/// CSV source carries no resolved answer text, so records converted from
/// CSV omit the key entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Sequential identifier (`Q001`, `Q002`, ...)
    #[serde(rename = "questionID")]
    pub question_id: String,
    /// Search keyword, unused by current sources
    #[serde(default)]
    pub keyword: String,
    /// Domain label for the question bank
    pub category: String,
    /// Prompt text
    pub question: String,
    /// The four answer options, positions corresponding to letters A-D
    pub choice: [String; 4],
    /// Resolved text of the correct choice, when the source provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// Publication year, unused by current sources
    #[serde(default)]
    pub year: String,
    /// Source link, unused by current sources
    #[serde(default)]
    pub reference_url: String,
    /// Authorship tag (model name or "human")
    pub authored_by: String,
}

impl Question {
    /// Format a 1-based index as a sequential question ID (`Q001` style).
    ///
    /// Indexes above 999 widen naturally (`Q1000`).
    pub fn sequential_id(index: usize) -> String {
        format!("Q{index:03}")
    }
}

// ============================================================================
// Answer Letters
// ============================================================================

/// A lettered answer position (A-D) as found in raw question sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    /// Parse a letter from source text. Returns `None` for anything
    /// outside A-D, including lowercase and multi-character strings.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            _ => None,
        }
    }

    /// Choice index for this letter: {A:0, B:1, C:2, D:3}
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }

    /// Letter for a choice index, inverse of [`AnswerLetter::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::A),
            1 => Some(Self::B),
            2 => Some(Self::C),
            3 => Some(Self::D),
            _ => None,
        }
    }

    /// The letter as a string slice
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl std::fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Authorship Banding
// ============================================================================

/// A single band: records up to `upto` (1-based, inclusive) get `tag`
#[derive(Debug, Clone)]
struct Band {
    upto: usize,
    tag: String,
}

/// Positional rule assigning an authorship tag by record index within a
/// single input file.
///
/// The default banding matches the AI question bank layout: records 1-40
/// are tagged `GPT`, 41-80 `Claude`, and everything after `Gemini`.
#[derive(Debug, Clone)]
pub struct AuthorshipBands {
    bands: Vec<Band>,
    fallback: String,
}

impl Default for AuthorshipBands {
    fn default() -> Self {
        Self::new("Gemini")
            .with_band(40, "GPT")
            .with_band(80, "Claude")
    }
}

impl AuthorshipBands {
    /// Create an empty banding that assigns `fallback` to every record
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            bands: Vec::new(),
            fallback: fallback.into(),
        }
    }

    /// Add a band covering records up to `upto` (1-based, inclusive).
    ///
    /// Bands must be added in increasing `upto` order; the first band
    /// whose bound covers the position wins.
    #[must_use]
    pub fn with_band(mut self, upto: usize, tag: impl Into<String>) -> Self {
        self.bands.push(Band {
            upto,
            tag: tag.into(),
        });
        self
    }

    /// Tag for the record at `position` (1-based record index)
    pub fn tag_for(&self, position: usize) -> &str {
        self.bands
            .iter()
            .find(|band| position <= band.upto)
            .map_or(self.fallback.as_str(), |band| band.tag.as_str())
    }
}
