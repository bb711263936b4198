//! Decoder implementations
//!
//! Each decoder handles a specific source file format.

use super::types::{RecordDecoder, SourceRecord};
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};

// ============================================================================
// JSONL Decoder
// ============================================================================

/// JSON Lines decoder (one JSON object per non-blank line)
#[derive(Debug, Clone, Default)]
pub struct JsonlDecoder;

impl JsonlDecoder {
    /// Create a new JSONL decoder
    pub fn new() -> Self {
        Self
    }
}

impl RecordDecoder for JsonlDecoder {
    fn decode(&self, body: &str) -> Result<Vec<SourceRecord>> {
        let mut records = Vec::new();

        for (line_num, line) in body.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let value: JsonValue = serde_json::from_str(line)
                .map_err(|e| Error::json_parse(line_num + 1, e.to_string()))?;

            records.push(SourceRecord::new(line_num + 1, value));
        }

        Ok(records)
    }
}

// ============================================================================
// CSV Decoder
// ============================================================================

/// CSV decoder with configurable delimiter.
///
/// The first line is the header; each data row becomes an object keyed by
/// header name. Every value is kept as a string: quiz fields are text, and
/// an option like `"1"` must survive as `"1"`, not the number 1. A row
/// shorter than the header simply lacks the trailing keys, which the
/// conversion layer reports as missing fields.
#[derive(Debug, Clone)]
pub struct CsvDecoder {
    /// Field delimiter
    delimiter: char,
}

impl Default for CsvDecoder {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl CsvDecoder {
    /// Create a new CSV decoder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a CSV decoder with a custom delimiter
    pub fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }
}

impl RecordDecoder for CsvDecoder {
    fn decode(&self, body: &str) -> Result<Vec<SourceRecord>> {
        let mut lines = body.lines().enumerate();

        // Header row; an empty file decodes to no records
        let headers: Vec<String> = match lines.next() {
            Some((_, header_line)) => parse_csv_line(header_line, self.delimiter)
                .ok_or_else(|| Error::csv_parse("unterminated quoted field in header"))?,
            None => return Ok(Vec::new()),
        };

        let mut records = Vec::new();

        for (line_idx, line) in lines {
            if line.trim().is_empty() {
                continue;
            }

            let fields = parse_csv_line(line, self.delimiter).ok_or_else(|| {
                Error::csv_parse(format!(
                    "unterminated quoted field at line {}",
                    line_idx + 1
                ))
            })?;

            let mut obj = JsonObject::new();
            for (i, header) in headers.iter().enumerate() {
                if let Some(field) = fields.get(i) {
                    obj.insert(header.clone(), JsonValue::String(field.clone()));
                }
            }

            records.push(SourceRecord::new(line_idx + 1, JsonValue::Object(obj)));
        }

        Ok(records)
    }
}

/// Parse a CSV line into fields. Returns `None` if a quoted field is
/// still open at the end of the line.
fn parse_csv_line(line: &str, delimiter: char) -> Option<Vec<String>> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '"' {
            if in_quotes {
                // Check for escaped quote
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                in_quotes = true;
            }
        } else if c == delimiter && !in_quotes {
            fields.push(current.trim().to_string());
            current = String::new();
        } else {
            current.push(c);
        }
    }

    if in_quotes {
        return None;
    }

    fields.push(current.trim().to_string());
    Some(fields)
}
