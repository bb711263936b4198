//! Decoder types and traits
//!
//! Defines the core decoder abstractions.

use crate::error::{Error, Result};
use crate::types::JsonValue;

/// A record decoded from a source file, tagged with the 1-based line it
/// came from so conversion errors can point back at the input.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRecord {
    /// 1-based line number in the source file
    pub line: usize,
    /// The decoded record
    pub value: JsonValue,
}

impl SourceRecord {
    /// Create a new source record
    pub fn new(line: usize, value: JsonValue) -> Self {
        Self { line, value }
    }

    /// Look up a field on the record
    pub fn get(&self, field: &str) -> Option<&JsonValue> {
        self.value.get(field)
    }

    /// Look up a required string field, failing with a field error that
    /// carries this record's source line.
    pub fn require_str(&self, field: &str) -> Result<String> {
        self.get(field)
            .and_then(JsonValue::as_str)
            .map(str::to_string)
            .ok_or_else(|| Error::missing_field(field, self.line))
    }
}

/// Trait for decoding a source file body into records
pub trait RecordDecoder {
    /// Decode the file body into a list of records
    fn decode(&self, body: &str) -> Result<Vec<SourceRecord>>;
}
