//! Integration tests for the full conversion flow
//!
//! Tests the end-to-end path: source file → decode → convert → JSON output

use pretty_assertions::assert_eq;
use quizkit::convert::{CsvConverter, MergeConverter};
use quizkit::decode::{CsvDecoder, JsonlDecoder, RecordDecoder};
use quizkit::output::QuestionWriter;
use quizkit::Question;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn ai_jsonl(count: usize) -> String {
    (0..count)
        .map(|i| {
            format!(
                "{{\"question\": \"AI question {i}?\", \"choices\": [\"w\", \"x\", \"y\", \"z\"], \"answer\": \"B\"}}\n"
            )
        })
        .collect()
}

fn human_jsonl(count: usize) -> String {
    (0..count)
        .map(|i| {
            format!(
                "{{\"question\": \"Human question {i}?\", \"choices\": [\"p\", \"q\", \"r\", \"s\"], \"answer\": \"D\"}}\n"
            )
        })
        .collect()
}

// ============================================================================
// CSV End-to-End Tests
// ============================================================================

#[test]
fn test_csv_file_to_json_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("questions.json");

    let csv = "A,B,C,D,質問,正解\n\
               ミニー,デイジー,クラリス,マリー,ミッキーの恋人は？,A\n\
               1928,1930,1934,1937,ミッキーのデビューは何年？,A\n";

    let rows = CsvDecoder::new().decode(csv).unwrap();
    let questions = CsvConverter::new().convert(&rows).unwrap();
    QuestionWriter::new().write(&questions, &output).unwrap();

    let contents = fs::read_to_string(&output).unwrap();
    let parsed: Value = serde_json::from_str(&contents).unwrap();
    let array = parsed.as_array().unwrap();

    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["questionID"], "Q001");
    assert_eq!(array[1]["questionID"], "Q002");
    assert_eq!(array[0]["question"], "ミッキーの恋人は？");
    assert_eq!(array[0]["choice"][0], "ミニー");
    assert_eq!(array[0]["authored_by"], "disney");
    assert_eq!(array[1]["choice"][1], "1930");

    // CSV banks are classification-only: no answer key in the output
    assert!(array.iter().all(|q| q.get("answer").is_none()));

    // Non-ASCII is written unescaped
    assert!(contents.contains("ミッキーの恋人は？"));
    assert!(!contents.contains("\\u"));
}

#[test]
fn test_csv_missing_column_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("questions.json");

    let csv = "A,B,C,D,質問\nok,ok,ok,ok,no correct column\n";

    let rows = CsvDecoder::new().decode(csv).unwrap();
    let result = CsvConverter::new()
        .convert(&rows)
        .and_then(|qs| QuestionWriter::new().write(&qs, &output));

    assert!(result.is_err());
    assert!(!output.exists());
}

// ============================================================================
// Merge End-to-End Tests
// ============================================================================

#[test]
fn test_merge_files_to_json_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("questions.json");

    let ai = JsonlDecoder::new().decode(&ai_jsonl(120)).unwrap();
    let human = JsonlDecoder::new().decode(&human_jsonl(120)).unwrap();

    let questions = MergeConverter::new().convert(&ai, &human).unwrap();
    QuestionWriter::new().write(&questions, &output).unwrap();

    let parsed: Vec<Question> = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(parsed.len(), 240);

    // Continuous IDs across both files
    assert_eq!(parsed[0].question_id, "Q001");
    assert_eq!(parsed[119].question_id, "Q120");
    assert_eq!(parsed[120].question_id, "Q121");
    assert_eq!(parsed[239].question_id, "Q240");

    // 40/40/rest banding, then the human tag
    assert_eq!(parsed[0].authored_by, "GPT");
    assert_eq!(parsed[40].authored_by, "Claude");
    assert_eq!(parsed[80].authored_by, "Gemini");
    assert_eq!(parsed[120].authored_by, "human");

    // Letter B resolves to the second choice
    assert_eq!(parsed[0].answer.as_deref(), Some("x"));
    assert_eq!(parsed[120].answer.as_deref(), Some("s"));
}

#[test]
fn test_merge_answer_matches_a_choice() {
    let ai = JsonlDecoder::new().decode(&ai_jsonl(10)).unwrap();
    let questions = MergeConverter::new().convert(&ai, &[]).unwrap();

    for q in &questions {
        let answer = q.answer.as_deref().unwrap();
        assert!(q.choice.iter().any(|c| c == answer));
    }
}

#[test]
fn test_merge_blank_lines_skipped() {
    let body = format!("\n{}\n\n{}", ai_jsonl(1), ai_jsonl(1));
    let ai = JsonlDecoder::new().decode(&body).unwrap();
    let questions = MergeConverter::new().convert(&ai, &[]).unwrap();

    assert_eq!(questions.len(), 2);
    assert_eq!(questions[1].question_id, "Q002");
}

#[test]
fn test_merge_invalid_letter_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("questions.json");

    let body = "{\"question\": \"q?\", \"choices\": [\"a\", \"b\", \"c\", \"d\"], \"answer\": \"E\"}\n";
    let ai = JsonlDecoder::new().decode(body).unwrap();

    let result = MergeConverter::new()
        .convert(&ai, &[])
        .and_then(|qs| QuestionWriter::new().write(&qs, &output));

    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn test_merge_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let first_path = dir.path().join("first.json");
    let second_path = dir.path().join("second.json");

    let ai = JsonlDecoder::new().decode(&ai_jsonl(45)).unwrap();
    let human = JsonlDecoder::new().decode(&human_jsonl(3)).unwrap();

    let questions = MergeConverter::new().convert(&ai, &human).unwrap();
    QuestionWriter::new().write(&questions, &first_path).unwrap();

    let questions = MergeConverter::new().convert(&ai, &human).unwrap();
    QuestionWriter::new().write(&questions, &second_path).unwrap();

    assert_eq!(
        fs::read(&first_path).unwrap(),
        fs::read(&second_path).unwrap()
    );
}
