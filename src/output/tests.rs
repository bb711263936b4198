//! Tests for output module

use super::*;
use crate::types::Question;
use pretty_assertions::assert_eq;

fn sample_question(id: usize, answer: Option<&str>) -> Question {
    Question {
        question_id: Question::sequential_id(id),
        keyword: String::new(),
        category: "ディズニー".to_string(),
        question: "ミッキーの犬の名前は？".to_string(),
        choice: ["プルート", "グーフィー", "ドナルド", "チップ"].map(String::from),
        answer: answer.map(String::from),
        year: String::new(),
        reference_url: String::new(),
        authored_by: "GPT".to_string(),
    }
}

#[test]
fn test_render_two_space_indent() {
    let writer = QuestionWriter::new();
    let json = writer.render(&[sample_question(1, Some("プルート"))]).unwrap();

    assert!(json.starts_with("[\n  {\n    \"questionID\": \"Q001\""));
}

#[test]
fn test_render_leaves_non_ascii_unescaped() {
    let writer = QuestionWriter::new();
    let json = writer.render(&[sample_question(1, None)]).unwrap();

    assert!(json.contains("ディズニー"));
    assert!(json.contains("プルート"));
    assert!(!json.contains("\\u"));
}

#[test]
fn test_render_omits_missing_answer() {
    let writer = QuestionWriter::new();
    let json = writer.render(&[sample_question(1, None)]).unwrap();
    assert!(!json.contains("\"answer\""));

    let json = writer.render(&[sample_question(1, Some("プルート"))]).unwrap();
    assert!(json.contains("\"answer\": \"プルート\""));
}

#[test]
fn test_render_empty_list() {
    let writer = QuestionWriter::new();
    assert_eq!(writer.render(&[]).unwrap(), "[]");
}

#[test]
fn test_write_and_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.json");
    let questions = vec![sample_question(1, Some("プルート")), sample_question(2, None)];

    QuestionWriter::new().write(&questions, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<Question> = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed, questions);
}

#[test]
fn test_write_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.json");

    QuestionWriter::new()
        .write(&[sample_question(1, None)], &path)
        .unwrap();

    assert!(path.exists());
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn test_write_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.json");
    let questions = vec![sample_question(1, Some("プルート"))];

    QuestionWriter::new().write(&questions, &path).unwrap();
    let first = std::fs::read(&path).unwrap();

    QuestionWriter::new().write(&questions, &path).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
}
