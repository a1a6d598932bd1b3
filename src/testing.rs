//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Question, QuestionSet};

/// The four options every helper-built question offers.
pub const OPTIONS: [&str; 4] = ["A", "B", "C", "D"];

/// Create a four-option question with the given correct option.
pub fn make_question(text: &str, answer: &str, chapter: &str) -> Question {
    Question {
        text: text.to_string(),
        options: OPTIONS.iter().map(|o| o.to_string()).collect(),
        answer: answer.to_string(),
        explanation: Some(format!("Explanation for {}", text)),
        chapter: chapter.to_string(),
        image: None,
    }
}

/// Create a question identified only by its answer (chapter "General").
pub fn make_answer_only(answer: &str) -> Question {
    make_question(&format!("Question with answer {}", answer), answer, "General")
}

/// Create a year-style set (no declared chapters).
pub fn make_set(title: &str, questions: Vec<Question>) -> QuestionSet {
    QuestionSet {
        title: title.to_string(),
        chapters: None,
        questions,
    }
}

/// Create a topic-style set with declared chapters.
pub fn make_topic_set(title: &str, chapters: &[&str], questions: Vec<Question>) -> QuestionSet {
    QuestionSet {
        title: title.to_string(),
        chapters: Some(chapters.iter().map(|c| c.to_string()).collect()),
        questions,
    }
}

/// Wrap answers as the dense `Option` array quiz mode accumulates.
pub fn answers(values: &[Option<&str>]) -> Vec<Option<String>> {
    values.iter().map(|v| v.map(str::to_string)).collect()
}
