use serde::Serialize;
use thiserror::Error;

use crate::models::Question;

/// A raw answer after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Zero-based index into the question's choices.
    Index(usize),
    /// Neither a valid option number nor the text of an option.
    Invalid,
}

/// Rejected answer submissions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("enter a number from 1 to {choices} or the exact text of an option")]
    InvalidFormat { choices: usize },

    #[error("invalid answer {index}: must be a number between 0 and {}", .choices.saturating_sub(1))]
    OutOfRange { index: i64, choices: usize },
}

impl Answer {
    pub fn index(self) -> Option<usize> {
        match self {
            Answer::Index(index) => Some(index),
            Answer::Invalid => None,
        }
    }
}

/// Normalize a typed answer: a 1-based option number, or the text of an
/// option compared case-insensitively. Numbers take precedence over text.
pub fn normalize(raw: &str, choices: &[String]) -> Answer {
    let raw = raw.trim();

    // Only plain numerals: no sign, no leading zeros.
    let canonical = raw.bytes().all(|b| b.is_ascii_digit()) && !raw.starts_with('0');
    if canonical {
        if let Ok(number) = raw.parse::<usize>() {
            if (1..=choices.len()).contains(&number) {
                return Answer::Index(number - 1);
            }
        }
    }

    let wanted = raw.to_lowercase();
    choices
        .iter()
        .position(|choice| choice.to_lowercase() == wanted)
        .map_or(Answer::Invalid, Answer::Index)
}

/// Range-check a zero-based index submitted over the wire.
pub fn check_index(index: i64, choices: &[String]) -> Result<usize, AnswerError> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < choices.len())
        .ok_or(AnswerError::OutOfRange {
            index,
            choices: choices.len(),
        })
}

pub fn is_correct(index: usize, correct_index: usize) -> bool {
    index == correct_index
}

/// Outcome of checking one answer against one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub question_id: i64,
    pub user_answer: usize,
    pub correct_answer: usize,
    pub is_correct: bool,
    pub user_choice_text: String,
    pub correct_choice_text: String,
}

/// Check an already range-checked index against a question.
pub fn verify(question: &Question, index: usize) -> Verdict {
    let text_at = |i: usize| question.choices.get(i).cloned().unwrap_or_default();

    Verdict {
        question_id: question.id,
        user_answer: index,
        correct_answer: question.correct_index,
        is_correct: is_correct(index, question.correct_index),
        user_choice_text: text_at(index),
        correct_choice_text: text_at(question.correct_index),
    }
}
