use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single multiple-choice trivia question.
///
/// Field names on the wire match the question file, so a record served over
/// HTTP looks exactly like the record on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "pregunta")]
    pub prompt: String,
    #[serde(rename = "opciones")]
    pub choices: Vec<String>,
    #[serde(rename = "respuesta_correcta")]
    pub correct_index: usize,
}

/// Top-level shape of a question file.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionBank {
    #[serde(alias = "preguntas")]
    pub questions: Vec<Question>,
}

/// A question record that breaks one of the collection invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("question {id} has no options")]
    NoChoices { id: i64 },

    #[error("question {id} marks option {index} as correct but only has {len} options")]
    CorrectIndexOutOfRange { id: i64, index: usize, len: usize },

    #[error("question id {id} appears more than once")]
    DuplicateId { id: i64 },
}

impl Question {
    /// Text of the correct option, if the record is well-formed.
    pub fn correct_choice(&self) -> Option<&str> {
        self.choices.get(self.correct_index).map(String::as_str)
    }

    /// Check the per-record invariants.
    pub fn check(&self) -> Result<(), ValidationError> {
        if self.choices.is_empty() {
            return Err(ValidationError::NoChoices { id: self.id });
        }

        if self.correct_index >= self.choices.len() {
            return Err(ValidationError::CorrectIndexOutOfRange {
                id: self.id,
                index: self.correct_index,
                len: self.choices.len(),
            });
        }

        Ok(())
    }
}
