use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{Question, QuestionBank, ValidationError};

pub const DEFAULT_QUESTIONS_PATH: &str = "trivia_questions.json";

/// Why a question source could not be turned into a collection.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("question file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a valid question file: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} failed validation: {}", .path.display(), summarize(.errors))]
    Invalid {
        path: PathBuf,
        errors: Vec<ValidationError>,
    },
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl LoadError {
    fn from_io(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Unreadable {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

/// Parse the contents of a question file.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, serde_json::Error> {
    let bank: QuestionBank = serde_json::from_str(json)?;
    Ok(bank.questions)
}

/// Load every question from a JSON file, without any invariant checks.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    let json_content = fs::read_to_string(path).map_err(|err| LoadError::from_io(path, err))?;

    parse_questions(&json_content).map_err(|source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Collect every invariant violation in a collection, in collection order.
pub fn validate_questions(questions: &[Question]) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for question in questions {
        if let Err(err) = question.check() {
            errors.push(err);
        }
        if !seen.insert(question.id) {
            errors.push(ValidationError::DuplicateId { id: question.id });
        }
    }

    errors
}

/// Handle to an on-disk question file.
///
/// The store holds no questions itself: every load reads the file again, so
/// callers always see the current contents and nothing is shared between
/// loads.
#[derive(Debug, Clone)]
pub struct QuestionStore {
    path: PathBuf,
    strict: bool,
}

impl QuestionStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            strict: false,
        }
    }

    /// Reject collections that break the record invariants instead of
    /// only warning about them.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection, returning the typed failure.
    pub fn try_load(&self) -> Result<Vec<Question>, LoadError> {
        let questions = load_questions_from_json(&self.path)?;
        self.check(questions)
    }

    /// Async twin of [`QuestionStore::try_load`].
    pub async fn try_load_async(&self) -> Result<Vec<Question>, LoadError> {
        let json_content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|err| LoadError::from_io(&self.path, err))?;

        let questions = parse_questions(&json_content).map_err(|source| LoadError::Malformed {
            path: self.path.clone(),
            source,
        })?;

        self.check(questions)
    }

    /// Load the collection, reporting any failure and yielding an empty list.
    pub fn load(&self) -> Vec<Question> {
        self.try_load().unwrap_or_else(|err| report(&err))
    }

    /// Async twin of [`QuestionStore::load`].
    pub async fn load_async(&self) -> Vec<Question> {
        match self.try_load_async().await {
            Ok(questions) => questions,
            Err(err) => report(&err),
        }
    }

    fn check(&self, questions: Vec<Question>) -> Result<Vec<Question>, LoadError> {
        let errors = validate_questions(&questions);
        if errors.is_empty() {
            tracing::debug!(
                path = %self.path.display(),
                count = questions.len(),
                "loaded questions"
            );
            return Ok(questions);
        }

        if self.strict {
            return Err(LoadError::Invalid {
                path: self.path.clone(),
                errors,
            });
        }

        for err in &errors {
            tracing::warn!(path = %self.path.display(), "{err}");
        }
        Ok(questions)
    }
}

fn report(err: &LoadError) -> Vec<Question> {
    tracing::error!("{err}");
    Vec::new()
}
