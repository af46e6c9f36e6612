//! # trivia-reader
//!
//! Multiple-choice trivia over a JSON question file, playable in the
//! terminal or through an HTTP API.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trivia_reader::{Trivia, TriviaError};
//!
//! fn main() -> Result<(), TriviaError> {
//!     // Load questions from a JSON file
//!     let trivia = Trivia::from_json("trivia_questions.json")?;
//!
//!     // Play on stdin/stdout
//!     trivia.play()?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod console;
mod data;
pub mod engine;
mod models;
pub mod protocol;
pub mod server;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use console::Session;
pub use data::{
    DEFAULT_QUESTIONS_PATH, LoadError, QuestionStore, load_questions_from_json, parse_questions,
    validate_questions,
};
pub use models::{Question, QuestionBank, ValidationError};

/// Error type for trivia operations.
#[derive(Debug, Error)]
pub enum TriviaError {
    /// Error loading questions from file.
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),

    /// The file loaded but there is nothing to play.
    #[error("no questions could be loaded from {}", .0.display())]
    NoQuestions(PathBuf),

    /// The HTTP listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// IO error during play or while serving.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A loaded question collection ready to be played in the terminal.
pub struct Trivia {
    questions: Vec<Question>,
}

impl Trivia {
    /// Create a game from a vector of questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Load a game from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use trivia_reader::Trivia;
    ///
    /// let trivia = Trivia::from_json("trivia_questions.json").expect("Failed to load questions");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, TriviaError> {
        Self::from_store(&QuestionStore::new(path.as_ref()))
    }

    /// Load a game through a store, failing when nothing could be loaded.
    ///
    /// Load failures are logged by the store before this returns.
    pub fn from_store(store: &QuestionStore) -> Result<Self, TriviaError> {
        let questions = store.load();
        if questions.is_empty() {
            return Err(TriviaError::NoQuestions(store.path().to_path_buf()));
        }
        Ok(Self::new(questions))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Run the menu loop on stdin/stdout until the player exits.
    pub fn play(&self) -> Result<(), TriviaError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Session::new(&self.questions, stdin.lock(), stdout.lock()).run()?;
        Ok(())
    }
}
