//! Runtime settings for the two front-ends.

use std::path::PathBuf;

use crate::data::{DEFAULT_QUESTIONS_PATH, QuestionStore};

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8000;

/// Where to find questions and how much to trust them.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub questions: PathBuf,
    pub strict: bool,
}

impl SourceConfig {
    pub fn store(&self) -> QuestionStore {
        QuestionStore::new(&self.questions).strict(self.strict)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            questions: PathBuf::from(DEFAULT_QUESTIONS_PATH),
            strict: false,
        }
    }
}

/// Settings for `trivia serve`.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub host: String,
    pub port: u16,
    pub source: SourceConfig,
}

impl ServeConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            source: SourceConfig::default(),
        }
    }
}
