use crate::data::QuestionStore;
use crate::models::Question;

use super::error::ApiError;

/// Router state: only the location of the question file.
#[derive(Debug, Clone)]
pub struct ServerState {
    pub store: QuestionStore,
}

impl ServerState {
    pub fn new(store: QuestionStore) -> Self {
        Self { store }
    }

    /// Load a fresh copy of the collection for one request.
    ///
    /// An unreadable file and an empty one are reported the same way.
    pub async fn questions(&self) -> Result<Vec<Question>, ApiError> {
        let questions = self.store.load_async().await;
        if questions.is_empty() {
            return Err(ApiError::source_unavailable());
        }
        Ok(questions)
    }
}
