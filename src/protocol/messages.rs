//! Request and response bodies for the HTTP service.
//!
//! All bodies are serialized as JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engine::Verdict;
use crate::models::Question;

/// Body of `POST /verify_answer/{id}`.
///
/// Either `{"user_answer": 2}` or a bare `2` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VerifyRequest {
    Wrapped { user_answer: i64 },
    Bare(i64),
}

impl VerifyRequest {
    pub fn user_answer(self) -> i64 {
        match self {
            VerifyRequest::Wrapped { user_answer } | VerifyRequest::Bare(user_answer) => {
                user_answer
            }
        }
    }
}

/// Static listing served at `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    pub message: String,
    pub endpoints: BTreeMap<String, String>,
}

pub fn capabilities() -> Capabilities {
    let endpoints = [
        ("list_questions", "GET /list_questions"),
        ("get_question", "GET /question/{question_id}"),
        ("verify_answer", "POST /verify_answer/{question_id}"),
        ("add_question", "POST /add_question"),
        ("update_question", "PUT /update_question"),
        ("delete_question", "DELETE /delete_question"),
    ]
    .into_iter()
    .map(|(name, route)| (name.to_string(), route.to_string()))
    .collect();

    Capabilities {
        message: "Welcome to the Trivia Game API!".to_string(),
        endpoints,
    }
}

/// Body of `GET /list_questions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    pub message: String,
    pub total: usize,
    pub questions: Vec<Question>,
}

impl ListResponse {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            message: format!("Loaded {} questions", questions.len()),
            total: questions.len(),
            questions,
        }
    }
}

/// Body of `GET /question/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub message: String,
    pub question: Question,
}

impl QuestionResponse {
    pub fn new(question: Question) -> Self {
        Self {
            message: format!("Found question with ID {}", question.id),
            question,
        }
    }
}

/// Body of `POST /verify_answer/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyResponse {
    pub message: String,
    pub result: Verdict,
}

impl VerifyResponse {
    pub fn new(result: Verdict) -> Self {
        Self {
            message: "Answer verified".to_string(),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_request_shapes() {
        let wrapped: VerifyRequest = serde_json::from_str(r#"{"user_answer": 2}"#).unwrap();
        assert_eq!(wrapped.user_answer(), 2);

        let bare: VerifyRequest = serde_json::from_str("3").unwrap();
        assert_eq!(bare.user_answer(), 3);

        let negative: VerifyRequest = serde_json::from_str(r#"{"user_answer": -1}"#).unwrap();
        assert_eq!(negative.user_answer(), -1);

        assert!(serde_json::from_str::<VerifyRequest>(r#"{"user_answer": "two"}"#).is_err());
        assert!(serde_json::from_str::<VerifyRequest>(r#"{}"#).is_err());
    }

    #[test]
    fn test_capabilities_lists_every_route() {
        let caps = capabilities();
        assert_eq!(caps.endpoints.len(), 6);
        assert_eq!(caps.endpoints["verify_answer"], "POST /verify_answer/{question_id}");

        let json = serde_json::to_value(&caps).unwrap();
        assert!(json["endpoints"]["delete_question"].is_string());
    }

    #[test]
    fn test_list_response_counts() {
        let response = ListResponse::new(Vec::new());
        assert_eq!(response.total, 0);
        assert_eq!(response.message, "Loaded 0 questions");
    }
}
