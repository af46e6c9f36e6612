//! Error bodies for the HTTP service.
//!
//! Every domain error is answered with a status code and a JSON body of the
//! form `{"error": "...", "kind": "...", ...context}`.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::engine::AnswerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    SourceUnavailable,
    QuestionNotFound,
    AnswerOutOfRange,
    InvalidRequest,
    NotSupported,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::SourceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::QuestionNotFound => StatusCode::NOT_FOUND,
            ErrorKind::AnswerOutOfRange | ErrorKind::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorKind::NotSupported => StatusCode::NOT_IMPLEMENTED,
        }
    }
}

#[derive(Debug)]
pub struct ApiError {
    kind: ErrorKind,
    status: StatusCode,
    message: String,
    context: Map<String, Value>,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: kind.status(),
            message: message.into(),
            context: Map::new(),
        }
    }

    pub fn source_unavailable() -> Self {
        Self::new(ErrorKind::SourceUnavailable, "Could not load the questions")
    }

    pub fn question_not_found(id: i64, available_ids: Vec<i64>) -> Self {
        Self::new(
            ErrorKind::QuestionNotFound,
            format!("No question found with ID {}", id),
        )
        .with("available_ids", available_ids)
    }

    pub fn answer_out_of_range(err: &AnswerError, options: &[String]) -> Self {
        Self::new(ErrorKind::AnswerOutOfRange, err.to_string()).with("available_options", options)
    }

    pub fn not_supported(operation: &str) -> Self {
        Self::new(
            ErrorKind::NotSupported,
            format!("{} is not supported yet", operation),
        )
    }

    /// Attach an extra field to the error body.
    pub fn with(mut self, key: &str, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.context.insert(key.to_string(), value);
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn rejected(status: StatusCode, message: String) -> Self {
        Self {
            status,
            ..Self::new(ErrorKind::InvalidRequest, message)
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::rejected(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::rejected(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = Map::new();
        body.insert("error".to_string(), Value::String(self.message));
        body.insert(
            "kind".to_string(),
            serde_json::to_value(self.kind).unwrap_or(Value::Null),
        );
        body.extend(self.context);

        (self.status, Json(Value::Object(body))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::source_unavailable().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::question_not_found(9, vec![1]).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::not_supported("Adding questions").status(),
            StatusCode::NOT_IMPLEMENTED
        );

        let err = AnswerError::OutOfRange {
            index: 9,
            choices: 4,
        };
        let api = ApiError::answer_out_of_range(&err, &["a".to_string()]);
        assert_eq!(api.kind(), ErrorKind::AnswerOutOfRange);
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_context_fields() {
        let err = ApiError::question_not_found(99, vec![1, 2]).with("question", Value::Null);
        assert_eq!(err.context["available_ids"], serde_json::json!([1, 2]));
        assert!(err.context["question"].is_null());
        assert_eq!(err.message, "No question found with ID 99");
    }
}
