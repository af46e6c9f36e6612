//! HTTP request handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use serde_json::{Value, json};

use crate::engine;
use crate::protocol::{
    Capabilities, ListResponse, QuestionResponse, VerifyRequest, VerifyResponse, capabilities,
};

use super::error::ApiError;
use super::state::ServerState;

pub async fn root() -> Json<Capabilities> {
    Json(capabilities())
}

pub async fn list_questions(
    State(state): State<ServerState>,
) -> Result<Json<ListResponse>, ApiError> {
    let questions = state
        .questions()
        .await
        .map_err(|err| err.with("questions", json!([])))?;

    tracing::info!(count = questions.len(), "listing questions");
    Ok(Json(ListResponse::new(questions)))
}

pub async fn get_question(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let Path(id) = id.map_err(|err| ApiError::from(err).with("question", Value::Null))?;
    let questions = state
        .questions()
        .await
        .map_err(|err| err.with("question", Value::Null))?;

    let Some(question) = engine::find_by_id(&questions, id) else {
        tracing::info!(id, "question not found");
        return Err(
            ApiError::question_not_found(id, engine::available_ids(&questions))
                .with("question", Value::Null),
        );
    };

    Ok(Json(QuestionResponse::new(question.clone())))
}

pub async fn verify_answer(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Json<VerifyResponse>, ApiError> {
    let Path(id) = id.map_err(|err| ApiError::from(err).with("result", Value::Null))?;
    let Json(request) = body.map_err(|err| ApiError::from(err).with("result", Value::Null))?;
    let questions = state
        .questions()
        .await
        .map_err(|err| err.with("result", Value::Null))?;

    let Some(question) = engine::find_by_id(&questions, id) else {
        return Err(
            ApiError::question_not_found(id, engine::available_ids(&questions))
                .with("result", Value::Null),
        );
    };

    let index = engine::check_index(request.user_answer(), &question.choices).map_err(|err| {
        ApiError::answer_out_of_range(&err, &question.choices).with("result", Value::Null)
    })?;

    let verdict = engine::verify(question, index);
    tracing::info!(id, answer = index, correct = verdict.is_correct, "verified answer");
    Ok(Json(VerifyResponse::new(verdict)))
}

pub async fn add_question() -> ApiError {
    ApiError::not_supported("Adding questions")
}

pub async fn update_question() -> ApiError {
    ApiError::not_supported("Updating questions")
}

pub async fn delete_question() -> ApiError {
    ApiError::not_supported("Deleting questions")
}
