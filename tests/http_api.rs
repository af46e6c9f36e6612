//! HTTP API tests against a server bound to an ephemeral port.

use std::path::Path;

use reqwest::StatusCode;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use trivia_reader::QuestionStore;
use trivia_reader::server::{self, ServerState};

const FIXTURE: &str = "tests/fixtures/trivia_questions.json";

async fn spawn_server(questions: &Path) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = ServerState::new(QuestionStore::new(questions));

    tokio::spawn(async move {
        server::serve(listener, state).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn get(url: String) -> (StatusCode, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

async fn verify(base: &str, id: &str, body: Value) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}/verify_answer/{}", base, id))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn root_lists_capabilities() {
    let base = spawn_server(Path::new(FIXTURE)).await;
    let (status, body) = get(format!("{}/", base)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["endpoints"]["list_questions"], "GET /list_questions");
    assert_eq!(body["endpoints"].as_object().unwrap().len(), 6);
}

#[tokio::test]
async fn list_questions_returns_everything() {
    let base = spawn_server(Path::new(FIXTURE)).await;
    let (status, body) = get(format!("{}/list_questions", base)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
    assert_eq!(body["questions"].as_array().unwrap().len(), 5);
    assert_eq!(body["questions"][0]["opciones"][2], "Au");
    assert_eq!(body["message"], "Loaded 5 questions");
}

#[tokio::test]
async fn list_questions_reports_unavailable_source() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_server(&dir.path().join("missing.json")).await;
    let (status, body) = get(format!("{}/list_questions", base)).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["kind"], "source_unavailable");
    assert!(body["error"].is_string());
    assert_eq!(body["questions"], json!([]));
}

#[tokio::test]
async fn get_question_by_id() {
    let base = spawn_server(Path::new(FIXTURE)).await;
    let (status, body) = get(format!("{}/question/2", base)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["id"], 2);
    assert_eq!(body["question"]["categoria"], "Geografía");
}

#[tokio::test]
async fn get_question_not_found_lists_ids() {
    let base = spawn_server(Path::new(FIXTURE)).await;
    let (status, body) = get(format!("{}/question/99", base)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "question_not_found");
    assert_eq!(body["error"], "No question found with ID 99");
    assert_eq!(body["available_ids"], json!([1, 2, 3, 4, 5]));
    assert!(body["question"].is_null());
}

#[tokio::test]
async fn get_question_rejects_non_numeric_id() {
    let base = spawn_server(Path::new(FIXTURE)).await;
    let (status, body) = get(format!("{}/question/abc", base)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "invalid_request");
}

#[tokio::test]
async fn verify_correct_answer() {
    let base = spawn_server(Path::new(FIXTURE)).await;
    let (status, body) = verify(&base, "1", json!({"user_answer": 2})).await;

    assert_eq!(status, StatusCode::OK);
    let result = &body["result"];
    assert_eq!(result["question_id"], 1);
    assert_eq!(result["user_answer"], 2);
    assert_eq!(result["correct_answer"], 2);
    assert_eq!(result["is_correct"], true);
    assert_eq!(result["user_choice_text"], "Au");
    assert_eq!(result["correct_choice_text"], "Au");
}

#[tokio::test]
async fn verify_wrong_answer_with_bare_body() {
    let base = spawn_server(Path::new(FIXTURE)).await;
    let (status, body) = verify(&base, "1", json!(0)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["is_correct"], false);
    assert_eq!(body["result"]["user_choice_text"], "Ag");
    assert_eq!(body["result"]["correct_choice_text"], "Au");
}

#[tokio::test]
async fn verify_out_of_range_answer() {
    let base = spawn_server(Path::new(FIXTURE)).await;

    for answer in [9, 4, -1] {
        let (status, body) = verify(&base, "1", json!({"user_answer": answer})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "answer_out_of_range");
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("between 0 and 3")
        );
        assert_eq!(body["available_options"], json!(["Ag", "Fe", "Au", "Cu"]));
        assert!(body["result"].is_null());
    }
}

#[tokio::test]
async fn verify_unknown_question() {
    let base = spawn_server(Path::new(FIXTURE)).await;
    let (status, body) = verify(&base, "99", json!({"user_answer": 0})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["available_ids"], json!([1, 2, 3, 4, 5]));
    assert!(body["result"].is_null());
}

#[tokio::test]
async fn verify_rejects_non_integer_answer() {
    let base = spawn_server(Path::new(FIXTURE)).await;
    let (status, body) = verify(&base, "1", json!({"user_answer": "Au"})).await;

    assert!(status.is_client_error());
    assert_eq!(body["kind"], "invalid_request");
    assert!(body["result"].is_null());
}

#[tokio::test]
async fn mutation_endpoints_are_not_supported() {
    let base = spawn_server(Path::new(FIXTURE)).await;
    let client = reqwest::Client::new();

    let responses = [
        client.post(format!("{}/add_question", base)).send().await.unwrap(),
        client.put(format!("{}/update_question", base)).send().await.unwrap(),
        client.delete(format!("{}/delete_question", base)).send().await.unwrap(),
    ];

    for response in responses {
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["kind"], "not_supported");
    }
}
