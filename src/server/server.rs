//! HTTP server implementation.

use axum::Router;
use axum::routing::{delete, get, post, put};
use tokio::net::TcpListener;

use crate::TriviaError;
use crate::config::ServeConfig;

use super::handlers;
use super::state::ServerState;

/// Build the router for the trivia API.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/list_questions", get(handlers::list_questions))
        .route("/question/{id}", get(handlers::get_question))
        .route("/verify_answer/{id}", post(handlers::verify_answer))
        .route("/add_question", post(handlers::add_question))
        .route("/update_question", put(handlers::update_question))
        .route("/delete_question", delete(handlers::delete_question))
        .with_state(state)
}

/// Run the trivia API until Ctrl-C.
pub async fn run(config: ServeConfig) -> Result<(), TriviaError> {
    let store = config.source.store();

    // Requests reload the file themselves; this is only an early warning.
    match store.try_load_async().await {
        Ok(questions) => tracing::info!(
            path = %store.path().display(),
            count = questions.len(),
            "question source ready"
        ),
        Err(err) if config.source.strict => return Err(err.into()),
        Err(err) => tracing::warn!("{err}; requests will report the source as unavailable"),
    }

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| TriviaError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!("server listening on http://{}", addr);

    serve(listener, ServerState::new(store)).await
}

/// Serve the API on an already bound listener.
pub async fn serve(listener: TcpListener, state: ServerState) -> Result<(), TriviaError> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl-C: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
