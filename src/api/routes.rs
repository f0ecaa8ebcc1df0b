//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use bytes::Bytes;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::queue::TaskQueue;

use super::errors;
use super::types::*;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    /// Registry of in-flight solves
    pub queue: TaskQueue,
}

/// Start the HTTP server.
pub async fn serve(config: Config, queue: TaskQueue) -> anyhow::Result<()> {
    let state = Arc::new(AppState {
        config: config.clone(),
        queue,
    });

    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/createTask", post(create_task))
        .route("/getTaskResult", post(get_task_result))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Parse a request body, reporting malformed JSON and shape violations the
/// way the protocol's clients expect them: as plain-text 400s.
fn parse_body<T: serde::de::DeserializeOwned>(body: &Bytes) -> Result<T, Response> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|_| (StatusCode::BAD_REQUEST, "invalid JSON").into_response())?;
    serde_json::from_value(value).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            format!("malformed request: {}", e),
        )
            .into_response()
    })
}

/// Compact JSON 200 — the wire format carries no extraneous whitespace.
fn json_response<T: serde::Serialize>(value: &T) -> Response {
    match serde_json::to_string(value) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

/// Encode the terminal object of an open result stream.
fn terminal_json<T: serde::Serialize>(value: &T) -> Bytes {
    serde_json::to_vec(value).map(Bytes::from).unwrap_or_else(|e| {
        error!("failed to encode terminal response: {}", e);
        Bytes::from_static(b"{}")
    })
}

/// `POST /createTask` — register a task with the solver queue.
///
/// Returns the task id without waiting on the solve itself.
async fn create_task(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let body: CreateTaskBody = match parse_body(&body) {
        Ok(body) => body,
        Err(resp) => return resp,
    };

    let task_id = state.queue.enqueue(body.task, body.callback_url).await;
    info!(task_id = %task_id, "task created");

    json_response(&CreateTaskResponse {
        error_id: 0,
        task_id,
    })
}

/// `POST /getTaskResult` — deliver the outcome bound to a task id.
///
/// Unknown ids answer immediately with the fixed "no such captcha id"
/// envelope. Known ids commit to a chunked stream up front — the wait can
/// outlast any intermediary idle timeout, so a single whitespace byte goes
/// out whenever a keep-alive interval passes without the solve finishing.
/// The first poller to consume the registry entry delivers the outcome;
/// a poller losing that race reports the id as gone instead of
/// double-delivering.
async fn get_task_result(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let body: GetTaskResultBody = match parse_body(&body) {
        Ok(body) => body,
        Err(resp) => return resp,
    };
    let task_id = body.task_id;

    let Some(mut pending) = state.queue.lookup(&task_id).await else {
        return json_response(&errors::ERROR_NO_SUCH_CAPCHA_ID);
    };

    let keep_alive = state.config.keep_alive;
    let stream = async_stream::stream! {
        info!(task_id = %task_id, "awaiting...");
        let outcome = loop {
            match tokio::time::timeout(keep_alive, pending.wait()).await {
                Ok(outcome) => break outcome,
                // Still solving; keep the connection warm.
                Err(_) => yield Ok::<Bytes, std::convert::Infallible>(Bytes::from_static(b" ")),
            }
        };

        if !state.queue.consume(&task_id).await {
            warn!(task_id = %task_id, "task was consumed by a concurrent poller");
            yield Ok(terminal_json(&errors::ERROR_NO_SUCH_CAPCHA_ID));
            return;
        }

        match outcome {
            Ok(solution) => {
                info!(task_id = %task_id, "delivering solution");
                yield Ok(terminal_json(&ReadyResponse {
                    error_id: 0,
                    status: "ready",
                    solution,
                }));
            }
            Err(e) => {
                warn!(task_id = %task_id, "delivering failure: {}", e);
                yield Ok(terminal_json(&errors::solve_error_envelope(&e)));
            }
        }
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        Body::from_stream(stream),
    )
        .into_response()
}
