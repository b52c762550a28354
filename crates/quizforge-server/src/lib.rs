//! quizforge-server — HTTP endpoints over a shared question bank.
//!
//! The bank is loaded once and shared read-only as `Arc<QuestionBank>`
//! across handlers, so no locking is involved.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | The whole question bank |
//! | GET | `/questions/:category` | Questions in one category |
//! | GET | `/health` | Health check |

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use quizforge_core::{Category, Question, QuestionBank, QuizError};

pub type AppState = Arc<QuestionBank>;

/// Create the HTTP router with all routes configured.
pub fn create_router(bank: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(list_questions))
        .route("/questions/:category", get(questions_by_category))
        .route("/health", get(health))
        .layer(cors)
        .with_state(bank)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(bank: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(
        "serving {} question(s) on http://{}",
        bank.len(),
        listener.local_addr()?
    );
    axum::serve(listener, create_router(bank))
        .await
        .context("server error")
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub question_count: usize,
}

fn error_response(status: StatusCode, msg: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(serde_json::json!({ "error": msg })))
}

async fn list_questions(State(bank): State<AppState>) -> Json<Vec<Question>> {
    Json(bank.questions().to_vec())
}

async fn questions_by_category(
    State(bank): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Question>>, (StatusCode, Json<serde_json::Value>)> {
    let category: Category = category
        .parse()
        .map_err(|e: String| error_response(StatusCode::BAD_REQUEST, &e))?;

    let questions: Vec<Question> = bank.by_category(&category).into_iter().cloned().collect();
    if questions.is_empty() {
        let err = QuizError::CategoryNotFound(category);
        return Err(error_response(StatusCode::NOT_FOUND, &err.to_string()));
    }
    Ok(Json(questions))
}

async fn health(State(bank): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        question_count: bank.len(),
    })
}
