//! Thread handlers for the board API.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::board::{Outcome, ThreadSummary};
use crate::web::dto::{
    CreateThreadRequest, DeleteThreadRequest, ReportThreadRequest, ValidatedBody,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// POST /api/threads/:board - Create a thread.
pub async fn create_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedBody(req): ValidatedBody<CreateThreadRequest>,
) -> Result<(), ApiError> {
    state
        .threads
        .create(&board, &req.text, &req.delete_password)
        .await?;
    Ok(())
}

/// GET /api/threads/:board - List the most recently bumped threads.
pub async fn list_threads(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
) -> Result<Json<Vec<ThreadSummary>>, ApiError> {
    let threads = state.threads.list_recent(&board).await?;
    Ok(Json(threads))
}

/// DELETE /api/threads/:board - Delete a thread and its replies.
pub async fn delete_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedBody(req): ValidatedBody<DeleteThreadRequest>,
) -> Result<Outcome, ApiError> {
    let outcome = state
        .threads
        .delete(&board, &req.thread_id, &req.delete_password)
        .await?;
    Ok(outcome)
}

/// PUT /api/threads/:board - Report a thread.
pub async fn report_thread(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    ValidatedBody(req): ValidatedBody<ReportThreadRequest>,
) -> Result<Outcome, ApiError> {
    let outcome = state.threads.report(&req.report_id).await?;
    Ok(outcome)
}
