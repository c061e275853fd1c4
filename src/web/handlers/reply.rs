//! Reply handlers for the board API.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::board::{Outcome, ThreadDetail};
use crate::web::dto::{
    CreateReplyRequest, DeleteReplyRequest, ReportReplyRequest, ThreadQuery, ValidatedBody,
    ValidatedQuery,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// POST /api/replies/:board - Reply to a thread and bump it.
pub async fn create_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedBody(req): ValidatedBody<CreateReplyRequest>,
) -> Result<(), ApiError> {
    state
        .replies
        .create(&board, &req.thread_id, &req.text, &req.delete_password)
        .await?;
    Ok(())
}

/// GET /api/replies/:board?thread_id= - Show a thread with every reply.
pub async fn get_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedQuery(query): ValidatedQuery<ThreadQuery>,
) -> Result<Json<ThreadDetail>, ApiError> {
    let thread = state
        .replies
        .get_thread_with_replies(&board, &query.thread_id)
        .await?;
    Ok(Json(thread))
}

/// DELETE /api/replies/:board - Redact a reply.
pub async fn delete_reply(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    ValidatedBody(req): ValidatedBody<DeleteReplyRequest>,
) -> Result<Outcome, ApiError> {
    let outcome = state
        .replies
        .delete(&req.reply_id, &req.delete_password)
        .await?;
    Ok(outcome)
}

/// PUT /api/replies/:board - Report a reply.
pub async fn report_reply(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    ValidatedBody(req): ValidatedBody<ReportReplyRequest>,
) -> Result<Outcome, ApiError> {
    let outcome = state.replies.report(&req.reply_id).await?;
    Ok(outcome)
}
