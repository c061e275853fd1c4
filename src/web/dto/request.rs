//! Request DTOs for the board API.
//!
//! Every field defaults to empty when absent, so a missing field is reported
//! as a validation failure rather than a malformed body.

use serde::Deserialize;
use validator::Validate;

use super::validation::not_empty_trimmed;

/// Body of `POST /api/threads/:board`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateThreadRequest {
    /// Thread body.
    #[serde(default)]
    #[validate(custom(function = "not_empty_trimmed"))]
    pub text: String,
    /// Password required to delete the thread later.
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 128,
        message = "delete_password must be 1-128 characters"
    ))]
    pub delete_password: String,
}

/// Body of `DELETE /api/threads/:board`.
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteThreadRequest {
    /// Thread to delete.
    #[serde(default)]
    #[validate(length(min = 1, message = "thread_id is required"))]
    pub thread_id: String,
    /// Password given at creation. A missing password simply does not match.
    #[serde(default)]
    pub delete_password: String,
}

/// Body of `PUT /api/threads/:board`.
#[derive(Debug, Deserialize, Validate)]
pub struct ReportThreadRequest {
    /// Thread to report.
    #[serde(default, alias = "thread_id")]
    #[validate(length(min = 1, message = "report_id is required"))]
    pub report_id: String,
}

/// Body of `POST /api/replies/:board`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReplyRequest {
    /// Parent thread.
    #[serde(default)]
    #[validate(length(min = 1, message = "thread_id is required"))]
    pub thread_id: String,
    /// Reply body.
    #[serde(default)]
    #[validate(custom(function = "not_empty_trimmed"))]
    pub text: String,
    /// Password required to delete the reply later.
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 128,
        message = "delete_password must be 1-128 characters"
    ))]
    pub delete_password: String,
}

/// Body of `DELETE /api/replies/:board`.
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteReplyRequest {
    /// Reply to redact.
    #[serde(default)]
    #[validate(length(min = 1, message = "reply_id is required"))]
    pub reply_id: String,
    /// Password given at creation.
    #[serde(default)]
    pub delete_password: String,
}

/// Body of `PUT /api/replies/:board`.
#[derive(Debug, Deserialize, Validate)]
pub struct ReportReplyRequest {
    /// Reply to report.
    #[serde(default)]
    #[validate(length(min = 1, message = "reply_id is required"))]
    pub reply_id: String,
}

/// Query of `GET /api/replies/:board`.
#[derive(Debug, Deserialize, Validate)]
pub struct ThreadQuery {
    /// Thread to show.
    #[serde(default)]
    #[validate(length(min = 1, message = "thread_id is required"))]
    pub thread_id: String,
}
