//! Reply model for anonboard.

use chrono::{DateTime, Utc};

/// Text written over a reply when it is deleted.
pub const REDACTED_TEXT: &str = "[deleted]";

/// Reply entity as stored in the database.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Reply {
    /// Unique reply ID.
    pub id: String,
    /// Parent thread ID.
    pub thread_id: String,
    /// Board of the parent thread.
    pub board: String,
    /// Reply body, or [`REDACTED_TEXT`] once deleted.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Argon2 hash of the delete password.
    pub delete_password_hash: String,
    /// Whether the reply has been reported.
    pub reported: bool,
}

impl Reply {
    /// Check whether the reply has been deleted.
    pub fn is_redacted(&self) -> bool {
        self.text == REDACTED_TEXT
    }
}

/// Data for inserting a new reply.
#[derive(Debug, Clone)]
pub struct NewReply {
    /// Pre-generated reply ID.
    pub id: String,
    /// Parent thread ID.
    pub thread_id: String,
    /// Board of the parent thread.
    pub board: String,
    /// Reply body.
    pub text: String,
    /// Creation instant; the parent is bumped to the same instant.
    pub created_on: DateTime<Utc>,
    /// Hashed delete password.
    pub delete_password_hash: String,
}

impl NewReply {
    /// Create a new reply record stamped with the current time.
    pub fn new(
        id: impl Into<String>,
        thread_id: impl Into<String>,
        board: impl Into<String>,
        text: impl Into<String>,
        delete_password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            thread_id: thread_id.into(),
            board: board.into(),
            text: text.into(),
            created_on: Utc::now(),
            delete_password_hash: delete_password_hash.into(),
        }
    }

    /// Override the creation instant.
    pub fn created_on(mut self, at: DateTime<Utc>) -> Self {
        self.created_on = at;
        self
    }
}
