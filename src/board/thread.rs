//! Thread model for anonboard.

use chrono::{DateTime, Utc};

/// Thread entity as stored in the database.
///
/// Carries the password hash, so it never leaves the crate boundary as-is;
/// see [`ThreadSummary`](super::ThreadSummary) and
/// [`ThreadDetail`](super::ThreadDetail) for external shapes.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Thread {
    /// Unique thread ID.
    pub id: String,
    /// Board the thread belongs to.
    pub board: String,
    /// Thread body.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Last activity timestamp, moved forward by each new reply.
    pub bumped_on: DateTime<Utc>,
    /// Argon2 hash of the delete password.
    pub delete_password_hash: String,
    /// Whether the thread has been reported.
    pub reported: bool,
}

/// Data for inserting a new thread.
#[derive(Debug, Clone)]
pub struct NewThread {
    /// Pre-generated thread ID.
    pub id: String,
    /// Board to post in.
    pub board: String,
    /// Thread body.
    pub text: String,
    /// Creation instant; also the initial bump.
    pub created_on: DateTime<Utc>,
    /// Hashed delete password.
    pub delete_password_hash: String,
}

impl NewThread {
    /// Create a new thread record stamped with the current time.
    pub fn new(
        id: impl Into<String>,
        board: impl Into<String>,
        text: impl Into<String>,
        delete_password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
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
