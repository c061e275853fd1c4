//! Reply repository for anonboard.

use sqlx::SqliteConnection;

use super::reply::{NewReply, Reply};
use crate::db::DbPool;
use crate::Result;

const REPLY_COLUMNS: &str =
    "id, thread_id, board, text, created_on, delete_password_hash, reported";

/// Repository for reply operations.
pub struct ReplyRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> ReplyRepository<'a> {
    /// Create a new repository instance.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a reply on the caller's connection.
    ///
    /// Used inside the transaction that also bumps the parent thread.
    pub async fn insert(conn: &mut SqliteConnection, new_reply: &NewReply) -> Result<()> {
        sqlx::query(
            "INSERT INTO replies (id, thread_id, board, text, created_on, delete_password_hash, reported)
             VALUES ($1, $2, $3, $4, $5, $6, 0)",
        )
        .bind(&new_reply.id)
        .bind(&new_reply.thread_id)
        .bind(&new_reply.board)
        .bind(&new_reply.text)
        .bind(new_reply.created_on)
        .bind(&new_reply.delete_password_hash)
        .execute(conn)
        .await?;

        Ok(())
    }

    /// Delete every reply of a thread on the caller's connection.
    ///
    /// Returns the number of replies removed.
    pub async fn delete_by_thread(conn: &mut SqliteConnection, thread_id: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM replies WHERE thread_id = $1")
            .bind(thread_id)
            .execute(conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Get a reply by ID.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Reply>> {
        let reply = sqlx::query_as::<_, Reply>(&format!(
            "SELECT {REPLY_COLUMNS} FROM replies WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(reply)
    }

    /// List all replies of a thread, oldest first.
    pub async fn list_by_thread(&self, thread_id: &str) -> Result<Vec<Reply>> {
        let replies = sqlx::query_as::<_, Reply>(&format!(
            "SELECT {REPLY_COLUMNS} FROM replies
             WHERE thread_id = $1
             ORDER BY created_on ASC, rowid ASC"
        ))
        .bind(thread_id)
        .fetch_all(self.pool)
        .await?;

        Ok(replies)
    }

    /// List the newest replies of a thread, newest first.
    pub async fn list_recent_by_thread(&self, thread_id: &str, limit: i64) -> Result<Vec<Reply>> {
        let replies = sqlx::query_as::<_, Reply>(&format!(
            "SELECT {REPLY_COLUMNS} FROM replies
             WHERE thread_id = $1
             ORDER BY created_on DESC, rowid DESC
             LIMIT $2"
        ))
        .bind(thread_id)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(replies)
    }

    /// Count replies of a thread, redacted ones included.
    pub async fn count_by_thread(&self, thread_id: &str) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM replies WHERE thread_id = $1")
            .bind(thread_id)
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// Replace a reply's text.
    ///
    /// Returns true if a reply was updated.
    pub async fn update_text(&self, id: &str, text: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE replies SET text = $1 WHERE id = $2")
            .bind(text)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Mark a reply as reported.
    pub async fn set_reported(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE replies SET reported = 1 WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
