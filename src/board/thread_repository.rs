//! Thread repository for anonboard.
//!
//! This module provides persistence operations for threads.

use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;

use super::reply_repository::ReplyRepository;
use super::thread::{NewThread, Thread};
use crate::db::DbPool;
use crate::{BoardError, Result};

const THREAD_COLUMNS: &str =
    "id, board, text, created_on, bumped_on, delete_password_hash, reported";

/// Repository for thread operations.
pub struct ThreadRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> ThreadRepository<'a> {
    /// Create a new repository instance.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new thread.
    ///
    /// The thread starts unreported with `bumped_on` equal to `created_on`.
    pub async fn create(&self, new_thread: &NewThread) -> Result<Thread> {
        sqlx::query(
            "INSERT INTO threads (id, board, text, created_on, bumped_on, delete_password_hash, reported)
             VALUES ($1, $2, $3, $4, $4, $5, 0)",
        )
        .bind(&new_thread.id)
        .bind(&new_thread.board)
        .bind(&new_thread.text)
        .bind(new_thread.created_on)
        .bind(&new_thread.delete_password_hash)
        .execute(self.pool)
        .await?;

        self.get_by_id(&new_thread.id)
            .await?
            .ok_or_else(|| BoardError::NotFound("thread".into()))
    }

    /// Get a thread by ID, regardless of board.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Thread>> {
        let thread = sqlx::query_as::<_, Thread>(&format!(
            "SELECT {THREAD_COLUMNS} FROM threads WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(thread)
    }

    /// Get a thread by ID only if it belongs to the given board.
    pub async fn get_in_board(&self, board: &str, id: &str) -> Result<Option<Thread>> {
        let thread = sqlx::query_as::<_, Thread>(&format!(
            "SELECT {THREAD_COLUMNS} FROM threads WHERE id = $1 AND board = $2"
        ))
        .bind(id)
        .bind(board)
        .fetch_optional(self.pool)
        .await?;

        Ok(thread)
    }

    /// List the most recently bumped threads on a board.
    ///
    /// Threads bumped at the same instant keep their insertion order.
    pub async fn list_recent(&self, board: &str, limit: i64) -> Result<Vec<Thread>> {
        let threads = sqlx::query_as::<_, Thread>(&format!(
            "SELECT {THREAD_COLUMNS} FROM threads
             WHERE board = $1
             ORDER BY bumped_on DESC, rowid ASC
             LIMIT $2"
        ))
        .bind(board)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(threads)
    }

    /// Mark a thread as reported.
    ///
    /// Returns true if a thread was updated.
    pub async fn set_reported(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE threads SET reported = 1 WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a thread together with all of its replies.
    ///
    /// Returns true if the thread existed.
    pub async fn delete_cascade(&self, id: &str) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let removed = ReplyRepository::delete_by_thread(&mut *tx, id).await?;

        let result = sqlx::query("DELETE FROM threads WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(thread_id = %id, replies = removed, "thread deleted");
        Ok(result.rows_affected() > 0)
    }

    /// Move a thread's `bumped_on` forward to the given instant.
    ///
    /// Never moves it backwards, so a reply committed late cannot undo a
    /// newer bump. Runs on the caller's connection so it can share a
    /// transaction with the reply insert. Returns false if no thread with
    /// that ID exists on the given board.
    pub async fn bump(
        conn: &mut SqliteConnection,
        id: &str,
        board: &str,
        at: DateTime<Utc>,
    ) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE threads SET bumped_on = MAX(bumped_on, $1) WHERE id = $2 AND board = $3",
        )
        .bind(at)
        .bind(id)
        .bind(board)
        .execute(conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
