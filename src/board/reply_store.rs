//! Reply store: reply operations and the full thread view.

use tracing::{debug, info, warn};

use super::reply::{NewReply, Reply, REDACTED_TEXT};
use super::reply_repository::ReplyRepository;
use super::thread_repository::ThreadRepository;
use super::thread_store::ThreadStore;
use super::types::{check_text, require, Outcome};
use super::view::ThreadDetail;
use crate::auth::{hash_blocking, validate_password, verify_blocking};
use crate::{BoardError, Result};

/// Reply store.
///
/// Shares the database, hasher and limits of the [`ThreadStore`] it wraps.
#[derive(Clone, Debug)]
pub struct ReplyStore {
    threads: ThreadStore,
}

impl ReplyStore {
    /// Create a reply store on top of a thread store.
    pub fn new(threads: ThreadStore) -> Self {
        Self { threads }
    }

    /// The thread store this reply store writes through.
    pub fn threads(&self) -> &ThreadStore {
        &self.threads
    }

    /// Create a reply and bump its parent thread.
    ///
    /// The insert and the bump commit together. If the parent does not
    /// exist on `board`, nothing is written and a referential error is
    /// returned. Returns the new reply's ID.
    pub async fn create(
        &self,
        board: &str,
        thread_id: &str,
        text: &str,
        password: &str,
    ) -> Result<String> {
        require("board", board)?;
        require("thread_id", thread_id)?;
        check_text(text, self.threads.limits())?;
        validate_password(password)?;

        let hash = hash_blocking(self.threads.hasher(), password).await?;
        let new_reply = NewReply::new(self.threads.next_id(), thread_id, board, text, hash);

        let mut tx = self.threads.db().begin().await?;

        let bumped =
            ThreadRepository::bump(&mut *tx, thread_id, board, new_reply.created_on).await?;
        if !bumped {
            tx.rollback().await?;
            return Err(BoardError::Referential(format!(
                "thread {thread_id} does not exist on board {board}"
            )));
        }

        ReplyRepository::insert(&mut *tx, &new_reply).await?;
        tx.commit().await?;

        info!(board = %board, thread_id = %thread_id, reply_id = %new_reply.id, "reply created");
        Ok(new_reply.id)
    }

    /// Get a thread on a board with every reply, oldest first.
    pub async fn get_thread_with_replies(
        &self,
        board: &str,
        thread_id: &str,
    ) -> Result<ThreadDetail> {
        let pool = self.threads.db().pool();

        let thread = ThreadRepository::new(pool)
            .get_in_board(board, thread_id)
            .await?
            .ok_or_else(|| BoardError::NotFound("thread".into()))?;

        let replies = ReplyRepository::new(pool).list_by_thread(&thread.id).await?;

        debug!(board = %board, thread_id = %thread_id, replies = replies.len(), "loaded thread");
        Ok(ThreadDetail::new(thread, replies))
    }

    /// Redact a reply.
    ///
    /// The row stays in place with its text replaced, so reply counts do not
    /// change. A reply that does not exist counts as deleted.
    pub async fn delete(&self, reply_id: &str, password: &str) -> Result<Outcome> {
        let repo = ReplyRepository::new(self.threads.db().pool());

        let Some(reply) = repo.get_by_id(reply_id).await? else {
            debug!(reply_id = %reply_id, "delete of unknown reply");
            return Ok(Outcome::Success);
        };

        if !verify_blocking(self.threads.hasher(), password, &reply.delete_password_hash).await? {
            warn!(reply_id = %reply_id, "reply delete with incorrect password");
            return Ok(Outcome::IncorrectPassword);
        }

        if reply.is_redacted() {
            debug!(reply_id = %reply_id, "reply already deleted");
            return Ok(Outcome::Success);
        }

        repo.update_text(&reply.id, REDACTED_TEXT).await?;
        info!(reply_id = %reply_id, thread_id = %reply.thread_id, "reply deleted");
        Ok(Outcome::Success)
    }

    /// Flag a reply for moderation. Unknown IDs are ignored.
    pub async fn report(&self, reply_id: &str) -> Result<Outcome> {
        let updated = ReplyRepository::new(self.threads.db().pool())
            .set_reported(reply_id)
            .await?;

        if updated {
            info!(reply_id = %reply_id, "reply reported");
        } else {
            debug!(reply_id = %reply_id, "report of unknown reply");
        }
        Ok(Outcome::Reported)
    }

    /// Look up a reply record by ID.
    pub async fn find(&self, reply_id: &str) -> Result<Option<Reply>> {
        ReplyRepository::new(self.threads.db().pool())
            .get_by_id(reply_id)
            .await
    }

    /// Count the replies of a thread, redacted ones included.
    pub async fn count_for_thread(&self, thread_id: &str) -> Result<i64> {
        ReplyRepository::new(self.threads.db().pool())
            .count_by_thread(thread_id)
            .await
    }
}
