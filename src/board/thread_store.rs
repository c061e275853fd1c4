//! Thread store: the thread-level operations exposed to the web layer.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::reply_repository::ReplyRepository;
use super::thread::{NewThread, Thread};
use super::thread_repository::ThreadRepository;
use super::types::{check_text, require, BoardLimits, Outcome};
use super::view::ThreadSummary;
use crate::auth::{hash_blocking, validate_password, verify_blocking, SharedHasher};
use crate::db::{Database, IdGenerator, UuidGenerator};
use crate::Result;

/// Thread store.
///
/// Cheap to clone; every clone shares the same database pool, hasher and
/// ID generator.
#[derive(Clone)]
pub struct ThreadStore {
    db: Arc<Database>,
    hasher: SharedHasher,
    ids: Arc<dyn IdGenerator>,
    limits: BoardLimits,
}

impl ThreadStore {
    /// Create a new thread store with UUID identifiers and default limits.
    pub fn new(db: Arc<Database>, hasher: SharedHasher) -> Self {
        Self {
            db,
            hasher,
            ids: Arc::new(UuidGenerator),
            limits: BoardLimits::default(),
        }
    }

    /// Use a different identifier source.
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Use different listing and text limits.
    pub fn with_limits(mut self, limits: BoardLimits) -> Self {
        self.limits = limits;
        self
    }

    pub(crate) fn db(&self) -> &Database {
        &self.db
    }

    pub(crate) fn hasher(&self) -> &SharedHasher {
        &self.hasher
    }

    pub(crate) fn next_id(&self) -> String {
        self.ids.generate()
    }

    /// Limits applied by this store.
    pub fn limits(&self) -> &BoardLimits {
        &self.limits
    }

    /// Create a new thread on a board.
    ///
    /// Returns the new thread's ID.
    pub async fn create(&self, board: &str, text: &str, password: &str) -> Result<String> {
        require("board", board)?;
        check_text(text, &self.limits)?;
        validate_password(password)?;

        let hash = hash_blocking(&self.hasher, password).await?;
        let new_thread = NewThread::new(self.next_id(), board, text, hash);

        let thread = ThreadRepository::new(self.db.pool())
            .create(&new_thread)
            .await?;

        info!(board = %board, thread_id = %thread.id, "thread created");
        Ok(thread.id)
    }

    /// List the most recently bumped threads on a board.
    ///
    /// Each summary embeds the newest replies and the total reply count.
    pub async fn list_recent(&self, board: &str) -> Result<Vec<ThreadSummary>> {
        let threads = ThreadRepository::new(self.db.pool())
            .list_recent(board, self.limits.threads)
            .await?;

        let reply_repo = ReplyRepository::new(self.db.pool());
        let mut summaries = Vec::with_capacity(threads.len());
        for thread in threads {
            let replies = reply_repo
                .list_recent_by_thread(&thread.id, self.limits.replies)
                .await?;
            let replycount = reply_repo.count_by_thread(&thread.id).await?;
            summaries.push(ThreadSummary::new(thread, replies, replycount));
        }

        debug!(board = %board, count = summaries.len(), "listed threads");
        Ok(summaries)
    }

    /// Delete a thread and all of its replies.
    ///
    /// A thread that does not exist on the board counts as deleted.
    pub async fn delete(&self, board: &str, thread_id: &str, password: &str) -> Result<Outcome> {
        let repo = ThreadRepository::new(self.db.pool());

        let Some(thread) = repo.get_in_board(board, thread_id).await? else {
            debug!(board = %board, thread_id = %thread_id, "delete of unknown thread");
            return Ok(Outcome::Success);
        };

        if !verify_blocking(&self.hasher, password, &thread.delete_password_hash).await? {
            warn!(board = %board, thread_id = %thread_id, "thread delete with incorrect password");
            return Ok(Outcome::IncorrectPassword);
        }

        repo.delete_cascade(&thread.id).await?;
        info!(board = %board, thread_id = %thread_id, "thread deleted");
        Ok(Outcome::Success)
    }

    /// Flag a thread for moderation.
    ///
    /// Applies to the thread on any board; unknown IDs are ignored.
    pub async fn report(&self, thread_id: &str) -> Result<Outcome> {
        let updated = ThreadRepository::new(self.db.pool())
            .set_reported(thread_id)
            .await?;

        if updated {
            info!(thread_id = %thread_id, "thread reported");
        } else {
            debug!(thread_id = %thread_id, "report of unknown thread");
        }
        Ok(Outcome::Reported)
    }

    /// Look up a thread record by ID.
    pub async fn find(&self, thread_id: &str) -> Result<Option<Thread>> {
        ThreadRepository::new(self.db.pool())
            .get_by_id(thread_id)
            .await
    }
}

impl std::fmt::Debug for ThreadStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThreadStore")
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}
