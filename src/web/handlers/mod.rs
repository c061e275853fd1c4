//! API handlers for the board.

pub mod reply;
pub mod thread;

pub use reply::*;
pub use thread::*;

use crate::board::{ReplyStore, ThreadStore};

/// Shared application state.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Thread operations.
    pub threads: ThreadStore,
    /// Reply operations.
    pub replies: ReplyStore,
}

impl AppState {
    /// Create the state from a thread store; the reply store shares it.
    pub fn new(threads: ThreadStore) -> Self {
        let replies = ReplyStore::new(threads.clone());
        Self { threads, replies }
    }
}
