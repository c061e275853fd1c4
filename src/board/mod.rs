//! Board module for anonboard.
//!
//! This module provides the anonymous message board:
//! - Thread and reply records with their repositories
//! - The thread store (create, list, delete, report)
//! - The reply store (create with bump, full view, redact, report)
//! - External views that never expose password hashes

mod reply;
mod reply_repository;
mod reply_store;
mod thread;
mod thread_repository;
mod thread_store;
mod types;
mod view;

pub use reply::{NewReply, Reply, REDACTED_TEXT};
pub use reply_repository::ReplyRepository;
pub use reply_store::ReplyStore;
pub use thread::{NewThread, Thread};
pub use thread_repository::ThreadRepository;
pub use thread_store::ThreadStore;
pub use types::{BoardLimits, Outcome};
pub use view::{ReplyView, ThreadDetail, ThreadSummary};
