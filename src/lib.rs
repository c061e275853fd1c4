//! anonboard - an anonymous message board
//!
//! Boards hold threads, threads hold replies. Nobody has an account; every
//! post carries its own delete password.

pub mod auth;
pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use board::{Outcome, ReplyStore, ThreadDetail, ThreadStore, ThreadSummary};
pub use config::Config;
pub use db::Database;
pub use error::{BoardError, Result};
