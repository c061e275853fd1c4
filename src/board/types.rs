//! Shared board types: mutation outcomes and listing limits.

use std::fmt;

use crate::config::BoardConfig;
use crate::{BoardError, Result};

/// Result of a delete or report operation.
///
/// A wrong password is an expected outcome rather than an error, and a
/// missing entity is reported as [`Outcome::Success`] so callers cannot probe
/// for existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The entity was deleted, or did not exist.
    Success,
    /// The supplied password did not match; nothing changed.
    IncorrectPassword,
    /// The report was recorded (or there was nothing to report).
    Reported,
}

impl Outcome {
    /// Response text for this outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::IncorrectPassword => "incorrect password",
            Outcome::Reported => "reported",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listing and content limits applied by the stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLimits {
    /// Threads per board listing.
    pub threads: i64,
    /// Replies embedded per thread in a board listing.
    pub replies: i64,
    /// Maximum text length in characters.
    pub max_text_length: usize,
}

impl Default for BoardLimits {
    fn default() -> Self {
        Self {
            threads: 10,
            replies: 3,
            max_text_length: 10_000,
        }
    }
}

impl From<&BoardConfig> for BoardLimits {
    fn from(config: &BoardConfig) -> Self {
        Self {
            threads: i64::from(config.list_thread_limit),
            replies: i64::from(config.list_reply_limit),
            max_text_length: config.max_text_length,
        }
    }
}

/// Reject a missing or blank field.
pub(crate) fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BoardError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Reject blank or oversized post text.
pub(crate) fn check_text(text: &str, limits: &BoardLimits) -> Result<()> {
    require("text", text)?;
    if text.chars().count() > limits.max_text_length {
        return Err(BoardError::Validation(format!(
            "text must be at most {} characters",
            limits.max_text_length
        )));
    }
    Ok(())
}
