//! External representations of threads and replies.
//!
//! None of these shapes carry the password hash or the reported flag.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Reply, Thread};

/// A reply as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyView {
    /// Reply ID.
    #[serde(rename = "_id")]
    pub id: String,
    /// Reply body.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
}

impl From<Reply> for ReplyView {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id,
            text: reply.text,
            created_on: reply.created_on,
        }
    }
}

/// A thread in the board listing, with its most recent replies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreadSummary {
    /// Thread ID.
    #[serde(rename = "_id")]
    pub id: String,
    /// Thread body.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Last bump timestamp.
    pub bumped_on: DateTime<Utc>,
    /// Most recent replies, newest first.
    pub replies: Vec<ReplyView>,
    /// Total number of replies in the thread.
    pub replycount: i64,
}

impl ThreadSummary {
    pub(crate) fn new(thread: Thread, replies: Vec<Reply>, replycount: i64) -> Self {
        Self {
            id: thread.id,
            text: thread.text,
            created_on: thread.created_on,
            bumped_on: thread.bumped_on,
            replies: replies.into_iter().map(ReplyView::from).collect(),
            replycount,
        }
    }
}

/// A single thread with every reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreadDetail {
    /// Thread ID.
    #[serde(rename = "_id")]
    pub id: String,
    /// Thread body.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Last bump timestamp.
    pub bumped_on: DateTime<Utc>,
    /// All replies, oldest first.
    pub replies: Vec<ReplyView>,
}

impl ThreadDetail {
    pub(crate) fn new(thread: Thread, replies: Vec<Reply>) -> Self {
        Self {
            id: thread.id,
            text: thread.text,
            created_on: thread.created_on,
            bumped_on: thread.bumped_on,
            replies: replies.into_iter().map(ReplyView::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_thread() -> Thread {
        let now = Utc::now();
        Thread {
            id: "t1".to_string(),
            board: "b".to_string(),
            text: "thread text".to_string(),
            created_on: now,
            bumped_on: now,
            delete_password_hash: "$argon2id$secret".to_string(),
            reported: true,
        }
    }

    fn sample_reply() -> Reply {
        Reply {
            id: "r1".to_string(),
            thread_id: "t1".to_string(),
            board: "b".to_string(),
            text: "reply text".to_string(),
            created_on: Utc::now(),
            delete_password_hash: "$argon2id$secret".to_string(),
            reported: true,
        }
    }

    #[test]
    fn test_summary_hides_private_fields() {
        let summary = ThreadSummary::new(sample_thread(), vec![sample_reply()], 1);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["_id"], "t1");
        assert_eq!(json["replycount"], 1);
        assert!(json.get("delete_password_hash").is_none());
        assert!(json.get("reported").is_none());
        assert!(json.get("board").is_none());

        let reply = &json["replies"][0];
        assert_eq!(reply["_id"], "r1");
        assert!(reply.get("delete_password_hash").is_none());
        assert!(reply.get("reported").is_none());
    }

    #[test]
    fn test_detail_serializes_empty_replies_as_array() {
        let detail = ThreadDetail::new(sample_thread(), vec![]);
        let json = serde_json::to_value(&detail).unwrap();

        assert!(json["replies"].is_array());
        assert_eq!(json["replies"].as_array().unwrap().len(), 0);
        assert!(json.get("delete_password_hash").is_none());
        assert!(json["created_on"].is_string());
        assert!(json["bumped_on"].is_string());
    }
}
