//! Test helpers for the HTTP and concurrency tests.
//!
//! Provides an in-memory board behind an `axum_test::TestServer` and a few
//! request shortcuts.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};

use anonboard::auth::{Argon2Hasher, SharedHasher};
use anonboard::board::ThreadStore;
use anonboard::config::{PasswordConfig, WebConfig};
use anonboard::web::{create_app, AppState};
use anonboard::Database;

/// Argon2 hasher with minimal cost, so tests stay fast.
pub fn test_hasher() -> SharedHasher {
    let hasher = Argon2Hasher::new(&PasswordConfig {
        memory_cost_kib: 1024,
        time_cost: 1,
        parallelism: 1,
    })
    .expect("Failed to create test hasher");
    Arc::new(hasher)
}

/// Create a thread store over an in-memory database.
pub async fn create_test_store() -> ThreadStore {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    ThreadStore::new(Arc::new(db), test_hasher())
}

/// Create a thread store over a database file.
pub async fn create_file_store(path: &Path) -> ThreadStore {
    let db = Database::open(path)
        .await
        .expect("Failed to open test database");
    ThreadStore::new(Arc::new(db), test_hasher())
}

/// Create a test server with an in-memory database.
pub async fn create_test_server() -> TestServer {
    let threads = create_test_store().await;
    let app_state = Arc::new(AppState::new(threads));
    let router = create_app(app_state, &WebConfig::default());
    TestServer::new(router).expect("Failed to create test server")
}

/// Pause long enough for the next timestamp to differ.
pub async fn tick() {
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
}

/// List a board's threads.
pub async fn list_threads(server: &TestServer, board: &str) -> Vec<Value> {
    let response = server.get(&format!("/api/threads/{board}")).await;
    response.assert_status_ok();
    response
        .json::<Value>()
        .as_array()
        .cloned()
        .expect("thread listing is not an array")
}

/// Post a thread and return its ID, read back from the listing.
pub async fn post_thread(server: &TestServer, board: &str, text: &str, password: &str) -> String {
    let response = server
        .post(&format!("/api/threads/{board}"))
        .json(&json!({ "text": text, "delete_password": password }))
        .await;
    response.assert_status_ok();

    list_threads(server, board)
        .await
        .iter()
        .find(|t| t["text"] == text)
        .and_then(|t| t["_id"].as_str())
        .map(str::to_string)
        .expect("created thread not listed")
}

/// Show a thread with all replies.
pub async fn get_thread(server: &TestServer, board: &str, thread_id: &str) -> Value {
    let response = server
        .get(&format!("/api/replies/{board}"))
        .add_query_param("thread_id", thread_id)
        .await;
    response.assert_status_ok();
    response.json::<Value>()
}

/// Post a reply and return its ID, read back from the thread view.
pub async fn post_reply(
    server: &TestServer,
    board: &str,
    thread_id: &str,
    text: &str,
    password: &str,
) -> String {
    let response = server
        .post(&format!("/api/replies/{board}"))
        .json(&json!({
            "thread_id": thread_id,
            "text": text,
            "delete_password": password
        }))
        .await;
    response.assert_status_ok();

    get_thread(server, board, thread_id).await["replies"]
        .as_array()
        .expect("replies is not an array")
        .iter()
        .find(|r| r["text"] == text)
        .and_then(|r| r["_id"].as_str())
        .map(str::to_string)
        .expect("created reply not shown")
}
