//! Database schema and migrations for anonboard.
//!
//! Migrations are applied in order; the schema_version table records which
//! ones have run.

/// Database migrations.
///
/// Timestamps are stored as RFC 3339 text with a `+00:00` offset, which sorts
/// chronologically as plain text.
pub const MIGRATIONS: &[&str] = &[
    // v1: threads
    r#"
CREATE TABLE threads (
    id                    TEXT PRIMARY KEY NOT NULL,
    board                 TEXT NOT NULL,
    text                  TEXT NOT NULL,
    created_on            TEXT NOT NULL,
    bumped_on             TEXT NOT NULL,
    delete_password_hash  TEXT NOT NULL,    -- Argon2 hash
    reported              INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX idx_threads_board_bumped_on ON threads(board, bumped_on);
"#,
    // v2: replies
    r#"
CREATE TABLE replies (
    id                    TEXT PRIMARY KEY NOT NULL,
    thread_id             TEXT NOT NULL REFERENCES threads(id) ON DELETE CASCADE,
    board                 TEXT NOT NULL,    -- copy of the parent's board
    text                  TEXT NOT NULL,
    created_on            TEXT NOT NULL,
    delete_password_hash  TEXT NOT NULL,    -- Argon2 hash
    reported              INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX idx_replies_thread_created_on ON replies(thread_id, created_on);
"#,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_not_empty() {
        assert!(!MIGRATIONS.is_empty());
    }

    #[test]
    fn test_threads_migration_contains_threads_table() {
        let threads_migration = MIGRATIONS[0];
        assert!(threads_migration.contains("CREATE TABLE threads"));
        assert!(threads_migration.contains("board"));
        assert!(threads_migration.contains("bumped_on"));
        assert!(threads_migration.contains("delete_password_hash"));
        assert!(threads_migration.contains("reported"));
    }

    #[test]
    fn test_replies_migration_contains_replies_table() {
        let replies_migration = MIGRATIONS[1];
        assert!(replies_migration.contains("CREATE TABLE replies"));
        assert!(replies_migration.contains("thread_id"));
        assert!(replies_migration.contains("ON DELETE CASCADE"));
        assert!(replies_migration.contains("delete_password_hash"));
    }
}
