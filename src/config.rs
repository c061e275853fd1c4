//! Configuration module for anonboard.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

use crate::{BoardError, Result};

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Parse the configured host and port into a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| BoardError::Config(format!("invalid bind address: {e}")))
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/anonboard.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/anonboard.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Argon2id cost parameters for delete passwords.
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordConfig {
    /// Memory cost in KiB.
    #[serde(default = "default_memory_cost")]
    pub memory_cost_kib: u32,
    /// Number of iterations.
    #[serde(default = "default_time_cost")]
    pub time_cost: u32,
    /// Degree of parallelism.
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

fn default_memory_cost() -> u32 {
    19_456
}

fn default_time_cost() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_cost_kib: default_memory_cost(),
            time_cost: default_time_cost(),
            parallelism: default_parallelism(),
        }
    }
}

/// Web layer configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// CORS allowed origins. Empty means any origin without credentials.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Whether to serve static files.
    #[serde(default)]
    pub serve_static: bool,
    /// Path to static files directory.
    #[serde(default = "default_static_path")]
    pub static_path: String,
}

fn default_static_path() -> String {
    "public".to_string()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            serve_static: false,
            static_path: default_static_path(),
        }
    }
}

/// Board listing and content limits.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    /// Maximum number of threads returned by the board listing.
    #[serde(default = "default_list_thread_limit")]
    pub list_thread_limit: u32,
    /// Maximum number of replies embedded per thread in the board listing.
    #[serde(default = "default_list_reply_limit")]
    pub list_reply_limit: u32,
    /// Maximum text length for threads and replies, in characters.
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
}

fn default_list_thread_limit() -> u32 {
    10
}

fn default_list_reply_limit() -> u32 {
    3
}

fn default_max_text_length() -> usize {
    10_000
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            list_thread_limit: default_list_thread_limit(),
            list_reply_limit: default_list_reply_limit(),
            max_text_length: default_max_text_length(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Password hashing configuration.
    #[serde(default)]
    pub password: PasswordConfig,
    /// Web layer configuration.
    #[serde(default)]
    pub web: WebConfig,
    /// Board limits.
    #[serde(default)]
    pub board: BoardConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(BoardError::Io)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| BoardError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `ANONBOARD_DATABASE_PATH`: Override the database file path
    /// - `ANONBOARD_PORT`: Override the listening port
    ///
    /// Returns the `NAME=value` pairs that were set but could not be used.
    pub fn apply_env_overrides(&mut self) -> Vec<String> {
        let mut rejected = Vec::new();

        if let Ok(path) = std::env::var("ANONBOARD_DATABASE_PATH") {
            if !path.is_empty() {
                self.database.path = path;
            }
        }

        if let Ok(port) = std::env::var("ANONBOARD_PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => rejected.push(format!("ANONBOARD_PORT={port}")),
            }
        }

        rejected
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.server.bind_addr()?;

        if self.board.list_thread_limit == 0 || self.board.list_reply_limit == 0 {
            return Err(BoardError::Config(
                "board list limits must be greater than zero".to_string(),
            ));
        }
        if self.board.max_text_length == 0 {
            return Err(BoardError::Config(
                "board.max_text_length must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);

        assert_eq!(config.database.path, "data/anonboard.db");

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, "logs/anonboard.log");

        assert_eq!(config.password.memory_cost_kib, 19_456);
        assert_eq!(config.password.time_cost, 2);
        assert_eq!(config.password.parallelism, 1);

        assert!(config.web.cors_origins.is_empty());
        assert!(!config.web.serve_static);
        assert_eq!(config.web.static_path, "public");

        assert_eq!(config.board.list_thread_limit, 10);
        assert_eq!(config.board.list_reply_limit, 3);
        assert_eq!(config.board.max_text_length, 10_000);
    }

    #[test]
    fn test_web_default_matches_empty_section() {
        let parsed = Config::parse("[web]\n").unwrap();
        let default = WebConfig::default();

        assert_eq!(parsed.web.static_path, default.static_path);
        assert_eq!(parsed.web.serve_static, default.serve_static);
        assert_eq!(parsed.web.cors_origins, default.cors_origins);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 8080

[database]
path = "custom/board.sqlite"

[logging]
level = "debug"
file = "custom/logs/app.log"

[password]
memory_cost_kib = 8192
time_cost = 1
parallelism = 2

[web]
cors_origins = ["http://localhost:3000"]
serve_static = true
static_path = "dist"

[board]
list_thread_limit = 20
list_reply_limit = 5
max_text_length = 2000
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.path, "custom/board.sqlite");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, "custom/logs/app.log");
        assert_eq!(config.password.memory_cost_kib, 8192);
        assert_eq!(config.password.time_cost, 1);
        assert_eq!(config.password.parallelism, 2);
        assert_eq!(config.web.cors_origins, vec!["http://localhost:3000"]);
        assert!(config.web.serve_static);
        assert_eq!(config.web.static_path, "dist");
        assert_eq!(config.board.list_thread_limit, 20);
        assert_eq!(config.board.list_reply_limit, 5);
        assert_eq!(config.board.max_text_length, 2000);
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[server]
port = 4000
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.path, "data/anonboard.db");
        assert_eq!(config.board.list_thread_limit, 10);
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = Config::parse("this is not valid toml [[[");

        match result {
            Err(BoardError::Config(msg)) => assert!(msg.contains("config parse error")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load("nonexistent.toml");
        assert!(matches!(result, Err(BoardError::Io(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[database]\npath = \"elsewhere.db\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.database.path, "elsewhere.db");
    }

    #[test]
    fn test_apply_env_overrides_database_path() {
        let saved = std::env::var("ANONBOARD_DATABASE_PATH").ok();

        std::env::set_var("ANONBOARD_DATABASE_PATH", "env/board.db");
        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.database.path, "env/board.db");

        std::env::set_var("ANONBOARD_DATABASE_PATH", "");
        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.database.path, "data/anonboard.db");

        match saved {
            Some(val) => std::env::set_var("ANONBOARD_DATABASE_PATH", val),
            None => std::env::remove_var("ANONBOARD_DATABASE_PATH"),
        }
    }

    #[test]
    fn test_apply_env_overrides_port() {
        let saved = std::env::var("ANONBOARD_PORT").ok();

        std::env::set_var("ANONBOARD_PORT", "9090");
        let mut config = Config::default();
        assert!(config.apply_env_overrides().is_empty());
        assert_eq!(config.server.port, 9090);

        std::env::set_var("ANONBOARD_PORT", "not-a-port");
        let mut config = Config::default();
        let rejected = config.apply_env_overrides();
        assert_eq!(rejected, vec!["ANONBOARD_PORT=not-a-port".to_string()]);
        assert_eq!(config.server.port, 3000);

        match saved {
            Some(val) => std::env::set_var("ANONBOARD_PORT", val),
            None => std::env::remove_var("ANONBOARD_PORT"),
        }
    }

    #[test]
    fn test_validate_default() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_limits() {
        let mut config = Config::default();
        config.board.list_reply_limit = 0;
        assert!(matches!(config.validate(), Err(BoardError::Config(_))));

        let mut config = Config::default();
        config.board.max_text_length = 0;
        assert!(matches!(config.validate(), Err(BoardError::Config(_))));
    }

    #[test]
    fn test_validate_bad_host() {
        let mut config = Config::default();
        config.server.host = "not a host".to_string();
        assert!(matches!(config.validate(), Err(BoardError::Config(_))));
    }
}
