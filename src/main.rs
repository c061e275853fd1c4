use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info, warn};

use anonboard::auth::Argon2Hasher;
use anonboard::board::ThreadStore;
use anonboard::web::WebServer;
use anonboard::{Config, Database};

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration
    let mut config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = anonboard::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        anonboard::logging::init_console_only(&config.logging.level);
    }

    for rejected in config.apply_env_overrides() {
        warn!("Ignoring invalid environment override {}", rejected);
    }

    info!("anonboard - anonymous message board");

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> anonboard::Result<()> {
    config.validate()?;

    let db = Database::open(&config.database.path).await?;
    info!("Database ready (schema version {})", db.schema_version().await?);

    let hasher = Argon2Hasher::new(&config.password)?;
    let threads = ThreadStore::new(Arc::new(db), Arc::new(hasher));

    let server = WebServer::from_config(&config, threads)?;
    info!("Server configured on {}", server.addr());

    server.run().await?;
    Ok(())
}
