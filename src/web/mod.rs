//! HTTP layer for anonboard.
//!
//! Maps the board operations onto `/api/threads/:board` and
//! `/api/replies/:board`, plus a `/health` probe.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::{create_app, create_router};
pub use server::WebServer;
