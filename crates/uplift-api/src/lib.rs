//! Uplift API crate - axum HTTP server and route handlers.
//!
//! Exposes the analysis and session operations over REST: single-shot
//! analysis, session start/message/history, and a health probe.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
