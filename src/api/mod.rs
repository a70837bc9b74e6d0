//! HTTP API for the dashboard front end.
//!
//! Routes live at the root (`/health`, `/residents`, ...) to match the
//! paths the single-page app already calls. The router is composable:
//! `api_router()` returns a `Router` that can be mounted on any axum
//! server instance.

pub mod endpoints;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_server, ApiServer, ServerError};
pub use types::ApiContext;
