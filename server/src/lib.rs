//! Development backend for the job board
//!
//! Serves the save/unsave/apply/search endpoints and the listing and detail
//! pages from an in-memory store, with Tantivy full-text search over the
//! catalog.

pub mod app;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod index;
pub mod search;
pub mod state;
pub mod ui;

pub use app::router;
pub use catalog::{load_catalog, seed_catalog};
pub use state::{AppState, HitCounts};

use tokio::net::TcpListener;

/// Serves the router on an already bound listener until the task ends.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, router(state)).await
}
