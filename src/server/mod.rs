//! Axum-based HTTP server for shot2test.
//!
//! Serves the upload form, runs the screenshot pipeline for each submission
//! and renders the generated instructions back into the page.
//!
//! # Components
//!
//! - `handlers`: Form, generate, health and metrics endpoints.
//! - `page`: HTML rendering of the form and results.
//! - `routes`: The main router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
pub mod page;
mod routes;

pub use handlers::{HealthResponse, HealthStatus};
pub use routes::{create_router, AppState};
