// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{generate_handler, health_handler, index_handler, metrics_handler};
use crate::config::AppConfig;
use crate::error::Result;
use crate::pipeline::Pipeline;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub pipeline: Arc<Pipeline>,
}

pub fn create_router(config: AppConfig) -> Result<Router> {
    let pipeline = Pipeline::new(&config)?;
    let max_upload_bytes = config.server.max_upload_bytes;

    let state = AppState {
        config: Arc::new(config),
        pipeline: Arc::new(pipeline),
    };

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/generate", post(generate_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        // Screenshots arrive in one multipart body
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(tower_http::limit::RequestBodyLimitLayer::new(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state);

    Ok(app)
}
