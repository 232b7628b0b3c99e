// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::page::{render, PageView};
use super::routes::AppState;
use crate::imaging::UploadedImage;
use crate::pipeline::Submission;
use axum::{
    extract::{Multipart, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub checks: HashMap<String, HealthCheck>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();
    let mut overall_status = HealthStatus::Healthy;

    // Check image host credentials
    let cloudinary_check = if state.pipeline.publisher().is_configured() {
        HealthCheck {
            status: "ok".to_string(),
            message: format!("Cloud name: {}", state.config.cloudinary.cloud_name),
        }
    } else {
        overall_status = HealthStatus::Degraded;
        HealthCheck {
            status: "warning".to_string(),
            message: "Cloudinary credentials missing".to_string(),
        }
    };
    checks.insert("cloudinary_credentials".to_string(), cloudinary_check);

    // Check model API key
    let groq_check = if state.pipeline.generator().is_configured() {
        HealthCheck {
            status: "ok".to_string(),
            message: format!("Model: {}", state.pipeline.generator().model()),
        }
    } else {
        overall_status = HealthStatus::Degraded;
        HealthCheck {
            status: "warning".to_string(),
            message: "Groq API key missing".to_string(),
        }
    };
    checks.insert("groq_credentials".to_string(), groq_check);

    let config_check = HealthCheck {
        status: "ok".to_string(),
        message: format!(
            "Prompt limit: {} characters, API base: {}",
            state.config.prompt.max_chars, state.config.groq.api_base_url
        ),
    };
    checks.insert("configuration".to_string(), config_check);

    Json(HealthResponse {
        status: overall_status,
        checks,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Handler for `/metrics` (Prometheus text format)
pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        crate::metrics::gather_metrics(),
    )
}

/// Handler for `GET /`: the empty form
pub async fn index_handler() -> Html<String> {
    Html(render(&PageView::default()))
}

/// Handler for `POST /generate`: run the pipeline and render the result
pub async fn generate_handler(State(state): State<AppState>, multipart: Multipart) -> Html<String> {
    let start = Instant::now();

    let submission = match read_submission(multipart).await {
        Ok(submission) => submission,
        Err(message) => {
            warn!("Rejected form submission: {}", message);
            crate::metrics::record_request("POST", "/generate", 400, start.elapsed().as_secs_f64());
            return Html(render(&PageView::error("", message)));
        }
    };

    info!(
        "Processing submission: app={}, files={}",
        submission.app_name,
        submission.images.len()
    );

    let app_name = submission.app_name.clone();
    let outcome = state.pipeline.run(submission).await;
    let status = match &outcome.instructions {
        Ok(_) => 200,
        Err(e) => e.status_code().as_u16(),
    };
    crate::metrics::record_request("POST", "/generate", status, start.elapsed().as_secs_f64());

    Html(render(&PageView::from_outcome(&app_name, &outcome)))
}

/// Collect the app name and screenshot files from the multipart form.
///
/// Empty file parts (a file input left blank) are ignored.
async fn read_submission(mut multipart: Multipart) -> Result<Submission, String> {
    let mut app_name = String::new();
    let mut images = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Could not read the form: {}", e))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("app_name") => {
                app_name = field
                    .text()
                    .await
                    .map_err(|e| format!("Could not read the app name: {}", e))?;
            }
            Some("screenshots") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Could not read {}: {}", file_name, e))?;
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }
                images.push(UploadedImage::new(file_name, content_type, bytes));
            }
            _ => {}
        }
    }

    Ok(Submission { app_name, images })
}
