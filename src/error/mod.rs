// Error types for shot2test
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Image upload failed: {0}")]
    Upload(String),

    #[error("Image processing failed: {0}")]
    Image(String),

    #[error("Prompt too large: {length} characters exceeds the limit of {limit}")]
    PromptTooLarge { length: usize, limit: usize },

    #[error("No screenshots could be uploaded ({0} attempted)")]
    NoImagesPublished(usize),

    #[error("Error generating instructions: {0}")]
    Generation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message shown to the person using the web form.
    pub fn user_message(&self) -> String {
        match self {
            AppError::PromptTooLarge { .. } => "Message too large to process.".to_string(),
            AppError::InvalidRequest(msg) => msg.clone(),
            AppError::NoImagesPublished(_) => {
                "None of the screenshots could be uploaded. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        self.classify().0
    }

    fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::InvalidRequest(_) | AppError::Image(_) => {
                (StatusCode::BAD_REQUEST, "invalid_request_error")
            }
            AppError::PromptTooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, "prompt_too_large"),
            AppError::Upload(_) | AppError::NoImagesPublished(_) => {
                (StatusCode::BAD_GATEWAY, "upload_error")
            }
            AppError::Generation(_) => (StatusCode::BAD_GATEWAY, "api_error"),
            AppError::Config(_) | AppError::ConfigParsing(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "api_error"),
        }
    }
}

// Convert AppError to HTTP responses for Axum
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.classify();

        let body = json!({
            "type": "error",
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
