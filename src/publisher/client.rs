// Cloudinary upload client
// Author: kelexine (https://github.com/kelexine)

use super::PublishedImageUrl;
use crate::config::CloudinaryConfig;
use crate::error::{AppError, Result};
use crate::imaging::EncodedImage;
use crate::models::{UploadErrorResponse, UploadResponse};
use crate::utils::logging::sanitize;
use base64::Engine;
use reqwest::Client;
use sha2::{Digest, Sha256};
use std::time::Duration;
use tracing::{debug, error, info};

/// Client for Cloudinary's signed image upload endpoint.
pub struct CloudinaryClient {
    http_client: Client,
    config: CloudinaryConfig,
}

impl CloudinaryClient {
    pub fn new(config: &CloudinaryConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .use_rustls_tls()
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    fn upload_url(&self) -> String {
        format!(
            "{}/{}/image/upload",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.cloud_name
        )
    }

    /// Upload one encoded screenshot and return its public URL.
    pub async fn upload(&self, image: &EncodedImage) -> Result<PublishedImageUrl> {
        if !self.is_configured() {
            return Err(AppError::Upload(
                "Cloudinary credentials are not configured".to_string(),
            ));
        }

        let timestamp = chrono::Utc::now().timestamp();
        let signature = sign_upload(timestamp, self.config.api_secret.expose());
        let data_uri = format!(
            "data:{};base64,{}",
            image.mime_type(),
            base64::engine::general_purpose::STANDARD.encode(&image.bytes)
        );

        let url = self.upload_url();
        debug!("Uploading {} ({} bytes) to {}", image.file_name, image.bytes.len(), url);

        let form = [
            ("file", data_uri),
            ("api_key", self.config.api_key.clone()),
            ("timestamp", timestamp.to_string()),
            ("signature", signature),
        ];

        let response = self
            .http_client
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::Upload(format!("HTTP error: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| AppError::Upload(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            let message = serde_json::from_str::<UploadErrorResponse>(&response_text)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| response_text.clone());
            error!(
                "Error uploading image to Cloudinary: HTTP {} - {}",
                status,
                sanitize(&message)
            );
            return Err(AppError::Upload(format!("HTTP {}: {}", status, message)));
        }

        let upload: UploadResponse = serde_json::from_str(&response_text)
            .map_err(|e| AppError::Upload(format!("Invalid response: {}", e)))?;

        let public_url = upload
            .public_url()
            .ok_or_else(|| AppError::Upload("Response did not include a URL".to_string()))?;

        info!("Image uploaded successfully: {}", public_url);
        Ok(PublishedImageUrl::new(public_url))
    }
}

/// Hex SHA-256 of the signed parameters followed by the API secret.
///
/// Only `timestamp` is signed; `file` and `api_key` are excluded by the
/// upload API's signing rules.
pub fn sign_upload(timestamp: i64, api_secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("timestamp={}", timestamp).as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}
