// Groq chat-completion client with rate-limit retry
// Author: kelexine (https://github.com/kelexine)

use crate::config::GroqConfig;
use crate::error::{AppError, Result};
use crate::models::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse};
use crate::prompt::Prompt;
use crate::utils::logging::sanitize;
use crate::utils::retry::{retry_on_rate_limit, Retried, RetryPolicy};
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Client for the Groq chat-completion API.
///
/// Each call sends the prompt as a single user message and retries only
/// when the upstream reports rate limiting.
pub struct GroqClient {
    http_client: Client,
    config: GroqConfig,
    retry_policy: RetryPolicy,
}

impl GroqClient {
    pub fn new(config: &GroqConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .use_rustls_tls()
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created Groq HTTP client for model {}", config.model);

        Ok(Self {
            http_client,
            config: config.clone(),
            retry_policy: RetryPolicy::from(config),
        })
    }

    /// Get the configured model identifier
    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn is_configured(&self) -> bool {
        !self.config.api_key.is_empty()
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Generate testing instructions for a checked prompt.
    ///
    /// Returns every choice's text joined with a single space. Rate-limited
    /// attempts are retried per the retry policy; any other failure is
    /// returned immediately.
    pub async fn generate(&self, prompt: &Prompt) -> Result<String> {
        self.generate_reporting(prompt).await.result
    }

    /// Like [`generate`](Self::generate), also reporting rate-limit waits.
    pub async fn generate_reporting(&self, prompt: &Prompt) -> Retried<String, AppError> {
        let request = ChatCompletionRequest::user_prompt(&self.config, prompt.as_str());

        debug!(
            "Sending {} character prompt to {}",
            prompt.char_count(),
            self.config.model
        );

        let retried = retry_on_rate_limit("Groq chat completion", &self.retry_policy, || {
            self.complete(&request)
        })
        .await;

        let result = retried.result.map(|response| {
            info!("Successfully generated testing instructions.");
            response.joined_text()
        });

        Retried {
            result,
            attempts: retried.attempts,
            rate_limit_waits: retried.rate_limit_waits,
        }
    }

    /// One `chat/completions` call, no retries.
    pub async fn complete(&self, request: &ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        let url = format!(
            "{}/chat/completions",
            self.config.api_base_url.trim_end_matches('/')
        );
        let start = Instant::now();

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.config.api_key.expose())
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Generation(format!("HTTP error: {}", e)))?;

        let status = response.status();
        crate::metrics::record_model_call(
            &self.config.model,
            status.as_u16(),
            start.elapsed().as_secs_f64(),
        );

        let response_text = response
            .text()
            .await
            .map_err(|e| AppError::Generation(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            let message = Self::extract_error_message(&response_text)
                .unwrap_or_else(|| response_text.clone());
            error!(
                "Groq API error: HTTP {} - {}",
                status,
                sanitize(&response_text)
            );
            return Err(AppError::Generation(format!("HTTP {}: {}", status, message)));
        }

        serde_json::from_str(&response_text).map_err(|e| {
            error!("Failed to parse Groq response: {}", e);
            AppError::Generation(format!("Response parsing error: {}", e))
        })
    }

    /// Extract error message from API response JSON
    fn extract_error_message(response_text: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorResponse>(response_text)
            .ok()
            .and_then(|e| e.error.message.or(e.error.error_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message() {
        let body = r#"{"error":{"message":"Rate limit reached","type":"tokens"}}"#;
        assert_eq!(
            GroqClient::extract_error_message(body).as_deref(),
            Some("Rate limit reached")
        );
        assert_eq!(GroqClient::extract_error_message("<html>bad gateway</html>"), None);
    }

    #[test]
    fn test_policy_follows_config() {
        let config = GroqConfig {
            max_attempts: 2,
            rate_limit_delay_seconds: 0,
            ..GroqConfig::default()
        };
        let client = GroqClient::new(&config).unwrap();
        assert_eq!(client.retry_policy().max_attempts, 2);
        assert_eq!(client.retry_policy().rate_limit_delay, Duration::ZERO);
        assert!(!client.is_configured());
    }
}
