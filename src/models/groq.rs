//! Groq (OpenAI-compatible) chat-completion wire types.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::GroqConfig;
use serde::{Deserialize, Serialize};

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub stream: bool,
    /// Always sent, `null` when unset.
    pub stop: Option<Vec<String>>,
}

impl ChatCompletionRequest {
    /// A single user-role message carrying `prompt`, sampled per `config`.
    pub fn user_prompt(config: &GroqConfig, prompt: &str) -> Self {
        Self {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            top_p: config.top_p,
            stream: false,
            stop: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Response body for a non-streaming completion.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatCompletionResponse {
    /// Every choice's text, in order, joined with a single space.
    pub fn joined_text(&self) -> String {
        self.choices
            .iter()
            .map(|choice| choice.message.content.as_deref().unwrap_or_default())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompt_request_format() {
        let request = ChatCompletionRequest::user_prompt(&GroqConfig::default(), "hello");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "llava-v1.5-7b-4096-preview");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
        assert_eq!(json["temperature"], 1.0);
        assert_eq!(json["max_tokens"], 4024);
        assert_eq!(json["top_p"], 1.0);
        assert_eq!(json["stream"], false);
        assert!(json["stop"].is_null());
        assert!(json.as_object().unwrap().contains_key("stop"));
    }

    #[test]
    fn test_joined_text_preserves_order() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[
                {"index":0,"message":{"role":"assistant","content":"a"}},
                {"index":1,"message":{"role":"assistant","content":"b"}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(response.joined_text(), "a b");
    }

    #[test]
    fn test_joined_text_null_content() {
        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert_eq!(response.joined_text(), "");
    }

    #[test]
    fn test_error_envelope() {
        let body = r#"{"error":{"message":"Rate limit reached for model","type":"tokens","code":"rate_limit_exceeded"}}"#;
        let parsed: ApiErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message.as_deref(), Some("Rate limit reached for model"));
        assert_eq!(parsed.error.code.as_deref(), Some("rate_limit_exceeded"));
    }
}
