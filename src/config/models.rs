//! Configuration data structures for shot2test.
//!
//! This module defines the schema for the application settings: the web
//! server, the Cloudinary image host, the Groq completion API, prompt limits,
//! image preprocessing and logging.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use super::secret::SecretString;
use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port, upload limit).
    #[serde(default)]
    pub server: ServerConfig,

    /// Cloudinary image hosting credentials.
    #[serde(default)]
    pub cloudinary: CloudinaryConfig,

    /// Upstream Groq chat-completion settings.
    #[serde(default)]
    pub groq: GroqConfig,

    /// Prompt assembly limits.
    #[serde(default)]
    pub prompt: PromptConfig,

    /// Screenshot re-encoding settings.
    #[serde(default)]
    pub imaging: ImagingConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `127.0.0.1`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `8501`
    #[serde(default = "default_port")]
    pub port: u16,

    /// Largest accepted form submission in bytes, all screenshots included.
    /// Default: `50MB`
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

/// Credentials and endpoint for the Cloudinary upload API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudinaryConfig {
    #[serde(default)]
    pub cloud_name: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default)]
    pub api_secret: SecretString,

    /// Default: `https://api.cloudinary.com/v1_1`
    #[serde(default = "default_cloudinary_base_url")]
    pub api_base_url: String,

    /// Default: `60`
    #[serde(default = "default_upload_timeout")]
    pub timeout_seconds: u64,
}

/// Settings for the Groq chat-completion API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqConfig {
    #[serde(default)]
    pub api_key: SecretString,

    /// Default: `https://api.groq.com/openai/v1`
    #[serde(default = "default_groq_base_url")]
    pub api_base_url: String,

    /// Default: `llava-v1.5-7b-4096-preview`
    #[serde(default = "default_model")]
    pub model: String,

    /// Default: `1.0`
    #[serde(default = "default_one")]
    pub temperature: f64,

    /// Default: `4024`
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Default: `1.0`
    #[serde(default = "default_one")]
    pub top_p: f64,

    /// Connection and request timeout in seconds.
    /// Default: `300`
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Total attempts, the first call included.
    /// Default: `3`
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Fixed wait after a rate-limited attempt.
    /// Default: `120`
    #[serde(default = "default_rate_limit_delay")]
    pub rate_limit_delay_seconds: u64,
}

/// Prompt assembly limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Longest prompt, in characters, that may be sent to the model.
    /// Default: `20000`
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

/// Screenshot re-encoding settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagingConfig {
    /// JPEG quality used before upload (1-100).
    /// Default: `75`
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for stderr logs (`pretty`, `json`, `compact`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Log file, truncated on start-up. Empty or `None` disables file output.
    /// Default: `app.log`
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl Default for CloudinaryConfig {
    fn default() -> Self {
        Self {
            cloud_name: String::new(),
            api_key: String::new(),
            api_secret: SecretString::default(),
            api_base_url: default_cloudinary_base_url(),
            timeout_seconds: default_upload_timeout(),
        }
    }
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: SecretString::default(),
            api_base_url: default_groq_base_url(),
            model: default_model(),
            temperature: default_one(),
            max_tokens: default_max_tokens(),
            top_p: default_one(),
            timeout_seconds: default_timeout(),
            max_attempts: default_max_attempts(),
            rate_limit_delay_seconds: default_rate_limit_delay(),
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
        }
    }
}

impl Default for ImagingConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
        }
    }
}

impl LoggingConfig {
    /// The log file to write, if file output is enabled.
    pub fn file_path(&self) -> Option<&str> {
        self.file
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
    }
}

impl CloudinaryConfig {
    pub fn is_configured(&self) -> bool {
        !self.cloud_name.is_empty() && !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

// Helper functions for serde defaults
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_max_upload_bytes() -> usize {
    50 * 1024 * 1024
}

fn default_cloudinary_base_url() -> String {
    "https://api.cloudinary.com/v1_1".to_string()
}

fn default_upload_timeout() -> u64 {
    60
}

fn default_groq_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_model() -> String {
    "llava-v1.5-7b-4096-preview".to_string()
}

fn default_one() -> f64 {
    1.0
}

fn default_max_tokens() -> u32 {
    4024
}

fn default_timeout() -> u64 {
    300
}

fn default_max_attempts() -> u32 {
    3
}

fn default_rate_limit_delay() -> u64 {
    120
}

fn default_max_chars() -> usize {
    20_000
}

fn default_jpeg_quality() -> u8 {
    75
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_log_file() -> Option<String> {
    Some("app.log".to_string())
}
