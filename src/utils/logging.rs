//! Structured logging and credential-scrubbing utilities.
//!
//! This module configures the `tracing` ecosystem for the application. Events
//! go to stderr in the configured format and, when `logging.file` is set, to a
//! plain-text log file that is truncated on every start.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::{AppError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

lazy_static! {
    static ref GROQ_KEY: Regex = Regex::new(r"gsk_[A-Za-z0-9]+").unwrap();
    static ref SIGNATURE_PARAM: Regex = Regex::new(r"(signature=)[0-9a-fA-F]{16,}").unwrap();
    static ref BEARER: Regex = Regex::new(r"(Bearer\s+)[^\s'\x22]+").unwrap();
}

/// Initializes the global tracing subscriber for the application.
///
/// Supports three stderr formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `compact`: One terse line per event.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    // One line per event, no colour codes in the file
    let file_layer = match config.file_path() {
        Some(path) => {
            let file = File::create(path)?;
            Some(
                fmt::layer()
                    .compact()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    let registry = tracing_subscriber::registry().with(env_filter).with(file_layer);

    let result = match config.format.as_str() {
        "json" => registry.with(fmt::layer().json()).try_init(),
        "compact" => registry.with(fmt::layer().compact()).try_init(),
        _ => registry.with(fmt::layer().pretty()).try_init(),
    };

    result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))
}

/// Scrubs credentials from text before it is written to a log sink.
///
/// Upstream error bodies can echo request data back, so anything that looks
/// like a Groq API key, a bearer token or a Cloudinary upload signature is
/// replaced with a `\[REDACTED\]` placeholder.
pub fn sanitize(input: &str) -> String {
    let result = GROQ_KEY.replace_all(input, "[REDACTED_API_KEY]");
    let result = BEARER.replace_all(&result, "${1}[REDACTED_TOKEN]");
    let result = SIGNATURE_PARAM.replace_all(&result, "${1}[REDACTED_SIGNATURE]");
    result.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_groq_key() {
        let input = "Invalid API Key: gsk_abc123XYZ provided";
        let output = sanitize(input);
        assert!(output.contains("[REDACTED_API_KEY]"));
        assert!(!output.contains("gsk_abc123XYZ"));
    }

    #[test]
    fn test_sanitize_bearer_token() {
        let output = sanitize("Authorization: Bearer abc.def.ghi");
        assert_eq!(output, "Authorization: Bearer [REDACTED_TOKEN]");
    }

    #[test]
    fn test_sanitize_signature() {
        let output = sanitize("timestamp=1700000000&signature=0123456789abcdef0123");
        assert!(output.ends_with("signature=[REDACTED_SIGNATURE]"));
    }

    #[test]
    fn test_sanitize_leaves_plain_text() {
        let input = "Rate limit reached for model llava";
        assert_eq!(sanitize(input), input);
    }
}
