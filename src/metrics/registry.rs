// Prometheus metrics registry and collectors
// Author: kelexine (https://github.com/kelexine)

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec_with_registry, register_histogram_vec_with_registry, CounterVec,
    Encoder, HistogramVec, Opts, Registry, TextEncoder,
};
use tracing::warn;

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // REQUEST METRICS
    // ============================================================================

    /// Total number of HTTP requests
    pub static ref REQUESTS_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("requests_total", "Total number of HTTP requests"),
        &["method", "endpoint", "status_code"],
        REGISTRY
    ).unwrap();

    /// Request duration histogram
    pub static ref REQUEST_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        prometheus::HistogramOpts::new("request_duration_seconds", "Request duration in seconds")
            .buckets(vec![0.1, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0, 120.0, 300.0]),
        &["method", "endpoint"],
        REGISTRY
    ).unwrap();

    // ============================================================================
    // IMAGE UPLOAD METRICS
    // ============================================================================

    /// Screenshot uploads to the image host
    pub static ref IMAGE_UPLOADS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("image_uploads_total", "Total screenshot uploads"),
        &["outcome"], // outcome: success, failure, skipped
        REGISTRY
    ).unwrap();

    // ============================================================================
    // MODEL API METRICS
    // ============================================================================

    /// Total model API calls
    pub static ref MODEL_API_CALLS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("model_api_calls_total", "Total chat-completion API calls"),
        &["model", "status_code"],
        REGISTRY
    ).unwrap();

    /// Model API call duration
    pub static ref MODEL_API_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        prometheus::HistogramOpts::new("model_api_duration_seconds", "Chat-completion call duration")
            .buckets(vec![0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        &["model"],
        REGISTRY
    ).unwrap();

    /// Retries caused by upstream rate limiting
    pub static ref RATE_LIMIT_RETRIES: CounterVec = register_counter_vec_with_registry!(
        Opts::new("rate_limit_retries_total", "Retries after a rate-limited call"),
        &["operation"],
        REGISTRY
    ).unwrap();

    // ============================================================================
    // PROMPT METRICS
    // ============================================================================

    /// Prompts rejected before reaching the model
    pub static ref PROMPT_REJECTIONS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("prompt_rejections_total", "Prompts rejected before the model call"),
        &["reason"],
        REGISTRY
    ).unwrap();
}

/// Gather all metrics and return as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        warn!("Failed to encode metrics: {}", e);
    }
    String::from_utf8(buffer).unwrap_or_default()
}
