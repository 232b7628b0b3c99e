// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{
    gather_metrics,
    REQUESTS_TOTAL,
    REQUEST_DURATION,
    IMAGE_UPLOADS,
    MODEL_API_CALLS,
    MODEL_API_DURATION,
    RATE_LIMIT_RETRIES,
    PROMPT_REJECTIONS,
};

/// Helper to record request metrics
pub fn record_request(method: &str, endpoint: &str, status_code: u16, duration_secs: f64) {
    REQUESTS_TOTAL
        .with_label_values(&[method, endpoint, &status_code.to_string()])
        .inc();

    REQUEST_DURATION
        .with_label_values(&[method, endpoint])
        .observe(duration_secs);
}

/// Helper to record one screenshot upload
pub fn record_upload(success: bool) {
    let outcome = if success { "success" } else { "failure" };
    IMAGE_UPLOADS.with_label_values(&[outcome]).inc();
}

/// Helper to record a screenshot dropped before upload (decode failure)
pub fn record_upload_skipped() {
    IMAGE_UPLOADS.with_label_values(&["skipped"]).inc();
}

/// Helper to record model API call metrics
pub fn record_model_call(model: &str, status_code: u16, duration_secs: f64) {
    MODEL_API_CALLS
        .with_label_values(&[model, &status_code.to_string()])
        .inc();

    MODEL_API_DURATION
        .with_label_values(&[model])
        .observe(duration_secs);
}

pub fn record_rate_limit_retry(operation: &str) {
    RATE_LIMIT_RETRIES.with_label_values(&[operation]).inc();
}

pub fn record_prompt_rejection(reason: &str) {
    PROMPT_REJECTIONS.with_label_values(&[reason]).inc();
}
