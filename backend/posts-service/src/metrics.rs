//! Prometheus metrics for posts-service.
//!
//! Exposes HTTP response collectors and an HTTP handler for the `/metrics` endpoint.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};

lazy_static! {
    /// Responses written, by method, route pattern and status code.
    pub static ref HTTP_RESPONSES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "posts_http_responses_total",
        "HTTP responses segmented by route and status",
        &["method", "route", "status"]
    )
    .expect("failed to register posts_http_responses_total");

    /// Request latency by method and route pattern.
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "posts_http_request_duration_seconds",
        "HTTP request duration segmented by route",
        &["method", "route"]
    )
    .expect("failed to register posts_http_request_duration_seconds");
}

/// Record one finished request
pub fn record_response(method: &str, route: &str, status: u16, elapsed_secs: f64) {
    HTTP_RESPONSES_TOTAL
        .with_label_values(&[method, route, &status.to_string()])
        .inc();
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, route])
        .observe(elapsed_secs);
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_response_increments_counter() {
        let before = HTTP_RESPONSES_TOTAL
            .with_label_values(&["GET", "/api/posts/{post_id}", "404"])
            .get();

        record_response("GET", "/api/posts/{post_id}", 404, 0.002);

        let after = HTTP_RESPONSES_TOTAL
            .with_label_values(&["GET", "/api/posts/{post_id}", "404"])
            .get();
        assert_eq!(after, before + 1);
    }
}
