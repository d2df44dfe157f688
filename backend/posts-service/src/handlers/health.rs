/// Health check handlers
use super::AppState;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Serialize;
use std::time::Instant;

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Healthy,
    Unhealthy,
}

#[derive(Serialize, Debug)]
pub struct ComponentCheck {
    pub status: ComponentStatus,
    pub message: String,
    pub latency_ms: u64,
}

#[derive(Serialize, Debug)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub store: ComponentCheck,
    pub timestamp: String,
}

pub async fn health_summary() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "posts-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness: the store must answer a probe
pub async fn readiness_summary(state: web::Data<AppState>) -> HttpResponse {
    let start = Instant::now();
    let result = state.store.health_check().await;
    let latency_ms = start.elapsed().as_millis() as u64;

    let store = match result {
        Ok(()) => ComponentCheck {
            status: ComponentStatus::Healthy,
            message: "Store probe successful".to_string(),
            latency_ms,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Readiness probe failed");
            ComponentCheck {
                status: ComponentStatus::Unhealthy,
                message: "Store probe failed".to_string(),
                latency_ms,
            }
        }
    };

    let ready = store.status == ComponentStatus::Healthy;
    let response = ReadinessResponse {
        ready,
        store,
        timestamp: Utc::now().to_rfc3339(),
    };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

pub async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}
