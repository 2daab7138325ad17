//! Liveness probe.

use axum::http::StatusCode;

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
