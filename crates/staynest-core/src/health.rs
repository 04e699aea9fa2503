use axum::http::StatusCode;

/// `GET /healthz` — process is up.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /readyz` — process is ready to take traffic. Services that need a
/// deeper probe mount their own handler instead.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
