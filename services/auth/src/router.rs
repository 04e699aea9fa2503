use axum::{Router, routing::{get, post}};
use tower_http::trace::TraceLayer;

use staynest_core::health::{healthz, readyz};
use staynest_core::middleware::request_id_layer;

use crate::handlers::{
    account::{login, register},
    otp::{get_otp, verify_otp},
    password_reset::{forgot_password, reset_password},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Account
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        // One-time codes
        .route("/auth/get-otp", post(get_otp))
        .route("/auth/verify-otp", post(verify_otp))
        // Password reset
        .route("/auth/forgot-password", post(forgot_password))
        .route("/auth/reset-password", post(reset_password))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
