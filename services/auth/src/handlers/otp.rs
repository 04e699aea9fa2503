use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use staynest_core::serde::lenient_u32;

use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::otp::{RequestOtpInput, RequestOtpUseCase, VerifyOtpInput, VerifyOtpUseCase};

// ── POST /auth/get-otp ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RequestOtpRequest {
    #[serde(default)]
    pub email: String,
}

pub async fn get_otp(
    State(state): State<AppState>,
    Json(body): Json<RequestOtpRequest>,
) -> Result<StatusCode, AuthServiceError> {
    let usecase = RequestOtpUseCase {
        identities: state.identity_repo(),
        cache: state.otp_cache(),
        mailer: state.mailer.clone(),
        ttl_secs: state.otp_ttl_secs,
    };
    usecase.execute(RequestOtpInput { email: body.email }).await?;
    // The code travels by email only.
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /auth/verify-otp ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyOtpRequest {
    #[serde(default)]
    pub email: String,
    /// Accepted as a JSON number or a numeric string.
    #[serde(deserialize_with = "lenient_u32")]
    pub otp: u32,
}

#[derive(Serialize)]
pub struct VerifyOtpResponse {
    pub verified: bool,
}

pub async fn verify_otp(
    State(state): State<AppState>,
    Json(body): Json<VerifyOtpRequest>,
) -> Result<Json<VerifyOtpResponse>, AuthServiceError> {
    let usecase = VerifyOtpUseCase {
        identities: state.identity_repo(),
        enforce_expiry: state.otp_enforce_expiry,
    };
    usecase
        .execute(VerifyOtpInput {
            email: body.email,
            otp: body.otp,
        })
        .await?;
    Ok(Json(VerifyOtpResponse { verified: true }))
}
