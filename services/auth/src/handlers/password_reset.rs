use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use staynest_core::error::FieldErrors;
use staynest_core::serde::lenient_u32_opt;

use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::password_reset::{
    ForgotPasswordInput, ForgotPasswordUseCase, ResetArtifact, ResetPasswordInput,
    ResetPasswordUseCase,
};

// ── POST /auth/forgot-password ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ForgotPasswordRequest {
    #[serde(default)]
    pub email: String,
}

pub async fn forgot_password(
    State(state): State<AppState>,
    Json(body): Json<ForgotPasswordRequest>,
) -> Result<StatusCode, AuthServiceError> {
    let usecase = ForgotPasswordUseCase {
        identities: state.identity_repo(),
        tokens: state.reset_token_repo(),
        mailer: state.mailer.clone(),
        token_ttl_secs: state.reset_token_ttl_secs,
        reset_link_base: state.reset_link_base.clone(),
    };
    usecase
        .execute(ForgotPasswordInput { email: body.email })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /auth/reset-password ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub email: String,
    /// One-time code artifact, accepted as number or numeric string.
    #[serde(default, deserialize_with = "lenient_u32_opt")]
    pub otp: Option<u32>,
    /// Reset-token artifact from the emailed link.
    pub token: Option<String>,
    #[serde(default)]
    pub new_password: String,
}

pub async fn reset_password(
    State(state): State<AppState>,
    Json(body): Json<ResetPasswordRequest>,
) -> Result<StatusCode, AuthServiceError> {
    // Exactly one artifact kind per request.
    let artifact = match (body.otp, body.token) {
        (Some(code), None) => ResetArtifact::Otp(code),
        (None, Some(token)) => ResetArtifact::Token(token),
        _ => {
            let mut errors = FieldErrors::new();
            errors.push("otp", "exactly one of otp or token is required");
            errors.push("token", "exactly one of otp or token is required");
            return Err(AuthServiceError::Validation(errors));
        }
    };

    let usecase = ResetPasswordUseCase {
        identities: state.identity_repo(),
        tokens: state.reset_token_repo(),
        cache: state.otp_cache(),
    };
    usecase
        .execute(ResetPasswordInput {
            email: body.email,
            artifact,
            new_password: body.new_password,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
