use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use staynest_core::error::{FieldErrors, error_response, validation_response};

/// Auth service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("user not found")]
    UserNotFound,
    #[error("invalid credentials")]
    InvalidCredential,
    #[error("invalid otp")]
    InvalidOtp,
    #[error("invalid reset token")]
    InvalidResetToken,
    #[error("failed to send email")]
    DeliveryFailed,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AuthServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::InvalidCredential => "INVALID_CREDENTIAL",
            Self::InvalidOtp => "INVALID_OTP",
            Self::InvalidResetToken => "INVALID_RESET_TOKEN",
            Self::DeliveryFailed => "DELIVERY_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AuthServiceError {
    fn into_response(self) -> Response {
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let status = match &self {
            Self::Validation(errors) => {
                return validation_response(self.kind(), &self.to_string(), errors);
            }
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::InvalidCredential => StatusCode::UNAUTHORIZED,
            Self::InvalidOtp | Self::InvalidResetToken => StatusCode::BAD_REQUEST,
            Self::DeliveryFailed | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error_response(status, self.kind(), &self.to_string())
    }
}
