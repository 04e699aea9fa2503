use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use staynest_core::error::{FieldErrors, error_response, validation_response};

/// Rentals service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum RentalsServiceError {
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("property not found")]
    PropertyNotFound,
    #[error("booking not found")]
    BookingNotFound,
    #[error("no reviews found for this user")]
    NoUserReviews,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl RentalsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::PropertyNotFound => "PROPERTY_NOT_FOUND",
            Self::BookingNotFound => "BOOKING_NOT_FOUND",
            Self::NoUserReviews => "NO_USER_REVIEWS",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for RentalsServiceError {
    fn into_response(self) -> Response {
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let status = match &self {
            Self::Validation(errors) => {
                return validation_response(self.kind(), &self.to_string(), errors);
            }
            Self::PropertyNotFound | Self::BookingNotFound | Self::NoUserReviews => {
                StatusCode::NOT_FOUND
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error_response(status, self.kind(), &self.to_string())
    }
}
