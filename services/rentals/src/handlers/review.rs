use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use staynest_core::serde::to_rfc3339_ms;

use crate::domain::types::Review;
use crate::error::RentalsServiceError;
use crate::state::AppState;
use crate::usecase::review::{PropertyReviewsUseCase, UserReviewsUseCase};

#[derive(Serialize)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub listing_id: Option<Uuid>,
    pub property_id: Option<Uuid>,
    pub rating: i16,
    pub review: Option<String>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(r: Review) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            listing_id: r.listing_id,
            property_id: r.property_id,
            rating: r.rating,
            review: r.review,
            created_at: r.created_at,
        }
    }
}

// ── GET /properties/{id}/reviews ─────────────────────────────────────────────

pub async fn get_property_reviews(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ReviewResponse>>, RentalsServiceError> {
    let usecase = PropertyReviewsUseCase {
        reviews: state.review_repo(),
    };
    let reviews = usecase.execute(id).await?;
    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

// ── GET /users/{user_id}/reviews ─────────────────────────────────────────────

pub async fn get_user_reviews(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<ReviewResponse>>, RentalsServiceError> {
    let usecase = UserReviewsUseCase {
        reviews: state.review_repo(),
    };
    let reviews = usecase.execute(user_id).await?;
    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}
