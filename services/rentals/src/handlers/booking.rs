use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use staynest_core::serde::to_rfc3339_ms;

use crate::domain::types::Booking;
use crate::error::RentalsServiceError;
use crate::state::AppState;
use crate::usecase::booking::{
    CreateBookingInput, CreateBookingUseCase, GetBookingUseCase, ListBookingsUseCase,
};

#[derive(Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub booking_number: String,
    pub property_id: Uuid,
    pub user_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub guest_details: Option<String>,
    pub guest_count: i32,
    pub booking_status: String,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            booking_number: b.booking_number,
            property_id: b.property_id,
            user_id: b.user_id,
            start_date: b.start_date,
            end_date: b.end_date,
            guest_details: b.guest_details,
            guest_count: b.guest_count,
            booking_status: b.booking_status,
            created_at: b.created_at,
        }
    }
}

// ── GET /bookings ────────────────────────────────────────────────────────────

pub async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingResponse>>, RentalsServiceError> {
    let usecase = ListBookingsUseCase {
        bookings: state.booking_repo(),
    };
    let bookings = usecase.execute().await?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

// ── GET /bookings/{id} ───────────────────────────────────────────────────────

pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingResponse>, RentalsServiceError> {
    let usecase = GetBookingUseCase {
        bookings: state.booking_repo(),
    };
    let booking = usecase.execute(id).await?;
    Ok(Json(booking.into()))
}

// ── POST /bookings ───────────────────────────────────────────────────────────

/// Dates arrive as strings so a malformed value surfaces as a field error
/// rather than a body-level deserialization failure.
#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub property_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub guest_details: Option<String>,
    pub guest_count: Option<i32>,
}

pub async fn create_booking(
    State(state): State<AppState>,
    Json(body): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), RentalsServiceError> {
    let usecase = CreateBookingUseCase {
        bookings: state.booking_repo(),
    };
    let booking = usecase
        .execute(CreateBookingInput {
            property_id: body.property_id,
            user_id: body.user_id,
            start_date: body.start_date,
            end_date: body.end_date,
            guest_details: body.guest_details,
            guest_count: body.guest_count,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(booking.into())))
}
