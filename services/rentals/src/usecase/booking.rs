use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use staynest_core::error::FieldErrors;

use crate::domain::repository::BookingRepository;
use crate::domain::types::{BOOKING_STATUS_PENDING, Booking};
use crate::error::RentalsServiceError;

fn parse_date(errors: &mut FieldErrors, field: &str, value: Option<String>) -> Option<NaiveDate> {
    match value {
        Some(v) if !v.is_empty() => match v.parse::<NaiveDate>() {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(field, format!("{field} must be a valid date"));
                None
            }
        },
        _ => {
            errors.push(field, format!("{field} is required"));
            None
        }
    }
}

#[derive(Debug, Default)]
pub struct CreateBookingInput {
    pub property_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub guest_details: Option<String>,
    pub guest_count: Option<i32>,
}

pub struct CreateBookingUseCase<B: BookingRepository> {
    pub bookings: B,
}

impl<B: BookingRepository> CreateBookingUseCase<B> {
    pub async fn execute(&self, input: CreateBookingInput) -> Result<Booking, RentalsServiceError> {
        // All checks run before any row is written.
        let mut errors = FieldErrors::new();
        if input.property_id.is_none() {
            errors.push("property_id", "property_id is required");
        }
        if input.user_id.is_none() {
            errors.push("user_id", "user_id is required");
        }
        let start_date = parse_date(&mut errors, "start_date", input.start_date);
        let end_date = parse_date(&mut errors, "end_date", input.end_date);
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end <= start {
                errors.push("end_date", "end_date must be after start_date");
            }
        }
        match input.guest_count {
            None => errors.push("guest_count", "guest_count is required"),
            Some(n) if n < 1 => errors.push("guest_count", "guest_count must be at least 1"),
            Some(_) => {}
        }
        errors
            .into_result()
            .map_err(RentalsServiceError::Validation)?;

        let now = Utc::now();
        let booking = Booking {
            id: Uuid::now_v7(),
            booking_number: format!("booking_{}", Uuid::new_v4().simple()),
            property_id: input.property_id.unwrap_or_default(),
            user_id: input.user_id.unwrap_or_default(),
            start_date: start_date.unwrap_or_default(),
            end_date: end_date.unwrap_or_default(),
            guest_details: input.guest_details,
            guest_count: input.guest_count.unwrap_or_default(),
            booking_status: BOOKING_STATUS_PENDING.to_owned(),
            cancellation_reason: None,
            cancellation_date: None,
            created_at: now,
            updated_at: now,
        };
        self.bookings.create(&booking).await?;
        Ok(booking)
    }
}

pub struct GetBookingUseCase<B: BookingRepository> {
    pub bookings: B,
}

impl<B: BookingRepository> GetBookingUseCase<B> {
    pub async fn execute(&self, id: Uuid) -> Result<Booking, RentalsServiceError> {
        self.bookings
            .find(id)
            .await?
            .ok_or(RentalsServiceError::BookingNotFound)
    }
}

pub struct ListBookingsUseCase<B: BookingRepository> {
    pub bookings: B,
}

impl<B: BookingRepository> ListBookingsUseCase<B> {
    pub async fn execute(&self) -> Result<Vec<Booking>, RentalsServiceError> {
        self.bookings.list().await
    }
}
