use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use uuid::Uuid;

pub const BOOKING_STATUS_PENDING: &str = "pending";

/// Rental property with all public attributes. Prices are plain doubles;
/// `amenities`, `house_rules` and `images` stay as opaque JSON documents.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub address: String,
    pub county: String,
    pub latitude: f64,
    pub longitude: f64,
    pub check_in_hour: String,
    pub check_out_hour: String,
    pub num_of_guests: i32,
    pub num_of_children: Option<i32>,
    pub maximum_guests: i32,
    pub country: String,
    pub currency: String,
    pub price_range: String,
    pub price: f64,
    pub price_per_night: Option<f64>,
    pub additional_guest_price: Option<f64>,
    pub children_price: Option<f64>,
    pub amenities: Option<Value>,
    pub house_rules: Option<Value>,
    pub rating: Option<f64>,
    pub favorite: bool,
    pub images: Option<Value>,
    pub video_link: Option<String>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing row published for a property. One per property, written in the
/// same transaction as the property itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: Uuid,
    pub title: Option<String>,
    pub property_id: Uuid,
    pub post_levels: Option<Value>,
    pub published_at: DateTime<Utc>,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Booking of a property over a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: Uuid,
    pub booking_number: String,
    pub property_id: Uuid,
    pub user_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub guest_details: Option<String>,
    pub guest_count: i32,
    pub booking_status: String,
    pub cancellation_reason: Option<String>,
    pub cancellation_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Review left by a user for a property.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: Uuid,
    pub user_id: Uuid,
    pub listing_id: Option<Uuid>,
    pub property_id: Option<Uuid>,
    pub rating: i16,
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Availability record: a set of open dates for a property, possibly with
/// per-date price overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Availability {
    pub id: Uuid,
    pub property_id: Uuid,
    pub dates: Vec<NaiveDate>,
    pub price_dates: Option<Value>,
}
