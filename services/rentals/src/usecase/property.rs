use chrono::{NaiveDate, Utc};
use serde_json::Value;
use uuid::Uuid;

use staynest_core::error::FieldErrors;

use crate::domain::repository::PropertyRepository;
use crate::domain::types::{Listing, Property};
use crate::error::RentalsServiceError;

fn require_str(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<String>,
    max: usize,
) -> String {
    match value {
        Some(v) if v.is_empty() => {
            errors.push(field, &format!("{field} is required"));
            v
        }
        // Limits count characters, not bytes.
        Some(v) if v.chars().count() > max => {
            errors.push(field, &format!("{field} must be at most {max} characters"));
            v
        }
        Some(v) => v,
        None => {
            errors.push(field, &format!("{field} is required"));
            String::new()
        }
    }
}

fn require_f64(errors: &mut FieldErrors, field: &str, value: Option<f64>) -> f64 {
    value.unwrap_or_else(|| {
        errors.push(field, &format!("{field} is required"));
        0.0
    })
}

fn require_i32(errors: &mut FieldErrors, field: &str, value: Option<i32>) -> i32 {
    value.unwrap_or_else(|| {
        errors.push(field, &format!("{field} is required"));
        0
    })
}

// ── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct CreatePropertyInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub county: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub check_in_hour: Option<String>,
    pub check_out_hour: Option<String>,
    pub num_of_guests: Option<i32>,
    pub num_of_children: Option<i32>,
    pub maximum_guests: Option<i32>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub price_range: Option<String>,
    pub price: Option<f64>,
    pub price_per_night: Option<f64>,
    pub additional_guest_price: Option<f64>,
    pub children_price: Option<f64>,
    pub amenities: Option<Value>,
    pub house_rules: Option<Value>,
    pub rating: Option<f64>,
    pub favorite: Option<bool>,
    pub images: Option<Value>,
    pub video_link: Option<String>,
    pub verified: Option<bool>,
    pub post_levels: Option<Value>,
}

pub struct CreatePropertyUseCase<P: PropertyRepository> {
    pub properties: P,
}

impl<P: PropertyRepository> CreatePropertyUseCase<P> {
    pub async fn execute(
        &self,
        input: CreatePropertyInput,
    ) -> Result<(Property, Listing), RentalsServiceError> {
        // Every field is checked before any row is written.
        let mut errors = FieldErrors::new();
        let title = require_str(&mut errors, "title", input.title, 255);
        let description = require_str(&mut errors, "description", input.description, usize::MAX);
        let location = require_str(&mut errors, "location", input.location, 255);
        let address = require_str(&mut errors, "address", input.address, 255);
        let county = require_str(&mut errors, "county", input.county, 255);
        let latitude = require_f64(&mut errors, "latitude", input.latitude);
        let longitude = require_f64(&mut errors, "longitude", input.longitude);
        let check_in_hour = require_str(&mut errors, "check_in_hour", input.check_in_hour, 10);
        let check_out_hour = require_str(&mut errors, "check_out_hour", input.check_out_hour, 10);
        let num_of_guests = require_i32(&mut errors, "num_of_guests", input.num_of_guests);
        let maximum_guests = require_i32(&mut errors, "maximum_guests", input.maximum_guests);
        let country = require_str(&mut errors, "country", input.country, 255);
        let currency = require_str(&mut errors, "currency", input.currency, 10);
        let price_range = require_str(&mut errors, "price_range", input.price_range, 50);
        let price = require_f64(&mut errors, "price", input.price);
        errors
            .into_result()
            .map_err(RentalsServiceError::Validation)?;

        let now = Utc::now();
        let property = Property {
            id: Uuid::now_v7(),
            title,
            description,
            location,
            address,
            county,
            latitude,
            longitude,
            check_in_hour,
            check_out_hour,
            num_of_guests,
            num_of_children: input.num_of_children,
            maximum_guests,
            country,
            currency,
            price_range,
            price,
            price_per_night: input.price_per_night,
            additional_guest_price: input.additional_guest_price,
            children_price: input.children_price,
            amenities: input.amenities,
            house_rules: input.house_rules,
            rating: input.rating,
            favorite: input.favorite.unwrap_or(false),
            images: input.images,
            video_link: input.video_link,
            verified: input.verified.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };
        let listing = Listing {
            id: Uuid::now_v7(),
            title: Some(property.title.clone()),
            property_id: property.id,
            post_levels: input.post_levels,
            published_at: now,
            status: false,
            created_at: now,
            updated_at: now,
        };

        self.properties
            .create_with_listing(&property, &listing)
            .await?;
        Ok((property, listing))
    }
}

// ── Update ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct UpdatePropertyInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub county: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub check_in_hour: Option<String>,
    pub check_out_hour: Option<String>,
    pub num_of_guests: Option<i32>,
    pub num_of_children: Option<i32>,
    pub maximum_guests: Option<i32>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub price_range: Option<String>,
    pub price: Option<f64>,
    pub price_per_night: Option<f64>,
    pub additional_guest_price: Option<f64>,
    pub children_price: Option<f64>,
    pub amenities: Option<Value>,
    pub house_rules: Option<Value>,
    pub rating: Option<f64>,
    pub favorite: Option<bool>,
    pub images: Option<Value>,
    pub video_link: Option<String>,
    pub verified: Option<bool>,
    pub post_levels: Option<Value>,
}

pub struct UpdatePropertyUseCase<P: PropertyRepository> {
    pub properties: P,
}

impl<P: PropertyRepository> UpdatePropertyUseCase<P> {
    pub async fn execute(
        &self,
        id: Uuid,
        input: UpdatePropertyInput,
    ) -> Result<(Property, Listing), RentalsServiceError> {
        let (mut property, existing_listing) = self
            .properties
            .find(id)
            .await?
            .ok_or(RentalsServiceError::PropertyNotFound)?;

        let now = Utc::now();
        if let Some(v) = input.title {
            property.title = v;
        }
        if let Some(v) = input.description {
            property.description = v;
        }
        if let Some(v) = input.location {
            property.location = v;
        }
        if let Some(v) = input.address {
            property.address = v;
        }
        if let Some(v) = input.county {
            property.county = v;
        }
        if let Some(v) = input.latitude {
            property.latitude = v;
        }
        if let Some(v) = input.longitude {
            property.longitude = v;
        }
        if let Some(v) = input.check_in_hour {
            property.check_in_hour = v;
        }
        if let Some(v) = input.check_out_hour {
            property.check_out_hour = v;
        }
        if let Some(v) = input.num_of_guests {
            property.num_of_guests = v;
        }
        if input.num_of_children.is_some() {
            property.num_of_children = input.num_of_children;
        }
        if let Some(v) = input.maximum_guests {
            property.maximum_guests = v;
        }
        if let Some(v) = input.country {
            property.country = v;
        }
        if let Some(v) = input.currency {
            property.currency = v;
        }
        if let Some(v) = input.price_range {
            property.price_range = v;
        }
        if let Some(v) = input.price {
            property.price = v;
        }
        if input.price_per_night.is_some() {
            property.price_per_night = input.price_per_night;
        }
        if input.additional_guest_price.is_some() {
            property.additional_guest_price = input.additional_guest_price;
        }
        if input.children_price.is_some() {
            property.children_price = input.children_price;
        }
        if input.amenities.is_some() {
            property.amenities = input.amenities;
        }
        if input.house_rules.is_some() {
            property.house_rules = input.house_rules;
        }
        if input.rating.is_some() {
            property.rating = input.rating;
        }
        if let Some(v) = input.favorite {
            property.favorite = v;
        }
        if input.images.is_some() {
            property.images = input.images;
        }
        if input.video_link.is_some() {
            property.video_link = input.video_link;
        }
        if let Some(v) = input.verified {
            property.verified = v;
        }
        property.updated_at = now;

        // Upsert the listing: a re-published listing keeps its identity but
        // refreshes title, levels and publish time.
        let listing = match existing_listing {
            Some(existing) => Listing {
                title: Some(property.title.clone()),
                post_levels: input.post_levels.or(existing.post_levels),
                published_at: now,
                updated_at: now,
                ..existing
            },
            None => Listing {
                id: Uuid::now_v7(),
                title: Some(property.title.clone()),
                property_id: property.id,
                post_levels: input.post_levels,
                published_at: now,
                status: false,
                created_at: now,
                updated_at: now,
            },
        };

        self.properties
            .update_with_listing(&property, &listing)
            .await?;
        Ok((property, listing))
    }
}

// ── Read / delete ────────────────────────────────────────────────────────────

pub struct GetPropertyUseCase<P: PropertyRepository> {
    pub properties: P,
}

impl<P: PropertyRepository> GetPropertyUseCase<P> {
    pub async fn execute(
        &self,
        id: Uuid,
    ) -> Result<(Property, Option<Listing>), RentalsServiceError> {
        self.properties
            .find(id)
            .await?
            .ok_or(RentalsServiceError::PropertyNotFound)
    }
}

pub struct ListPropertiesUseCase<P: PropertyRepository> {
    pub properties: P,
}

impl<P: PropertyRepository> ListPropertiesUseCase<P> {
    pub async fn execute(&self) -> Result<Vec<Property>, RentalsServiceError> {
        self.properties.list().await
    }
}

pub struct DeletePropertyUseCase<P: PropertyRepository> {
    pub properties: P,
}

impl<P: PropertyRepository> DeletePropertyUseCase<P> {
    pub async fn execute(&self, id: Uuid) -> Result<(), RentalsServiceError> {
        self.properties
            .find(id)
            .await?
            .ok_or(RentalsServiceError::PropertyNotFound)?;
        self.properties.delete_cascade(id).await
    }
}

// ── Availability ─────────────────────────────────────────────────────────────

pub struct PropertyAvailabilityUseCase<P: PropertyRepository> {
    pub properties: P,
}

impl<P: PropertyRepository> PropertyAvailabilityUseCase<P> {
    /// Union of open dates across all availability records, first
    /// occurrence order preserved.
    pub async fn execute(&self, property_id: Uuid) -> Result<Vec<NaiveDate>, RentalsServiceError> {
        let records = self.properties.find_availability(property_id).await?;
        let mut dates: Vec<NaiveDate> = Vec::new();
        for record in records {
            for date in record.dates {
                if !dates.contains(&date) {
                    dates.push(date);
                }
            }
        }
        Ok(dates)
    }
}
