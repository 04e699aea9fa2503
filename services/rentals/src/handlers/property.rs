use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use staynest_core::serde::to_rfc3339_ms;

use crate::domain::types::{Listing, Property};
use crate::error::RentalsServiceError;
use crate::state::AppState;
use crate::usecase::property::{
    CreatePropertyInput, CreatePropertyUseCase, DeletePropertyUseCase, GetPropertyUseCase,
    ListPropertiesUseCase, PropertyAvailabilityUseCase, UpdatePropertyInput, UpdatePropertyUseCase,
};

#[derive(Serialize)]
pub struct PropertyResponse {
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
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Property> for PropertyResponse {
    fn from(p: Property) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            location: p.location,
            address: p.address,
            county: p.county,
            latitude: p.latitude,
            longitude: p.longitude,
            check_in_hour: p.check_in_hour,
            check_out_hour: p.check_out_hour,
            num_of_guests: p.num_of_guests,
            num_of_children: p.num_of_children,
            maximum_guests: p.maximum_guests,
            country: p.country,
            currency: p.currency,
            price_range: p.price_range,
            price: p.price,
            price_per_night: p.price_per_night,
            additional_guest_price: p.additional_guest_price,
            children_price: p.children_price,
            amenities: p.amenities,
            house_rules: p.house_rules,
            rating: p.rating,
            favorite: p.favorite,
            images: p.images,
            video_link: p.video_link,
            verified: p.verified,
            created_at: p.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct ListingResponse {
    pub id: Uuid,
    pub title: Option<String>,
    pub property_id: Uuid,
    pub post_levels: Option<Value>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub published_at: DateTime<Utc>,
    pub status: bool,
}

impl From<Listing> for ListingResponse {
    fn from(l: Listing) -> Self {
        Self {
            id: l.id,
            title: l.title,
            property_id: l.property_id,
            post_levels: l.post_levels,
            published_at: l.published_at,
            status: l.status,
        }
    }
}

#[derive(Serialize)]
pub struct PropertyWithListingResponse {
    pub property: PropertyResponse,
    pub listing: Option<ListingResponse>,
}

/// Request body shared by create (required fields enforced in the
/// usecase) and update (everything optional).
#[derive(Deserialize, Default)]
pub struct PropertyRequest {
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

// ── GET /properties ──────────────────────────────────────────────────────────

pub async fn list_properties(
    State(state): State<AppState>,
) -> Result<Json<Vec<PropertyResponse>>, RentalsServiceError> {
    let usecase = ListPropertiesUseCase {
        properties: state.property_repo(),
    };
    let properties = usecase.execute().await?;
    Ok(Json(properties.into_iter().map(Into::into).collect()))
}

// ── GET /properties/{id} ─────────────────────────────────────────────────────

pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PropertyWithListingResponse>, RentalsServiceError> {
    let usecase = GetPropertyUseCase {
        properties: state.property_repo(),
    };
    let (property, listing) = usecase.execute(id).await?;
    Ok(Json(PropertyWithListingResponse {
        property: property.into(),
        listing: listing.map(Into::into),
    }))
}

// ── POST /properties ─────────────────────────────────────────────────────────

pub async fn create_property(
    State(state): State<AppState>,
    Json(body): Json<PropertyRequest>,
) -> Result<(StatusCode, Json<PropertyWithListingResponse>), RentalsServiceError> {
    let usecase = CreatePropertyUseCase {
        properties: state.property_repo(),
    };
    let (property, listing) = usecase.execute(create_input(body)).await?;
    Ok((
        StatusCode::CREATED,
        Json(PropertyWithListingResponse {
            property: property.into(),
            listing: Some(listing.into()),
        }),
    ))
}

// ── PUT /properties/{id} ─────────────────────────────────────────────────────

pub async fn update_property(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PropertyRequest>,
) -> Result<Json<PropertyWithListingResponse>, RentalsServiceError> {
    let usecase = UpdatePropertyUseCase {
        properties: state.property_repo(),
    };
    let (property, listing) = usecase.execute(id, update_input(body)).await?;
    Ok(Json(PropertyWithListingResponse {
        property: property.into(),
        listing: Some(listing.into()),
    }))
}

// ── DELETE /properties/{id} ──────────────────────────────────────────────────

pub async fn delete_property(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, RentalsServiceError> {
    let usecase = DeletePropertyUseCase {
        properties: state.property_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── Projections ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct DescriptionResponse {
    pub description: String,
}

pub async fn get_property_description(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DescriptionResponse>, RentalsServiceError> {
    let usecase = GetPropertyUseCase {
        properties: state.property_repo(),
    };
    let (property, _) = usecase.execute(id).await?;
    Ok(Json(DescriptionResponse {
        description: property.description,
    }))
}

#[derive(Serialize)]
pub struct AmenitiesResponse {
    pub amenities: Option<Value>,
}

pub async fn get_property_amenities(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AmenitiesResponse>, RentalsServiceError> {
    let usecase = GetPropertyUseCase {
        properties: state.property_repo(),
    };
    let (property, _) = usecase.execute(id).await?;
    Ok(Json(AmenitiesResponse {
        amenities: property.amenities,
    }))
}

#[derive(Serialize)]
pub struct PriceDetailsResponse {
    pub price: f64,
    pub price_range: String,
    pub price_per_night: Option<f64>,
    pub additional_guest_price: Option<f64>,
    pub children_price: Option<f64>,
}

pub async fn get_property_price_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PriceDetailsResponse>, RentalsServiceError> {
    let usecase = GetPropertyUseCase {
        properties: state.property_repo(),
    };
    let (property, _) = usecase.execute(id).await?;
    Ok(Json(PriceDetailsResponse {
        price: property.price,
        price_range: property.price_range,
        price_per_night: property.price_per_night,
        additional_guest_price: property.additional_guest_price,
        children_price: property.children_price,
    }))
}

#[derive(Serialize)]
pub struct AvailableDatesResponse {
    pub available_dates: Vec<NaiveDate>,
}

pub async fn get_property_availability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AvailableDatesResponse>, RentalsServiceError> {
    let usecase = PropertyAvailabilityUseCase {
        properties: state.property_repo(),
    };
    let available_dates = usecase.execute(id).await?;
    Ok(Json(AvailableDatesResponse { available_dates }))
}

fn create_input(body: PropertyRequest) -> CreatePropertyInput {
    CreatePropertyInput {
        title: body.title,
        description: body.description,
        location: body.location,
        address: body.address,
        county: body.county,
        latitude: body.latitude,
        longitude: body.longitude,
        check_in_hour: body.check_in_hour,
        check_out_hour: body.check_out_hour,
        num_of_guests: body.num_of_guests,
        num_of_children: body.num_of_children,
        maximum_guests: body.maximum_guests,
        country: body.country,
        currency: body.currency,
        price_range: body.price_range,
        price: body.price,
        price_per_night: body.price_per_night,
        additional_guest_price: body.additional_guest_price,
        children_price: body.children_price,
        amenities: body.amenities,
        house_rules: body.house_rules,
        rating: body.rating,
        favorite: body.favorite,
        images: body.images,
        video_link: body.video_link,
        verified: body.verified,
        post_levels: body.post_levels,
    }
}

fn update_input(body: PropertyRequest) -> UpdatePropertyInput {
    UpdatePropertyInput {
        title: body.title,
        description: body.description,
        location: body.location,
        address: body.address,
        county: body.county,
        latitude: body.latitude,
        longitude: body.longitude,
        check_in_hour: body.check_in_hour,
        check_out_hour: body.check_out_hour,
        num_of_guests: body.num_of_guests,
        num_of_children: body.num_of_children,
        maximum_guests: body.maximum_guests,
        country: body.country,
        currency: body.currency,
        price_range: body.price_range,
        price: body.price,
        price_per_night: body.price_per_night,
        additional_guest_price: body.additional_guest_price,
        children_price: body.children_price,
        amenities: body.amenities,
        house_rules: body.house_rules,
        rating: body.rating,
        favorite: body.favorite,
        images: body.images,
        video_link: body.video_link,
        verified: body.verified,
        post_levels: body.post_levels,
    }
}
