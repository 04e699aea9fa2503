use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use staynest_core::health::{healthz, readyz};
use staynest_core::middleware::request_id_layer;

use crate::handlers::{
    booking::{create_booking, get_booking, list_bookings},
    property::{
        create_property, delete_property, get_property, get_property_amenities,
        get_property_availability, get_property_description, get_property_price_details,
        list_properties, update_property,
    },
    review::{get_property_reviews, get_user_reviews},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Properties
        .route("/properties", get(list_properties).post(create_property))
        .route(
            "/properties/{id}",
            get(get_property)
                .put(update_property)
                .delete(delete_property),
        )
        .route("/properties/{id}/reviews", get(get_property_reviews))
        .route(
            "/properties/{id}/description",
            get(get_property_description),
        )
        .route("/properties/{id}/amenities", get(get_property_amenities))
        .route(
            "/properties/{id}/price-details",
            get(get_property_price_details),
        )
        .route(
            "/properties/{id}/availability",
            get(get_property_availability),
        )
        // Bookings
        .route("/bookings", get(list_bookings).post(create_booking))
        .route("/bookings/{id}", get(get_booking))
        // Reviews
        .route("/users/{user_id}/reviews", get(get_user_reviews))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
