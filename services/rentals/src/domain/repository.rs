#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Availability, Booking, Listing, Property, Review};
use crate::error::RentalsServiceError;

/// Repository for properties and their dependent rows.
pub trait PropertyRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Property>, RentalsServiceError>;

    /// Property together with its listing, if one exists.
    async fn find(
        &self,
        id: Uuid,
    ) -> Result<Option<(Property, Option<Listing>)>, RentalsServiceError>;

    /// Insert the property row and its listing row atomically; failure of
    /// either insert rolls both back.
    async fn create_with_listing(
        &self,
        property: &Property,
        listing: &Listing,
    ) -> Result<(), RentalsServiceError>;

    /// Write the updated property and upsert its listing in one transaction.
    async fn update_with_listing(
        &self,
        property: &Property,
        listing: &Listing,
    ) -> Result<(), RentalsServiceError>;

    /// Delete listings, availabilities and bookings for the property, then
    /// the property itself, all in one transaction.
    async fn delete_cascade(&self, id: Uuid) -> Result<(), RentalsServiceError>;

    async fn find_availability(
        &self,
        property_id: Uuid,
    ) -> Result<Vec<Availability>, RentalsServiceError>;
}

/// Repository for bookings.
pub trait BookingRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Booking>, RentalsServiceError>;

    async fn find(&self, id: Uuid) -> Result<Option<Booking>, RentalsServiceError>;

    async fn create(&self, booking: &Booking) -> Result<(), RentalsServiceError>;
}

/// Repository for user reviews.
pub trait ReviewRepository: Send + Sync {
    async fn for_property(&self, property_id: Uuid) -> Result<Vec<Review>, RentalsServiceError>;

    async fn for_user(&self, user_id: Uuid) -> Result<Vec<Review>, RentalsServiceError>;
}
