use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, TransactionTrait,
};
use uuid::Uuid;

use staynest_rentals_schema::{availabilities, bookings, listings, properties, user_reviews};

use crate::domain::repository::{BookingRepository, PropertyRepository, ReviewRepository};
use crate::domain::types::{Availability, Booking, Listing, Property, Review};
use crate::error::RentalsServiceError;

// ── Property repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPropertyRepository {
    pub db: DatabaseConnection,
}

impl PropertyRepository for DbPropertyRepository {
    async fn list(&self) -> Result<Vec<Property>, RentalsServiceError> {
        let models = properties::Entity::find()
            .all(&self.db)
            .await
            .context("list properties")?;
        Ok(models.into_iter().map(property_from_model).collect())
    }

    async fn find(
        &self,
        id: Uuid,
    ) -> Result<Option<(Property, Option<Listing>)>, RentalsServiceError> {
        let row = properties::Entity::find_by_id(id)
            .find_also_related(listings::Entity)
            .one(&self.db)
            .await
            .context("find property")?;
        Ok(row.map(|(property, listing)| {
            (property_from_model(property), listing.map(listing_from_model))
        }))
    }

    async fn create_with_listing(
        &self,
        property: &Property,
        listing: &Listing,
    ) -> Result<(), RentalsServiceError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let property = property.clone();
                let listing = listing.clone();
                Box::pin(async move {
                    property_active_model(&property).insert(txn).await?;
                    listing_active_model(&listing).insert(txn).await?;
                    Ok(())
                })
            })
            .await
            .context("create property with listing")?;
        Ok(())
    }

    async fn update_with_listing(
        &self,
        property: &Property,
        listing: &Listing,
    ) -> Result<(), RentalsServiceError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let property = property.clone();
                let listing = listing.clone();
                Box::pin(async move {
                    property_active_model(&property).update(txn).await?;
                    upsert_listing(txn, &listing).await?;
                    Ok(())
                })
            })
            .await
            .context("update property with listing")?;
        Ok(())
    }

    async fn delete_cascade(&self, id: Uuid) -> Result<(), RentalsServiceError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    listings::Entity::delete_many()
                        .filter(listings::Column::PropertyId.eq(id))
                        .exec(txn)
                        .await?;
                    availabilities::Entity::delete_many()
                        .filter(availabilities::Column::PropertyId.eq(id))
                        .exec(txn)
                        .await?;
                    bookings::Entity::delete_many()
                        .filter(bookings::Column::PropertyId.eq(id))
                        .exec(txn)
                        .await?;
                    properties::Entity::delete_by_id(id).exec(txn).await?;
                    Ok(())
                })
            })
            .await
            .context("delete property cascade")?;
        Ok(())
    }

    async fn find_availability(
        &self,
        property_id: Uuid,
    ) -> Result<Vec<Availability>, RentalsServiceError> {
        let models = availabilities::Entity::find()
            .filter(availabilities::Column::PropertyId.eq(property_id))
            .all(&self.db)
            .await
            .context("find availability")?;
        models.into_iter().map(availability_from_model).collect()
    }
}

async fn upsert_listing(
    txn: &DatabaseTransaction,
    listing: &Listing,
) -> Result<(), sea_orm::DbErr> {
    let existing = listings::Entity::find()
        .filter(listings::Column::PropertyId.eq(listing.property_id))
        .one(txn)
        .await?;
    let model = listing_active_model(listing);
    if existing.is_some() {
        model.update(txn).await?;
    } else {
        model.insert(txn).await?;
    }
    Ok(())
}

fn property_active_model(property: &Property) -> properties::ActiveModel {
    properties::ActiveModel {
        id: Set(property.id),
        title: Set(property.title.clone()),
        description: Set(property.description.clone()),
        location: Set(property.location.clone()),
        address: Set(property.address.clone()),
        county: Set(property.county.clone()),
        latitude: Set(property.latitude),
        longitude: Set(property.longitude),
        check_in_hour: Set(property.check_in_hour.clone()),
        check_out_hour: Set(property.check_out_hour.clone()),
        num_of_guests: Set(property.num_of_guests),
        num_of_children: Set(property.num_of_children),
        maximum_guests: Set(property.maximum_guests),
        country: Set(property.country.clone()),
        currency: Set(property.currency.clone()),
        price_range: Set(property.price_range.clone()),
        price: Set(property.price),
        price_per_night: Set(property.price_per_night),
        additional_guest_price: Set(property.additional_guest_price),
        children_price: Set(property.children_price),
        amenities: Set(property.amenities.clone()),
        house_rules: Set(property.house_rules.clone()),
        rating: Set(property.rating),
        favorite: Set(property.favorite),
        images: Set(property.images.clone()),
        video_link: Set(property.video_link.clone()),
        verified: Set(property.verified),
        created_at: Set(property.created_at),
        updated_at: Set(property.updated_at),
    }
}

fn listing_active_model(listing: &Listing) -> listings::ActiveModel {
    listings::ActiveModel {
        id: Set(listing.id),
        title: Set(listing.title.clone()),
        property_id: Set(listing.property_id),
        post_levels: Set(listing.post_levels.clone()),
        published_at: Set(listing.published_at),
        status: Set(listing.status),
        created_at: Set(listing.created_at),
        updated_at: Set(listing.updated_at),
    }
}

fn property_from_model(model: properties::Model) -> Property {
    Property {
        id: model.id,
        title: model.title,
        description: model.description,
        location: model.location,
        address: model.address,
        county: model.county,
        latitude: model.latitude,
        longitude: model.longitude,
        check_in_hour: model.check_in_hour,
        check_out_hour: model.check_out_hour,
        num_of_guests: model.num_of_guests,
        num_of_children: model.num_of_children,
        maximum_guests: model.maximum_guests,
        country: model.country,
        currency: model.currency,
        price_range: model.price_range,
        price: model.price,
        price_per_night: model.price_per_night,
        additional_guest_price: model.additional_guest_price,
        children_price: model.children_price,
        amenities: model.amenities,
        house_rules: model.house_rules,
        rating: model.rating,
        favorite: model.favorite,
        images: model.images,
        video_link: model.video_link,
        verified: model.verified,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn listing_from_model(model: listings::Model) -> Listing {
    Listing {
        id: model.id,
        title: model.title,
        property_id: model.property_id,
        post_levels: model.post_levels,
        published_at: model.published_at,
        status: model.status,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn availability_from_model(
    model: availabilities::Model,
) -> Result<Availability, RentalsServiceError> {
    let dates = serde_json::from_value(model.date_range).context("parse availability dates")?;
    Ok(Availability {
        id: model.id,
        property_id: model.property_id,
        dates,
        price_dates: model.price_dates,
    })
}

// ── Booking repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBookingRepository {
    pub db: DatabaseConnection,
}

impl BookingRepository for DbBookingRepository {
    async fn list(&self) -> Result<Vec<Booking>, RentalsServiceError> {
        let models = bookings::Entity::find()
            .all(&self.db)
            .await
            .context("list bookings")?;
        Ok(models.into_iter().map(booking_from_model).collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Booking>, RentalsServiceError> {
        let model = bookings::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find booking")?;
        Ok(model.map(booking_from_model))
    }

    async fn create(&self, booking: &Booking) -> Result<(), RentalsServiceError> {
        bookings::ActiveModel {
            id: Set(booking.id),
            booking_number: Set(booking.booking_number.clone()),
            property_id: Set(booking.property_id),
            user_id: Set(booking.user_id),
            start_date: Set(booking.start_date),
            end_date: Set(booking.end_date),
            guest_details: Set(booking.guest_details.clone()),
            guest_count: Set(booking.guest_count),
            booking_status: Set(booking.booking_status.clone()),
            cancellation_reason: Set(booking.cancellation_reason.clone()),
            cancellation_date: Set(booking.cancellation_date),
            created_at: Set(booking.created_at),
            updated_at: Set(booking.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create booking")?;
        Ok(())
    }
}

fn booking_from_model(model: bookings::Model) -> Booking {
    Booking {
        id: model.id,
        booking_number: model.booking_number,
        property_id: model.property_id,
        user_id: model.user_id,
        start_date: model.start_date,
        end_date: model.end_date,
        guest_details: model.guest_details,
        guest_count: model.guest_count,
        booking_status: model.booking_status,
        cancellation_reason: model.cancellation_reason,
        cancellation_date: model.cancellation_date,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Review repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbReviewRepository {
    pub db: DatabaseConnection,
}

impl ReviewRepository for DbReviewRepository {
    async fn for_property(&self, property_id: Uuid) -> Result<Vec<Review>, RentalsServiceError> {
        let models = user_reviews::Entity::find()
            .filter(user_reviews::Column::PropertyId.eq(property_id))
            .all(&self.db)
            .await
            .context("find property reviews")?;
        Ok(models.into_iter().map(review_from_model).collect())
    }

    async fn for_user(&self, user_id: Uuid) -> Result<Vec<Review>, RentalsServiceError> {
        let models = user_reviews::Entity::find()
            .filter(user_reviews::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .context("find user reviews")?;
        Ok(models.into_iter().map(review_from_model).collect())
    }
}

fn review_from_model(model: user_reviews::Model) -> Review {
    Review {
        id: model.id,
        user_id: model.user_id,
        listing_id: model.listing_id,
        property_id: model.property_id,
        rating: model.rating,
        review: model.review,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
