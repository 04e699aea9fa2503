pub mod availabilities;
pub mod bookings;
pub mod listings;
pub mod properties;
pub mod user_reviews;
