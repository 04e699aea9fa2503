use sea_orm::DatabaseConnection;

use crate::infra::db::{DbBookingRepository, DbPropertyRepository, DbReviewRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn property_repo(&self) -> DbPropertyRepository {
        DbPropertyRepository {
            db: self.db.clone(),
        }
    }

    pub fn booking_repo(&self) -> DbBookingRepository {
        DbBookingRepository {
            db: self.db.clone(),
        }
    }

    pub fn review_repo(&self) -> DbReviewRepository {
        DbReviewRepository {
            db: self.db.clone(),
        }
    }
}
