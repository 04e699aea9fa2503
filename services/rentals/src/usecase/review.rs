use uuid::Uuid;

use crate::domain::repository::ReviewRepository;
use crate::domain::types::Review;
use crate::error::RentalsServiceError;

/// Reviews attached to a property. An empty list is a normal answer.
pub struct PropertyReviewsUseCase<R: ReviewRepository> {
    pub reviews: R,
}

impl<R: ReviewRepository> PropertyReviewsUseCase<R> {
    pub async fn execute(&self, property_id: Uuid) -> Result<Vec<Review>, RentalsServiceError> {
        self.reviews.for_property(property_id).await
    }
}

/// Reviews written by a user. A user with none gets a 404, not an empty
/// list.
pub struct UserReviewsUseCase<R: ReviewRepository> {
    pub reviews: R,
}

impl<R: ReviewRepository> UserReviewsUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<Review>, RentalsServiceError> {
        let reviews = self.reviews.for_user(user_id).await?;
        if reviews.is_empty() {
            return Err(RentalsServiceError::NoUserReviews);
        }
        Ok(reviews)
    }
}
