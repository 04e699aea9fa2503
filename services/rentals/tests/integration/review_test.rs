use uuid::Uuid;

use staynest_rentals::error::RentalsServiceError;
use staynest_rentals::usecase::review::{PropertyReviewsUseCase, UserReviewsUseCase};

use crate::helpers::{MockReviewRepo, test_review};

#[tokio::test]
async fn property_with_no_reviews_gets_an_empty_list() {
    let uc = PropertyReviewsUseCase {
        reviews: MockReviewRepo::empty(),
    };
    let reviews = uc.execute(Uuid::now_v7()).await.unwrap();
    assert!(reviews.is_empty());
}

#[tokio::test]
async fn property_reviews_are_scoped_to_the_property() {
    let property_id = Uuid::now_v7();
    let user_id = Uuid::now_v7();
    let uc = PropertyReviewsUseCase {
        reviews: MockReviewRepo::with(vec![
            test_review(user_id, property_id, 5),
            test_review(user_id, Uuid::now_v7(), 2),
        ]),
    };
    let reviews = uc.execute(property_id).await.unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].rating, 5);
}

#[tokio::test]
async fn user_with_no_reviews_gets_not_found() {
    let uc = UserReviewsUseCase {
        reviews: MockReviewRepo::empty(),
    };
    let result = uc.execute(Uuid::now_v7()).await;
    assert!(matches!(result, Err(RentalsServiceError::NoUserReviews)));
}

#[tokio::test]
async fn user_reviews_are_returned_when_present() {
    let user_id = Uuid::now_v7();
    let uc = UserReviewsUseCase {
        reviews: MockReviewRepo::with(vec![
            test_review(user_id, Uuid::now_v7(), 4),
            test_review(user_id, Uuid::now_v7(), 3),
        ]),
    };
    let reviews = uc.execute(user_id).await.unwrap();
    assert_eq!(reviews.len(), 2);
}
