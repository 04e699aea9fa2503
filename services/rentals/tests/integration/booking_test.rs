use uuid::Uuid;

use staynest_rentals::error::RentalsServiceError;
use staynest_rentals::usecase::booking::{
    CreateBookingInput, CreateBookingUseCase, GetBookingUseCase,
};

use crate::helpers::MockBookingRepo;

fn valid_input() -> CreateBookingInput {
    CreateBookingInput {
        property_id: Some(Uuid::now_v7()),
        user_id: Some(Uuid::now_v7()),
        start_date: Some("2026-09-01".to_owned()),
        end_date: Some("2026-09-05".to_owned()),
        guest_details: Some("2 adults, 1 child".to_owned()),
        guest_count: Some(3),
    }
}

#[tokio::test]
async fn should_create_pending_booking_with_generated_number() {
    let repo = MockBookingRepo::empty();
    let rows = repo.handle();

    let uc = CreateBookingUseCase { bookings: repo };
    let booking = uc.execute(valid_input()).await.unwrap();

    assert!(booking.booking_number.starts_with("booking_"));
    assert_eq!(booking.booking_status, "pending");
    assert!(booking.cancellation_reason.is_none());

    let rows = rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].booking_number, booking.booking_number);
}

#[tokio::test]
async fn should_generate_distinct_booking_numbers() {
    let repo = MockBookingRepo::empty();
    let uc = CreateBookingUseCase { bookings: repo };
    let first = uc.execute(valid_input()).await.unwrap();
    let second = uc.execute(valid_input()).await.unwrap();
    assert_ne!(first.booking_number, second.booking_number);
}

#[tokio::test]
async fn should_reject_missing_start_date_without_creating_row() {
    let repo = MockBookingRepo::empty();
    let rows = repo.handle();

    let uc = CreateBookingUseCase { bookings: repo };
    let result = uc
        .execute(CreateBookingInput {
            start_date: None,
            ..valid_input()
        })
        .await;

    match result {
        Err(RentalsServiceError::Validation(errors)) => assert!(errors.contains("start_date")),
        other => panic!("expected Validation, got {other:?}"),
    }
    assert!(rows.lock().unwrap().is_empty(), "no row on validation failure");
}

#[tokio::test]
async fn should_reject_end_date_not_after_start_date() {
    let uc = CreateBookingUseCase {
        bookings: MockBookingRepo::empty(),
    };
    let result = uc
        .execute(CreateBookingInput {
            start_date: Some("2026-09-05".to_owned()),
            end_date: Some("2026-09-05".to_owned()),
            ..valid_input()
        })
        .await;

    match result {
        Err(RentalsServiceError::Validation(errors)) => assert!(errors.contains("end_date")),
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn should_reject_zero_guest_count() {
    let uc = CreateBookingUseCase {
        bookings: MockBookingRepo::empty(),
    };
    let result = uc
        .execute(CreateBookingInput {
            guest_count: Some(0),
            ..valid_input()
        })
        .await;

    match result {
        Err(RentalsServiceError::Validation(errors)) => assert!(errors.contains("guest_count")),
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn should_collect_all_missing_fields_at_once() {
    let uc = CreateBookingUseCase {
        bookings: MockBookingRepo::empty(),
    };
    let result = uc.execute(CreateBookingInput::default()).await;

    match result {
        Err(RentalsServiceError::Validation(errors)) => {
            for field in ["property_id", "user_id", "start_date", "end_date", "guest_count"] {
                assert!(errors.contains(field), "missing field error for {field}");
            }
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn should_find_created_booking_by_id() {
    let repo = MockBookingRepo::empty();
    let rows = repo.handle();

    let create = CreateBookingUseCase { bookings: repo };
    let created = create.execute(valid_input()).await.unwrap();

    let get = GetBookingUseCase {
        bookings: MockBookingRepo {
            rows: std::sync::Arc::clone(&rows),
        },
    };
    let found = get.execute(created.id).await.unwrap();
    assert_eq!(found, created);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_booking() {
    let uc = GetBookingUseCase {
        bookings: MockBookingRepo::empty(),
    };
    let result = uc.execute(Uuid::now_v7()).await;
    assert!(matches!(result, Err(RentalsServiceError::BookingNotFound)));
}
