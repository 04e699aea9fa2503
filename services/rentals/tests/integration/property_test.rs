use chrono::NaiveDate;
use uuid::Uuid;

use staynest_rentals::error::RentalsServiceError;
use staynest_rentals::usecase::property::{
    CreatePropertyInput, CreatePropertyUseCase, DeletePropertyUseCase, GetPropertyUseCase,
    PropertyAvailabilityUseCase, UpdatePropertyInput, UpdatePropertyUseCase,
};

use crate::helpers::{
    MockPropertyRepo, availability_record, test_listing, test_property, valid_create_input,
};

#[tokio::test]
async fn should_create_property_with_its_listing() {
    let repo = MockPropertyRepo::empty();
    let rows = repo.handle();

    let uc = CreatePropertyUseCase { properties: repo };
    let (property, listing) = uc.execute(valid_create_input()).await.unwrap();

    assert_eq!(property.title, "Lakeside Cottage");
    assert_eq!(listing.property_id, property.id);
    assert_eq!(listing.title.as_deref(), Some("Lakeside Cottage"));
    assert!(!listing.status, "listings start unpublished");

    let rows = rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.id, property.id);
    assert!(rows[0].1.is_some());
}

#[tokio::test]
async fn should_collect_every_missing_required_field() {
    let repo = MockPropertyRepo::empty();
    let rows = repo.handle();

    let uc = CreatePropertyUseCase { properties: repo };
    let result = uc.execute(CreatePropertyInput::default()).await;

    match result {
        Err(RentalsServiceError::Validation(errors)) => {
            for field in [
                "title",
                "description",
                "location",
                "address",
                "county",
                "latitude",
                "longitude",
                "check_in_hour",
                "check_out_hour",
                "num_of_guests",
                "maximum_guests",
                "country",
                "currency",
                "price_range",
                "price",
            ] {
                assert!(errors.contains(field), "missing field error for {field}");
            }
        }
        other => panic!("expected Validation, got {other:?}"),
    }
    assert!(rows.lock().unwrap().is_empty(), "no row on validation failure");
}

#[tokio::test]
async fn should_not_persist_property_when_dependent_insert_fails() {
    let repo = MockPropertyRepo::failing();
    let rows = repo.handle();

    let uc = CreatePropertyUseCase { properties: repo };
    let result = uc.execute(valid_create_input()).await;

    assert!(matches!(result, Err(RentalsServiceError::Internal(_))));
    assert!(
        rows.lock().unwrap().is_empty(),
        "a failed listing insert must leave no property behind"
    );
}

#[tokio::test]
async fn should_return_not_found_for_missing_property() {
    let uc = GetPropertyUseCase {
        properties: MockPropertyRepo::empty(),
    };
    let result = uc.execute(Uuid::now_v7()).await;
    assert!(matches!(result, Err(RentalsServiceError::PropertyNotFound)));
}

#[tokio::test]
async fn should_update_only_supplied_fields() {
    let existing = test_property("Lakeside Cottage");
    let id = existing.id;
    let listing = test_listing(id, "Lakeside Cottage");
    let repo = MockPropertyRepo::with(vec![(existing, Some(listing))]);
    let rows = repo.handle();

    let uc = UpdatePropertyUseCase { properties: repo };
    let (property, listing) = uc
        .execute(
            id,
            UpdatePropertyInput {
                price: Some(200.0),
                verified: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(property.price, 200.0);
    assert!(property.verified);
    assert_eq!(property.title, "Lakeside Cottage", "untouched field survives");
    assert_eq!(listing.property_id, id);

    let rows = rows.lock().unwrap();
    assert_eq!(rows[0].0.price, 200.0);
}

#[tokio::test]
async fn should_reject_update_of_unknown_property() {
    let uc = UpdatePropertyUseCase {
        properties: MockPropertyRepo::empty(),
    };
    let result = uc
        .execute(Uuid::now_v7(), UpdatePropertyInput::default())
        .await;
    assert!(matches!(result, Err(RentalsServiceError::PropertyNotFound)));
}

#[tokio::test]
async fn should_delete_property_and_dependent_rows() {
    let existing = test_property("Lakeside Cottage");
    let id = existing.id;
    let repo = MockPropertyRepo::with(vec![(existing, None)]);
    repo.seed_availability(availability_record(id, &["2026-09-01", "2026-09-02"]));
    let rows = repo.handle();
    let availability = repo.availability_handle();

    let uc = DeletePropertyUseCase { properties: repo };
    uc.execute(id).await.unwrap();

    assert!(rows.lock().unwrap().is_empty());
    assert!(availability.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_union_availability_dates_without_duplicates() {
    let property_id = Uuid::now_v7();
    let repo = MockPropertyRepo::empty();
    repo.seed_availability(availability_record(
        property_id,
        &["2026-09-01", "2026-09-02"],
    ));
    repo.seed_availability(availability_record(
        property_id,
        &["2026-09-02", "2026-09-03"],
    ));
    // Another property's dates must not leak in.
    repo.seed_availability(availability_record(Uuid::now_v7(), &["2026-12-25"]));

    let uc = PropertyAvailabilityUseCase { properties: repo };
    let dates = uc.execute(property_id).await.unwrap();

    let expected: Vec<NaiveDate> = ["2026-09-01", "2026-09-02", "2026-09-03"]
        .iter()
        .map(|d| d.parse().unwrap())
        .collect();
    assert_eq!(dates, expected);
}
