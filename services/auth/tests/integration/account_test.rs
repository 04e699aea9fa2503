use staynest_auth::error::AuthServiceError;
use staynest_auth::usecase::account::{
    LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, verify_password,
};

use crate::helpers::{MockIdentityRepo, TEST_PASSWORD, test_identity};

fn register_input(email: &str) -> RegisterInput {
    RegisterInput {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: email.to_owned(),
        password: "password123".to_owned(),
        phone: Some("+1-555-0100".to_owned()),
    }
}

#[tokio::test]
async fn should_register_identity_with_detail_row() {
    let repo = MockIdentityRepo::empty();
    let identities = repo.handle();
    let details = repo.details_handle();

    let uc = RegisterUseCase { identities: repo };
    let created = uc.execute(register_input("ada@example.com")).await.unwrap();

    assert_eq!(created.email, "ada@example.com");
    assert!(verify_password("password123", &created.password_hash).unwrap());
    assert_ne!(created.password_hash, "password123");

    let identities = identities.lock().unwrap();
    assert_eq!(identities.len(), 1);
    assert_eq!(identities[0].id, created.id);

    let details = details.lock().unwrap();
    assert_eq!(details.as_slice(), &[(created.id, Some("+1-555-0100".to_owned()))]);
}

#[tokio::test]
async fn should_collect_all_missing_fields() {
    let uc = RegisterUseCase {
        identities: MockIdentityRepo::empty(),
    };
    let result = uc
        .execute(RegisterInput {
            first_name: String::new(),
            last_name: String::new(),
            email: "bad".to_owned(),
            password: "short".to_owned(),
            phone: None,
        })
        .await;

    match result {
        Err(AuthServiceError::Validation(errors)) => {
            assert!(errors.contains("first_name"));
            assert!(errors.contains("last_name"));
            assert!(errors.contains("email"));
            assert!(errors.contains("password"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let repo = MockIdentityRepo::new(vec![test_identity("ada@example.com")]);
    let identities = repo.handle();

    let uc = RegisterUseCase { identities: repo };
    let result = uc.execute(register_input("ada@example.com")).await;

    match result {
        Err(AuthServiceError::Validation(errors)) => assert!(errors.contains("email")),
        other => panic!("expected Validation, got {other:?}"),
    }
    assert_eq!(identities.lock().unwrap().len(), 1, "no second row created");
}

#[tokio::test]
async fn should_login_with_registered_credentials() {
    let existing = test_identity("ada@example.com");
    let id = existing.id;

    let uc = LoginUseCase {
        identities: MockIdentityRepo::new(vec![existing]),
    };
    let identity = uc
        .execute(LoginInput {
            email: "ada@example.com".to_owned(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(identity.id, id);
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let uc = LoginUseCase {
        identities: MockIdentityRepo::new(vec![test_identity("ada@example.com")]),
    };
    let result = uc
        .execute(LoginInput {
            email: "ada@example.com".to_owned(),
            password: "not-the-password".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(AuthServiceError::InvalidCredential)));
}

#[tokio::test]
async fn should_reject_unknown_email() {
    let uc = LoginUseCase {
        identities: MockIdentityRepo::empty(),
    };
    let result = uc
        .execute(LoginInput {
            email: "nobody@example.com".to_owned(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await;
    assert!(matches!(result, Err(AuthServiceError::UserNotFound)));
}
