use staynest_auth::error::AuthServiceError;
use staynest_auth::usecase::otp::{
    RequestOtpInput, RequestOtpUseCase, VerifyOtpInput, VerifyOtpUseCase,
};

use crate::helpers::{
    MockIdentityRepo, MockMailer, MockOtpCache, SentMail, identity_with_grant, test_identity,
};

const EMAIL: &str = "a@example.com";

#[tokio::test]
async fn should_issue_code_to_both_stores_and_mail_it() {
    let repo = MockIdentityRepo::new(vec![test_identity(EMAIL)]);
    let identities = repo.handle();
    let cache = MockOtpCache::empty();
    let entries = cache.handle();
    let mailer = MockMailer::working();
    let sent = mailer.handle();

    let uc = RequestOtpUseCase {
        identities: repo,
        cache,
        mailer,
        ttl_secs: 300,
    };
    uc.execute(RequestOtpInput {
        email: EMAIL.to_owned(),
    })
    .await
    .unwrap();

    let grant = identities.lock().unwrap()[0].otp.expect("durable code stored");
    assert!(
        (100_000..=999_999).contains(&grant.code),
        "code should be six digits"
    );
    assert!(grant.expires_at > chrono::Utc::now());

    // Both stores carry the same logical value.
    assert_eq!(entries.lock().unwrap().get(EMAIL), Some(&grant.code));

    // And the same code went out by mail — never returned to the caller.
    let sent = sent.lock().unwrap();
    assert!(matches!(
        sent.as_slice(),
        [SentMail::Otp { to, code }] if to == EMAIL && *code == grant.code
    ));
}

#[tokio::test]
async fn should_verify_issued_code_repeatedly_without_mutation() {
    let repo = MockIdentityRepo::new(vec![test_identity(EMAIL)]);
    let identities = repo.handle();
    let cache = MockOtpCache::empty();
    let mailer = MockMailer::working();

    let issue = RequestOtpUseCase {
        identities: repo,
        cache,
        mailer,
        ttl_secs: 300,
    };
    issue
        .execute(RequestOtpInput {
            email: EMAIL.to_owned(),
        })
        .await
        .unwrap();

    let grant = identities.lock().unwrap()[0].otp.unwrap();

    let verify = VerifyOtpUseCase {
        identities: MockIdentityRepo {
            identities: std::sync::Arc::clone(&identities),
            details: Default::default(),
        },
        enforce_expiry: true,
    };

    // Verification does not consume: the same still-valid code passes twice.
    for _ in 0..2 {
        verify
            .execute(VerifyOtpInput {
                email: EMAIL.to_owned(),
                otp: grant.code,
            })
            .await
            .unwrap();
    }
    assert_eq!(identities.lock().unwrap()[0].otp, Some(grant));
}

#[tokio::test]
async fn should_reject_wrong_code_and_leave_state_untouched() {
    let identity = identity_with_grant(EMAIL, 123_456, 300);
    let repo = MockIdentityRepo::new(vec![identity]);
    let identities = repo.handle();

    let verify = VerifyOtpUseCase {
        identities: repo,
        enforce_expiry: true,
    };
    let result = verify
        .execute(VerifyOtpInput {
            email: EMAIL.to_owned(),
            otp: 654_321,
        })
        .await;

    assert!(matches!(result, Err(AuthServiceError::InvalidOtp)));
    let grant = identities.lock().unwrap()[0].otp.unwrap();
    assert_eq!(grant.code, 123_456, "stored code must survive a bad attempt");
}

#[tokio::test]
async fn should_supersede_previous_code_on_reissue() {
    let repo = MockIdentityRepo::new(vec![test_identity(EMAIL)]);
    let identities = repo.handle();
    let cache = MockOtpCache::empty();
    let entries = cache.handle();
    let mailer = MockMailer::working();

    let issue = RequestOtpUseCase {
        identities: repo,
        cache,
        mailer,
        ttl_secs: 300,
    };
    issue
        .execute(RequestOtpInput {
            email: EMAIL.to_owned(),
        })
        .await
        .unwrap();
    let first = identities.lock().unwrap()[0].otp.unwrap();

    issue
        .execute(RequestOtpInput {
            email: EMAIL.to_owned(),
        })
        .await
        .unwrap();
    let second = identities.lock().unwrap()[0].otp.unwrap();

    // Single active code per identity: the cache holds only the newest one.
    assert_eq!(entries.lock().unwrap().get(EMAIL), Some(&second.code));

    let verify = VerifyOtpUseCase {
        identities: MockIdentityRepo {
            identities: std::sync::Arc::clone(&identities),
            details: Default::default(),
        },
        enforce_expiry: true,
    };
    if first.code != second.code {
        let result = verify
            .execute(VerifyOtpInput {
                email: EMAIL.to_owned(),
                otp: first.code,
            })
            .await;
        assert!(
            matches!(result, Err(AuthServiceError::InvalidOtp)),
            "superseded code must stop verifying"
        );
    }
    verify
        .execute(VerifyOtpInput {
            email: EMAIL.to_owned(),
            otp: second.code,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn should_return_not_found_for_unknown_email() {
    let issue = RequestOtpUseCase {
        identities: MockIdentityRepo::empty(),
        cache: MockOtpCache::empty(),
        mailer: MockMailer::working(),
        ttl_secs: 300,
    };
    let result = issue
        .execute(RequestOtpInput {
            email: "nobody@example.com".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(AuthServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_reject_malformed_email_before_lookup() {
    let issue = RequestOtpUseCase {
        identities: MockIdentityRepo::empty(),
        cache: MockOtpCache::empty(),
        mailer: MockMailer::working(),
        ttl_secs: 300,
    };
    let result = issue
        .execute(RequestOtpInput {
            email: "not-an-email".to_owned(),
        })
        .await;
    match result {
        Err(AuthServiceError::Validation(errors)) => assert!(errors.contains("email")),
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn should_reject_expired_code_when_enforcing_expiry() {
    let identity = identity_with_grant(EMAIL, 123_456, -1);
    let verify = VerifyOtpUseCase {
        identities: MockIdentityRepo::new(vec![identity]),
        enforce_expiry: true,
    };
    let result = verify
        .execute(VerifyOtpInput {
            email: EMAIL.to_owned(),
            otp: 123_456,
        })
        .await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidOtp)),
        "expired code must look exactly like a wrong one"
    );
}

#[tokio::test]
async fn should_accept_expired_code_when_enforcement_disabled() {
    // Legacy match-only behavior, reachable via OTP_ENFORCE_EXPIRY=false.
    let identity = identity_with_grant(EMAIL, 123_456, -1);
    let verify = VerifyOtpUseCase {
        identities: MockIdentityRepo::new(vec![identity]),
        enforce_expiry: false,
    };
    verify
        .execute(VerifyOtpInput {
            email: EMAIL.to_owned(),
            otp: 123_456,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn should_roll_back_both_stores_when_delivery_fails() {
    let repo = MockIdentityRepo::new(vec![test_identity(EMAIL)]);
    let identities = repo.handle();
    let cache = MockOtpCache::empty();
    let entries = cache.handle();

    let issue = RequestOtpUseCase {
        identities: repo,
        cache,
        mailer: MockMailer::failing(),
        ttl_secs: 300,
    };
    let result = issue
        .execute(RequestOtpInput {
            email: EMAIL.to_owned(),
        })
        .await;

    assert!(matches!(result, Err(AuthServiceError::DeliveryFailed)));
    assert!(
        identities.lock().unwrap()[0].otp.is_none(),
        "undeliverable code must not stay live in the durable store"
    );
    assert!(entries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_clear_durable_code_when_cache_write_fails() {
    let repo = MockIdentityRepo::new(vec![test_identity(EMAIL)]);
    let identities = repo.handle();

    let issue = RequestOtpUseCase {
        identities: repo,
        cache: MockOtpCache::failing(),
        mailer: MockMailer::working(),
        ttl_secs: 300,
    };
    let result = issue
        .execute(RequestOtpInput {
            email: EMAIL.to_owned(),
        })
        .await;

    assert!(matches!(result, Err(AuthServiceError::Internal(_))));
    assert!(
        identities.lock().unwrap()[0].otp.is_none(),
        "stores must not diverge with only the durable half written"
    );
}
