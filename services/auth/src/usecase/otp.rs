use chrono::{Duration, Utc};
use rand::RngExt;

use staynest_core::error::FieldErrors;

use crate::domain::repository::{IdentityRepository, Mailer, OtpCache};
use crate::domain::types::{OTP_MAX, OTP_MIN, OtpGrant, validate_email};
use crate::error::AuthServiceError;

fn generate_code() -> u32 {
    let mut rng = rand::rng();
    rng.random_range(OTP_MIN..=OTP_MAX)
}

fn check_email(email: &str) -> Result<(), AuthServiceError> {
    let mut errors = FieldErrors::new();
    if !validate_email(email) {
        errors.push("email", "email must be a valid email address");
    }
    errors.into_result().map_err(AuthServiceError::Validation)
}

// ── RequestOtp ───────────────────────────────────────────────────────────────

pub struct RequestOtpInput {
    pub email: String,
}

pub struct RequestOtpUseCase<R, C, M>
where
    R: IdentityRepository,
    C: OtpCache,
    M: Mailer,
{
    pub identities: R,
    pub cache: C,
    pub mailer: M,
    pub ttl_secs: u64,
}

impl<R, C, M> RequestOtpUseCase<R, C, M>
where
    R: IdentityRepository,
    C: OtpCache,
    M: Mailer,
{
    /// Issue a fresh one-time code for the identity.
    ///
    /// Concurrent issuance for the same identity races on the single
    /// durable row and the single cache key; last write wins, and the
    /// loser's code simply stops verifying. No locking.
    pub async fn execute(&self, input: RequestOtpInput) -> Result<(), AuthServiceError> {
        check_email(&input.email)?;

        let identity = self
            .identities
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;

        let grant = OtpGrant {
            code: generate_code(),
            expires_at: Utc::now() + Duration::seconds(self.ttl_secs as i64),
        };

        // Durable first, then the expiring mirror. The two stores hold one
        // logical value: if the mirror write fails the durable half is
        // cleared again so neither store has a code the other lacks.
        self.identities.store_otp(identity.id, &grant).await?;
        if let Err(e) = self
            .cache
            .put(&input.email, grant.code, self.ttl_secs)
            .await
        {
            self.rollback(identity.id, &input.email).await;
            return Err(e);
        }

        // A code the user can never receive must not stay live.
        if let Err(e) = self.mailer.send_otp(&input.email, grant.code).await {
            self.rollback(identity.id, &input.email).await;
            return Err(e);
        }
        Ok(())
    }

    async fn rollback(&self, id: uuid::Uuid, email: &str) {
        if let Err(e) = self.identities.clear_otp(id).await {
            tracing::warn!(error = %e, "failed to clear durable otp during rollback");
        }
        if let Err(e) = self.cache.forget(email).await {
            tracing::warn!(error = %e, "failed to clear cached otp during rollback");
        }
    }
}

// ── VerifyOtp ────────────────────────────────────────────────────────────────

pub struct VerifyOtpInput {
    pub email: String,
    pub otp: u32,
}

pub struct VerifyOtpUseCase<R: IdentityRepository> {
    pub identities: R,
    /// Reject expired codes. On by default; configuration can disable it,
    /// which restores the legacy match-only behavior.
    pub enforce_expiry: bool,
}

impl<R: IdentityRepository> VerifyOtpUseCase<R> {
    /// Check a submitted code against the durable stored one.
    ///
    /// Does not mutate state: a still-valid code verifies repeatedly until
    /// superseded or expired. Expired and wrong codes are indistinguishable
    /// to the caller.
    pub async fn execute(&self, input: VerifyOtpInput) -> Result<(), AuthServiceError> {
        check_email(&input.email)?;

        let identity = self
            .identities
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;

        let grant = identity.otp.ok_or(AuthServiceError::InvalidOtp)?;
        if self.enforce_expiry && grant.is_expired() {
            return Err(AuthServiceError::InvalidOtp);
        }
        if !grant.matches(input.otp) {
            return Err(AuthServiceError::InvalidOtp);
        }
        Ok(())
    }
}
