use chrono::{Duration, Utc};
use rand::RngExt;
use url::Url;
use uuid::Uuid;

use staynest_core::error::FieldErrors;

use crate::domain::repository::{IdentityRepository, Mailer, OtpCache, ResetTokenRepository};
use crate::domain::types::{PASSWORD_MIN_LEN, RESET_TOKEN_LEN, ResetToken, validate_email};
use crate::error::AuthServiceError;
use crate::usecase::account::hash_password;

/// Charset for reset tokens (alphanumeric, case-sensitive).
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

fn generate_token() -> String {
    let mut rng = rand::rng();
    (0..RESET_TOKEN_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

// ── ForgotPassword ───────────────────────────────────────────────────────────

pub struct ForgotPasswordInput {
    pub email: String,
}

pub struct ForgotPasswordUseCase<R, T, M>
where
    R: IdentityRepository,
    T: ResetTokenRepository,
    M: Mailer,
{
    pub identities: R,
    pub tokens: T,
    pub mailer: M,
    pub token_ttl_secs: u64,
    /// Base URL the token and email are appended to as query parameters.
    pub reset_link_base: String,
}

impl<R, T, M> ForgotPasswordUseCase<R, T, M>
where
    R: IdentityRepository,
    T: ResetTokenRepository,
    M: Mailer,
{
    pub async fn execute(&self, input: ForgotPasswordInput) -> Result<(), AuthServiceError> {
        let mut errors = FieldErrors::new();
        if !validate_email(&input.email) {
            errors.push("email", "email must be a valid email address");
        }
        errors.into_result().map_err(AuthServiceError::Validation)?;

        self.identities
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;

        let reset = ResetToken {
            id: Uuid::new_v4(),
            email: input.email.clone(),
            token: generate_token(),
            expires_at: Utc::now() + Duration::seconds(self.token_ttl_secs as i64),
            consumed_at: None,
            created_at: Utc::now(),
        };
        self.tokens.create(&reset).await?;

        let mut link = Url::parse(&self.reset_link_base)
            .map_err(|e| AuthServiceError::Internal(anyhow::anyhow!("reset link base: {e}")))?;
        link.query_pairs_mut()
            .append_pair("token", &reset.token)
            .append_pair("email", &input.email);

        // A token whose link never reached the user is dead weight;
        // remove it rather than leaving it outstanding.
        if let Err(e) = self.mailer.send_reset_link(&input.email, link.as_str()).await {
            if let Err(cleanup) = self.tokens.delete(reset.id).await {
                tracing::warn!(error = %cleanup, "failed to remove undelivered reset token");
            }
            return Err(e);
        }
        Ok(())
    }
}

// ── ResetPassword ────────────────────────────────────────────────────────────

/// Proof of possession presented with a reset request. Either artifact kind
/// authorizes exactly one password update.
#[derive(Debug, Clone)]
pub enum ResetArtifact {
    Otp(u32),
    Token(String),
}

pub struct ResetPasswordInput {
    pub email: String,
    pub artifact: ResetArtifact,
    pub new_password: String,
}

pub struct ResetPasswordUseCase<R, T, C>
where
    R: IdentityRepository,
    T: ResetTokenRepository,
    C: OtpCache,
{
    pub identities: R,
    pub tokens: T,
    pub cache: C,
}

impl<R, T, C> ResetPasswordUseCase<R, T, C>
where
    R: IdentityRepository,
    T: ResetTokenRepository,
    C: OtpCache,
{
    /// Update the password after validating a currently valid reset
    /// artifact tied to the identity. The artifact is consumed only after
    /// the password write succeeds, so a failed update leaves it usable.
    pub async fn execute(&self, input: ResetPasswordInput) -> Result<(), AuthServiceError> {
        let mut errors = FieldErrors::new();
        if !validate_email(&input.email) {
            errors.push("email", "email must be a valid email address");
        }
        if input.new_password.len() < PASSWORD_MIN_LEN {
            errors.push("new_password", "new_password must be at least 8 characters");
        }
        errors.into_result().map_err(AuthServiceError::Validation)?;

        let identity = self
            .identities
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;

        // Validate the artifact against its source of truth: the ephemeral
        // cache entry for codes, the durable row for tokens.
        let consumed_token_id = match &input.artifact {
            ResetArtifact::Otp(code) => {
                let cached = self
                    .cache
                    .get(&input.email)
                    .await?
                    .ok_or(AuthServiceError::InvalidOtp)?;
                if cached != *code {
                    return Err(AuthServiceError::InvalidOtp);
                }
                None
            }
            ResetArtifact::Token(token) => {
                let row = self
                    .tokens
                    .find_active(&input.email, token)
                    .await?
                    .ok_or(AuthServiceError::InvalidResetToken)?;
                Some(row.id)
            }
        };

        let password_hash = hash_password(&input.new_password)?;
        self.identities
            .update_password(identity.id, &password_hash)
            .await?;

        match consumed_token_id {
            Some(token_id) => self.tokens.mark_consumed(token_id).await?,
            None => {
                self.cache.forget(&input.email).await?;
                self.identities.clear_otp(identity.id).await?;
            }
        }
        Ok(())
    }
}
