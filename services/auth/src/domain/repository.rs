#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Identity, OtpGrant, ResetToken};
use crate::error::AuthServiceError;

/// Repository for identity records.
pub trait IdentityRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, AuthServiceError>;

    /// Insert the identity row and its detail row atomically (same transaction).
    async fn create_with_detail(
        &self,
        identity: &Identity,
        phone: Option<&str>,
    ) -> Result<(), AuthServiceError>;

    /// Write the durable half of a one-time code, overwriting any previous one.
    async fn store_otp(&self, id: Uuid, grant: &OtpGrant) -> Result<(), AuthServiceError>;

    /// Clear the durable one-time-code fields.
    async fn clear_otp(&self, id: Uuid) -> Result<(), AuthServiceError>;

    async fn update_password(&self, id: Uuid, password_hash: &str)
    -> Result<(), AuthServiceError>;
}

/// Repository for single-use password-reset tokens.
pub trait ResetTokenRepository: Send + Sync {
    async fn create(&self, token: &ResetToken) -> Result<(), AuthServiceError>;

    /// Find an unconsumed, unexpired token matching email + token string.
    async fn find_active(
        &self,
        email: &str,
        token: &str,
    ) -> Result<Option<ResetToken>, AuthServiceError>;

    /// Mark a token consumed (sets consumed_at = now).
    async fn mark_consumed(&self, id: Uuid) -> Result<(), AuthServiceError>;

    /// Remove a token outright (compensation when the reset mail never went out).
    async fn delete(&self, id: Uuid) -> Result<(), AuthServiceError>;
}

/// Ephemeral mirror of the active one-time code (Redis, per-entry TTL).
pub trait OtpCache: Send + Sync {
    async fn put(&self, email: &str, code: u32, ttl_secs: u64) -> Result<(), AuthServiceError>;

    async fn get(&self, email: &str) -> Result<Option<u32>, AuthServiceError>;

    async fn forget(&self, email: &str) -> Result<(), AuthServiceError>;
}

/// Outbound mail channel.
pub trait Mailer: Send + Sync {
    async fn send_otp(&self, to: &str, code: u32) -> Result<(), AuthServiceError>;

    async fn send_reset_link(&self, to: &str, link: &str) -> Result<(), AuthServiceError>;
}
