use deadpool_redis::Pool as RedisPool;
use sea_orm::DatabaseConnection;

use crate::infra::cache::RedisOtpCache;
use crate::infra::db::{DbIdentityRepository, DbResetTokenRepository};
use crate::infra::mail::SmtpMailer;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub redis: RedisPool,
    pub mailer: SmtpMailer,
    pub otp_ttl_secs: u64,
    pub otp_enforce_expiry: bool,
    pub reset_token_ttl_secs: u64,
    pub reset_link_base: String,
}

impl AppState {
    pub fn identity_repo(&self) -> DbIdentityRepository {
        DbIdentityRepository {
            db: self.db.clone(),
        }
    }

    pub fn reset_token_repo(&self) -> DbResetTokenRepository {
        DbResetTokenRepository {
            db: self.db.clone(),
        }
    }

    pub fn otp_cache(&self) -> RedisOtpCache {
        RedisOtpCache {
            pool: self.redis.clone(),
        }
    }
}
