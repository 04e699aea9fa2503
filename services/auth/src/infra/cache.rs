use deadpool_redis::Pool;
use deadpool_redis::redis::AsyncCommands;

use crate::domain::repository::OtpCache;
use crate::error::AuthServiceError;

/// Redis mirror of the active one-time code. One key per identity email,
/// expiring with the code itself.
#[derive(Clone)]
pub struct RedisOtpCache {
    pub pool: Pool,
}

fn otp_key(email: &str) -> String {
    format!("otp:{}", email)
}

impl OtpCache for RedisOtpCache {
    async fn put(&self, email: &str, code: u32, ttl_secs: u64) -> Result<(), AuthServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AuthServiceError::Internal(e.into()))?;
        let (): () = conn
            .set_ex(otp_key(email), code, ttl_secs)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| AuthServiceError::Internal(e.into()))?;
        Ok(())
    }

    async fn get(&self, email: &str) -> Result<Option<u32>, AuthServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AuthServiceError::Internal(e.into()))?;
        let value: Option<u32> = conn
            .get(otp_key(email))
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| AuthServiceError::Internal(e.into()))?;
        Ok(value)
    }

    async fn forget(&self, email: &str) -> Result<(), AuthServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AuthServiceError::Internal(e.into()))?;
        let (): () = conn
            .del(otp_key(email))
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| AuthServiceError::Internal(e.into()))?;
        Ok(())
    }
}
