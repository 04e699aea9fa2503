use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use uuid::Uuid;

use staynest_auth::domain::repository::{
    IdentityRepository, Mailer, OtpCache, ResetTokenRepository,
};
use staynest_auth::domain::types::{Identity, OtpGrant, ResetToken};
use staynest_auth::error::AuthServiceError;
use staynest_auth::usecase::account::hash_password;

// ── MockIdentityRepo ─────────────────────────────────────────────────────────

pub struct MockIdentityRepo {
    pub identities: Arc<Mutex<Vec<Identity>>>,
    pub details: Arc<Mutex<Vec<(Uuid, Option<String>)>>>,
}

impl MockIdentityRepo {
    pub fn new(identities: Vec<Identity>) -> Self {
        Self {
            identities: Arc::new(Mutex::new(identities)),
            details: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle to the identity list for post-execution inspection.
    pub fn handle(&self) -> Arc<Mutex<Vec<Identity>>> {
        Arc::clone(&self.identities)
    }

    pub fn details_handle(&self) -> Arc<Mutex<Vec<(Uuid, Option<String>)>>> {
        Arc::clone(&self.details)
    }
}

impl IdentityRepository for MockIdentityRepo {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, AuthServiceError> {
        Ok(self
            .identities
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.email == email)
            .cloned())
    }

    async fn create_with_detail(
        &self,
        identity: &Identity,
        phone: Option<&str>,
    ) -> Result<(), AuthServiceError> {
        self.identities.lock().unwrap().push(identity.clone());
        self.details
            .lock()
            .unwrap()
            .push((identity.id, phone.map(str::to_owned)));
        Ok(())
    }

    async fn store_otp(&self, id: Uuid, grant: &OtpGrant) -> Result<(), AuthServiceError> {
        if let Some(identity) = self.identities.lock().unwrap().iter_mut().find(|i| i.id == id) {
            identity.otp = Some(*grant);
        }
        Ok(())
    }

    async fn clear_otp(&self, id: Uuid) -> Result<(), AuthServiceError> {
        if let Some(identity) = self.identities.lock().unwrap().iter_mut().find(|i| i.id == id) {
            identity.otp = None;
        }
        Ok(())
    }

    async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), AuthServiceError> {
        if let Some(identity) = self.identities.lock().unwrap().iter_mut().find(|i| i.id == id) {
            identity.password_hash = password_hash.to_owned();
        }
        Ok(())
    }
}

// ── MockOtpCache ─────────────────────────────────────────────────────────────

pub struct MockOtpCache {
    pub entries: Arc<Mutex<HashMap<String, u32>>>,
    pub fail_put: bool,
}

impl MockOtpCache {
    pub fn empty() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            fail_put: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            fail_put: true,
        }
    }

    pub fn handle(&self) -> Arc<Mutex<HashMap<String, u32>>> {
        Arc::clone(&self.entries)
    }

    pub fn seed(&self, email: &str, code: u32) {
        self.entries.lock().unwrap().insert(email.to_owned(), code);
    }
}

impl OtpCache for MockOtpCache {
    async fn put(&self, email: &str, code: u32, _ttl_secs: u64) -> Result<(), AuthServiceError> {
        if self.fail_put {
            return Err(AuthServiceError::Internal(anyhow::anyhow!("cache down")));
        }
        self.entries.lock().unwrap().insert(email.to_owned(), code);
        Ok(())
    }

    async fn get(&self, email: &str) -> Result<Option<u32>, AuthServiceError> {
        Ok(self.entries.lock().unwrap().get(email).copied())
    }

    async fn forget(&self, email: &str) -> Result<(), AuthServiceError> {
        self.entries.lock().unwrap().remove(email);
        Ok(())
    }
}

// ── MockResetTokenRepo ───────────────────────────────────────────────────────

pub struct MockResetTokenRepo {
    pub rows: Arc<Mutex<Vec<ResetToken>>>,
}

impl MockResetTokenRepo {
    pub fn empty() -> Self {
        Self {
            rows: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn with(rows: Vec<ResetToken>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
        }
    }

    pub fn handle(&self) -> Arc<Mutex<Vec<ResetToken>>> {
        Arc::clone(&self.rows)
    }
}

impl ResetTokenRepository for MockResetTokenRepo {
    async fn create(&self, token: &ResetToken) -> Result<(), AuthServiceError> {
        self.rows.lock().unwrap().push(token.clone());
        Ok(())
    }

    async fn find_active(
        &self,
        email: &str,
        token: &str,
    ) -> Result<Option<ResetToken>, AuthServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.email == email && t.token == token && t.is_valid())
            .cloned())
    }

    async fn mark_consumed(&self, id: Uuid) -> Result<(), AuthServiceError> {
        if let Some(row) = self.rows.lock().unwrap().iter_mut().find(|t| t.id == id) {
            row.consumed_at = Some(Utc::now());
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AuthServiceError> {
        self.rows.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }
}

// ── MockMailer ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum SentMail {
    Otp { to: String, code: u32 },
    ResetLink { to: String, link: String },
}

pub struct MockMailer {
    pub sent: Arc<Mutex<Vec<SentMail>>>,
    pub fail: bool,
}

impl MockMailer {
    pub fn working() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
            fail: true,
        }
    }

    pub fn handle(&self) -> Arc<Mutex<Vec<SentMail>>> {
        Arc::clone(&self.sent)
    }
}

impl Mailer for MockMailer {
    async fn send_otp(&self, to: &str, code: u32) -> Result<(), AuthServiceError> {
        if self.fail {
            return Err(AuthServiceError::DeliveryFailed);
        }
        self.sent.lock().unwrap().push(SentMail::Otp {
            to: to.to_owned(),
            code,
        });
        Ok(())
    }

    async fn send_reset_link(&self, to: &str, link: &str) -> Result<(), AuthServiceError> {
        if self.fail {
            return Err(AuthServiceError::DeliveryFailed);
        }
        self.sent.lock().unwrap().push(SentMail::ResetLink {
            to: to.to_owned(),
            link: link.to_owned(),
        });
        Ok(())
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub const TEST_PASSWORD: &str = "password123";

pub fn test_identity(email: &str) -> Identity {
    let now = Utc::now();
    Identity {
        id: Uuid::now_v7(),
        email: email.to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        password_hash: hash_password(TEST_PASSWORD).unwrap(),
        otp: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn identity_with_grant(email: &str, code: u32, ttl_secs: i64) -> Identity {
    let mut identity = test_identity(email);
    identity.otp = Some(OtpGrant {
        code,
        expires_at: Utc::now() + Duration::seconds(ttl_secs),
    });
    identity
}

pub fn test_reset_token(email: &str, token: &str, ttl_secs: i64) -> ResetToken {
    ResetToken {
        id: Uuid::new_v4(),
        email: email.to_owned(),
        token: token.to_owned(),
        expires_at: Utc::now() + Duration::seconds(ttl_secs),
        consumed_at: None,
        created_at: Utc::now(),
    }
}
