use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One-time codes are uniform 6-digit integers.
pub const OTP_MIN: u32 = 100_000;
pub const OTP_MAX: u32 = 999_999;

/// Password-reset token length in characters.
pub const RESET_TOKEN_LEN: usize = 60;

/// Minimum accepted password length.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Account record addressable by email.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    /// Durable half of the active one-time code, if any.
    pub otp: Option<OtpGrant>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An issued one-time code with its expiry instant. At most one per
/// identity; a newer issuance supersedes this one wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpGrant {
    pub code: u32,
    pub expires_at: DateTime<Utc>,
}

impl OtpGrant {
    pub fn matches(&self, submitted: u32) -> bool {
        self.code == submitted
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Persisted single-use password-reset token.
#[derive(Debug, Clone)]
pub struct ResetToken {
    pub id: Uuid,
    pub email: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub consumed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ResetToken {
    pub fn is_valid(&self) -> bool {
        self.consumed_at.is_none() && self.expires_at > Utc::now()
    }
}

/// Minimal structural email check: exactly one `@` with a non-empty local
/// part and a dotted, non-empty domain.
pub fn validate_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
