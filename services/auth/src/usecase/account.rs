use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng};
use argon2::Argon2;
use chrono::Utc;
use uuid::Uuid;

use staynest_core::error::FieldErrors;

use crate::domain::repository::IdentityRepository;
use crate::domain::types::{Identity, PASSWORD_MIN_LEN, validate_email};
use crate::error::AuthServiceError;

pub fn hash_password(plain: &str) -> Result<String, AuthServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| AuthServiceError::Internal(anyhow::anyhow!("hash password: {e}")))?;
    Ok(hash.to_string())
}

pub fn verify_password(plain: &str, hash: &str) -> Result<bool, AuthServiceError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AuthServiceError::Internal(anyhow::anyhow!("parse password hash: {e}")))?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

pub struct RegisterUseCase<R: IdentityRepository> {
    pub identities: R,
}

impl<R: IdentityRepository> RegisterUseCase<R> {
    pub async fn execute(&self, input: RegisterInput) -> Result<Identity, AuthServiceError> {
        // Reject before touching storage.
        let mut errors = FieldErrors::new();
        if input.first_name.is_empty() {
            errors.push("first_name", "first_name is required");
        } else if input.first_name.len() > 255 {
            errors.push("first_name", "first_name must be at most 255 characters");
        }
        if input.last_name.is_empty() {
            errors.push("last_name", "last_name is required");
        } else if input.last_name.len() > 255 {
            errors.push("last_name", "last_name must be at most 255 characters");
        }
        if !validate_email(&input.email) {
            errors.push("email", "email must be a valid email address");
        }
        if input.password.len() < PASSWORD_MIN_LEN {
            errors.push("password", "password must be at least 8 characters");
        }
        errors.into_result().map_err(AuthServiceError::Validation)?;

        if self.identities.find_by_email(&input.email).await?.is_some() {
            let mut errors = FieldErrors::new();
            errors.push("email", "email is already registered");
            return Err(AuthServiceError::Validation(errors));
        }

        let now = Utc::now();
        let identity = Identity {
            id: Uuid::now_v7(),
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            password_hash: hash_password(&input.password)?,
            otp: None,
            created_at: now,
            updated_at: now,
        };
        self.identities
            .create_with_detail(&identity, input.phone.as_deref())
            .await?;
        Ok(identity)
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<R: IdentityRepository> {
    pub identities: R,
}

impl<R: IdentityRepository> LoginUseCase<R> {
    pub async fn execute(&self, input: LoginInput) -> Result<Identity, AuthServiceError> {
        let identity = self
            .identities
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;

        if !verify_password(&input.password, &identity.password_hash)? {
            return Err(AuthServiceError::InvalidCredential);
        }
        Ok(identity)
    }
}
