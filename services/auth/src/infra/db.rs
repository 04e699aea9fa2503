use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, TransactionTrait,
};
use uuid::Uuid;

use staynest_auth_schema::{password_reset_tokens, user_details, users};

use crate::domain::repository::{IdentityRepository, ResetTokenRepository};
use crate::domain::types::{Identity, OtpGrant, ResetToken};
use crate::error::AuthServiceError;

// ── Identity repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbIdentityRepository {
    pub db: DatabaseConnection,
}

impl IdentityRepository for DbIdentityRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, AuthServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find identity by email")?;
        Ok(model.map(identity_from_model))
    }

    async fn create_with_detail(
        &self,
        identity: &Identity,
        phone: Option<&str>,
    ) -> Result<(), AuthServiceError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let identity = identity.clone();
                let phone = phone.map(str::to_owned);
                Box::pin(async move {
                    insert_identity(txn, &identity).await?;
                    insert_detail(txn, identity.id, phone.as_deref()).await?;
                    Ok(())
                })
            })
            .await
            .context("create identity with detail")?;
        Ok(())
    }

    async fn store_otp(&self, id: Uuid, grant: &OtpGrant) -> Result<(), AuthServiceError> {
        users::ActiveModel {
            id: Set(id),
            otp_code: Set(Some(grant.code as i32)),
            otp_expires_at: Set(Some(grant.expires_at)),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("store otp")?;
        Ok(())
    }

    async fn clear_otp(&self, id: Uuid) -> Result<(), AuthServiceError> {
        users::ActiveModel {
            id: Set(id),
            otp_code: Set(None),
            otp_expires_at: Set(None),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("clear otp")?;
        Ok(())
    }

    async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), AuthServiceError> {
        users::ActiveModel {
            id: Set(id),
            password_hash: Set(password_hash.to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update password")?;
        Ok(())
    }
}

async fn insert_identity(
    txn: &DatabaseTransaction,
    identity: &Identity,
) -> Result<(), sea_orm::DbErr> {
    users::ActiveModel {
        id: Set(identity.id),
        email: Set(identity.email.clone()),
        first_name: Set(identity.first_name.clone()),
        last_name: Set(identity.last_name.clone()),
        password_hash: Set(identity.password_hash.clone()),
        otp_code: Set(None),
        otp_expires_at: Set(None),
        created_at: Set(identity.created_at),
        updated_at: Set(identity.updated_at),
    }
    .insert(txn)
    .await?;
    Ok(())
}

async fn insert_detail(
    txn: &DatabaseTransaction,
    user_id: Uuid,
    phone: Option<&str>,
) -> Result<(), sea_orm::DbErr> {
    let now = Utc::now();
    user_details::ActiveModel {
        id: Set(Uuid::now_v7()),
        user_id: Set(user_id),
        phone: Set(phone.map(str::to_owned)),
        bio: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(txn)
    .await?;
    Ok(())
}

fn identity_from_model(model: users::Model) -> Identity {
    let otp = match (model.otp_code, model.otp_expires_at) {
        (Some(code), Some(expires_at)) => Some(OtpGrant {
            code: code as u32,
            expires_at,
        }),
        _ => None,
    };
    Identity {
        id: model.id,
        email: model.email,
        first_name: model.first_name,
        last_name: model.last_name,
        password_hash: model.password_hash,
        otp,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Reset-token repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbResetTokenRepository {
    pub db: DatabaseConnection,
}

impl ResetTokenRepository for DbResetTokenRepository {
    async fn create(&self, token: &ResetToken) -> Result<(), AuthServiceError> {
        password_reset_tokens::ActiveModel {
            id: Set(token.id),
            email: Set(token.email.clone()),
            token: Set(token.token.clone()),
            expires_at: Set(token.expires_at),
            consumed_at: Set(None),
            created_at: Set(token.created_at),
        }
        .insert(&self.db)
        .await
        .context("create reset token")?;
        Ok(())
    }

    async fn find_active(
        &self,
        email: &str,
        token: &str,
    ) -> Result<Option<ResetToken>, AuthServiceError> {
        let now = Utc::now();
        let model = password_reset_tokens::Entity::find()
            .filter(password_reset_tokens::Column::Email.eq(email))
            .filter(password_reset_tokens::Column::Token.eq(token))
            .filter(password_reset_tokens::Column::ConsumedAt.is_null())
            .filter(password_reset_tokens::Column::ExpiresAt.gt(now))
            .one(&self.db)
            .await
            .context("find active reset token")?;
        Ok(model.map(reset_token_from_model))
    }

    async fn mark_consumed(&self, id: Uuid) -> Result<(), AuthServiceError> {
        password_reset_tokens::ActiveModel {
            id: Set(id),
            consumed_at: Set(Some(Utc::now())),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("mark reset token consumed")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AuthServiceError> {
        password_reset_tokens::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete reset token")?;
        Ok(())
    }
}

fn reset_token_from_model(model: password_reset_tokens::Model) -> ResetToken {
    ResetToken {
        id: model.id,
        email: model.email,
        token: model.token,
        expires_at: model.expires_at,
        consumed_at: model.consumed_at,
        created_at: model.created_at,
    }
}
