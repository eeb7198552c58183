use chrono::{DateTime, Utc};
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set, TransactionTrait,
};

use crate::db::database_service::DatabaseService;
use crate::types::{error::AppError, user::DBUserCreate};

impl DatabaseService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    /// Registration. Email uniqueness is checked here so every caller gets
    /// the same conflict.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<i32, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::Conflict("That email already exists.".to_string()));
        }
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let res = User::insert(UserActive {
            first_name: Set(payload.first_name),
            last_name: Set(payload.last_name),
            email: Set(payload.email),
            password_hash: Set(payload.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        Ok(res.last_insert_id)
    }

    pub async fn set_reset_token(
        &self,
        user_id: i32,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let user = User::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("User does not exist".to_string()))?;
        let mut am: UserActive = user.into();
        am.reset_token_hash = Set(Some(token_hash));
        am.reset_token_expires_at = Set(Some(expires_at));
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await?;
        Ok(())
    }

    /// Installs the new password hash and clears the reset token so it
    /// cannot be replayed.
    pub async fn reset_password(&self, user_id: i32, password_hash: String) -> Result<(), AppError> {
        let user = User::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("User does not exist".to_string()))?;
        let mut am: UserActive = user.into();
        am.password_hash = Set(password_hash);
        am.reset_token_hash = Set(None);
        am.reset_token_expires_at = Set(None);
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await?;
        Ok(())
    }
}
