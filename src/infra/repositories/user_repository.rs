//! User repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::user::{self, Entity as UserEntity};
use crate::domain::{NewUser, User, UserPatch};
use crate::errors::{AppError, AppResult};

/// User persistence operations.
///
/// Email lookup is a case-sensitive exact match.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, new: NewUser) -> AppResult<User>;
    async fn list(&self) -> AppResult<Vec<User>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    async fn update(&self, id: Uuid, patch: UserPatch) -> AppResult<User>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed user store.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, new: NewUser) -> AppResult<User> {
        let now = chrono::Utc::now();
        let active = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(new.name),
            email: Set(new.email),
            password_hash: Set(new.password_hash),
            address: Set(new.address),
            role: Set(new.role.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active.insert(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let model = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(model.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let model = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(model.map(User::from))
    }

    async fn update(&self, id: Uuid, patch: UserPatch) -> AppResult<User> {
        let model = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        let mut active: user::ActiveModel = model.into();
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(email) = patch.email {
            active.email = Set(email);
        }
        if let Some(password_hash) = patch.password_hash {
            active.password_hash = Set(password_hash);
        }
        if let Some(address) = patch.address {
            active.address = Set(address);
        }
        if let Some(role) = patch.role {
            active.role = Set(role.to_string());
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("User"));
        }

        Ok(())
    }
}
