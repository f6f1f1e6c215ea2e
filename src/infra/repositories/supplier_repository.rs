//! Supplier repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::supplier::{self, Entity as SupplierEntity};
use crate::domain::{NewSupplier, Supplier, SupplierPatch};
use crate::errors::{AppError, AppResult};

/// Supplier persistence operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SupplierRepository: Send + Sync {
    async fn create(&self, new: NewSupplier) -> AppResult<Supplier>;
    async fn list(&self) -> AppResult<Vec<Supplier>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Supplier>>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Supplier>>;
    async fn update(&self, id: Uuid, patch: SupplierPatch) -> AppResult<Supplier>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed supplier store.
pub struct SupplierStore {
    db: DatabaseConnection,
}

impl SupplierStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SupplierRepository for SupplierStore {
    async fn create(&self, new: NewSupplier) -> AppResult<Supplier> {
        let active = supplier::ActiveModel {
            id: Set(Uuid::new_v4()),
            supplier_name: Set(new.supplier_name),
            supplier_email: Set(new.supplier_email),
            supplier_phone: Set(new.supplier_phone),
            supplier_address: Set(new.supplier_address),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Supplier::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Supplier>> {
        let models = SupplierEntity::find()
            .order_by_asc(supplier::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Supplier::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Supplier>> {
        let model = SupplierEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(model.map(Supplier::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Supplier>> {
        let model = SupplierEntity::find()
            .filter(supplier::Column::SupplierEmail.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(model.map(Supplier::from))
    }

    async fn update(&self, id: Uuid, patch: SupplierPatch) -> AppResult<Supplier> {
        let model = SupplierEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found("Supplier"))?;

        let mut active: supplier::ActiveModel = model.into();
        if let Some(name) = patch.supplier_name {
            active.supplier_name = Set(name);
        }
        if let Some(email) = patch.supplier_email {
            active.supplier_email = Set(email);
        }
        if let Some(phone) = patch.supplier_phone {
            active.supplier_phone = Set(phone);
        }
        if let Some(address) = patch.supplier_address {
            active.supplier_address = Set(address);
        }

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Supplier::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = SupplierEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Supplier"));
        }

        Ok(())
    }
}
