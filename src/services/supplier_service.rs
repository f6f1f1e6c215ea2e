//! Supplier service - CRUD over suppliers with email uniqueness.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewSupplier, Supplier, SupplierPatch};
use crate::errors::{AppError, AppResult};
use crate::infra::SupplierRepository;

/// Supplier service trait for dependency injection.
#[async_trait]
pub trait SupplierService: Send + Sync {
    /// Create a new supplier
    async fn create_supplier(&self, new: NewSupplier) -> AppResult<Supplier>;

    /// List all suppliers
    async fn list_suppliers(&self) -> AppResult<Vec<Supplier>>;

    /// Get supplier by ID
    async fn get_supplier(&self, id: Uuid) -> AppResult<Supplier>;

    /// Update supplier details
    async fn update_supplier(&self, id: Uuid, patch: SupplierPatch) -> AppResult<Supplier>;

    /// Delete supplier
    async fn delete_supplier(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of SupplierService.
pub struct SupplierManager {
    suppliers: Arc<dyn SupplierRepository>,
}

impl SupplierManager {
    pub fn new(suppliers: Arc<dyn SupplierRepository>) -> Self {
        Self { suppliers }
    }

    async fn ensure_email_free(&self, email: &str, exclude: Option<Uuid>) -> AppResult<()> {
        if let Some(existing) = self.suppliers.find_by_email(email).await? {
            if exclude != Some(existing.id) {
                return Err(AppError::conflict("Supplier with this email"));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl SupplierService for SupplierManager {
    async fn create_supplier(&self, new: NewSupplier) -> AppResult<Supplier> {
        self.ensure_email_free(&new.supplier_email, None).await?;
        self.suppliers.create(new).await
    }

    async fn list_suppliers(&self) -> AppResult<Vec<Supplier>> {
        self.suppliers.list().await
    }

    async fn get_supplier(&self, id: Uuid) -> AppResult<Supplier> {
        self.suppliers
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Supplier"))
    }

    async fn update_supplier(&self, id: Uuid, patch: SupplierPatch) -> AppResult<Supplier> {
        if let Some(email) = &patch.supplier_email {
            self.ensure_email_free(email, Some(id)).await?;
        }
        self.suppliers.update(id, patch).await
    }

    async fn delete_supplier(&self, id: Uuid) -> AppResult<()> {
        self.suppliers.delete(id).await
    }
}
