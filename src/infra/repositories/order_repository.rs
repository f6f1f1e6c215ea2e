//! Order repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::order::{self, Entity as OrderEntity, OrderItems};
use crate::domain::{NewOrder, Order, OrderPatch, OrderStatus};
use crate::errors::{AppError, AppResult};

/// Order persistence operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, new: NewOrder) -> AppResult<Order>;
    /// Newest orders first.
    async fn list(&self) -> AppResult<Vec<Order>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Order>>;
    async fn find_by_order_number(&self, order_number: &str) -> AppResult<Option<Order>>;
    async fn update(&self, id: Uuid, patch: OrderPatch) -> AppResult<Order>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed order store.
pub struct OrderStore {
    db: DatabaseConnection,
}

impl OrderStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for OrderStore {
    async fn create(&self, new: NewOrder) -> AppResult<Order> {
        let now = chrono::Utc::now();
        let active = order::ActiveModel {
            id: Set(Uuid::new_v4()),
            order_number: Set(new.order_number),
            customer_name: Set(new.customer_name),
            customer_email: Set(new.customer_email),
            products: Set(OrderItems(new.products)),
            total_amount: Set(new.total_amount),
            status: Set(OrderStatus::Pending.to_string()),
            shipping_address: Set(new.shipping_address),
            notes: Set(new.notes),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Order::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Order>> {
        let models = OrderEntity::find()
            .order_by_desc(order::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Order::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Order>> {
        let model = OrderEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(model.map(Order::from))
    }

    async fn find_by_order_number(&self, order_number: &str) -> AppResult<Option<Order>> {
        let model = OrderEntity::find()
            .filter(order::Column::OrderNumber.eq(order_number))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(model.map(Order::from))
    }

    async fn update(&self, id: Uuid, patch: OrderPatch) -> AppResult<Order> {
        let model = OrderEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found("Order"))?;

        let mut active: order::ActiveModel = model.into();
        if let Some(status) = patch.status {
            active.status = Set(status.to_string());
        }
        if let Some(notes) = patch.notes {
            active.notes = Set(Some(notes));
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Order::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = OrderEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Order"));
        }

        Ok(())
    }
}
