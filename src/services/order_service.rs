//! Order service - Order intake and status transitions.
//!
//! Orders snapshot their line items at creation; afterwards only the
//! status and notes may change.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewOrder, Order, OrderPatch};
use crate::errors::{AppError, AppResult};
use crate::infra::OrderRepository;

/// Order service trait for dependency injection.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Create a new order (status always starts at `pending`)
    async fn create_order(&self, new: NewOrder) -> AppResult<Order>;

    /// List all orders, newest first
    async fn list_orders(&self) -> AppResult<Vec<Order>>;

    /// Get order by ID
    async fn get_order(&self, id: Uuid) -> AppResult<Order>;

    /// Update order status and notes
    async fn update_order(&self, id: Uuid, patch: OrderPatch) -> AppResult<Order>;

    /// Delete order
    async fn delete_order(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of OrderService.
pub struct OrderManager {
    orders: Arc<dyn OrderRepository>,
}

impl OrderManager {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl OrderService for OrderManager {
    async fn create_order(&self, new: NewOrder) -> AppResult<Order> {
        if new.products.is_empty() {
            return Err(AppError::validation("Order must contain at least one product"));
        }
        if new.total_amount <= 0.0 {
            return Err(AppError::validation("Total amount must be greater than zero"));
        }
        if self
            .orders
            .find_by_order_number(&new.order_number)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Order with this order number"));
        }

        self.orders.create(new).await
    }

    async fn list_orders(&self) -> AppResult<Vec<Order>> {
        self.orders.list().await
    }

    async fn get_order(&self, id: Uuid) -> AppResult<Order> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Order"))
    }

    async fn update_order(&self, id: Uuid, patch: OrderPatch) -> AppResult<Order> {
        self.orders.update(id, patch).await
    }

    async fn delete_order(&self, id: Uuid) -> AppResult<()> {
        self.orders.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineItem, OrderStatus};
    use crate::infra::repositories::MockOrderRepository;
    use chrono::Utc;

    fn sample_new_order() -> NewOrder {
        NewOrder {
            order_number: "ORD-1001".to_string(),
            customer_name: "Jane Doe".to_string(),
            customer_email: "jane@example.com".to_string(),
            products: vec![LineItem {
                product_id: Some(Uuid::new_v4()),
                product_name: "Coffee".to_string(),
                quantity: 2,
                price: 12.5,
            }],
            total_amount: 25.0,
            shipping_address: "12 Main St".to_string(),
            notes: None,
        }
    }

    fn persisted(new: NewOrder) -> Order {
        let now = Utc::now();
        Order {
            id: Uuid::new_v4(),
            order_number: new.order_number,
            customer_name: new.customer_name,
            customer_email: new.customer_email,
            products: new.products,
            total_amount: new.total_amount,
            status: OrderStatus::Pending,
            shipping_address: new.shipping_address,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_order_rejects_empty_line_items() {
        let orders = MockOrderRepository::new();
        let service = OrderManager::new(Arc::new(orders));

        let mut new = sample_new_order();
        new.products.clear();

        let err = service.create_order(new).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn create_order_rejects_nonpositive_total() {
        let orders = MockOrderRepository::new();
        let service = OrderManager::new(Arc::new(orders));

        let mut new = sample_new_order();
        new.total_amount = 0.0;

        let err = service.create_order(new).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn create_order_rejects_duplicate_order_number() {
        let existing = persisted(sample_new_order());

        let mut orders = MockOrderRepository::new();
        orders
            .expect_find_by_order_number()
            .returning(move |_| Ok(Some(existing.clone())));

        let service = OrderManager::new(Arc::new(orders));
        let err = service.create_order(sample_new_order()).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn create_order_starts_pending() {
        let mut orders = MockOrderRepository::new();
        orders
            .expect_find_by_order_number()
            .returning(|_| Ok(None));
        orders.expect_create().returning(|new| Ok(persisted(new)));

        let service = OrderManager::new(Arc::new(orders));
        let order = service.create_order(sample_new_order()).await.unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.products.len(), 1);
    }

    #[tokio::test]
    async fn update_order_passes_status_through() {
        let updated = {
            let mut order = persisted(sample_new_order());
            order.status = OrderStatus::Shipped;
            order
        };

        let mut orders = MockOrderRepository::new();
        orders
            .expect_update()
            .withf(|_, patch| patch.status == Some(OrderStatus::Shipped))
            .returning(move |_, _| Ok(updated.clone()));

        let service = OrderManager::new(Arc::new(orders));
        let patch = OrderPatch {
            status: Some(OrderStatus::Shipped),
            notes: None,
        };

        let order = service.update_order(Uuid::new_v4(), patch).await.unwrap();
        assert_eq!(order.status, OrderStatus::Shipped);
    }
}
