//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, category_handler, order_handler, product_handler, supplier_handler, user_handler,
};
use crate::domain::{Category, LineItem, Order, OrderStatus, Product, Supplier, User, UserRole};

/// OpenAPI documentation for the POS System API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "POS System API",
        version = "0.1.0",
        description = "Point-of-sale backend: authentication, categories, products, suppliers, orders and users",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::login,
        // Category endpoints
        category_handler::create_category,
        category_handler::list_categories,
        category_handler::get_category,
        category_handler::update_category,
        category_handler::delete_category,
        // Product endpoints
        product_handler::create_product,
        product_handler::list_products,
        product_handler::get_product,
        product_handler::update_product,
        product_handler::delete_product,
        // Supplier endpoints
        supplier_handler::create_supplier,
        supplier_handler::list_suppliers,
        supplier_handler::get_supplier,
        supplier_handler::update_supplier,
        supplier_handler::delete_supplier,
        // Order endpoints
        order_handler::create_order,
        order_handler::list_orders,
        order_handler::get_order,
        order_handler::update_order,
        order_handler::delete_order,
        // User endpoints
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        user_handler::change_password,
    ),
    components(
        schemas(
            // Domain types
            UserRole,
            User,
            Category,
            Product,
            Supplier,
            Order,
            OrderStatus,
            LineItem,
            // Auth types
            auth_handler::LoginRequest,
            auth_handler::LoginResponse,
            // Request types
            category_handler::CreateCategoryRequest,
            category_handler::UpdateCategoryRequest,
            product_handler::CreateProductRequest,
            product_handler::UpdateProductRequest,
            supplier_handler::CreateSupplierRequest,
            supplier_handler::UpdateSupplierRequest,
            order_handler::CreateOrderRequest,
            order_handler::UpdateOrderRequest,
            user_handler::CreateUserRequest,
            user_handler::UpdateUserRequest,
            user_handler::ChangePasswordRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and token issuance"),
        (name = "Categories", description = "Product category management"),
        (name = "Products", description = "Product catalog management"),
        (name = "Suppliers", description = "Supplier management"),
        (name = "Orders", description = "Order intake and status tracking"),
        (name = "Users", description = "User account management")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /api/auth/login"))
                        .build(),
                ),
            );
        }
    }
}
