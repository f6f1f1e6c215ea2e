//! User management handlers.
//!
//! Creating, listing and deleting accounts is admin-only; reading and
//! updating a profile is allowed for admins and the account owner.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_admin, CurrentUser};
use crate::api::AppState;
use crate::domain::{User, UserRole};
use crate::errors::{AppError, AppResult};
use crate::services::UserUpdate;
use crate::types::{ApiResponse, Collection, Created, Document};

/// User creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "secret123", min_length = 6)]
    pub password: String,
    #[validate(length(min = 1, message = "Address is required"))]
    #[schema(example = "12 Main St")]
    pub address: String,
    /// Account role; `"user"` is accepted as a legacy alias of `"customer"`
    #[schema(example = "customer")]
    pub role: Option<String>,
}

/// User update request; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
    #[validate(length(min = 1, message = "Address cannot be empty"))]
    pub address: Option<String>,
    pub role: Option<String>,
}

/// Password change request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    #[validate(length(min = 6, message = "New password must be at least 6 characters"))]
    #[schema(min_length = 6)]
    pub new_password: String,
}

/// Create user management routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(create_user))
        .route("/all", get(list_users))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
        .route("/:id/change-password", post(change_password))
}

/// Allow admins and the account owner through, reject everyone else.
fn require_self_or_admin(current: &CurrentUser, id: Uuid) -> Result<(), AppError> {
    if current.is_admin() || current.id == id {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Create a new user (admin only)
#[utoipa::path(
    post,
    path = "/api/users/add",
    tag = "Users",
    request_body = CreateUserRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin role required"),
        (status = 409, description = "User with this email already exists")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Created<User>> {
    require_admin(&current)?;

    let role = payload
        .role
        .as_deref()
        .map(UserRole::from)
        .unwrap_or_default();

    let user = state
        .user_service
        .create_user(
            payload.name,
            payload.email,
            payload.password,
            payload.address,
            role,
        )
        .await?;

    Ok(Created(Document::with_message(
        user,
        "User created successfully",
    )))
}

/// List all users (admin only)
#[utoipa::path(
    get,
    path = "/api/users/all",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of users", body = [User]),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> AppResult<Collection<User>> {
    require_admin(&current)?;

    let users = state.user_service.list_users().await?;
    Ok(Collection(users))
}

/// Get a user by ID (admin or the account owner)
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 403, description = "Not the account owner"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Document<User>> {
    require_self_or_admin(&current, id)?;

    let user = state.user_service.get_user(id).await?;
    Ok(Document::new(user))
}

/// Update a user (admin or the account owner)
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User updated successfully", body = User),
        (status = 403, description = "Not the account owner"),
        (status = 404, description = "User not found"),
        (status = 409, description = "User with this email already exists")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Document<User>> {
    require_self_or_admin(&current, id)?;

    // Only admins may change roles
    let role = match payload.role.as_deref() {
        Some(role) => {
            require_admin(&current)?;
            Some(UserRole::from(role))
        }
        None => None,
    };

    let user = state
        .user_service
        .update_user(
            id,
            UserUpdate {
                name: payload.name,
                email: payload.email,
                password: payload.password,
                address: payload.address,
                role,
            },
        )
        .await?;

    Ok(Document::with_message(user, "User updated successfully"))
}

/// Delete a user (admin only)
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User deleted successfully"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse> {
    require_admin(&current)?;

    state.user_service.delete_user(id).await?;
    Ok(ApiResponse::message("User deleted successfully"))
}

/// Change a user's password (admin or the account owner)
#[utoipa::path(
    post,
    path = "/api/users/{id}/change-password",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = ChangePasswordRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Password changed successfully"),
        (status = 401, description = "Current password is incorrect"),
        (status = 403, description = "Not the account owner"),
        (status = 404, description = "User not found")
    )
)]
pub async fn change_password(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> AppResult<ApiResponse> {
    require_self_or_admin(&current, id)?;

    state
        .user_service
        .change_password(id, payload.current_password, payload.new_password)
        .await?;

    Ok(ApiResponse::message("Password changed successfully"))
}
