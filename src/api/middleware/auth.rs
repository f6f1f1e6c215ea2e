//! JWT authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::domain::UserRole;
use crate::errors::AppError;

/// Authenticated user resolved from the JWT subject.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
}

impl CurrentUser {
    /// Check if user has admin role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// JWT authentication middleware.
///
/// Extracts and validates the JWT token from the Authorization header,
/// then re-resolves the user from the store and injects a CurrentUser
/// into the request extensions. Tokens for deleted accounts are
/// rejected here even when the signature is still valid.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::Unauthorized)?;

    let claims = state.auth_service.verify_token(token)?;

    let user = state
        .user_service
        .get_user(claims.sub)
        .await
        .map_err(|e| match e {
            AppError::NotFound(_) => AppError::Unauthorized,
            other => other,
        })?;

    let current_user = CurrentUser {
        id: user.id,
        email: user.email,
        role: user.role,
    };

    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}

/// Require admin role, returns Forbidden error if not admin.
pub fn require_admin(user: &CurrentUser) -> Result<(), AppError> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_admin_rejects_customer() {
        let user = CurrentUser {
            id: Uuid::new_v4(),
            email: "jane@example.com".to_string(),
            role: UserRole::Customer,
        };

        assert!(matches!(
            require_admin(&user),
            Err(AppError::Forbidden)
        ));
    }

    #[test]
    fn require_admin_accepts_admin() {
        let user = CurrentUser {
            id: Uuid::new_v4(),
            email: "admin@gmail.com".to_string(),
            role: UserRole::Admin,
        };

        assert!(require_admin(&user).is_ok());
    }
}
