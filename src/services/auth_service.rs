//! Authentication service - Handles login and token verification.
//!
//! SOLID (SRP): Handles authentication concerns only.
//! DDD: Uses domain Password value object for verification.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::Config;
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// JWT claims payload.
///
/// Only the user id travels in the token; role and profile are
/// re-resolved from the store on every request, so revoked or deleted
/// accounts lose access as soon as the row is gone.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// Result of a successful login: the signed token plus the
/// authenticated user for the response body.
#[derive(Debug)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify credentials and return a signed JWT with the user
    async fn login(&self, email: String, password: String) -> AppResult<AuthSession>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Generate JWT token for a user (shared helper to avoid duplication)
fn generate_token(user: &User, config: &Config) -> AppResult<String> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user.id,
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(token)
}

/// Verify JWT token and extract claims (shared helper)
fn verify_token_internal(token: &str, config: &Config) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    config: Config,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, config: Config) -> Self {
        Self { users, config }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, email: String, password: String) -> AppResult<AuthSession> {
        let user_result = self.users.find_by_email(&email).await?;

        // SECURITY: Perform password verification even if user doesn't exist
        // to prevent timing attacks that could enumerate valid emails.
        // We use a dummy hash that will always fail verification.
        let dummy_hash = "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let (password_hash, user_exists) = match &user_result {
            Some(user) => (user.password_hash.as_str(), true),
            None => (dummy_hash, false),
        };

        let stored_password = Password::from_hash(password_hash.to_string());
        let password_valid = stored_password.verify(&password);

        // Only succeed if both user exists AND password is valid
        if !user_exists || !password_valid {
            return Err(AppError::InvalidCredentials);
        }

        // Safe: user_exists was checked above
        let user = user_result.ok_or(AppError::InvalidCredentials)?;
        let token = generate_token(&user, &self.config)?;

        Ok(AuthSession { token, user })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DATABASE_URL;
    use crate::domain::UserRole;
    use crate::infra::repositories::MockUserRepository;
    use mockall::predicate::eq;

    fn test_config() -> Config {
        Config {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: "test-secret-key-that-is-long-enough!".to_string(),
            jwt_expiration_hours: 24,
        }
    }

    fn seeded_user(password: &str) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            name: "admin".to_string(),
            email: "admin@gmail.com".to_string(),
            password_hash: Password::new(password).unwrap().into_string(),
            address: "admin address".to_string(),
            role: UserRole::Admin,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn login_returns_token_and_user() {
        let user = seeded_user("admin");
        let user_id = user.id;

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .with(eq("admin@gmail.com"))
            .returning(move |_| Ok(Some(user.clone())));

        let auth = Authenticator::new(Arc::new(users), test_config());
        let session = auth
            .login("admin@gmail.com".to_string(), "admin".to_string())
            .await
            .unwrap();

        assert!(!session.token.is_empty());
        assert_eq!(session.user.id, user_id);

        let claims = auth.verify_token(&session.token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert!(claims.exp > claims.iat);
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let user = seeded_user("admin");

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let auth = Authenticator::new(Arc::new(users), test_config());
        let err = auth
            .login("admin@gmail.com".to_string(), "not-admin".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn login_rejects_unknown_email_with_same_error() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));

        let auth = Authenticator::new(Arc::new(users), test_config());
        let err = auth
            .login("nobody@example.com".to_string(), "whatever".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn verify_token_rejects_garbage() {
        let users = MockUserRepository::new();
        let auth = Authenticator::new(Arc::new(users), test_config());

        assert!(auth.verify_token("not-a-jwt").is_err());
    }

    #[tokio::test]
    async fn verify_token_rejects_expired_token() {
        let user = seeded_user("admin");

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let mut config = test_config();
        config.jwt_expiration_hours = -2;
        let auth = Authenticator::new(Arc::new(users), config);

        let session = auth
            .login("admin@gmail.com".to_string(), "admin".to_string())
            .await
            .unwrap();

        assert!(auth.verify_token(&session.token).is_err());
    }

    #[tokio::test]
    async fn verify_token_rejects_wrong_secret() {
        let user = seeded_user("admin");

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let auth = Authenticator::new(Arc::new(users), test_config());
        let session = auth
            .login("admin@gmail.com".to_string(), "admin".to_string())
            .await
            .unwrap();

        let mut other_config = test_config();
        other_config.jwt_secret = "another-secret-key-that-is-long-enough".to_string();
        let other_auth = Authenticator::new(Arc::new(MockUserRepository::new()), other_config);

        assert!(other_auth.verify_token(&session.token).is_err());
    }
}
