//! User service - Handles user management business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.
//! DDD: Password hashing stays behind the domain Password value object.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::MIN_PASSWORD_LENGTH;
use crate::domain::{NewUser, Password, User, UserPatch, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Fields accepted when updating a user. A `None` leaves the stored
/// value untouched; a supplied password is rehashed before storage.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub address: Option<String>,
    pub role: Option<UserRole>,
}

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user with a freshly hashed password
    async fn create_user(
        &self,
        name: String,
        email: String,
        password: String,
        address: String,
        role: UserRole,
    ) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Update user details
    async fn update_user(&self, id: Uuid, update: UserUpdate) -> AppResult<User>;

    /// Delete user
    async fn delete_user(&self, id: Uuid) -> AppResult<()>;

    /// Change a user's password after verifying the current one
    async fn change_password(
        &self,
        id: Uuid,
        current_password: String,
        new_password: String,
    ) -> AppResult<()>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Reject an email that already belongs to another account.
    async fn ensure_email_free(&self, email: &str, exclude: Option<Uuid>) -> AppResult<()> {
        if let Some(existing) = self.users.find_by_email(email).await? {
            if exclude != Some(existing.id) {
                return Err(AppError::conflict("User with this email"));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(
        &self,
        name: String,
        email: String,
        password: String,
        address: String,
        role: UserRole,
    ) -> AppResult<User> {
        // Email format is validated by the handler's ValidatedJson extractor
        self.ensure_email_free(&email, None).await?;

        let password_hash = Password::new(&password)?.into_string();
        self.users
            .create(NewUser {
                name,
                email,
                password_hash,
                address,
                role,
            })
            .await
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }

    async fn update_user(&self, id: Uuid, update: UserUpdate) -> AppResult<User> {
        if let Some(email) = &update.email {
            self.ensure_email_free(email, Some(id)).await?;
        }

        let password_hash = match update.password {
            Some(plain) => Some(Password::new(&plain)?.into_string()),
            None => None,
        };

        self.users
            .update(
                id,
                UserPatch {
                    name: update.name,
                    email: update.email,
                    password_hash,
                    address: update.address,
                    role: update.role,
                },
            )
            .await
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        self.users.delete(id).await
    }

    async fn change_password(
        &self,
        id: Uuid,
        current_password: String,
        new_password: String,
    ) -> AppResult<()> {
        if new_password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::validation(format!(
                "New password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            )));
        }

        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        let stored = Password::from_hash(user.password_hash);
        if !stored.verify(&current_password) {
            return Err(AppError::InvalidCredentials);
        }

        let password_hash = Password::new(&new_password)?.into_string();
        self.users
            .update(
                id,
                UserPatch {
                    password_hash: Some(password_hash),
                    ..Default::default()
                },
            )
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockUserRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn sample_user(password: &str) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password_hash: Password::new(password).unwrap().into_string(),
            address: "12 Main St".to_string(),
            role: UserRole::Customer,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_user_hashes_password() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users.expect_create().returning(|new| {
            // The plaintext must never reach the repository
            assert_ne!(new.password_hash, "secret123");
            assert!(Password::from_hash(new.password_hash.clone()).verify("secret123"));

            let now = Utc::now();
            Ok(User {
                id: Uuid::new_v4(),
                name: new.name,
                email: new.email,
                password_hash: new.password_hash,
                address: new.address,
                role: new.role,
                created_at: now,
                updated_at: now,
            })
        });

        let service = UserManager::new(Arc::new(users));
        let user = service
            .create_user(
                "Jane".to_string(),
                "jane@example.com".to_string(),
                "secret123".to_string(),
                "12 Main St".to_string(),
                UserRole::Customer,
            )
            .await
            .unwrap();

        assert_eq!(user.email, "jane@example.com");
    }

    #[tokio::test]
    async fn create_user_rejects_duplicate_email() {
        let existing = sample_user("secret123");

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .with(eq("jane@example.com"))
            .returning(move |_| Ok(Some(existing.clone())));

        let service = UserManager::new(Arc::new(users));
        let err = service
            .create_user(
                "Jane".to_string(),
                "jane@example.com".to_string(),
                "secret123".to_string(),
                "12 Main St".to_string(),
                UserRole::Customer,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_user_allows_keeping_own_email() {
        let existing = sample_user("secret123");
        let id = existing.id;
        let found = existing.clone();

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(found.clone())));
        users
            .expect_update()
            .returning(move |_, _| Ok(existing.clone()));

        let service = UserManager::new(Arc::new(users));
        let update = UserUpdate {
            email: Some("jane@example.com".to_string()),
            ..Default::default()
        };

        assert!(service.update_user(id, update).await.is_ok());
    }

    #[tokio::test]
    async fn change_password_rejects_wrong_current() {
        let user = sample_user("old-password");
        let id = user.id;

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserManager::new(Arc::new(users));
        let err = service
            .change_password(id, "not-the-password".to_string(), "new-password".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn change_password_rejects_short_new_password() {
        // Length check happens before any repository access
        let users = MockUserRepository::new();
        let service = UserManager::new(Arc::new(users));

        let err = service
            .change_password(Uuid::new_v4(), "old-password".to_string(), "short".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn change_password_stores_new_hash() {
        let user = sample_user("old-password");
        let id = user.id;
        let updated = user.clone();

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(move |_| Ok(Some(user.clone())));
        users
            .expect_update()
            .withf(|_, patch| {
                let hash = patch.password_hash.clone().unwrap();
                Password::from_hash(hash).verify("new-password")
            })
            .returning(move |_, _| Ok(updated.clone()));

        let service = UserManager::new(Arc::new(users));
        service
            .change_password(id, "old-password".to_string(), "new-password".to_string())
            .await
            .unwrap();
    }
}
