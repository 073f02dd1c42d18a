//! User service - account administration.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::ROLE_USER;
use crate::domain::{password::validate_length, CreateUser, NewUser, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Create an account on behalf of an administrator
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    /// Permanently delete a user
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
    store_plaintext: bool,
}

impl UserManager {
    pub fn new(users: Arc<dyn UserRepository>, store_plaintext: bool) -> Self {
        Self {
            users,
            store_plaintext,
        }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.users.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }

    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        let username = input.username.unwrap_or_else(|| input.email.clone());

        if self
            .users
            .find_conflicting(&username, &input.email)
            .await?
            .is_some()
        {
            return Err(AppError::UserAlreadyExists);
        }

        let role_id = match input.role_id {
            Some(id) => Some(id),
            None => Some(
                self.users
                    .find_role_by_name(ROLE_USER)
                    .await?
                    .ok_or(AppError::RoleNotFound)?,
            ),
        };

        let secret = if self.store_plaintext {
            validate_length(&input.password)?;
            input.password
        } else {
            Password::new(&input.password)?.into_string()
        };

        let user = self
            .users
            .create(NewUser {
                username,
                email: input.email,
                secret,
                role_id,
            })
            .await
            .map_err(|e| match e {
                AppError::Conflict(_) => AppError::UserAlreadyExists,
                other => other,
            })?;

        tracing::info!(user_id = user.id, "Created user");
        Ok(user)
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.users.delete(id).await?;
        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use mockall::predicate::eq;

    fn input(role_id: Option<i32>) -> CreateUser {
        CreateUser {
            email: "lucia@example.com".into(),
            username: None,
            password: "Password123!".into(),
            role_id,
        }
    }

    #[tokio::test]
    async fn test_get_missing_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().with(eq(42)).returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(repo), false);

        assert!(matches!(service.get_user(42).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_create_defaults_username_and_role() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_conflicting()
            .with(eq("lucia@example.com"), eq("lucia@example.com"))
            .returning(|_, _| Ok(None));
        repo.expect_find_role_by_name()
            .with(eq(ROLE_USER))
            .returning(|_| Ok(Some(2)));
        repo.expect_create()
            .withf(|new| new.username == "lucia@example.com" && new.role_id == Some(2))
            .returning(|new| {
                Ok(User {
                    id: 11,
                    email: new.email,
                    username: new.username,
                    secret: new.secret,
                    active: true,
                    role_id: new.role_id,
                    role: Some(ROLE_USER.into()),
                })
            });

        let user = UserManager::new(Arc::new(repo), false)
            .create_user(input(None))
            .await
            .unwrap();

        assert_eq!(user.id, 11);
        assert!(Password::is_hash(&user.secret));
    }

    #[tokio::test]
    async fn test_create_keeps_explicit_role_and_plaintext_flag() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_conflicting().returning(|_, _| Ok(None));
        repo.expect_find_role_by_name().never();
        repo.expect_create()
            .withf(|new| new.role_id == Some(1) && new.secret == "Password123!")
            .returning(|new| {
                Ok(User {
                    id: 12,
                    email: new.email,
                    username: new.username,
                    secret: new.secret,
                    active: true,
                    role_id: new.role_id,
                    role: None,
                })
            });

        let user = UserManager::new(Arc::new(repo), true)
            .create_user(input(Some(1)))
            .await
            .unwrap();

        assert_eq!(user.role_id, Some(1));
    }

    #[tokio::test]
    async fn test_create_duplicate() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_conflicting().returning(|_, _| {
            Ok(Some(User {
                id: 1,
                email: "lucia@example.com".into(),
                username: "lucia".into(),
                secret: String::new(),
                active: true,
                role_id: None,
                role: None,
            }))
        });
        repo.expect_create().never();

        let result = UserManager::new(Arc::new(repo), false)
            .create_user(input(None))
            .await;

        assert!(matches!(result, Err(AppError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn test_delete_unknown_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().returning(|_| Err(AppError::NotFound));

        let result = UserManager::new(Arc::new(repo), false).delete_user(99).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
