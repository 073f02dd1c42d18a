//! Authentication service - login, registration and bearer tokens.
//!
//! Accounts created by the previous deployment may hold plaintext secrets.
//! A successful plaintext login rewrites the secret as an Argon2 hash and
//! gives the account the default role if it has none, in one transaction.

use async_trait::async_trait;
use std::sync::Arc;

use super::token::TokenService;
use crate::config::{Config, ROLE_USER};
use crate::domain::{
    password::validate_length, AuthResponse, CredentialVerifier, NewUser, Password, Principal,
    User,
};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Self-service account creation.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub password: String,
    /// Defaults to the username
    pub email: Option<String>,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Login by username or e-mail and return a token
    async fn login(&self, identifier: String, secret: String) -> AppResult<AuthResponse>;

    /// Register a new user and return a token
    async fn register(&self, registration: Registration) -> AppResult<AuthResponse>;

    /// E-mail based login returning the account; failures are `Unauthorized`
    async fn legacy_login(&self, email: String, secret: String) -> AppResult<User>;

    /// Resolve the principal behind a bearer token
    async fn authenticate(&self, token: &str) -> AppResult<Principal>;

    /// Whether the token belongs to an administrator; never fails
    async fn is_administrator(&self, token: &str) -> bool;

    /// Issue a token for a principal
    fn issue_token(&self, principal: &Principal) -> AppResult<String>;

    /// Check a token against the username it should carry
    fn validate_token(&self, token: &str, username: &str) -> bool;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    tokens: TokenService,
    store_plaintext: bool,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>, config: &Config) -> Self {
        Self {
            users,
            tokens: TokenService::new(config),
            store_plaintext: config.legacy_plaintext_passwords,
        }
    }

    async fn resolve(&self, identifier: &str) -> AppResult<Option<User>> {
        if let Some(user) = self.users.find_by_username(identifier).await? {
            return Ok(Some(user));
        }
        self.users.find_by_email(identifier).await
    }

    /// Check the secret and return the (possibly upgraded) account.
    async fn check_secret(&self, user: User, secret: &str) -> AppResult<User> {
        match CredentialVerifier::verify(&user.secret, secret) {
            Some(CredentialVerifier::Hashed) => Ok(user),
            Some(CredentialVerifier::Legacy) => self.upgrade_legacy(user, secret).await,
            None => {
                tracing::warn!(user_id = user.id, "Rejected login with incorrect credentials");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    async fn upgrade_legacy(&self, user: User, secret: &str) -> AppResult<User> {
        let new_secret = if self.store_plaintext {
            None
        } else {
            Some(Password::rehash(secret)?.into_string())
        };
        let role_id = match user.role_id {
            Some(_) => None,
            None => {
                let default_role = self.users.find_role_by_name(ROLE_USER).await?;
                if default_role.is_none() {
                    tracing::warn!(user_id = user.id, "Default role missing, login continues without it");
                }
                default_role
            }
        };

        let upgraded = self
            .users
            .upgrade_legacy(user.id, user.secret.clone(), new_secret, role_id)
            .await?;

        let current = self
            .users
            .find_by_id(user.id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        if upgraded {
            tracing::info!(user_id = user.id, "Migrated legacy credential");
            return Ok(current);
        }

        // Another request changed the secret first; it must now verify as a hash.
        if CredentialVerifier::Hashed.accepts(&current.secret, secret) {
            Ok(current)
        } else {
            Err(AppError::InvalidCredentials)
        }
    }

    fn respond(&self, user: &User) -> AppResult<AuthResponse> {
        let principal = user.principal();
        let token = self.tokens.issue(&principal)?;
        Ok(AuthResponse {
            token,
            user_id: principal.user_id,
            role: principal.role_or_default().to_string(),
            username: principal.username,
        })
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, identifier: String, secret: String) -> AppResult<AuthResponse> {
        let user = self
            .resolve(&identifier)
            .await?
            .ok_or(AppError::UserNotFound)?;
        let user = self.check_secret(user, &secret).await?;
        self.respond(&user)
    }

    async fn register(&self, registration: Registration) -> AppResult<AuthResponse> {
        let Registration {
            username,
            password,
            email,
        } = registration;
        let email = email.unwrap_or_else(|| username.clone());

        if self.users.find_conflicting(&username, &email).await?.is_some() {
            return Err(AppError::UserAlreadyExists);
        }

        let role_id = self
            .users
            .find_role_by_name(ROLE_USER)
            .await?
            .ok_or(AppError::RoleNotFound)?;

        let secret = if self.store_plaintext {
            validate_length(&password)?;
            password
        } else {
            Password::new(&password)?.into_string()
        };

        let created = self
            .users
            .create(NewUser {
                username,
                email,
                secret,
                role_id: Some(role_id),
            })
            .await;

        let user = match created {
            Err(AppError::Conflict(_)) => return Err(AppError::UserAlreadyExists),
            other => other?,
        };

        tracing::info!(user_id = user.id, "Registered new user");
        self.respond(&user)
    }

    async fn legacy_login(&self, email: String, secret: String) -> AppResult<User> {
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AppError::Unauthorized)?;

        self.check_secret(user, &secret)
            .await
            .map_err(|e| match e {
                AppError::InvalidCredentials | AppError::UserNotFound => AppError::Unauthorized,
                other => other,
            })
    }

    async fn authenticate(&self, token: &str) -> AppResult<Principal> {
        let claims = self
            .tokens
            .decode(token)
            .map_err(|_| AppError::TokenInvalid)?;

        let user = self
            .users
            .find_by_username(&claims.sub)
            .await?
            .ok_or(AppError::TokenInvalid)?;

        if !self.tokens.validate(token, &user.username) {
            return Err(AppError::TokenInvalid);
        }

        Ok(user.principal())
    }

    async fn is_administrator(&self, token: &str) -> bool {
        match self.authenticate(token).await {
            Ok(principal) => principal.is_admin(),
            Err(_) => false,
        }
    }

    fn issue_token(&self, principal: &Principal) -> AppResult<String> {
        self.tokens.issue(principal)
    }

    fn validate_token(&self, token: &str, username: &str) -> bool {
        self.tokens.validate(token, username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ROLE_ADMIN;
    use crate::infra::MockUserRepository;
    use mockall::predicate::{always, eq};

    const SECRET: &str = "auth-service-test-secret-32-chars!!";

    fn config() -> Config {
        Config::new("sqlite::memory:", SECRET)
    }

    fn account(id: i32, username: &str, secret: &str, role: Option<&str>) -> User {
        User {
            id,
            email: format!("{username}@example.com"),
            username: username.to_string(),
            secret: secret.to_string(),
            active: true,
            role_id: role.map(|_| 2),
            role: role.map(String::from),
        }
    }

    fn authenticator(repo: MockUserRepository) -> Authenticator {
        Authenticator::new(Arc::new(repo), &config())
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_find_by_email().returning(|_| Ok(None));

        let result = authenticator(repo)
            .login("ghost".into(), "whatever".into())
            .await;

        assert!(matches!(result, Err(AppError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_login_falls_back_to_email() {
        let hash = Password::new("Password123!").unwrap().into_string();
        let user = account(3, "maria", &hash, Some(ROLE_USER));

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_find_by_email()
            .with(eq("maria@example.com"))
            .returning(move |_| Ok(Some(user.clone())));

        let response = authenticator(repo)
            .login("maria@example.com".into(), "Password123!".into())
            .await
            .unwrap();

        assert_eq!(response.user_id, 3);
        assert_eq!(response.username, "maria");
        assert_eq!(response.role, ROLE_USER);
    }

    #[tokio::test]
    async fn test_hashed_login_has_no_side_effects() {
        let hash = Password::new("Password123!").unwrap().into_string();
        let user = account(3, "maria", &hash, Some(ROLE_USER));

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .returning(move |_| Ok(Some(user.clone())));
        repo.expect_upgrade_legacy().never();

        let service = authenticator(repo);
        let response = service
            .login("maria".into(), "Password123!".into())
            .await
            .unwrap();

        assert!(service.validate_token(&response.token, "maria"));
    }

    #[tokio::test]
    async fn test_hash_supplied_as_secret_is_rejected() {
        let hash = Password::new("Password123!").unwrap().into_string();
        let stored = hash.clone();
        let user = account(3, "maria", &stored, None);

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .returning(move |_| Ok(Some(user.clone())));
        repo.expect_upgrade_legacy().never();

        let result = authenticator(repo).login("maria".into(), hash).await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_legacy_login_upgrades_secret_and_role() {
        let legacy = account(5, "pedro", "admin123", None);
        let mut upgraded = legacy.clone();
        upgraded.role_id = Some(2);
        upgraded.role = Some(ROLE_USER.to_string());
        upgraded.secret = Password::new("admin123").unwrap().into_string();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .returning(move |_| Ok(Some(legacy.clone())));
        repo.expect_find_role_by_name()
            .with(eq(ROLE_USER))
            .returning(|_| Ok(Some(2)));
        repo.expect_upgrade_legacy()
            .withf(|id, old, new, role| {
                *id == 5
                    && old == "admin123"
                    && new.as_deref().is_some_and(Password::is_hash)
                    && *role == Some(2)
            })
            .times(1)
            .returning(|_, _, _, _| Ok(true));
        repo.expect_find_by_id()
            .with(eq(5))
            .returning(move |_| Ok(Some(upgraded.clone())));

        let response = authenticator(repo)
            .login("pedro".into(), "admin123".into())
            .await
            .unwrap();

        assert_eq!(response.user_id, 5);
        assert_eq!(response.role, ROLE_USER);
    }

    #[tokio::test]
    async fn test_legacy_login_with_wrong_secret() {
        let legacy = account(5, "pedro", "admin123", None);

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .returning(move |_| Ok(Some(legacy.clone())));
        repo.expect_upgrade_legacy().never();

        let result = authenticator(repo)
            .login("pedro".into(), "admin124".into())
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_concurrent_upgrade_still_logs_in() {
        let legacy = account(5, "pedro", "admin123", Some(ROLE_USER));
        let mut migrated = legacy.clone();
        migrated.secret = Password::new("admin123").unwrap().into_string();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .returning(move |_| Ok(Some(legacy.clone())));
        repo.expect_upgrade_legacy()
            .returning(|_, _, _, _| Ok(false));
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(migrated.clone())));

        let response = authenticator(repo)
            .login("pedro".into(), "admin123".into())
            .await
            .unwrap();

        assert_eq!(response.username, "pedro");
    }

    #[tokio::test]
    async fn test_register_duplicate() {
        let existing = account(1, "maria", "irrelevant", Some(ROLE_USER));

        let mut repo = MockUserRepository::new();
        repo.expect_find_conflicting()
            .with(eq("maria"), eq("maria"))
            .returning(move |_, _| Ok(Some(existing.clone())));
        repo.expect_create().never();

        let result = authenticator(repo)
            .register(Registration {
                username: "maria".into(),
                password: "Password123!".into(),
                email: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn test_register_without_default_role() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_conflicting().returning(|_, _| Ok(None));
        repo.expect_find_role_by_name().returning(|_| Ok(None));
        repo.expect_create().never();

        let result = authenticator(repo)
            .register(Registration {
                username: "maria".into(),
                password: "Password123!".into(),
                email: Some("maria@example.com".into()),
            })
            .await;

        assert!(matches!(result, Err(AppError::RoleNotFound)));
    }

    #[tokio::test]
    async fn test_register_hashes_and_assigns_role() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_conflicting()
            .with(eq("maria"), eq("maria@example.com"))
            .returning(|_, _| Ok(None));
        repo.expect_find_role_by_name().returning(|_| Ok(Some(2)));
        repo.expect_create()
            .withf(|new| {
                new.username == "maria"
                    && new.email == "maria@example.com"
                    && new.role_id == Some(2)
                    && Password::from_hash(new.secret.clone()).verify("Password123!")
            })
            .returning(|new| {
                Ok(User {
                    id: 9,
                    email: new.email,
                    username: new.username,
                    secret: new.secret,
                    active: true,
                    role_id: new.role_id,
                    role: Some(ROLE_USER.to_string()),
                })
            });

        let response = authenticator(repo)
            .register(Registration {
                username: "maria".into(),
                password: "Password123!".into(),
                email: Some("maria@example.com".into()),
            })
            .await
            .unwrap();

        assert_eq!(response.user_id, 9);
        assert_eq!(response.role, ROLE_USER);
    }

    #[tokio::test]
    async fn test_register_unique_violation_maps_to_already_exists() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_conflicting().returning(|_, _| Ok(None));
        repo.expect_find_role_by_name().returning(|_| Ok(Some(2)));
        repo.expect_create()
            .with(always())
            .returning(|_| Err(AppError::conflict("Record")));

        let result = authenticator(repo)
            .register(Registration {
                username: "maria".into(),
                password: "Password123!".into(),
                email: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn test_authenticate_and_admin_check() {
        let admin = account(1, "admin", "irrelevant", Some(ROLE_ADMIN));
        let principal = admin.principal();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .with(eq("admin"))
            .returning(move |_| Ok(Some(admin.clone())));

        let service = authenticator(repo);
        let token = service.issue_token(&principal).unwrap();

        assert_eq!(service.authenticate(&token).await.unwrap(), principal);
        assert!(service.is_administrator(&token).await);
        assert!(!service.is_administrator("garbage").await);
    }

    #[tokio::test]
    async fn test_authenticate_rejects_token_of_deleted_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().returning(|_| Ok(None));

        let service = authenticator(repo);
        let token = service
            .issue_token(&Principal {
                user_id: 4,
                username: "gone".into(),
                role: None,
            })
            .unwrap();

        assert!(matches!(
            service.authenticate(&token).await,
            Err(AppError::TokenInvalid)
        ));
        assert!(!service.is_administrator(&token).await);
    }

    #[tokio::test]
    async fn test_legacy_endpoint_maps_failures_to_unauthorized() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let result = authenticator(repo)
            .legacy_login("nobody@example.com".into(), "x".into())
            .await;

        assert!(matches!(result, Err(AppError::Unauthorized)));
    }
}
