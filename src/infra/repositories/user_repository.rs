//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use super::entities::{
    role,
    user::{self, ActiveModel, Entity as UserEntity},
};
use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every lookup resolves the role name alongside the account.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Find user by exact e-mail
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find any user whose username or e-mail equals either identifier
    async fn find_conflicting(&self, username: &str, email: &str) -> AppResult<Option<User>>;

    /// Resolve a role ID by its name
    async fn find_role_by_name(&self, name: &str) -> AppResult<Option<i32>>;

    /// Create a new active user
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// Replace a plaintext secret and fill a missing role atomically.
    ///
    /// The write only happens while the stored secret still equals
    /// `legacy_secret`; returns `false` when another request got there first.
    async fn upgrade_legacy(
        &self,
        id: i32,
        legacy_secret: String,
        new_secret: Option<String>,
        role_id: Option<i32>,
    ) -> AppResult<bool>;

    /// List all users
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Permanently delete a user
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_one(&self, condition: Condition) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(condition)
            .find_also_related(role::Entity)
            .one(&self.db)
            .await?;

        Ok(result.map(User::from))
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        self.find_one(Condition::all().add(user::Column::Idusuarios.eq(id)))
            .await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.find_one(Condition::all().add(user::Column::Username.eq(username)))
            .await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.find_one(Condition::all().add(user::Column::EmailUser.eq(email)))
            .await
    }

    async fn find_conflicting(&self, username: &str, email: &str) -> AppResult<Option<User>> {
        let condition = Condition::any()
            .add(user::Column::Username.is_in([username, email]))
            .add(user::Column::EmailUser.is_in([username, email]));
        self.find_one(condition).await
    }

    async fn find_role_by_name(&self, name: &str) -> AppResult<Option<i32>> {
        let found = role::Entity::find()
            .filter(role::Column::NombreRol.eq(name))
            .order_by_asc(role::Column::Idroles)
            .one(&self.db)
            .await?;

        Ok(found.map(|r| r.idroles))
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let active_model = ActiveModel {
            email_user: Set(user.email),
            username: Set(user.username),
            password_user: Set(user.secret),
            estado_user: Set(true),
            idroles: Set(user.role_id),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        self.find_by_id(model.idusuarios)
            .await?
            .ok_or_else(|| AppError::internal("Created user could not be read back"))
    }

    async fn upgrade_legacy(
        &self,
        id: i32,
        legacy_secret: String,
        new_secret: Option<String>,
        role_id: Option<i32>,
    ) -> AppResult<bool> {
        self.db
            .transaction::<_, bool, AppError>(|txn| {
                Box::pin(async move {
                    let Some(current) = UserEntity::find_by_id(id).one(txn).await? else {
                        return Ok(false);
                    };
                    if current.password_user != legacy_secret {
                        return Ok(false);
                    }

                    let missing_role = current.idroles.is_none();
                    let mut active: ActiveModel = current.into();
                    if let Some(secret) = new_secret {
                        active.password_user = Set(secret);
                    }
                    if let (true, Some(role_id)) = (missing_role, role_id) {
                        active.idroles = Set(Some(role_id));
                    }
                    if active.is_changed() {
                        active.update(txn).await?;
                    }
                    Ok(true)
                })
            })
            .await
            .map_err(AppError::from)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let rows = UserEntity::find()
            .find_also_related(role::Entity)
            .order_by_asc(user::Column::Idusuarios)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
