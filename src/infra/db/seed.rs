//! Initial data: the default user type, the two roles and an administrator.
//!
//! Safe to run repeatedly; existing rows are left untouched.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

use crate::config::{AdminAccount, DEFAULT_USER_TYPE, ROLE_ADMIN, ROLE_USER};
use crate::domain::Password;
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::entities::{role, user, user_type};

/// Insert the rows every deployment needs.
pub async fn run(db: &DatabaseConnection, admin: &AdminAccount) -> AppResult<()> {
    let admin_secret = Password::new(admin.password())?.into_string();
    let admin = admin.clone();

    db.transaction::<_, (), AppError>(|txn| {
        Box::pin(async move {
            let user_type_id = match user_type::Entity::find()
                .filter(user_type::Column::NombreTipoUsuario.eq(DEFAULT_USER_TYPE))
                .one(txn)
                .await?
            {
                Some(existing) => existing.idtipousuario,
                None => {
                    let created = user_type::ActiveModel {
                        nombre_tipo_usuario: Set(DEFAULT_USER_TYPE.to_string()),
                        estado_tipo_usuario: Set(true),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;
                    tracing::info!(id = created.idtipousuario, "Seeded default user type");
                    created.idtipousuario
                }
            };

            let admin_user = match user::Entity::find()
                .filter(user::Column::Username.eq(admin.username.as_str()))
                .one(txn)
                .await?
            {
                Some(existing) => existing,
                None => {
                    let created = user::ActiveModel {
                        email_user: Set(admin.email.clone()),
                        username: Set(admin.username.clone()),
                        password_user: Set(admin_secret),
                        estado_user: Set(true),
                        idroles: Set(None),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;
                    tracing::info!(username = %created.username, "Seeded administrator account");
                    created
                }
            };

            let mut admin_role_id = None;
            for name in [ROLE_ADMIN, ROLE_USER] {
                let existing = role::Entity::find()
                    .filter(role::Column::NombreRol.eq(name))
                    .one(txn)
                    .await?;
                let role_id = match existing {
                    Some(found) => found.idroles,
                    None => {
                        let now = Utc::now().naive_utc();
                        let created = role::ActiveModel {
                            creado: Set(now),
                            modificado: Set(now),
                            idusuarios: Set(admin_user.idusuarios),
                            idtipousuario: Set(user_type_id),
                            nombre_rol: Set(Some(name.to_string())),
                            ..Default::default()
                        }
                        .insert(txn)
                        .await?;
                        tracing::info!(role = name, "Seeded role");
                        created.idroles
                    }
                };
                if name == ROLE_ADMIN {
                    admin_role_id = Some(role_id);
                }
            }

            if admin_user.idroles.is_none() {
                let mut active: user::ActiveModel = admin_user.into();
                active.idroles = Set(admin_role_id);
                active.update(txn).await?;
            }

            Ok(())
        })
    })
    .await?;

    Ok(())
}
