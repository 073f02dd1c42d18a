//! User account entity (`usuarios`).

use sea_orm::entity::prelude::*;

use crate::domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub idusuarios: i32,
    #[sea_orm(unique)]
    pub email_user: String,
    #[sea_orm(unique)]
    pub username: String,
    pub password_user: String,
    pub estado_user: bool,
    pub idroles: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::Idroles",
        to = "super::role::Column::Idroles"
    )]
    Role,
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert a user row and its role into the domain entity
impl From<(Model, Option<super::role::Model>)> for User {
    fn from((model, role): (Model, Option<super::role::Model>)) -> Self {
        User {
            id: model.idusuarios,
            email: model.email_user,
            username: model.username,
            secret: model.password_user,
            active: model.estado_user,
            role_id: model.idroles,
            role: role.and_then(|r| r.nombre_rol),
        }
    }
}
