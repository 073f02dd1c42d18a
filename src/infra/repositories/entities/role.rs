//! Role entity (`roles`).

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::RoleDraft;
use crate::infra::repositories::store::Draft;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "roles")]
#[schema(as = Rol)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub idroles: i32,
    pub creado: DateTime,
    pub modificado: DateTime,
    pub idusuarios: i32,
    pub idtipousuario: i32,
    #[serde(rename = "nombreRol")]
    pub nombre_rol: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Draft for RoleDraft {
    type Entity = Entity;

    fn into_active_model(self, id: Option<i32>) -> ActiveModel {
        let now = Utc::now().naive_utc();
        ActiveModel {
            idroles: id.map_or(NotSet, Set),
            creado: if id.is_none() { Set(now) } else { NotSet },
            modificado: Set(now),
            idusuarios: Set(self.idusuarios),
            idtipousuario: Set(self.idtipousuario),
            nombre_rol: Set(Some(self.name)),
        }
    }
}
