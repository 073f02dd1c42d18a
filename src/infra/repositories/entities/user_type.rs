//! User type entity (`tipousuario`).

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::UserTypeDraft;
use crate::infra::repositories::store::Draft;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "tipousuario")]
#[schema(as = TipoUsuario)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub idtipousuario: i32,
    pub nombre_tipo_usuario: String,
    pub estado_tipo_usuario: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Draft for UserTypeDraft {
    type Entity = Entity;

    fn into_active_model(self, id: Option<i32>) -> ActiveModel {
        ActiveModel {
            idtipousuario: id.map_or(NotSet, Set),
            nombre_tipo_usuario: Set(self.nombre_tipo_usuario),
            estado_tipo_usuario: Set(self.estado_tipo_usuario),
        }
    }
}
