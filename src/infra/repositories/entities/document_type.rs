//! Identity document type entity (`tipodocumento`).

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::DocumentTypeDraft;
use crate::infra::repositories::store::Draft;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "tipodocumento")]
#[schema(as = TipoDocumento)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub idtipodocumento: i32,
    pub nombre_tipo_documento: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Draft for DocumentTypeDraft {
    type Entity = Entity;

    fn into_active_model(self, id: Option<i32>) -> ActiveModel {
        ActiveModel {
            idtipodocumento: id.map_or(NotSet, Set),
            nombre_tipo_documento: Set(self.nombre_tipo_documento),
        }
    }
}
