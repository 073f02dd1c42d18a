//! Region entity (`regiones`).

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::RegionDraft;
use crate::infra::repositories::store::Draft;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "regiones")]
#[schema(as = Region)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub idregiones: i32,
    pub nombre_region: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Draft for RegionDraft {
    type Entity = Entity;

    fn into_active_model(self, id: Option<i32>) -> ActiveModel {
        ActiveModel {
            idregiones: id.map_or(NotSet, Set),
            nombre_region: Set(self.nombre_region),
        }
    }
}
