//! Venture history entity (`historialemprendimiento`).

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::HistoryDraft;
use crate::infra::repositories::store::Draft;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "historialemprendimiento")]
#[schema(as = HistorialEmprendimiento)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub idhistorialemprendimiento: i32,
    pub pais: String,
    /// Numeric amount kept as text
    pub cantidad_emprendimiento: String,
    pub year: String,
    pub idemprendimiento: i32,
    pub cantidad_aportada: String,
    pub fecha: Option<DateTime>,
    pub paso: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Draft for HistoryDraft {
    type Entity = Entity;

    fn into_active_model(self, id: Option<i32>) -> ActiveModel {
        ActiveModel {
            idhistorialemprendimiento: id.map_or(NotSet, Set),
            pais: Set(self.pais),
            cantidad_emprendimiento: Set(self.cantidad_emprendimiento),
            year: Set(self.year),
            idemprendimiento: Set(self.idemprendimiento),
            cantidad_aportada: Set(self.cantidad_aportada),
            fecha: Set(self.fecha),
            paso: Set(self.paso),
        }
    }
}
