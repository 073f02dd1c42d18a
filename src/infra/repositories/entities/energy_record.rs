//! Energy production/consumption entity (`produccionconsumoenergia`).

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::EnergyDraft;
use crate::infra::repositories::store::Draft;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "produccionconsumoenergia")]
#[schema(as = ProduccionConsumoEnergia)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub idproduccionconsumoenergia: i32,
    pub idemprendimiento: i32,
    pub fecha: Option<Date>,
    pub produccion_energia: f64,
    pub consumo_energia: f64,
    pub fuente_energia: Option<String>,
    pub observaciones: Option<String>,
    pub idusuarios: Option<i32>,
    /// Set by the server on every write
    pub fecha_registro: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::venture::Entity",
        from = "Column::Idemprendimiento",
        to = "super::venture::Column::Idemprendimiento"
    )]
    Venture,
}

impl Related<super::venture::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Venture.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Draft for EnergyDraft {
    type Entity = Entity;

    fn into_active_model(self, id: Option<i32>) -> ActiveModel {
        ActiveModel {
            idproduccionconsumoenergia: id.map_or(NotSet, Set),
            idemprendimiento: Set(self.idemprendimiento),
            fecha: Set(self.fecha),
            produccion_energia: Set(self.produccion_energia),
            consumo_energia: Set(self.consumo_energia),
            fuente_energia: Set(self.fuente_energia),
            observaciones: Set(self.observaciones),
            idusuarios: Set(self.idusuarios),
            fecha_registro: Set(Utc::now().naive_utc()),
        }
    }
}
