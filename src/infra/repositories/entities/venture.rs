//! Venture entity (`emprendimiento`).

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::VentureDraft;
use crate::infra::repositories::store::Draft;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "emprendimiento")]
#[schema(as = Emprendimiento)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub idemprendimiento: i32,
    pub nombre: String,
    pub descripcion: String,
    pub tipo: String,
    pub fecha_creacion: Option<Date>,
    pub estado_emprendimiento: bool,
    #[serde(with = "crate::types::image")]
    #[schema(value_type = Option<String>, format = Byte)]
    pub imagen_emprendimiento: Option<Vec<u8>>,
    pub idregiones: i32,
    pub idusuarios: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::region::Entity",
        from = "Column::Idregiones",
        to = "super::region::Column::Idregiones"
    )]
    Region,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::Idusuarios",
        to = "super::user::Column::Idusuarios"
    )]
    Owner,
}

impl Related<super::region::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Region.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// On update a missing image or creation date keeps the stored one.
impl Draft for VentureDraft {
    type Entity = Entity;

    fn into_active_model(self, id: Option<i32>) -> ActiveModel {
        let creating = id.is_none();
        let fecha_creacion = match (self.fecha_creacion, creating) {
            (Some(date), _) => Set(Some(date)),
            (None, true) => Set(Some(Utc::now().date_naive())),
            (None, false) => NotSet,
        };
        let imagen = match (self.imagen_emprendimiento, creating) {
            (Some(bytes), _) => Set(Some(bytes)),
            (None, true) => Set(None),
            (None, false) => NotSet,
        };

        ActiveModel {
            idemprendimiento: id.map_or(NotSet, Set),
            nombre: Set(self.nombre),
            descripcion: Set(self.descripcion),
            tipo: Set(self.tipo),
            fecha_creacion,
            estado_emprendimiento: Set(self.estado_emprendimiento),
            imagen_emprendimiento: imagen,
            idregiones: Set(self.idregiones),
            idusuarios: Set(self.idusuarios),
        }
    }
}
