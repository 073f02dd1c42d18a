//! Comment and rating entity (`comentariosycalificaciones`).

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::CommentDraft;
use crate::infra::repositories::store::Draft;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "comentariosycalificaciones")]
#[schema(as = ComentariosYCalificaciones)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub idcomentariosycalificaciones: i32,
    pub comentario: String,
    pub fecha_registro: Option<DateTime>,
    pub fecha_comentario: Option<DateTime>,
    pub calificacion: i32,
    pub idemprendimiento: i32,
    pub idusuarios: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Draft for CommentDraft {
    type Entity = Entity;

    fn into_active_model(self, id: Option<i32>) -> ActiveModel {
        let now = Utc::now().naive_utc();
        ActiveModel {
            idcomentariosycalificaciones: id.map_or(NotSet, Set),
            comentario: Set(self.comentario),
            fecha_registro: if id.is_none() { Set(Some(now)) } else { NotSet },
            fecha_comentario: Set(Some(self.fecha_comentario.unwrap_or(now))),
            calificacion: Set(self.calificacion),
            idemprendimiento: Set(self.idemprendimiento),
            idusuarios: Set(self.idusuarios),
        }
    }
}
