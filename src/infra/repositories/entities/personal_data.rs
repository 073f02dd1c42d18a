//! Personal data entity (`datospersonales`), one row per user.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::PersonalDataDraft;
use crate::infra::repositories::store::Draft;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "datospersonales")]
#[schema(as = DatosPersonales)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub iddatospersonales: i32,
    pub nombre_completo: String,
    #[sea_orm(unique)]
    pub cedula: String,
    pub direccion: String,
    pub telefono: String,
    #[serde(with = "crate::types::image")]
    #[schema(value_type = Option<String>, format = Byte)]
    pub imagen: Option<Vec<u8>>,
    #[sea_orm(unique)]
    pub idusuarios: i32,
    pub idtipodocumento: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Draft for PersonalDataDraft {
    type Entity = Entity;

    fn into_active_model(self, id: Option<i32>) -> ActiveModel {
        let imagen = match (self.imagen, id) {
            (Some(bytes), _) => Set(Some(bytes)),
            (None, None) => Set(None),
            (None, Some(_)) => NotSet,
        };

        ActiveModel {
            iddatospersonales: id.map_or(NotSet, Set),
            nombre_completo: Set(self.nombre_completo),
            cedula: Set(self.cedula),
            direccion: Set(self.direccion),
            telefono: Set(self.telefono),
            imagen,
            idusuarios: Set(self.idusuarios),
            idtipodocumento: Set(self.idtipodocumento),
        }
    }
}
