//! Write payloads for the marketplace resources.
//!
//! Field names match the column names clients already send. Every draft
//! lists the foreign ids it carries so they can be checked before writing.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::reference::{Reference, ReferenceKind, Referencing};

/// Region payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegionDraft {
    #[validate(length(min = 1, max = 100, message = "nombre_region is required"))]
    #[schema(example = "Andina")]
    pub nombre_region: String,
}

impl Referencing for RegionDraft {
    fn references(&self) -> Vec<Reference> {
        Vec::new()
    }
}

/// User type payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UserTypeDraft {
    #[validate(length(min = 1, max = 100, message = "nombre_tipo_usuario is required"))]
    #[schema(example = "Emprendedor")]
    pub nombre_tipo_usuario: String,
    #[serde(default = "active")]
    pub estado_tipo_usuario: bool,
}

impl Referencing for UserTypeDraft {
    fn references(&self) -> Vec<Reference> {
        Vec::new()
    }
}

/// Document type payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct DocumentTypeDraft {
    #[validate(length(min = 1, max = 100, message = "nombre_tipo_documento is required"))]
    #[schema(example = "Cédula de ciudadanía")]
    pub nombre_tipo_documento: String,
}

impl Referencing for DocumentTypeDraft {
    fn references(&self) -> Vec<Reference> {
        Vec::new()
    }
}

/// Role payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RoleDraft {
    #[serde(rename = "nombreRol", alias = "nombre_rol")]
    #[validate(length(min = 1, max = 50, message = "nombreRol is required"))]
    #[schema(example = "ROLE_USER")]
    pub name: String,
    pub idusuarios: i32,
    pub idtipousuario: i32,
}

impl Referencing for RoleDraft {
    fn references(&self) -> Vec<Reference> {
        vec![
            Reference::new(ReferenceKind::User, self.idusuarios),
            Reference::new(ReferenceKind::UserType, self.idtipousuario),
        ]
    }
}

/// Comment and rating payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CommentDraft {
    #[validate(length(min = 1, max = 255, message = "comentario is required"))]
    pub comentario: String,
    #[validate(range(min = 1, max = 5, message = "calificacion must be between 1 and 5"))]
    pub calificacion: i32,
    pub fecha_comentario: Option<NaiveDateTime>,
    pub idemprendimiento: i32,
    pub idusuarios: i32,
}

impl Referencing for CommentDraft {
    fn references(&self) -> Vec<Reference> {
        vec![
            Reference::new(ReferenceKind::User, self.idusuarios),
            Reference::new(ReferenceKind::Venture, self.idemprendimiento),
        ]
    }
}

/// Venture history payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct HistoryDraft {
    #[validate(length(min = 1, message = "pais is required"))]
    #[schema(example = "Colombia")]
    pub pais: String,
    /// Numeric amount stored as text
    #[schema(example = "12")]
    pub cantidad_emprendimiento: String,
    #[schema(example = "2024")]
    pub year: String,
    pub idemprendimiento: i32,
    #[validate(length(max = 255))]
    pub cantidad_aportada: String,
    pub fecha: Option<NaiveDateTime>,
    #[validate(length(max = 255))]
    pub paso: String,
}

impl Referencing for HistoryDraft {
    fn references(&self) -> Vec<Reference> {
        vec![Reference::new(ReferenceKind::Venture, self.idemprendimiento)]
    }
}

/// Energy production/consumption payload.
///
/// Also accepts the camelCase names used by the dashboard client.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct EnergyDraft {
    #[serde(alias = "emprendimientoId")]
    pub idemprendimiento: i32,
    pub fecha: Option<NaiveDate>,
    #[serde(alias = "energiaProducida")]
    #[validate(range(min = 0.0, message = "produccion_energia cannot be negative"))]
    pub produccion_energia: f64,
    #[serde(alias = "energiaConsumida")]
    #[validate(range(min = 0.0, message = "consumo_energia cannot be negative"))]
    pub consumo_energia: f64,
    #[serde(alias = "fuenteEnergia")]
    pub fuente_energia: Option<String>,
    pub observaciones: Option<String>,
    /// Recording user; filled from the token when absent
    pub idusuarios: Option<i32>,
}

impl Referencing for EnergyDraft {
    fn references(&self) -> Vec<Reference> {
        let mut refs = Vec::with_capacity(2);
        if let Some(user) = self.idusuarios {
            refs.push(Reference::new(ReferenceKind::User, user));
        }
        refs.push(Reference::new(ReferenceKind::Venture, self.idemprendimiento));
        refs
    }
}

/// Personal data payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PersonalDataDraft {
    #[validate(length(min = 1, max = 255, message = "nombre_completo is required"))]
    pub nombre_completo: String,
    #[validate(length(min = 1, message = "cedula is required"))]
    pub cedula: String,
    #[validate(length(min = 1, max = 255, message = "direccion is required"))]
    pub direccion: String,
    #[validate(length(min = 1, max = 15, message = "telefono must have at most 15 characters"))]
    pub telefono: String,
    #[serde(default, with = "crate::types::image")]
    #[schema(value_type = Option<String>, format = Byte)]
    pub imagen: Option<Vec<u8>>,
    pub idusuarios: i32,
    pub idtipodocumento: i32,
}

impl Referencing for PersonalDataDraft {
    fn references(&self) -> Vec<Reference> {
        vec![
            Reference::new(ReferenceKind::User, self.idusuarios),
            Reference::new(ReferenceKind::DocumentType, self.idtipodocumento),
        ]
    }
}

/// Venture payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct VentureDraft {
    #[validate(length(min = 1, max = 100, message = "nombre must have 1 to 100 characters"))]
    pub nombre: String,
    #[validate(length(min = 1, message = "descripcion is required"))]
    pub descripcion: String,
    pub tipo: String,
    /// Defaults to today on creation
    pub fecha_creacion: Option<NaiveDate>,
    #[serde(default = "active")]
    pub estado_emprendimiento: bool,
    #[serde(default, with = "crate::types::image")]
    #[schema(value_type = Option<String>, format = Byte)]
    pub imagen_emprendimiento: Option<Vec<u8>>,
    pub idregiones: i32,
    pub idusuarios: i32,
}

impl Referencing for VentureDraft {
    fn references(&self) -> Vec<Reference> {
        vec![
            Reference::new(ReferenceKind::User, self.idusuarios),
            Reference::new(ReferenceKind::Region, self.idregiones),
        ]
    }
}

fn active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venture_references_user_then_region() {
        let draft: VentureDraft = serde_json::from_value(serde_json::json!({
            "nombre": "Huerta",
            "descripcion": "Hortalizas",
            "tipo": "Agricultura",
            "idregiones": 7,
            "idusuarios": 3
        }))
        .unwrap();

        assert!(draft.estado_emprendimiento);
        assert_eq!(
            draft.references(),
            vec![
                Reference::new(ReferenceKind::User, 3),
                Reference::new(ReferenceKind::Region, 7),
            ]
        );
    }

    #[test]
    fn test_energy_draft_accepts_client_aliases() {
        let draft: EnergyDraft = serde_json::from_value(serde_json::json!({
            "emprendimientoId": 4,
            "fecha": "2024-05-01",
            "energiaProducida": 12.5,
            "energiaConsumida": 3.0,
            "fuenteEnergia": "solar"
        }))
        .unwrap();

        assert_eq!(draft.idemprendimiento, 4);
        assert_eq!(draft.fuente_energia.as_deref(), Some("solar"));
        assert_eq!(
            draft.references(),
            vec![Reference::new(ReferenceKind::Venture, 4)]
        );
    }

    #[test]
    fn test_rating_out_of_range_fails_validation() {
        let draft = CommentDraft {
            comentario: "Excelente".into(),
            calificacion: 6,
            fecha_comentario: None,
            idemprendimiento: 1,
            idusuarios: 1,
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_role_comment_and_history_references() {
        let role = RoleDraft {
            name: "ROLE_USER".into(),
            idusuarios: 2,
            idtipousuario: 9,
        };
        assert_eq!(
            role.references(),
            vec![
                Reference::new(ReferenceKind::User, 2),
                Reference::new(ReferenceKind::UserType, 9),
            ]
        );

        let comment = CommentDraft {
            comentario: "Excelente".into(),
            calificacion: 5,
            fecha_comentario: None,
            idemprendimiento: 8,
            idusuarios: 3,
        };
        assert_eq!(
            comment.references(),
            vec![
                Reference::new(ReferenceKind::User, 3),
                Reference::new(ReferenceKind::Venture, 8),
            ]
        );

        let history: HistoryDraft = serde_json::from_value(serde_json::json!({
            "pais": "Colombia",
            "cantidad_emprendimiento": "12",
            "year": "2024",
            "idemprendimiento": 5,
            "cantidad_aportada": "0",
            "paso": "inicio"
        }))
        .unwrap();
        assert_eq!(
            history.references(),
            vec![Reference::new(ReferenceKind::Venture, 5)]
        );
    }
}
