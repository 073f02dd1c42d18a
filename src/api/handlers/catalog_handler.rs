//! CRUD routes for the table-backed resources.
//!
//! Every resource gets the same five routes: reads are public, writes need
//! a bearer token and pass through a per-resource hook before reaching the
//! service.

use crate::api::middleware::{require_admin, CurrentUser};
use crate::domain::EnergyDraft;
use crate::errors::AppResult;

macro_rules! catalog_routes {
    ($(#[$doc:meta])* $module:ident, $draft:ty, $accessor:ident, $before_write:path) => {
        $(#[$doc])*
        pub mod $module {
            use axum::{
                extract::{Path, State},
                http::StatusCode,
                response::Json,
                routing::get,
                Router,
            };

            use crate::api::extractors::ValidatedJson;
            use crate::api::middleware::CurrentUser;
            use crate::api::AppState;
            use crate::errors::AppResult;
            use crate::services::ModelOf;

            type Model = ModelOf<$draft>;

            pub fn routes() -> Router<AppState> {
                Router::new()
                    .route("/", get(list).post(create))
                    .route("/:id", get(show).put(update).delete(remove))
            }

            async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Model>>> {
                Ok(Json(state.services.$accessor().list_all().await?))
            }

            async fn show(
                State(state): State<AppState>,
                Path(id): Path<i32>,
            ) -> AppResult<Json<Model>> {
                Ok(Json(state.services.$accessor().get_by_id(id).await?))
            }

            async fn create(
                State(state): State<AppState>,
                user: CurrentUser,
                ValidatedJson(draft): ValidatedJson<$draft>,
            ) -> AppResult<(StatusCode, Json<Model>)> {
                let draft = $before_write(&user, draft)?;
                let created = state.services.$accessor().create(draft).await?;
                Ok((StatusCode::CREATED, Json(created)))
            }

            async fn update(
                State(state): State<AppState>,
                user: CurrentUser,
                Path(id): Path<i32>,
                ValidatedJson(draft): ValidatedJson<$draft>,
            ) -> AppResult<Json<Model>> {
                let draft = $before_write(&user, draft)?;
                Ok(Json(state.services.$accessor().update(id, draft).await?))
            }

            async fn remove(
                State(state): State<AppState>,
                user: CurrentUser,
                Path(id): Path<i32>,
            ) -> AppResult<StatusCode> {
                tracing::debug!(user_id = user.id, id, "Deleting {}", stringify!($module));
                state.services.$accessor().delete_by_id(id).await?;
                Ok(StatusCode::NO_CONTENT)
            }
        }
    };
}

fn unchanged<D>(_user: &CurrentUser, draft: D) -> AppResult<D> {
    Ok(draft)
}

fn admin_only<D>(user: &CurrentUser, draft: D) -> AppResult<D> {
    require_admin(user)?;
    Ok(draft)
}

/// Records without an explicit recorder are attributed to the caller.
fn stamp_recorder(user: &CurrentUser, mut draft: EnergyDraft) -> AppResult<EnergyDraft> {
    draft.idusuarios.get_or_insert(user.id);
    Ok(draft)
}

catalog_routes!(
    /// `/regiones`
    regions,
    crate::domain::RegionDraft,
    regions,
    super::unchanged
);

catalog_routes!(
    /// `/tipoUsuarios`
    user_types,
    crate::domain::UserTypeDraft,
    user_types,
    super::unchanged
);

catalog_routes!(
    /// `/tipoDocumento`
    document_types,
    crate::domain::DocumentTypeDraft,
    document_types,
    super::unchanged
);

catalog_routes!(
    /// `/roles`, writable by administrators only
    roles,
    crate::domain::RoleDraft,
    roles,
    super::admin_only
);

catalog_routes!(
    /// `/comentariosYCalificaciones`
    comments,
    crate::domain::CommentDraft,
    comments,
    super::unchanged
);

catalog_routes!(
    /// `/historialEmprendimiento`
    history,
    crate::domain::HistoryDraft,
    history,
    super::unchanged
);

catalog_routes!(
    /// `/produccionConsumoEnergia`
    energy,
    crate::domain::EnergyDraft,
    energy_records,
    super::stamp_recorder
);

#[cfg(test)]
mod tests {
    use super::*;

    fn caller(role: Option<&str>) -> CurrentUser {
        CurrentUser {
            id: 8,
            username: "lucia".into(),
            role: role.map(String::from),
        }
    }

    fn energy(idusuarios: Option<i32>) -> EnergyDraft {
        EnergyDraft {
            idemprendimiento: 1,
            fecha: None,
            produccion_energia: 1.0,
            consumo_energia: 0.5,
            fuente_energia: None,
            observaciones: None,
            idusuarios,
        }
    }

    #[test]
    fn test_stamp_recorder_only_fills_missing_user() {
        let user = caller(None);

        assert_eq!(stamp_recorder(&user, energy(None)).unwrap().idusuarios, Some(8));
        assert_eq!(stamp_recorder(&user, energy(Some(3))).unwrap().idusuarios, Some(3));
    }

    #[test]
    fn test_role_writes_need_admin() {
        assert!(admin_only(&caller(Some("ROLE_ADMIN")), ()).is_ok());
        assert!(admin_only(&caller(Some("ROLE_USER")), ()).is_err());
    }
}
