//! Venture handlers: multipart writes, per-owner listings and region statistics.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::extractors::{validate, FormData, ValidatedJson};
use crate::api::middleware::{require_admin, CurrentUser};
use crate::api::AppState;
use crate::domain::{RegionCount, RegionShare, VentureDraft};
use crate::errors::AppResult;
use crate::infra::repositories::entities::venture;
use crate::services::VentureOverview;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct OwnerQuery {
    /// Owner to list; defaults to the caller
    pub user_id: Option<i32>,
}

/// Create `/emprendimientos` routes
pub fn venture_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_ventures).post(create_venture))
        .route("/por-region", get(ventures_by_region))
        .route("/porcentaje-por-region", get(share_by_region))
        .route("/mis-emprendimientos", get(my_ventures))
        .route("/todos", get(all_ventures))
        .route("/usuario/:user_id", get(ventures_of_user))
        .route(
            "/:id",
            get(get_venture).put(replace_venture).delete(delete_venture),
        )
        .route("/:id/actualizar", post(update_venture))
}

/// Build a venture from form fields; the owner defaults to the caller.
fn draft_from_form(mut form: FormData, caller: &CurrentUser) -> AppResult<VentureDraft> {
    let draft = VentureDraft {
        nombre: form.text("nombre")?,
        descripcion: form.text("descripcion")?,
        tipo: form.optional_text("tipo").unwrap_or_default(),
        fecha_creacion: form.parse_optional::<NaiveDate>("fecha_creacion")?,
        estado_emprendimiento: form
            .parse_optional::<bool>("estado_emprendimiento")?
            .unwrap_or(true),
        idregiones: form.parse("idregiones")?,
        idusuarios: form.parse_optional("idusuarios")?.unwrap_or(caller.id),
        imagen_emprendimiento: form.take_image(),
    };
    validate(&draft)?;
    Ok(draft)
}

/// List all ventures
#[utoipa::path(
    get,
    path = "/emprendimientos",
    tag = "Ventures",
    responses((status = 200, description = "All ventures", body = Vec<venture::Model>))
)]
pub async fn list_ventures(State(state): State<AppState>) -> AppResult<Json<Vec<venture::Model>>> {
    Ok(Json(state.services.ventures().catalog().list_all().await?))
}

/// Get venture by ID
#[utoipa::path(
    get,
    path = "/emprendimientos/{id}",
    tag = "Ventures",
    params(("id" = i32, Path, description = "Venture ID")),
    responses(
        (status = 200, description = "Venture found", body = venture::Model),
        (status = 404, description = "Venture not found")
    )
)]
pub async fn get_venture(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<venture::Model>> {
    Ok(Json(state.services.ventures().catalog().get_by_id(id).await?))
}

/// Register a venture from a multipart form with an optional `imagen` file
#[utoipa::path(
    post,
    path = "/emprendimientos",
    tag = "Ventures",
    security(("bearer_auth" = [])),
    request_body(content = Object, content_type = "multipart/form-data", description = "Venture fields and optional imagen file"),
    responses(
        (status = 201, description = "Venture created", body = venture::Model),
        (status = 400, description = "Invalid fields or missing region/user"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_venture(
    State(state): State<AppState>,
    caller: CurrentUser,
    form: FormData,
) -> AppResult<(StatusCode, Json<venture::Model>)> {
    let draft = draft_from_form(form, &caller)?;
    let created = state.services.ventures().catalog().create(draft).await?;
    tracing::info!(id = created.idemprendimiento, user_id = caller.id, "Venture registered");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace a venture from a multipart form; the stored image is kept when none is uploaded
#[utoipa::path(
    post,
    path = "/emprendimientos/{id}/actualizar",
    tag = "Ventures",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Venture ID")),
    request_body(content = Object, content_type = "multipart/form-data", description = "Venture fields and optional imagen file"),
    responses(
        (status = 200, description = "Venture updated", body = venture::Model),
        (status = 400, description = "Invalid fields or missing region/user"),
        (status = 404, description = "Venture not found")
    )
)]
pub async fn update_venture(
    State(state): State<AppState>,
    caller: CurrentUser,
    Path(id): Path<i32>,
    form: FormData,
) -> AppResult<Json<venture::Model>> {
    let draft = draft_from_form(form, &caller)?;
    Ok(Json(state.services.ventures().catalog().update(id, draft).await?))
}

/// JSON variant of the update, with the image as base64
pub async fn replace_venture(
    State(state): State<AppState>,
    _caller: CurrentUser,
    Path(id): Path<i32>,
    ValidatedJson(draft): ValidatedJson<VentureDraft>,
) -> AppResult<Json<venture::Model>> {
    Ok(Json(state.services.ventures().catalog().update(id, draft).await?))
}

pub async fn delete_venture(
    State(state): State<AppState>,
    caller: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.ventures().catalog().delete_by_id(id).await?;
    tracing::info!(id, user_id = caller.id, "Venture deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Ventures owned by a user
#[utoipa::path(
    get,
    path = "/emprendimientos/usuario/{user_id}",
    tag = "Ventures",
    security(("bearer_auth" = [])),
    params(("user_id" = i32, Path, description = "Owner ID")),
    responses(
        (status = 200, description = "Ventures of the user", body = Vec<venture::Model>),
        (status = 400, description = "User not found")
    )
)]
pub async fn ventures_of_user(
    State(state): State<AppState>,
    _caller: CurrentUser,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Vec<venture::Model>>> {
    Ok(Json(state.services.ventures().list_by_user(user_id).await?))
}

/// The caller's ventures; administrators without `userId` get every venture with its owner
#[utoipa::path(
    get,
    path = "/emprendimientos/mis-emprendimientos",
    tag = "Ventures",
    security(("bearer_auth" = [])),
    params(OwnerQuery),
    responses(
        (status = 200, description = "Ventures of the caller or the requested user", body = Vec<venture::Model>),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn my_ventures(
    State(state): State<AppState>,
    caller: CurrentUser,
    Query(query): Query<OwnerQuery>,
) -> AppResult<Response> {
    let ventures = state.services.ventures();
    match query.user_id {
        Some(user_id) => Ok(Json(ventures.list_by_user(user_id).await?).into_response()),
        None if caller.is_admin() => Ok(Json(ventures.overview().await?).into_response()),
        None => Ok(Json(ventures.list_by_user(caller.id).await?).into_response()),
    }
}

/// Every venture with its owner's username and e-mail (admin only)
#[utoipa::path(
    get,
    path = "/emprendimientos/todos",
    tag = "Ventures",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All ventures with owners", body = Vec<VentureOverview>),
        (status = 403, description = "Admin access required")
    )
)]
pub async fn all_ventures(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> AppResult<Json<Vec<VentureOverview>>> {
    require_admin(&caller)?;
    Ok(Json(state.services.ventures().overview().await?))
}

/// Venture count per region
#[utoipa::path(
    get,
    path = "/emprendimientos/por-region",
    tag = "Statistics",
    responses((status = 200, description = "Ventures per region", body = Vec<RegionCount>))
)]
pub async fn ventures_by_region(State(state): State<AppState>) -> AppResult<Json<Vec<RegionCount>>> {
    Ok(Json(state.services.statistics().by_region().await?))
}

/// Percentage of ventures per region
#[utoipa::path(
    get,
    path = "/emprendimientos/porcentaje-por-region",
    tag = "Statistics",
    responses((status = 200, description = "Share of ventures per region", body = Vec<RegionShare>))
)]
pub async fn share_by_region(State(state): State<AppState>) -> AppResult<Json<Vec<RegionShare>>> {
    Ok(Json(state.services.statistics().share_by_region().await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caller() -> CurrentUser {
        CurrentUser {
            id: 4,
            username: "lucia".into(),
            role: None,
        }
    }

    #[test]
    fn test_form_defaults() {
        let form = FormData::from_parts(
            &[
                ("nombre", "Huerta"),
                ("descripcion", "Hortalizas"),
                ("idregiones", "2"),
            ],
            Some(vec![0xFF, 0xD8]),
        );

        let draft = draft_from_form(form, &caller()).unwrap();

        assert_eq!(draft.idusuarios, 4);
        assert!(draft.estado_emprendimiento);
        assert_eq!(draft.tipo, "");
        assert!(draft.fecha_creacion.is_none());
        assert_eq!(draft.imagen_emprendimiento, Some(vec![0xFF, 0xD8]));
    }

    #[test]
    fn test_form_requires_region() {
        let form = FormData::from_parts(&[("nombre", "Huerta"), ("descripcion", "x")], None);

        assert!(draft_from_form(form, &caller()).is_err());
    }
}
