//! Personal data handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::extractors::{validate, FormData};
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::PersonalDataDraft;
use crate::errors::AppResult;
use crate::infra::repositories::entities::personal_data;

/// Personal data fields when the ids travel in the path
#[derive(Debug, Deserialize, ToSchema)]
pub struct PersonalDataFields {
    pub nombre_completo: String,
    pub cedula: String,
    pub direccion: String,
    pub telefono: String,
    #[serde(default, with = "crate::types::image")]
    #[schema(value_type = Option<String>, format = Byte)]
    pub imagen: Option<Vec<u8>>,
}

/// Create `/datosPersonales` routes
pub fn personal_data_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/usuario/:user_id", get(of_user))
        .route("/:id", get(show).put(update).delete(remove))
        .route("/:id/:document_type_id", post(create_for))
}

fn draft_from_form(mut form: FormData) -> AppResult<PersonalDataDraft> {
    let draft = PersonalDataDraft {
        nombre_completo: form.text("nombre_completo")?,
        cedula: form.text("cedula")?,
        direccion: form.text("direccion")?,
        telefono: form.text("telefono")?,
        idusuarios: form.parse("idusuarios")?,
        idtipodocumento: form.parse("idtipodocumento")?,
        imagen: form.take_image(),
    };
    validate(&draft)?;
    Ok(draft)
}

async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<personal_data::Model>>> {
    Ok(Json(state.services.personal_data().catalog().list_all().await?))
}

async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<personal_data::Model>> {
    Ok(Json(state.services.personal_data().catalog().get_by_id(id).await?))
}

/// Personal data of a user
#[utoipa::path(
    get,
    path = "/datosPersonales/usuario/{user_id}",
    tag = "Personal data",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Personal data found", body = personal_data::Model),
        (status = 404, description = "The user has no personal data")
    )
)]
pub async fn of_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<personal_data::Model>> {
    Ok(Json(state.services.personal_data().get_by_user(user_id).await?))
}

/// Register personal data from a multipart form with an optional `imagen` file
#[utoipa::path(
    post,
    path = "/datosPersonales",
    tag = "Personal data",
    security(("bearer_auth" = [])),
    request_body(content = Object, content_type = "multipart/form-data", description = "Personal data fields and optional imagen file"),
    responses(
        (status = 201, description = "Personal data created", body = personal_data::Model),
        (status = 400, description = "Invalid fields or missing user/document type"),
        (status = 409, description = "Cedula or user already registered")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    _caller: CurrentUser,
    form: FormData,
) -> AppResult<(StatusCode, Json<personal_data::Model>)> {
    let draft = draft_from_form(form)?;
    let created = state.services.personal_data().catalog().create(draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Register personal data for the user and document type in the path
#[utoipa::path(
    post,
    path = "/datosPersonales/{user_id}/{document_type_id}",
    tag = "Personal data",
    security(("bearer_auth" = [])),
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("document_type_id" = i32, Path, description = "Document type ID")
    ),
    request_body = PersonalDataFields,
    responses(
        (status = 201, description = "Personal data created", body = personal_data::Model),
        (status = 400, description = "Invalid fields or missing user/document type")
    )
)]
pub async fn create_for(
    State(state): State<AppState>,
    _caller: CurrentUser,
    Path((user_id, document_type_id)): Path<(i32, i32)>,
    Json(fields): Json<PersonalDataFields>,
) -> AppResult<(StatusCode, Json<personal_data::Model>)> {
    let draft = PersonalDataDraft {
        nombre_completo: fields.nombre_completo,
        cedula: fields.cedula,
        direccion: fields.direccion,
        telefono: fields.telefono,
        imagen: fields.imagen,
        idusuarios: user_id,
        idtipodocumento: document_type_id,
    };
    validate(&draft)?;

    let created = state.services.personal_data().catalog().create(draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update(
    State(state): State<AppState>,
    _caller: CurrentUser,
    Path(id): Path<i32>,
    form: FormData,
) -> AppResult<Json<personal_data::Model>> {
    let draft = draft_from_form(form)?;
    Ok(Json(state.services.personal_data().catalog().update(id, draft).await?))
}

async fn remove(
    State(state): State<AppState>,
    _caller: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.personal_data().catalog().delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
