//! User administration handlers and the legacy login endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{auth_middleware, require_admin, CurrentUser};
use crate::api::AppState;
use crate::domain::{CreateUser, User};
use crate::errors::AppResult;
use crate::infra::repositories::entities::personal_data;

/// Legacy login request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LegacyLoginRequest {
    #[schema(example = "maria@example.com")]
    pub email_user: String,
    pub password: String,
}

/// Account plus its personal data, as the old client expects
#[derive(Debug, Serialize, ToSchema)]
pub struct LegacyLoginResponse {
    pub usuario: User,
    #[serde(rename = "datosPersonales")]
    pub datos_personales: Option<personal_data::Model>,
}

/// Create `/usuarios` routes; everything but the legacy login needs a token
pub fn user_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).delete(delete_user))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/login", post(legacy_login))
        .merge(protected)
}

/// E-mail based login kept for the previous client
#[utoipa::path(
    post,
    path = "/usuarios/login",
    tag = "Users",
    request_body = LegacyLoginRequest,
    responses(
        (status = 200, description = "Account and personal data", body = LegacyLoginResponse),
        (status = 401, description = "Unknown e-mail or incorrect password")
    )
)]
pub async fn legacy_login(
    State(state): State<AppState>,
    Json(payload): Json<LegacyLoginRequest>,
) -> AppResult<Json<LegacyLoginResponse>> {
    let usuario = state
        .services
        .auth()
        .legacy_login(payload.email_user, payload.password)
        .await?;
    let datos_personales = state.services.personal_data().find_by_user(usuario.id).await?;

    Ok(Json(LegacyLoginResponse {
        usuario,
        datos_personales,
    }))
}

/// List all users
#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    Ok(Json(state.services.users().list_users().await?))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<User>> {
    Ok(Json(state.services.users().get_user(id).await?))
}

/// Create a user (admin only)
#[utoipa::path(
    post,
    path = "/usuarios",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Validation error or user already exists"),
        (status = 403, description = "Admin access required")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    current_user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    require_admin(&current_user)?;
    let user = state.services.users().create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Permanently delete a user (admin only)
#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    require_admin(&current_user)?;
    state.services.users().delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
