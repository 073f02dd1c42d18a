//! Statistics endpoints that are not tied to one venture.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::AppState;
use crate::domain::{CountryTotal, TypeChart};
use crate::errors::AppResult;

/// Routes added to `/historialEmprendimiento`
pub fn history_query_routes() -> Router<AppState> {
    Router::new().route("/top-paises", get(top_countries))
}

/// Routes under `/api/dashboard`
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/emprendimientos-datos", get(ventures_by_type))
}

/// Ten countries with the most ventures in the history
#[utoipa::path(
    get,
    path = "/historialEmprendimiento/top-paises",
    tag = "Statistics",
    responses((status = 200, description = "Countries ranked by venture amount", body = Vec<CountryTotal>))
)]
pub async fn top_countries(State(state): State<AppState>) -> AppResult<Json<Vec<CountryTotal>>> {
    Ok(Json(state.services.statistics().top_countries().await?))
}

/// Chart data of ventures per type
#[utoipa::path(
    get,
    path = "/api/dashboard/emprendimientos-datos",
    tag = "Statistics",
    responses((status = 200, description = "Venture count per type", body = TypeChart))
)]
pub async fn ventures_by_type(State(state): State<AppState>) -> AppResult<Json<TypeChart>> {
    Ok(Json(state.services.statistics().ventures_by_type().await?))
}
