//! Energy queries added on top of the `/produccionConsumoEnergia` CRUD routes.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::AppState;
use crate::domain::EnergySummary;
use crate::errors::AppResult;
use crate::infra::repositories::entities::energy_record;

#[derive(Debug, Deserialize, IntoParams)]
pub struct RangeQuery {
    /// First day, inclusive
    pub desde: NaiveDate,
    /// Last day, inclusive
    pub hasta: NaiveDate,
    /// Restrict to one venture
    pub emprendimiento: Option<i32>,
}

pub fn energy_query_routes() -> Router<AppState> {
    Router::new()
        .route("/emprendimiento/:id", get(records_of_venture))
        .route("/rango", get(records_between))
        .route("/resumen", get(summary))
}

/// Records of one venture
#[utoipa::path(
    get,
    path = "/produccionConsumoEnergia/emprendimiento/{id}",
    tag = "Energy",
    params(("id" = i32, Path, description = "Venture ID")),
    responses((status = 200, description = "Energy records", body = Vec<energy_record::Model>))
)]
pub async fn records_of_venture(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<energy_record::Model>>> {
    Ok(Json(state.services.energy().list_by_venture(id).await?))
}

/// Records dated between two days
#[utoipa::path(
    get,
    path = "/produccionConsumoEnergia/rango",
    tag = "Energy",
    params(RangeQuery),
    responses(
        (status = 200, description = "Energy records in range", body = Vec<energy_record::Model>),
        (status = 400, description = "Invalid range")
    )
)]
pub async fn records_between(
    State(state): State<AppState>,
    Query(range): Query<RangeQuery>,
) -> AppResult<Json<Vec<energy_record::Model>>> {
    let records = state
        .services
        .energy()
        .list_between(range.desde, range.hasta, range.emprendimiento)
        .await?;
    Ok(Json(records))
}

/// Totals and averages per venture
#[utoipa::path(
    get,
    path = "/produccionConsumoEnergia/resumen",
    tag = "Statistics",
    responses((status = 200, description = "Energy summary per venture", body = Vec<EnergySummary>))
)]
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<Vec<EnergySummary>>> {
    Ok(Json(state.services.statistics().energy_summary().await?))
}
