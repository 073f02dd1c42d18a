//! Application route configuration.

use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    auth_routes, catalog_handler, dashboard_routes, energy_query_routes, health_handler,
    history_query_routes, personal_data_routes, user_routes, venture_routes,
};
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(health_handler::root))
        .route("/health", get(health_handler::health))
        .route("/api/health-check", get(health_handler::health_check))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/auth", auth_routes())
        .nest("/usuarios", user_routes(state.clone()))
        .nest("/emprendimientos", venture_routes())
        .nest("/datosPersonales", personal_data_routes())
        .nest("/regiones", catalog_handler::regions::routes())
        .nest("/tipoUsuarios", catalog_handler::user_types::routes())
        .nest("/tipoDocumento", catalog_handler::document_types::routes())
        .nest("/roles", catalog_handler::roles::routes())
        .nest(
            "/comentariosYCalificaciones",
            catalog_handler::comments::routes(),
        )
        .nest(
            "/historialEmprendimiento",
            catalog_handler::history::routes().merge(history_query_routes()),
        )
        .nest(
            "/produccionConsumoEnergia",
            catalog_handler::energy::routes().merge(energy_query_routes()),
        )
        .nest("/api/dashboard", dashboard_routes())
        // Global middleware
        .layer(DefaultBodyLimit::max(crate::config::MAX_UPLOAD_BYTES))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for the configured front-end origins, credentials allowed.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(60 * 60))
}
