//! OpenAPI documentation configuration.
//!
//! Served through Swagger UI at `/swagger-ui`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, energy_handler, personal_data_handler, statistics_handler, user_handler,
    venture_handler,
};
use crate::domain::{
    AuthResponse, CountryTotal, CreateUser, EnergySummary, RegionCount, RegionShare, TypeChart,
    User,
};
use crate::infra::repositories::entities::{energy_record, personal_data, venture};
use crate::services::VentureOverview;

/// OpenAPI documentation for the marketplace API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Red Comunitaria API",
        version = "0.1.0",
        description = "Community marketplace backend: ventures, users, energy records and statistics"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        // User endpoints
        user_handler::legacy_login,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::delete_user,
        // Venture endpoints
        venture_handler::list_ventures,
        venture_handler::get_venture,
        venture_handler::create_venture,
        venture_handler::update_venture,
        venture_handler::ventures_of_user,
        venture_handler::my_ventures,
        venture_handler::all_ventures,
        venture_handler::ventures_by_region,
        venture_handler::share_by_region,
        // Personal data endpoints
        personal_data_handler::of_user,
        personal_data_handler::create,
        personal_data_handler::create_for,
        // Energy and statistics endpoints
        energy_handler::records_of_venture,
        energy_handler::records_between,
        energy_handler::summary,
        statistics_handler::top_countries,
        statistics_handler::ventures_by_type,
    ),
    components(
        schemas(
            AuthResponse,
            User,
            CreateUser,
            RegionCount,
            RegionShare,
            CountryTotal,
            EnergySummary,
            TypeChart,
            VentureOverview,
            venture::Model,
            personal_data::Model,
            energy_record::Model,
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            user_handler::LegacyLoginRequest,
            user_handler::LegacyLoginResponse,
            personal_data_handler::PersonalDataFields,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Users", description = "User administration"),
        (name = "Ventures", description = "Venture registration and listings"),
        (name = "Personal data", description = "Personal data of users"),
        (name = "Energy", description = "Energy production and consumption records"),
        (name = "Statistics", description = "Aggregates for the dashboard")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
