//! Dashboard aggregates and health endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;

async fn seed_region(app: &TestApp, token: &str, name: &str) -> i64 {
    let (status, body) = app
        .post_json("/regiones", Some(token), json!({ "nombre_region": name }))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["idregiones"].as_i64().unwrap()
}

async fn seed_venture(app: &TestApp, token: &str, region: i64, kind: &str) -> i64 {
    let region = region.to_string();
    let (status, body) = app
        .post_form(
            "/emprendimientos",
            Some(token),
            &[
                ("nombre", "Emprendimiento"),
                ("descripcion", "Descripcion"),
                ("tipo", kind),
                ("idregiones", &region),
            ],
            None,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["idemprendimiento"].as_i64().unwrap()
}

async fn seed_history(app: &TestApp, token: &str, venture: i64, country: &str, amount: &str) {
    let (status, body) = app
        .post_json(
            "/historialEmprendimiento",
            Some(token),
            json!({
                "pais": country,
                "cantidad_emprendimiento": amount,
                "year": "2024",
                "idemprendimiento": venture,
                "cantidad_aportada": "0",
                "paso": "inicio"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
}

#[tokio::test]
async fn test_top_countries_sums_amounts_per_country() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;
    let region = seed_region(&app, &token, "Andina").await;
    let venture = seed_venture(&app, &token, region, "Agricultura").await;

    seed_history(&app, &token, venture, "A", "5").await;
    seed_history(&app, &token, venture, "B", "20").await;
    seed_history(&app, &token, venture, "A", "3").await;

    let (status, body) = app.get("/historialEmprendimiento/top-paises", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "nombrePais": "B", "cantidadEmprendimientos": 20.0 },
            { "nombrePais": "A", "cantidadEmprendimientos": 8.0 }
        ])
    );
}

#[tokio::test]
async fn test_ventures_per_region_and_share() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;
    let andina = seed_region(&app, &token, "Andina").await;
    let caribe = seed_region(&app, &token, "Caribe").await;
    seed_region(&app, &token, "Amazonia").await;

    seed_venture(&app, &token, andina, "Agricultura").await;
    seed_venture(&app, &token, andina, "Servicios").await;
    seed_venture(&app, &token, caribe, "Agricultura").await;

    let (status, counts) = app.get("/emprendimientos/por-region", None).await;
    assert_eq!(status, StatusCode::OK);
    let count_of = |name: &str| {
        counts
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["nombre_region"] == name)
            .map(|c| c["cantidad"].clone())
    };
    assert_eq!(count_of("Andina"), Some(json!(2)));
    assert_eq!(count_of("Caribe"), Some(json!(1)));
    // Regions without ventures are not listed
    assert_eq!(count_of("Amazonia"), None);

    let (status, shares) = app
        .get("/emprendimientos/porcentaje-por-region", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let share_of = |name: &str| {
        shares
            .as_array()
            .unwrap()
            .iter()
            .find(|s| s["nombre_region"] == name)
            .and_then(|s| s["porcentaje"].as_f64())
    };
    assert_eq!(share_of("Andina"), Some(66.67));
    assert_eq!(share_of("Caribe"), Some(33.33));
}

#[tokio::test]
async fn test_share_is_empty_without_ventures() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .get("/emprendimientos/porcentaje-por-region", None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_dashboard_shows_sample_data_without_ventures() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get("/api/dashboard/emprendimientos-datos", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["mensaje"].is_string());
    let total: i64 = body["datos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d.as_i64().unwrap())
        .sum();
    assert_eq!(body["total"], total);
}

#[tokio::test]
async fn test_dashboard_counts_ventures_by_type() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;
    let region = seed_region(&app, &token, "Orinoquia").await;
    seed_venture(&app, &token, region, "Agricultura").await;
    seed_venture(&app, &token, region, "Agricultura").await;
    seed_venture(&app, &token, region, "Turismo").await;

    let (status, body) = app.get("/api/dashboard/emprendimientos-datos", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("mensaje").is_none());
    assert_eq!(body["total"], 3);
    let labels: Vec<&str> = body["labels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l.as_str().unwrap())
        .collect();
    let position = labels.iter().position(|l| *l == "Agricultura").unwrap();
    assert_eq!(body["datos"][position], 2);
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get("/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Red Comunitaria API");

    let (status, body) = app.get("/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"]["status"], "healthy");

    let (status, body) = app.get("/api/health-check", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "UP");
    assert!(body["timestamp"].is_string());
}
