//! Fleet Insights
//!
//! Capa de analítica simulada para el dashboard de operaciones de flota:
//! sintetiza KPIs, rendimiento por modelo, carga de centros de servicio y
//! responde preguntas con un asistente por palabras clave.

pub mod cache;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{routing::get, Json, Router};
use tower_http::trace::TraceLayer;

use dto::fleet_dto::HealthResponse;
use middleware::cors::cors_for_origins;
use state::AppState;

/// Crear el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = cors_for_origins(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .nest(
            "/api/oem",
            routes::fleet_routes::create_fleet_router().merge(routes::chat_routes::create_chat_router()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de health check
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "fleet-insights",
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
