use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod models;
mod routes;

use adapters::JsonStyleRepository;
use application::StyleService;

/// Default location of the backing collection file, relative to the
/// process working directory
const DEFAULT_DATA_PATH: &str = "data/styles.json";

/// Type alias for the application service with the concrete repository
pub type AppStyleService = StyleService<JsonStyleRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub style_service: Arc<AppStyleService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Styleguide API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Styleguide API initializing...");

    let data_path =
        std::env::var("STYLEGUIDE_DATA_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());
    let repo = Arc::new(
        JsonStyleRepository::new(&data_path)
            .with_context(|| format!("Failed to open style storage at {}", data_path))?,
    );
    tracing::info!("Style storage ready at {}", data_path);

    let style_service = Arc::new(StyleService::new(repo));

    let state = AppState { style_service };

    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::style::router())
        .merge(routes::prompt::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Styleguide API ready on port {}", port);

    axum::serve(listener, router).await?;

    Ok(())
}
