use axum::http::{HeaderValue, header};
use divvy::api::handlers::{AppState, api_routes};
use divvy::api::openapi::ApiDoc;
use divvy::chat::ChatClient;
use divvy::config::CONFIG;
use divvy::service::DivvyService;
use divvy::storage::in_memory::InMemoryStorage;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(CONFIG.log_level.as_str())
        .init();

    // Initialize storage and service
    let storage = InMemoryStorage::new();
    let state = AppState {
        service: Arc::new(DivvyService::new(storage)),
        chat: Arc::new(ChatClient::from_config(&CONFIG)),
    };

    let allowed_origin = CONFIG.allowed_origin.parse::<HeaderValue>()?;

    let app = api_routes(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new()) // Gzip compression
        .layer(TimeoutLayer::new(Duration::from_secs(30))) // 30-second timeout
        .layer(
            CorsLayer::new()
                .allow_origin(allowed_origin)
                .allow_credentials(true)
                .allow_methods([http::Method::GET, http::Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http()); // Request tracing

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
