use axum::Router;
use loopwalk::config::Config;
use loopwalk::services::directions::DirectionsProvider;
use loopwalk::services::openroute::OpenRouteClient;
use loopwalk::services::route_generator::RouteGenerator;
use loopwalk::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loopwalk=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting Loopwalk API server");
    tracing::info!(
        api_key_configured = config.has_api_key(),
        "Configuration loaded successfully"
    );

    let openroute_client = match config.openroute_base_url {
        Some(ref base_url) => {
            tracing::info!("Using OpenRouteService at {}", base_url);
            OpenRouteClient::with_base_url(config.openroute_api_key.clone(), base_url.clone())
        }
        None => OpenRouteClient::new(config.openroute_api_key.clone()),
    };
    let provider: Arc<dyn DirectionsProvider> = Arc::new(openroute_client);
    let route_generator = RouteGenerator::new(provider);

    let state = Arc::new(AppState {
        route_generator,
        api_key_configured: config.has_api_key(),
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", loopwalk::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
