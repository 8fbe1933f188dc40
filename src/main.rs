use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use repair_search::api;
use repair_search::config::Config;
use repair_search::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("iFixit base URL: {}", config.ifixit.base_url);
    tracing::info!(
        "LLM summarizer: {} ({})",
        if config.llm.api_key.is_some() {
            "enabled"
        } else {
            "fallback only"
        },
        config.llm.base_url
    );

    let cors = api::build_cors_layer(&config);
    let state = AppState::new(config.clone())?;

    let app = Router::new()
        .route("/", get(api::info::root))
        .route("/health", get(api::info::health))
        .route("/popular", get(api::info::popular))
        .route("/search", post(api::search::search))
        .route("/search", get(api::search::quick_search))
        .route("/guides/{*device_url}", get(api::guides::get_guides))
        .route("/summarize", post(api::summary::summarize))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
