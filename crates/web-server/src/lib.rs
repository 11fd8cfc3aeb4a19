use analytics::StatsEngine;
use axum::{routing::get, Router};
use configuration::Config;
use core_types::Fund;
use filings::{FileStore, FilingsProvider};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn FilingsProvider>,
    pub funds: Vec<Fund>,
    pub engine: StatsEngine,
}

/// Builds the application router. Split out of `run_server` so the routes
/// can be exercised without binding a socket.
pub fn app(state: Arc<AppState>) -> Router {
    // The dashboard is served from a different origin, so CORS stays open.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/config", get(handlers::get_config))
        .route("/api/funds/:cik/filings", get(handlers::get_fund_filings))
        .route("/api/funds/:cik/stats", get(handlers::get_fund_stats))
        .route(
            "/api/funds/:cik/volatility",
            get(handlers::get_fund_volatility),
        )
        .with_state(state)
        .layer(cors)
        // This middleware logs information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let store = FileStore::new(&config.store.data_dir);
    let state = Arc::new(AppState {
        provider: Arc::new(store),
        funds: config.funds,
        engine: StatsEngine::new(),
    });

    let addr = config.server.bind_addr;
    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
