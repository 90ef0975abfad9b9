pub mod routes;
pub mod state;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use wall_core::{AppConfig, MessageStore};

pub use state::AppState;

/// Build the axum Router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let mut app = Router::new()
        .merge(routes::page_routes())
        .merge(routes::health_routes())
        .merge(routes::message_routes())
        .merge(routes::stats_routes())
        .merge(routes::daily_routes())
        .merge(routes::palette_routes())
        .merge(routes::share_routes())
        .with_state(state.clone());

    app = app.layer(TraceLayer::new_for_http());

    if state.config.server.cors {
        // The wall is public read-only data; permissive CORS is fine.
        app = app.layer(CorsLayer::permissive());
    }

    app
}

/// Start the HTTP server.
pub async fn serve(config: AppConfig, store: Arc<MessageStore>) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, store);
    let router = build_router(state);

    tracing::info!("Serving the wall on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
