use crate::server::{routes, static_files};
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use churncast_inference::ChurnPredictor;
use std::net::SocketAddr;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the Axum application
pub fn build_app(predictor: ChurnPredictor) -> Router {
    let state = AppState::new(predictor);

    // CORS defaults to local origins; override only for explicit demo use.
    let allow_any_origin = std::env::var("CHURNCAST_ALLOW_ANY_ORIGIN")
        .ok()
        .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
    let cors = if allow_any_origin {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list([
                HeaderValue::from_static("http://localhost:5173"),
                HeaderValue::from_static("http://127.0.0.1:5173"),
            ]))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // API routes
    let api_routes = Router::new()
        // Health
        .route("/health", get(routes::health))
        // Form schema
        .route("/schema", get(routes::get_schema))
        // Prediction
        .route("/predict", post(routes::predict))
        // History
        .route("/predictions", get(routes::list_predictions))
        .route("/predictions/:id", get(routes::get_prediction))
        // Statistics
        .route("/stats", get(routes::get_stats))
        .route("/stats/reset", post(routes::reset_stats));

    Router::new()
        .nest("/api", api_routes)
        .fallback(static_files::serve_static)
        .layer(cors)
        .with_state(state)
}

/// Run the server
pub async fn run_server(predictor: ChurnPredictor, addr: SocketAddr) -> anyhow::Result<()> {
    let app = build_app(predictor);

    tracing::info!("Starting Churncast server on {}", addr);
    tracing::info!("Open http://{} in your browser", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
