use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

/// Build the Axum router: health check plus the channel webhooks.
pub fn build_router(channel_routers: Vec<Router>) -> Router {
    let mut app = Router::new().route("/api/health", get(health));

    for router in channel_routers {
        app = app.merge(router);
    }

    app.layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "slacknote",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
