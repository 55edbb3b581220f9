//! Route registration — collects all module routes + system endpoints.

use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

/// Build the complete router with all routes.
pub fn build_router(module_routes: Vec<(&str, Router)>) -> Router {
    // System endpoints (public, no state needed).
    let mut app = Router::new()
        .route("/health", get(health))
        .route("/version", get(version));

    // Mount each module's routes under /{module_name}.
    // Module routes are already Router<()> (they called .with_state() internally).
    for (name, router) in module_routes {
        app = app.nest(&format!("/{}", name), router);
    }

    app
}

async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
    }))
}

async fn version() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": "todowebd",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
