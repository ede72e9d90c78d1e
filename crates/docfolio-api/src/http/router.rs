//! Axum router configuration with middleware.
//!
//! All JSON routes are under `/api/v1/`.
//! Middleware: CORS, request tracing.
//!
//! When the configured web directory (`web_dir`, or `DOCFOLIO_WEB_DIR`)
//! exists, the built site is served from it. API routes take priority;
//! unknown paths fall through to its `index.html` for client-side routing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/documentaries",
            get(handlers::documentary::list_documentaries),
        )
        .route(
            "/documentaries/category/{category}",
            get(handlers::documentary::list_by_category),
        )
        .route(
            "/documentaries/featured",
            get(handlers::documentary::get_featured),
        )
        .route(
            "/documentaries/{id}",
            get(handlers::documentary::get_documentary),
        )
        .route(
            "/testimonials",
            get(handlers::testimonial::list_testimonials),
        )
        .route("/producer", get(handlers::producer::get_producer))
        .route("/contacts", post(handlers::contact::create_contact));

    let web_dir = state.config.web_dir.clone();

    let mut router = Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if web_dir.exists() {
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(web_dir.join("index.html")));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir.display(), "static site serving enabled");
    }

    router
}

/// GET /health - Liveness check.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
