use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers;
use crate::middleware::api_key::require_api_key;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    // Uploaded files are served back at the same prefix the records reference.
    let uploads = ServeDir::new(&state.config.upload_dir);

    Router::new()
        .route("/", get(root))
        .merge(content_routes())
        .merge(create_routes(state.clone()))
        .nest_service("/uploads", uploads)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(handlers::projects::list))
        .route("/projects/:id", get(handlers::projects::get))
        .route("/experiences", get(handlers::experiences::list))
        .route("/testimonials", get(handlers::testimonials::list))
        .route("/hero", get(handlers::hero::list))
}

/// Write routes, all behind the shared-secret guard. The guard runs before
/// the handlers, so rejected requests perform no file writes and no inserts.
fn create_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/create-project", post(handlers::projects::create))
        .route("/create-experience", post(handlers::experiences::create))
        .route("/create-testimonial", post(handlers::testimonials::create))
        .route("/create-hero", post(handlers::hero::create))
        .route_layer(middleware::from_fn_with_state(state, require_api_key))
}

/// GET / - liveness probe
async fn root() -> &'static str {
    "Hello World!"
}
