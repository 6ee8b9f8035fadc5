pub mod diagnostics;
pub mod docs;
pub mod health;
pub mod search;

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{middleware::cors::search_cors, AppState};

pub const SEARCH_JOBS_PATH: &str = "/api/search_jobs";

/// Builds the full service: API routes, optional static front end, CORS and tracing.
pub fn app(state: AppState, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/health", get(health::health))
        .route("/api/test", get(diagnostics::function_test))
        .route("/api/openapi.json", get(docs::openapi_json))
        .route(
            SEARCH_JOBS_PATH,
            post(search::search_jobs)
                .options(search::preflight)
                .fallback(search::method_not_allowed),
        )
        .with_state(state);

    let app = match static_dir {
        Some(dir) => {
            tracing::info!("Serving front end from: {}", dir.display());
            api.fallback_service(ServeDir::new(dir))
        }
        None => api,
    };

    app.layer(search_cors()).layer(TraceLayer::new_for_http())
}
