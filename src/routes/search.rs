use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    dto::search_dto::{ErrorBody, SearchQuery, SearchResponse},
    error::{Error, Result},
    middleware::cors::{ALLOWED_HEADERS, ALLOWED_METHODS},
    AppState,
};

pub const SEARCH_TERM_REQUIRED: &str = "search_term is required";

#[utoipa::path(
    post,
    path = "/api/search_jobs",
    tag = "search",
    request_body = SearchQuery,
    responses(
        (status = 200, description = "Matching job postings", body = SearchResponse),
        (status = 400, description = "Missing search term, or a body that is not valid JSON (reported as a client error, not a 500)", body = ErrorBody),
        (status = 405, description = "Method not allowed", body = ErrorBody),
        (status = 500, description = "Search failed", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub async fn search_jobs(State(state): State<AppState>, body: Bytes) -> Result<impl IntoResponse> {
    let query = parse_query(&body)?;
    tracing::info!(
        search_term = %query.search_term,
        location = %query.location,
        "Starting job search"
    );

    let response = state.search_service.search(&query).await?;
    Ok((StatusCode::OK, Json(response)))
}

fn parse_query(body: &[u8]) -> Result<SearchQuery> {
    let raw: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        body
    };

    let query = serde_json::from_slice::<SearchQuery>(raw)
        .map_err(|e| Error::BadRequest(format!("Invalid request body: {}", e)))?
        .normalized();

    if query.validate().is_err() {
        return Err(Error::BadRequest(SEARCH_TERM_REQUIRED.to_string()));
    }
    Ok(query)
}

/// Answers a bare `OPTIONS`; real CORS preflights are handled by the CORS layer.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
            (header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
        ],
    )
}

pub async fn method_not_allowed() -> Error {
    Error::MethodNotAllowed
}
