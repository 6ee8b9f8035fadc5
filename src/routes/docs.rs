use axum::Json;
use utoipa::OpenApi;

use crate::dto::search_dto::{ErrorBody, SearchQuery, SearchResponse};
use crate::models::job::Job;

#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::search::search_jobs),
    components(schemas(Job, SearchQuery, SearchResponse, ErrorBody)),
    tags((name = "search", description = "Job search"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
