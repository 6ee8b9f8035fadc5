use std::collections::BTreeMap;

use axum::{
    http::{HeaderMap, Method, Uri},
    response::IntoResponse,
    Json,
};
use serde_json::json;

/// Smoke test for deployments: confirms the service answers and echoes what it saw.
#[axum::debug_handler]
pub async fn function_test(method: Method, uri: Uri, headers: HeaderMap) -> impl IntoResponse {
    tracing::info!(%method, %uri, "Function test called");

    let headers: BTreeMap<String, String> = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();

    Json(json!({
        "status": "success",
        "message": "Search service is working!",
        "version": env!("CARGO_PKG_VERSION"),
        "request": {
            "method": method.as_str(),
            "path": uri.path(),
            "headers": headers,
        }
    }))
}
