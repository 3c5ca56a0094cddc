use axum::http::{Method, Uri};
use service_core::error::AppError;

/// Unmatched paths, and matched paths called with an unsupported method.
pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    tracing::debug!(%method, %path, "Route not found");

    AppError::RouteNotFound {
        method: method.to_string(),
        path,
    }
}
