//! News articles (`/api/news` for both the list and single records).

use crate::{
    app_lib::{ApiClient, AppError, ListParams, Page, Resource},
    features::cms::types::{News, NewsPayload},
};
use serde_json::Value;

pub const NEWS: Resource = Resource::new("/api/news", "/api/news", "news", "news");

/// # Errors
/// Returns the backend's message or "Failed to fetch news".
pub async fn list_news(api: &ApiClient, params: &ListParams) -> Result<Page<News>, AppError> {
    NEWS.list(api, params).await
}

/// Fetches one article. The response keeps the backend's shape.
///
/// # Errors
/// Returns the backend's message or "Failed to fetch news".
pub async fn get_news(api: &ApiClient, id: &str) -> Result<Value, AppError> {
    NEWS.get(api, id).await
}

/// # Errors
/// Returns the backend's message or "Failed to create news".
pub async fn create_news(api: &ApiClient, payload: &NewsPayload) -> Result<Value, AppError> {
    NEWS.create(api, payload).await
}

/// # Errors
/// Returns the backend's message or "Failed to update news".
pub async fn update_news(
    api: &ApiClient,
    id: &str,
    payload: &NewsPayload,
) -> Result<Value, AppError> {
    NEWS.update(api, id, payload).await
}

/// # Errors
/// Returns the backend's message or "Failed to delete the news".
pub async fn delete_news(api: &ApiClient, id: &str) -> Result<(), AppError> {
    NEWS.delete(api, id).await
}
