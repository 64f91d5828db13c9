use crate::{
    app_lib::{ApiClient, AppError, ListParams, Page, Resource},
    features::cms::types::{Faq, FaqPayload},
};
use serde_json::Value;

pub const FAQS: Resource = Resource::new("/api/faqs", "/api/faq", "faq", "faqs");

/// # Errors
/// Returns the backend's message or "Failed to fetch faqs".
pub async fn list_faqs(api: &ApiClient, params: &ListParams) -> Result<Page<Faq>, AppError> {
    FAQS.list(api, params).await
}

/// # Errors
/// Returns the backend's message or "Failed to create faq".
pub async fn create_faq(api: &ApiClient, payload: &FaqPayload) -> Result<Value, AppError> {
    FAQS.create(api, payload).await
}

/// # Errors
/// Returns the backend's message or "Failed to update faq".
pub async fn update_faq(api: &ApiClient, id: &str, payload: &FaqPayload) -> Result<Value, AppError> {
    FAQS.update(api, id, payload).await
}

/// # Errors
/// Returns the backend's message or "Failed to delete the faq".
pub async fn delete_faq(api: &ApiClient, id: &str) -> Result<(), AppError> {
    FAQS.delete(api, id).await
}
