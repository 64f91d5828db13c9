use crate::{
    app_lib::{ApiClient, AppError, ListParams, Page, Resource},
    features::cms::types::{Benefit, BenefitPayload},
};
use serde_json::Value;

pub const BENEFITS: Resource =
    Resource::new("/api/benefits", "/api/benefit", "benefit", "benefits");

/// # Errors
/// Returns the backend's message or "Failed to fetch benefits".
pub async fn list_benefits(
    api: &ApiClient,
    params: &ListParams,
) -> Result<Page<Benefit>, AppError> {
    BENEFITS.list(api, params).await
}

/// # Errors
/// Returns the backend's message or "Failed to create benefit".
pub async fn create_benefit(api: &ApiClient, payload: &BenefitPayload) -> Result<Value, AppError> {
    BENEFITS.create(api, payload).await
}

/// # Errors
/// Returns the backend's message or "Failed to update benefit".
pub async fn update_benefit(
    api: &ApiClient,
    id: &str,
    payload: &BenefitPayload,
) -> Result<Value, AppError> {
    BENEFITS.update(api, id, payload).await
}

/// # Errors
/// Returns the backend's message or "Failed to delete the benefit".
pub async fn delete_benefit(api: &ApiClient, id: &str) -> Result<(), AppError> {
    BENEFITS.delete(api, id).await
}
