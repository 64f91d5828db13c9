//! Activities ("kegiatan") shown on the public landing page.

use crate::{
    app_lib::{ApiClient, AppError, ListParams, Page, Resource},
    features::cms::types::{Activity, ActivityPayload},
};
use serde_json::Value;

pub const ACTIVITIES: Resource =
    Resource::new("/api/activities", "/api/activity", "activity", "activities");

/// # Errors
/// Returns the backend's message or "Failed to fetch activities".
pub async fn list_activities(
    api: &ApiClient,
    params: &ListParams,
) -> Result<Page<Activity>, AppError> {
    ACTIVITIES.list(api, params).await
}

/// # Errors
/// Returns the backend's message or "Failed to create activity".
pub async fn create_activity(
    api: &ApiClient,
    payload: &ActivityPayload,
) -> Result<Value, AppError> {
    ACTIVITIES.create(api, payload).await
}

/// # Errors
/// Returns the backend's message or "Failed to update activity".
pub async fn update_activity(
    api: &ApiClient,
    id: &str,
    payload: &ActivityPayload,
) -> Result<Value, AppError> {
    ACTIVITIES.update(api, id, payload).await
}

/// # Errors
/// Returns the backend's message or "Failed to delete the activity".
pub async fn delete_activity(api: &ApiClient, id: &str) -> Result<(), AppError> {
    ACTIVITIES.delete(api, id).await
}
