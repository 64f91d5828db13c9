//! Department work programs (`/api/prokers`, `/api/proker/{id}`).

use crate::{
    app_lib::{ApiClient, AppError, ListParams, Page, Resource},
    features::master::types::{Proker, ProkerPayload},
};
use serde_json::Value;

pub const PROKERS: Resource = Resource::new("/api/prokers", "/api/proker", "proker", "prokers");

/// # Errors
/// Returns the backend's message or "Failed to fetch prokers".
pub async fn list_prokers(api: &ApiClient, params: &ListParams) -> Result<Page<Proker>, AppError> {
    PROKERS.list(api, params).await
}

/// # Errors
/// Returns the backend's message or "Failed to create proker".
pub async fn create_proker(api: &ApiClient, payload: &ProkerPayload) -> Result<Value, AppError> {
    let mut payload = payload.clone();
    payload.action_link.get_or_insert_with(String::new);
    PROKERS.create(api, &payload).await
}

/// # Errors
/// Returns the backend's message or "Failed to update proker".
pub async fn update_proker(
    api: &ApiClient,
    id: &str,
    payload: &ProkerPayload,
) -> Result<Value, AppError> {
    PROKERS.update(api, id, payload).await
}

/// # Errors
/// Returns the backend's message or "Failed to delete the proker".
pub async fn delete_proker(api: &ApiClient, id: &str) -> Result<(), AppError> {
    PROKERS.delete(api, id).await
}
