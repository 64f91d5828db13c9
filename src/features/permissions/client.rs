//! Client helpers for permission records (`/api/permissions`, `/api/permission/{id}`).

use crate::{
    app_lib::{ApiClient, AppError, ListParams, Page, Resource},
    features::permissions::types::{Permission, PermissionPayload},
};
use serde_json::Value;

pub const PERMISSIONS: Resource =
    Resource::new("/api/permissions", "/api/permission", "permission", "permissions");

/// # Errors
/// Returns the backend's message or "Failed to fetch permissions".
pub async fn list_permissions(
    api: &ApiClient,
    params: &ListParams,
) -> Result<Page<Permission>, AppError> {
    PERMISSIONS.list(api, params).await
}

/// # Errors
/// Returns the backend's message or "Failed to create permission".
pub async fn create_permission(
    api: &ApiClient,
    payload: &PermissionPayload,
) -> Result<Value, AppError> {
    PERMISSIONS.create(api, payload).await
}

/// # Errors
/// Returns the backend's message or "Failed to update permission".
pub async fn update_permission(
    api: &ApiClient,
    id: u64,
    payload: &PermissionPayload,
) -> Result<Value, AppError> {
    PERMISSIONS.update(api, id, payload).await
}

/// # Errors
/// Returns the backend's message or "Failed to delete the permission".
pub async fn delete_permission(api: &ApiClient, id: u64) -> Result<(), AppError> {
    PERMISSIONS.delete(api, id).await
}
