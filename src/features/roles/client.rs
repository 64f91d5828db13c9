//! Client helpers for roles (`/api/roles`, `/api/role/{id}`).

use crate::{
    app_lib::{ApiClient, AppError, ListParams, Page, Resource},
    features::roles::types::{Role, RolePayload},
};
use serde_json::Value;

pub const ROLES: Resource = Resource::new("/api/roles", "/api/role", "role", "roles");

/// # Errors
/// Returns the backend's message or "Failed to fetch roles".
pub async fn list_roles(api: &ApiClient, params: &ListParams) -> Result<Page<Role>, AppError> {
    ROLES.list(api, params).await
}

/// # Errors
/// Returns the backend's message or "Failed to create role".
pub async fn create_role(api: &ApiClient, payload: &RolePayload) -> Result<Value, AppError> {
    ROLES.create(api, payload).await
}

/// # Errors
/// Returns the backend's message or "Failed to update role".
pub async fn update_role(
    api: &ApiClient,
    id: u64,
    payload: &RolePayload,
) -> Result<Value, AppError> {
    ROLES.update(api, id, payload).await
}

/// # Errors
/// Returns the backend's message or "Failed to delete the role".
pub async fn delete_role(api: &ApiClient, id: u64) -> Result<(), AppError> {
    ROLES.delete(api, id).await
}
