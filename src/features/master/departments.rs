use crate::{
    app_lib::{ApiClient, AppError, ListParams, Page, Resource},
    features::master::types::{Department, DepartmentPayload},
};
use serde_json::Value;

pub const DEPARTMENTS: Resource =
    Resource::new("/api/departments", "/api/department", "department", "departments");

/// # Errors
/// Returns the backend's message or "Failed to fetch departments".
pub async fn list_departments(
    api: &ApiClient,
    params: &ListParams,
) -> Result<Page<Department>, AppError> {
    DEPARTMENTS.list(api, params).await
}

/// # Errors
/// Returns the backend's message or "Failed to create department".
pub async fn create_department(
    api: &ApiClient,
    payload: &DepartmentPayload,
) -> Result<Value, AppError> {
    DEPARTMENTS.create(api, payload).await
}

/// # Errors
/// Returns the backend's message or "Failed to update department".
pub async fn update_department(
    api: &ApiClient,
    id: &str,
    payload: &DepartmentPayload,
) -> Result<Value, AppError> {
    DEPARTMENTS.update(api, id, payload).await
}

/// # Errors
/// Returns the backend's message or "Failed to delete the department".
pub async fn delete_department(api: &ApiClient, id: &str) -> Result<(), AppError> {
    DEPARTMENTS.delete(api, id).await
}
