//! Client helpers for menu records (`/api/menus`, `/api/menu/{id}`). Listed
//! menus are raw backend records; use `auth::menu::normalize` to build a tree.

use crate::{
    app_lib::{ApiClient, AppError, ListParams, Page, Resource},
    features::menus::types::{Menu, MenuPayload},
};
use serde_json::Value;

pub const MENUS: Resource = Resource::new("/api/menus", "/api/menu", "menu", "menus");

/// # Errors
/// Returns the backend's message or "Failed to fetch menus".
pub async fn list_menus(api: &ApiClient, params: &ListParams) -> Result<Page<Menu>, AppError> {
    MENUS.list(api, params).await
}

/// # Errors
/// Returns the backend's message or "Failed to create menu".
pub async fn create_menu(api: &ApiClient, payload: &MenuPayload) -> Result<Value, AppError> {
    MENUS.create(api, payload).await
}

/// # Errors
/// Returns the backend's message or "Failed to update menu".
pub async fn update_menu(
    api: &ApiClient,
    id: &str,
    payload: &MenuPayload,
) -> Result<Value, AppError> {
    MENUS.update(api, id, payload).await
}

/// # Errors
/// Returns the backend's message or "Failed to delete the menu".
pub async fn delete_menu(api: &ApiClient, id: &str) -> Result<(), AppError> {
    MENUS.delete(api, id).await
}
