//! Member registrations. Submitting is public; listing needs a session.

use crate::{
    app_lib::{ApiClient, AppError, ListParams, Page, Resource},
    features::registrations::types::{Registration, RegistrationPayload},
};
use serde_json::Value;

pub const REGISTRATIONS: Resource = Resource::new(
    "/api/registrations",
    "/api/registration",
    "registration",
    "registrations",
);

/// # Errors
/// Returns the backend's message or "Failed to create registration".
pub async fn create_registration(
    api: &ApiClient,
    payload: &RegistrationPayload,
) -> Result<Value, AppError> {
    REGISTRATIONS.create(api, payload).await
}

/// # Errors
/// Returns the backend's message or "Failed to fetch registrations".
pub async fn list_registrations(
    api: &ApiClient,
    params: &ListParams,
) -> Result<Page<Registration>, AppError> {
    REGISTRATIONS.list(api, params).await
}

/// # Errors
/// Returns the backend's message or "Failed to delete the registration".
pub async fn delete_registration(api: &ApiClient, id: &str) -> Result<(), AppError> {
    REGISTRATIONS.delete(api, id).await
}
