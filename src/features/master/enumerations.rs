//! Key/value enumerations. Lookups filter by `key` and are not paginated.

use crate::{
    app_lib::{pagination::DataEnvelope, ApiClient, AppError, Resource},
    features::master::types::{Enumeration, EnumerationPayload},
};
use serde::Serialize;
use serde_json::Value;

pub const ENUMERATIONS: Resource = Resource::new(
    "/api/enumerations",
    "/api/enumeration",
    "enumeration",
    "enumerations",
);

#[derive(Serialize)]
struct KeyQuery<'a> {
    key: &'a str,
}

/// Fetches the values registered under `key`.
///
/// # Errors
/// Returns the backend's message or "Failed to fetch enumerations".
pub async fn get_enumeration(api: &ApiClient, key: &str) -> Result<Vec<Enumeration>, AppError> {
    let envelope: DataEnvelope<Vec<Enumeration>> = api
        .get_json_with_query(
            ENUMERATIONS.collection,
            &KeyQuery { key },
            "Failed to fetch enumerations",
        )
        .await?;
    Ok(envelope.data)
}

/// # Errors
/// Returns the backend's message or "Failed to create enumeration".
pub async fn create_enumeration(
    api: &ApiClient,
    payload: &EnumerationPayload,
) -> Result<Value, AppError> {
    ENUMERATIONS.create(api, payload).await
}

/// # Errors
/// Returns the backend's message or "Failed to update enumeration".
pub async fn update_enumeration(
    api: &ApiClient,
    id: &str,
    payload: &EnumerationPayload,
) -> Result<Value, AppError> {
    ENUMERATIONS.update(api, id, payload).await
}

/// # Errors
/// Returns the backend's message or "Failed to delete the enumeration".
pub async fn delete_enumeration(api: &ApiClient, id: &str) -> Result<(), AppError> {
    ENUMERATIONS.delete(api, id).await
}
