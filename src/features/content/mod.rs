//! Public landing-page content. No session is required.

use crate::app_lib::{ApiClient, AppError};
use serde_json::Value;

/// Fetches the activities published on the landing page.
///
/// # Errors
/// Returns the backend's message or "Failed to fetch activities".
pub async fn get_content_activities(api: &ApiClient) -> Result<Value, AppError> {
    api.get_json("/api/content/activities", "Failed to fetch activities")
        .await
}
