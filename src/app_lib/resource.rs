//! CRUD plumbing shared by the dashboard's resources. The backend lists a
//! resource on its plural path and mutates single records on the singular
//! path (`GET /api/faqs`, `PUT /api/faq/{id}`).

use super::{
    api::ApiClient,
    errors::AppError,
    pagination::{Envelope, ListParams, Page},
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resource {
    /// Plural path used for listing.
    pub collection: &'static str,
    /// Singular path used for single-record operations.
    pub member: &'static str,
    /// Noun used in failure messages.
    pub noun: &'static str,
    pub plural: &'static str,
}

impl Resource {
    #[must_use]
    pub const fn new(
        collection: &'static str,
        member: &'static str,
        noun: &'static str,
        plural: &'static str,
    ) -> Self {
        Self {
            collection,
            member,
            noun,
            plural,
        }
    }

    /// Path of one record. The id must be a single plain path segment; blank
    /// ids and ids that would escape the segment are rejected before anything
    /// is sent.
    ///
    /// # Errors
    /// Returns `AppError::Config` for a blank or malformed id.
    pub fn member_path(&self, id: impl Display) -> Result<String, AppError> {
        let id = id.to_string();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(AppError::Config(format!("{} id is required.", self.noun)));
        }
        if !is_path_segment(trimmed) {
            return Err(AppError::Config(format!(
                "{} id {trimmed:?} is not a valid identifier.",
                self.noun
            )));
        }
        Ok(format!("{}/{trimmed}", self.member))
    }

    /// Lists one page.
    ///
    /// # Errors
    /// Returns the backend's message or "Failed to fetch <plural>".
    pub async fn list<T: DeserializeOwned>(
        &self,
        api: &ApiClient,
        params: &ListParams,
    ) -> Result<Page<T>, AppError> {
        let fallback = format!("Failed to fetch {}", self.plural);
        let envelope: Envelope<T> = api
            .get_json_with_query(self.collection, &params.query(), &fallback)
            .await?;
        Ok(envelope.into())
    }

    /// Fetches one record.
    ///
    /// # Errors
    /// Returns the backend's message or "Failed to fetch <noun>".
    pub async fn get<T: DeserializeOwned>(
        &self,
        api: &ApiClient,
        id: impl Display,
    ) -> Result<T, AppError> {
        let path = self.member_path(id)?;
        api.get_json(&path, &format!("Failed to fetch {}", self.noun))
            .await
    }

    /// # Errors
    /// Returns the backend's message or "Failed to create <noun>".
    pub async fn create<B: Serialize + ?Sized>(
        &self,
        api: &ApiClient,
        body: &B,
    ) -> Result<Value, AppError> {
        api.post_json(self.member, body, &format!("Failed to create {}", self.noun))
            .await
    }

    /// # Errors
    /// Returns the backend's message or "Failed to update <noun>".
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        api: &ApiClient,
        id: impl Display,
        body: &B,
    ) -> Result<Value, AppError> {
        let path = self.member_path(id)?;
        api.put_json(&path, body, &format!("Failed to update {}", self.noun))
            .await
    }

    /// # Errors
    /// Returns the backend's message or "Failed to delete the <noun>".
    pub async fn delete(&self, api: &ApiClient, id: impl Display) -> Result<(), AppError> {
        let path = self.member_path(id)?;
        api.delete(&path, &format!("Failed to delete the {}", self.noun))
            .await
    }
}

// Unreserved URL characters only, and never a dot segment.
fn is_path_segment(id: &str) -> bool {
    id != "."
        && id != ".."
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}
