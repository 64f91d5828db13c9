//! Persisted session material: the access token, its type and the signed-in
//! user. Every authenticated request reads the token from here, so clearing
//! the session immediately stops credentials from being sent.

pub mod store;

pub use store::{FileStore, MemoryStore, SessionStore};

use crate::{app_lib::AppError, features::auth::types::Profile};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tracing::warn;

pub const AUTH_TOKEN_KEY: &str = "auth_access_token";
pub const AUTH_TOKEN_TYPE_KEY: &str = "auth_token_type";
pub const AUTH_USER_KEY: &str = "auth_user";
pub const DEFAULT_TOKEN_TYPE: &str = "Bearer";

/// Handle over the session keys of a `SessionStore`. Cloning shares the store.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Session").finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Session backed by a `MemoryStore`.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Returns the stored token; an empty value counts as no token.
    ///
    /// # Errors
    /// Propagates storage failures.
    pub fn token(&self) -> Result<Option<SecretString>, AppError> {
        Ok(self
            .store
            .get(AUTH_TOKEN_KEY)?
            .filter(|token| !token.is_empty())
            .map(SecretString::from))
    }

    /// # Errors
    /// Propagates storage failures.
    pub fn has_token(&self) -> Result<bool, AppError> {
        Ok(self.token()?.is_some())
    }

    /// Returns the token type, `Bearer` when unset.
    ///
    /// # Errors
    /// Propagates storage failures.
    pub fn token_type(&self) -> Result<String, AppError> {
        Ok(self
            .store
            .get(AUTH_TOKEN_TYPE_KEY)?
            .filter(|token_type| !token_type.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TOKEN_TYPE.to_string()))
    }

    /// Returns the user recorded at sign-in. An unreadable record is treated
    /// as missing rather than failing the caller.
    ///
    /// # Errors
    /// Propagates storage failures.
    pub fn user(&self) -> Result<Option<Profile>, AppError> {
        let Some(raw) = self.store.get(AUTH_USER_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                warn!("ignoring unreadable stored user: {err}");
                Ok(None)
            }
        }
    }

    /// Value for the `Authorization` header, if a token is stored.
    ///
    /// # Errors
    /// Propagates storage failures.
    pub fn authorization(&self) -> Result<Option<SecretString>, AppError> {
        let Some(token) = self.token()? else {
            return Ok(None);
        };
        let token_type = self.token_type()?;

        Ok(Some(SecretString::from(format!(
            "{token_type} {}",
            token.expose_secret()
        ))))
    }

    /// Records a successful sign-in under the three session keys.
    ///
    /// # Errors
    /// Returns an error if the user cannot be encoded or storage fails.
    pub fn set_auth(
        &self,
        token: &SecretString,
        token_type: &str,
        user: &Profile,
    ) -> Result<(), AppError> {
        let token_type = if token_type.trim().is_empty() {
            DEFAULT_TOKEN_TYPE
        } else {
            token_type.trim()
        };
        let user = serde_json::to_string(user)
            .map_err(|err| AppError::Serialization(format!("Failed to encode user: {err}")))?;

        self.store.set(AUTH_TOKEN_KEY, token.expose_secret())?;
        self.store.set(AUTH_TOKEN_TYPE_KEY, token_type)?;
        self.store.set(AUTH_USER_KEY, &user)
    }

    /// Removes all three session keys. Every key is attempted even if an
    /// earlier removal fails; the first failure is returned.
    ///
    /// # Errors
    /// Returns the first storage failure.
    pub fn clear(&self) -> Result<(), AppError> {
        [AUTH_TOKEN_KEY, AUTH_TOKEN_TYPE_KEY, AUTH_USER_KEY]
            .into_iter()
            .map(|key| self.store.remove(key))
            .fold(Ok(()), |first, result| first.and(result))
    }
}
