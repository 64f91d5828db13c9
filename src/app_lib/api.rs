//! HTTP helpers for the dashboard's JSON API with a consistent timeout and
//! error policy. Feature clients go through these helpers so every request
//! carries the session's `Authorization` header and every failure is reduced
//! to the backend's `message` or an operation-specific fallback.

use super::{
    config::{api_url, AppConfig},
    errors::AppError,
};
use crate::{session::Session, APP_USER_AGENT};
use reqwest::{header::AUTHORIZATION, Client, Method, RequestBuilder, Response};
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn, Instrument};

/// Maximum number of error message characters surfaced to callers.
const MAX_ERROR_CHARS: usize = 200;

/// JSON API client bound to one backend and one session.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Builds a client from config, sharing the given session.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the HTTP client cannot be constructed.
    pub fn new(config: &AppConfig, session: Session) -> Result<Self, AppError> {
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: config.server_url.clone(),
            session,
        })
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches JSON.
    ///
    /// # Errors
    /// Returns the mapped transport, HTTP or decode error.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> Result<T, AppError> {
        let request = self.request(Method::GET, path)?;
        let response = self.send(Method::GET, path, request).await?;
        handle_json_response(response, fallback).await
    }

    /// Fetches JSON with query parameters.
    ///
    /// # Errors
    /// Returns the mapped transport, HTTP or decode error.
    pub async fn get_json_with_query<Q: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
        fallback: &str,
    ) -> Result<T, AppError> {
        let request = self.request(Method::GET, path)?.query(query);
        let response = self.send(Method::GET, path, request).await?;
        handle_json_response(response, fallback).await
    }

    /// Posts JSON and parses a JSON response.
    ///
    /// # Errors
    /// Returns the mapped transport, HTTP or decode error.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, AppError> {
        let request = self.request(Method::POST, path)?.json(body);
        let response = self.send(Method::POST, path, request).await?;
        handle_json_response(response, fallback).await
    }

    /// Puts JSON and parses a JSON response.
    ///
    /// # Errors
    /// Returns the mapped transport, HTTP or decode error.
    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, AppError> {
        let request = self.request(Method::PUT, path)?.json(body);
        let response = self.send(Method::PUT, path, request).await?;
        handle_json_response(response, fallback).await
    }

    /// Posts an empty body and ignores the response body.
    ///
    /// # Errors
    /// Returns the mapped transport or HTTP error.
    pub async fn post_empty(&self, path: &str, fallback: &str) -> Result<(), AppError> {
        let request = self.request(Method::POST, path)?;
        let response = self.send(Method::POST, path, request).await?;
        handle_empty_response(response, fallback).await
    }

    /// Deletes a resource and ignores the response body.
    ///
    /// # Errors
    /// Returns the mapped transport or HTTP error.
    pub async fn delete(&self, path: &str, fallback: &str) -> Result<(), AppError> {
        let request = self.request(Method::DELETE, path)?;
        let response = self.send(Method::DELETE, path, request).await?;
        handle_empty_response(response, fallback).await
    }

    /// Starts a request with the JSON accept header and, when a token is
    /// stored, the session's `Authorization` header.
    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, AppError> {
        let url = api_url(&self.base_url, path);
        let mut builder = self
            .http
            .request(method, url)
            .header("Accept", "application/json");

        if let Some(authorization) = self.session.authorization()? {
            builder = builder.header(AUTHORIZATION, authorization.expose_secret());
        }

        Ok(builder)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Response, AppError> {
        let span = tracing::info_span!("api.request", http.method = %method, url = %path);
        let response = request
            .send()
            .instrument(span)
            .await
            .map_err(map_request_error)?;

        debug!(http.method = %method, url = %path, status = response.status().as_u16(), "api response");

        Ok(response)
    }
}

/// Maps transport errors into `AppError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        AppError::Serialization(format!("Failed to build request: {err}"))
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Parses JSON responses and surfaces HTTP errors with the backend message.
async fn handle_json_response<T: DeserializeOwned>(
    response: Response,
    fallback: &str,
) -> Result<T, AppError> {
    if response.status().is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response, fallback).await)
    }
}

async fn handle_empty_response(response: Response, fallback: &str) -> Result<(), AppError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(http_error(response, fallback).await)
    }
}

async fn http_error(response: Response, fallback: &str) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body, fallback);

    warn!(status, "api request failed: {message}");

    AppError::Http { status, message }
}

/// Picks the backend's `message` field, falling back to the caller's text.
pub(crate) fn error_message(body: &str, fallback: &str) -> String {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|message| !message.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| fallback.to_string());

    message.chars().take(MAX_ERROR_CHARS).collect()
}
