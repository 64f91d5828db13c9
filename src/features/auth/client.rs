//! Client wrappers for the auth endpoints. Sign-in records the issued token in
//! the session; the profile fetch relies on the session header added by the
//! API helper.

use crate::{
    app_lib::{ApiClient, AppError},
    features::auth::types::{MeResponse, SignInRequest, SignInResponse},
};
use tracing::{debug, info};

/// Signs in and stores token, token type and user in the session.
///
/// # Errors
/// Returns the backend's message (or "Failed to sign in") on rejection, or a
/// storage error if the session cannot be written.
pub async fn sign_in(api: &ApiClient, request: &SignInRequest) -> Result<SignInResponse, AppError> {
    let response: SignInResponse = api
        .post_json("/api/auth/sign-in", request, "Failed to sign in")
        .await?;

    api.session()
        .set_auth(&response.access_token, &response.token_type, &response.user)?;

    info!(nim = %response.user.nim, "signed in");

    Ok(response)
}

/// Fetches the current user with roles, permissions and menus.
///
/// # Errors
/// Returns the backend's message (or "Failed to fetch profile") on rejection.
pub async fn fetch_me(api: &ApiClient) -> Result<MeResponse, AppError> {
    api.get_json("/api/auth/me", "Failed to fetch profile").await
}

/// Tells the backend to revoke the token. Failures are ignored: the local
/// session is dropped regardless.
pub async fn sign_out(api: &ApiClient) {
    if let Err(err) = api.post_empty("/api/auth/sign-out", "Failed to sign out").await {
        debug!("ignoring sign-out failure: {err}");
    }
}
