use crate::{
    cli::{actions::print_json, globals::GlobalArgs},
    features::auth::{menu, types::SignInRequest, Navigation, RouteGuard},
    routes,
};
use anyhow::{Context, Result};
use secrecy::SecretString;
use serde_json::json;

#[derive(Debug)]
pub struct LoginArgs {
    pub globals: GlobalArgs,
    pub nim: String,
    pub password: SecretString,
}

#[derive(Debug)]
pub struct NavigateArgs {
    pub globals: GlobalArgs,
    pub path: String,
}

#[derive(Debug)]
pub struct CanArgs {
    pub globals: GlobalArgs,
    pub resource: String,
}

/// # Errors
/// Returns an error if the backend rejects the credentials or the session
/// cannot be written.
pub async fn login(args: LoginArgs) -> Result<()> {
    let auth = args.globals.auth_context()?;
    let request = SignInRequest::new(args.nim, args.password);

    let response = auth.sign_in(&request).await.context("sign-in failed")?;

    print_json(&json!({
        "message": response.message,
        "token_type": response.token_type,
        "user": response.user,
    }))
}

/// # Errors
/// Returns an error if the stored session cannot be cleared.
pub async fn logout(globals: &GlobalArgs) -> Result<()> {
    let auth = globals.auth_context()?;
    auth.sign_out().await.context("failed to clear the session")?;
    print_json(&json!({ "signed_out": true }))
}

/// # Errors
/// Returns an error if the profile cannot be loaded.
pub async fn whoami(globals: &GlobalArgs) -> Result<()> {
    let auth = globals.auth_context()?;
    auth.load_profile(false)
        .await
        .context("failed to load the profile")?;

    print_json(&json!({
        "authenticated": auth.is_authenticated()?,
        "state": auth.state(),
        "authorization": auth.snapshot(),
    }))
}

/// # Errors
/// Returns an error if the session cannot be read.
pub async fn navigate(args: NavigateArgs) -> Result<()> {
    let auth = args.globals.auth_context()?;
    let target = routes::follow(&args.path);

    let navigation = RouteGuard::new(&auth).before_each(&target).await;
    let location = navigation.location();

    let snapshot = auth.snapshot();
    let menu = (navigation == Navigation::Allow)
        .then(|| menu::find_by_url(&snapshot.menus, &target.path))
        .flatten();

    print_json(&json!({
        "requested": args.path,
        "target": target,
        "navigation": navigation,
        "location": location,
        "menu": menu,
    }))
}

/// # Errors
/// Returns an error if the profile cannot be loaded.
pub async fn can(args: CanArgs) -> Result<()> {
    let auth = args.globals.auth_context()?;
    auth.load_profile(false)
        .await
        .context("failed to load the profile")?;

    print_json(&auth.permissions_for(&args.resource))
}
