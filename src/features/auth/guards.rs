//! Navigation guard. The decision of which check to run is a pure function of
//! the target and token presence (`plan`); `RouteGuard::before_each` then runs
//! the profile reload the plan asks for and clears the session when a stored
//! token turns out to be invalid. UX-only: the API still authorizes every call.

use crate::{
    app_lib::AppError,
    features::auth::state::AuthContext,
    routes::{self, RouteName, RouteTarget, DASHBOARD_PATH},
};
use serde::Serialize;
use tracing::{debug, warn};

const VERIFY_ATTEMPTS: usize = 3;

/// Outcome of a guarded navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Navigation {
    Allow,
    RedirectToLogin { redirect: String },
    RedirectToDashboard,
}

impl Navigation {
    /// Where the browser should go instead, if anywhere.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        match self {
            Navigation::Allow => None,
            Navigation::RedirectToLogin { redirect } => Some(routes::login_location(redirect)),
            Navigation::RedirectToDashboard => Some(DASHBOARD_PATH.to_string()),
        }
    }
}

/// Check required before a navigation may proceed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardPlan {
    Allow,
    /// Protected target without a token.
    RequireLogin { redirect: String },
    /// Protected target with a token: verify it, then allow.
    VerifyProtected { redirect: String },
    /// Login target with a token: verify it, then skip the login form.
    VerifyLoginVisit,
}

/// Picks the check for `target` given whether a token is stored.
#[must_use]
pub fn plan(target: &RouteTarget, has_token: bool) -> GuardPlan {
    if routes::is_protected(&target.path) {
        let redirect = target.full_path.clone();
        return if has_token {
            GuardPlan::VerifyProtected { redirect }
        } else {
            GuardPlan::RequireLogin { redirect }
        };
    }

    if target.name == Some(RouteName::Login) && has_token {
        return GuardPlan::VerifyLoginVisit;
    }

    GuardPlan::Allow
}

pub struct RouteGuard<'a> {
    auth: &'a AuthContext,
}

impl<'a> RouteGuard<'a> {
    #[must_use]
    pub fn new(auth: &'a AuthContext) -> Self {
        Self { auth }
    }

    /// Evaluates the guard for `target`.
    pub async fn before_each(&self, target: &RouteTarget) -> Navigation {
        let has_token = self.auth.is_authenticated().unwrap_or_else(|err| {
            warn!("session unreadable, treating as signed out: {err}");
            false
        });

        let decision = match plan(target, has_token) {
            GuardPlan::Allow => Navigation::Allow,
            GuardPlan::RequireLogin { redirect } => Navigation::RedirectToLogin { redirect },
            GuardPlan::VerifyProtected { redirect } => {
                if self.verify().await {
                    Navigation::Allow
                } else {
                    Navigation::RedirectToLogin { redirect }
                }
            }
            GuardPlan::VerifyLoginVisit => {
                if self.verify().await {
                    Navigation::RedirectToDashboard
                } else {
                    Navigation::Allow
                }
            }
        };

        debug!(path = %target.path, ?decision, "route guard");

        decision
    }

    /// Forces a profile reload; when the backend rejects the token the session
    /// is cleared before the caller is sent anywhere. A reload superseded by a
    /// sign-in or sign-out is retried against whatever session is now stored.
    async fn verify(&self) -> bool {
        for _ in 0..VERIFY_ATTEMPTS {
            match self.auth.load_profile(true).await {
                Ok(()) => return self.auth.is_authenticated().unwrap_or(false),
                Err(AppError::Cancelled(reason)) => {
                    debug!("profile reload superseded: {reason}");
                    if !self.auth.is_authenticated().unwrap_or(false) {
                        return false;
                    }
                }
                Err(err) => {
                    warn!("stored token rejected, clearing session: {err}");
                    if let Err(err) = self.auth.invalidate() {
                        warn!("failed to clear session: {err}");
                    }
                    return false;
                }
            }
        }
        false
    }
}
