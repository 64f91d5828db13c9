//! # Dasbor (administrative dashboard client)
//!
//! `dasbor` is the client side of an organisation's administrative dashboard.
//! It keeps an access token in durable session storage, resolves the signed-in
//! user's roles, permissions and menu tree from the backend, and gates
//! navigation to the `/dashboard` area on that state.
//!
//! ## Session bootstrap
//!
//! [`features::auth::AuthContext`] owns the session and the API client. Its
//! `load_profile` call is idempotent once loaded and single-flight while a
//! fetch is running: overlapping callers share one `GET /api/auth/me`.
//! Without a stored token nothing is sent and the authorization is empty.
//!
//! ## Route guard
//!
//! [`features::auth::RouteGuard`] runs before every navigation. Protected
//! targets without a token go to the login form with the requested path as
//! `redirect`; with a token the profile is re-validated first and a rejected
//! token clears the whole session. The guard is a UX layer only: the backend
//! authorizes every request on its own.
//!
//! ## Resources
//!
//! CRUD clients for users, roles, permissions, menus, news, activities,
//! benefits, departments, work programs, FAQs, enumerations and registrations
//! live under [`features`]. Lists are paginated with [`app_lib::ListParams`]
//! and reshaped into [`app_lib::Page`].

pub mod app_lib;
pub mod cli;
pub mod features;
pub mod routes;
pub mod session;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
