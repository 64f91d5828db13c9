//! Auth feature: sign-in/sign-out, the profile bootstrap that yields roles,
//! permissions and the menu tree, per-resource permission checks and the
//! navigation guard. This module handles the access token and must never log
//! it.
//!
//! Flow overview: sign-in stores the token in the session. Before a protected
//! navigation the guard forces a profile reload; if the backend refuses the
//! token the session is invalidated and the user is sent to the login form
//! with the requested path as `redirect`.

pub mod client;
pub mod guards;
pub mod menu;
pub mod permissions;
pub mod state;
pub mod types;

pub use guards::{Navigation, RouteGuard};
pub use state::{AuthContext, AuthorizationSnapshot, BootstrapState};
