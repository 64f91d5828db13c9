//! Domain features of the dashboard: the auth bootstrap and guard plus one
//! client module per backend resource. Routes and the CLI call into these so
//! endpoint paths and failure messages live in one place.

pub mod auth;
pub mod cms;
pub mod content;
pub mod master;
pub mod menus;
pub mod permissions;
pub mod registrations;
pub mod roles;
pub mod users;
