//! Shared client utilities: the JSON API helper, configuration, errors and
//! pagination. Centralizing these keeps request setup, the `Authorization`
//! header and error reduction identical across every feature client. None of
//! these helpers log token material.

pub mod api;
pub mod config;
pub mod errors;
pub mod pagination;
pub mod resource;

pub use api::ApiClient;
pub use config::AppConfig;
pub use errors::AppError;
pub use pagination::{ListParams, Page, PageMeta};
pub use resource::Resource;
