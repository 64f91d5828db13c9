use serde::{Deserialize, Serialize};

pub use crate::features::auth::menu::MenuItem as Menu;

/// Menu create/update body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuPayload {
    pub name: String,
    pub icon: Option<String>,
    pub url: String,
    pub permission_name: Option<String>,
    pub parent_id: Option<String>,
    pub order: i64,
}
