//! Master data: departments, their work programs ("proker") and key/value
//! enumerations used to populate dropdowns.

use crate::features::cms::types::flexible_bool;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub title: String,
    #[serde(default)]
    pub desc: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentPayload {
    pub icon: String,
    pub title: String,
    pub desc: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proker {
    pub id: String,
    #[serde(default)]
    pub departemen_id: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub action_link: Option<String>,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_active: bool,
}

/// Work program body. On update a missing `action_link` leaves the stored
/// link untouched; on create it is sent as an empty string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProkerPayload {
    pub departemen_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub title: String,
    pub desc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_link: Option<String>,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enumeration {
    #[serde(default)]
    pub id: Option<String>,
    pub key: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationPayload {
    pub key: String,
    pub value: String,
}
