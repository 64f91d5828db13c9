use crate::features::permissions::types::Permission;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub guard_name: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl Role {
    /// Names of the permissions granted to this role.
    #[must_use]
    pub fn permission_names(&self) -> Vec<&str> {
        self.permissions
            .iter()
            .map(|permission| permission.name.as_str())
            .collect()
    }
}

/// Role create/update body; `permissions` holds permission names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePayload {
    pub name: String,
    pub guard_name: String,
    pub permissions: Vec<String>,
}

impl From<&Role> for RolePayload {
    fn from(role: &Role) -> Self {
        Self {
            name: role.name.clone(),
            guard_name: role.guard_name.clone(),
            permissions: role
                .permission_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}
