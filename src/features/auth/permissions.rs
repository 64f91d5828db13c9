//! Per-resource permission checks. A resource `R` grants an action when the
//! exact string `R.<action>` is in the permission set: no wildcards, no
//! hierarchy, case-sensitive. The backend names permissions this way.

use serde::Serialize;
use std::collections::BTreeSet;

/// Actions checked for every dashboard resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Create,
    Edit,
    Delete,
    View,
    Show,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Create,
        Action::Edit,
        Action::Delete,
        Action::View,
        Action::Show,
    ];

    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::View => "view",
            Action::Show => "show",
        }
    }

    /// Permission name for this action on `resource`.
    #[must_use]
    pub fn permission(self, resource: &str) -> String {
        format!("{resource}.{}", self.suffix())
    }
}

/// Exact-string membership test.
#[must_use]
pub fn has_permission(permissions: &BTreeSet<String>, permission: &str) -> bool {
    permissions.contains(permission)
}

/// Capabilities of the current user on one resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResourcePermissions {
    pub resource: String,
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_view: bool,
    pub can_show: bool,
}

impl ResourcePermissions {
    #[must_use]
    pub fn resolve(resource: &str, permissions: &BTreeSet<String>) -> Self {
        let can = |action: Action| has_permission(permissions, &action.permission(resource));

        Self {
            resource: resource.to_string(),
            can_create: can(Action::Create),
            can_edit: can(Action::Edit),
            can_delete: can(Action::Delete),
            can_view: can(Action::View),
            can_show: can(Action::Show),
        }
    }

    #[must_use]
    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::Create => self.can_create,
            Action::Edit => self.can_edit,
            Action::Delete => self.can_delete,
            Action::View => self.can_view,
            Action::Show => self.can_show,
        }
    }
}
