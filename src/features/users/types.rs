use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRole {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub guard_name: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// User record as the backend lists it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub nim: String,
    #[serde(default)]
    pub jabatan_id: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub roles: Vec<UserRole>,
}

/// User with the display fields the users table expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserRow {
    #[serde(flatten)]
    pub user: User,
    pub fullname: String,
    pub username: String,
    pub role: String,
    pub active: bool,
}

impl From<User> for UserRow {
    fn from(user: User) -> Self {
        let role = user
            .roles
            .first()
            .map_or_else(|| "user".to_string(), |role| role.name.clone());

        Self {
            fullname: user.name.clone(),
            username: user.nim.clone(),
            role,
            active: true,
            user,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserList {
    pub users: Vec<UserRow>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn row_derives_display_fields() {
        let user: User = serde_json::from_value(json!({
            "id": "u-1",
            "name": "Budi Santoso",
            "email": "budi@hima.dev",
            "nim": "2201002",
            "roles": [
                {"id": 2, "name": "sekretaris", "guard_name": "web"},
                {"id": 3, "name": "anggota", "guard_name": "web"}
            ]
        }))
        .unwrap();

        let row = UserRow::from(user);
        assert_eq!(row.fullname, "Budi Santoso");
        assert_eq!(row.username, "2201002");
        assert_eq!(row.role, "sekretaris");
        assert!(row.active);
    }

    #[test]
    fn row_without_roles_defaults_to_user() {
        let user: User = serde_json::from_value(json!({
            "id": "u-2",
            "name": "Citra",
            "email": "citra@hima.dev",
            "nim": "2201003"
        }))
        .unwrap();

        assert_eq!(UserRow::from(user).role, "user");
    }
}
