//! Client helpers for the users endpoint. The backend returns every user in
//! one response; the list is wrapped in a single page for the table.

use crate::{
    app_lib::{pagination::DataEnvelope, ApiClient, AppError},
    features::users::types::{Pagination, User, UserList, UserRow},
};

const USERS_PER_PAGE: u64 = 10;

/// Fetches all users with derived display fields.
///
/// # Errors
/// Returns the backend's message or "Failed to fetch users".
pub async fn list_users(api: &ApiClient) -> Result<UserList, AppError> {
    let envelope: DataEnvelope<Vec<User>> =
        api.get_json("/api/users", "Failed to fetch users").await?;

    let users: Vec<UserRow> = envelope.data.into_iter().map(UserRow::from).collect();
    let total = users.len() as u64;

    Ok(UserList {
        users,
        pagination: Pagination {
            page: 1,
            per_page: USERS_PER_PAGE,
            total,
        },
    })
}
