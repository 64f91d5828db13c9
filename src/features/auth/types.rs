//! Request and response types for the auth endpoints. Sign-in payloads carry
//! the password and the issued access token, so both are held as secrets and
//! neither appears in `Debug` output.

use super::menu::MenuItem;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The signed-in user as returned by sign-in and `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub nim: String,
    pub email: String,
    #[serde(default)]
    pub email_verified_at: Option<String>,
    #[serde(default)]
    pub jabatan_id: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub deleted_at: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Serialize)]
pub struct SignInRequest {
    pub nim: String,
    #[serde(serialize_with = "serialize_secret")]
    pub password: SecretString,
}

impl SignInRequest {
    pub fn new(nim: impl Into<String>, password: SecretString) -> Self {
        Self {
            nim: nim.into(),
            password,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SignInResponse {
    #[serde(default)]
    pub message: String,
    #[serde(deserialize_with = "deserialize_secret")]
    pub access_token: SecretString,
    #[serde(default)]
    pub token_type: String,
    pub user: Profile,
}

/// Everything the dashboard needs to decide what the user may see.
#[derive(Clone, Debug, Deserialize)]
pub struct MeResponse {
    pub user: Option<Profile>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub roles: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub permissions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub menus: Vec<MenuItem>,
}

fn serialize_secret<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

fn deserialize_secret<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SecretString, D::Error> {
    String::deserialize(deserializer).map(SecretString::from)
}

/// Accepts a missing, `null` or array value, yielding an empty vector for the first two.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sign_in_request_serializes_password_but_hides_it_from_debug() {
        let request = SignInRequest::new("2201001", SecretString::from("rahasia"));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"nim": "2201001", "password": "rahasia"}));
        assert!(!format!("{request:?}").contains("rahasia"));
    }

    #[test]
    fn me_response_tolerates_null_collections() {
        let me: MeResponse = serde_json::from_value(json!({
            "user": null,
            "roles": null,
            "menus": null
        }))
        .unwrap();
        assert!(me.user.is_none());
        assert!(me.roles.is_empty());
        assert!(me.permissions.is_empty());
        assert!(me.menus.is_empty());
    }

    #[test]
    fn sign_in_response_hides_token() {
        let response: SignInResponse = serde_json::from_value(json!({
            "message": "Login berhasil",
            "access_token": "1|abcdef",
            "token_type": "Bearer",
            "user": {
                "id": "u-1",
                "name": "Ayu",
                "nim": "2201001",
                "email": "ayu@hima.dev",
                "created_at": "",
                "updated_at": ""
            }
        }))
        .unwrap();
        assert_eq!(response.access_token.expose_secret(), "1|abcdef");
        assert!(!format!("{response:?}").contains("abcdef"));
    }
}
