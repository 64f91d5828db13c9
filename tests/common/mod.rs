#![allow(dead_code)]

use dasbor::{
    app_lib::AppConfig,
    features::auth::AuthContext,
    session::{
        store::{MemoryStore, SessionStore},
        AUTH_TOKEN_KEY, AUTH_TOKEN_TYPE_KEY, AUTH_USER_KEY,
    },
};
use dasbor::features::auth::types::SignInRequest;
use secrecy::SecretString;
use serde_json::{json, Value};
use std::{net::TcpListener, sync::Arc, time::Duration};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const TOKEN: &str = "1|plain-text-token";
pub const FRESH_TOKEN: &str = "2|fresh-token";

pub fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

pub fn profile_json() -> Value {
    json!({
        "id": "9b1deb4d-3b7d-4bad-9bdd-2b0d7b3dcb6d",
        "name": "Ayu Lestari",
        "nim": "2201010001",
        "email": "ayu@example.org",
        "email_verified_at": null,
        "jabatan_id": null,
        "avatar": null,
        "deleted_at": null,
        "created_at": "2024-01-01T00:00:00.000000Z",
        "updated_at": "2024-01-02T00:00:00.000000Z"
    })
}

pub fn me_json() -> Value {
    json!({
        "user": profile_json(),
        "roles": ["admin"],
        "permissions": ["news.view", "news.create", "users.view"],
        "menus": [
            {
                "id": "m-1",
                "icon": "home",
                "name": "Dashboard",
                "url": "/dashboard",
                "permission_name": null,
                "parent_id": null,
                "order": 1,
                "children": null
            },
            {
                "id": "m-2",
                "icon": "news",
                "name": "Konten",
                "url": "",
                "permission_name": "news.view",
                "parent_id": null,
                "order": 2,
                "children": [
                    {
                        "id": "m-3",
                        "icon": null,
                        "name": "Berita",
                        "url": "/dashboard/news",
                        "permission_name": "news.view",
                        "parent_id": "m-2",
                        "order": 1
                    }
                ]
            }
        ]
    })
}

/// Session with a stored token, as left behind by an earlier sign-in.
pub fn signed_in_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store.set(AUTH_TOKEN_KEY, TOKEN).expect("token");
    store.set(AUTH_TOKEN_TYPE_KEY, "Bearer").expect("token type");
    store
        .set(AUTH_USER_KEY, &profile_json().to_string())
        .expect("user");
    store
}

pub fn config(server: &MockServer) -> AppConfig {
    AppConfig::load()
        .with_server_url(&server.uri())
        .with_timeout(Duration::from_secs(5))
}

pub fn context(server: &MockServer, store: Arc<MemoryStore>) -> AuthContext {
    AuthContext::init(&config(server), store).expect("auth context")
}

pub fn session_is_empty(store: &MemoryStore) -> bool {
    [AUTH_TOKEN_KEY, AUTH_TOKEN_TYPE_KEY, AUTH_USER_KEY]
        .iter()
        .all(|key| store.get(key).expect("read").is_none())
}

/// Backend sign-in that hands out `FRESH_TOKEN`.
pub async fn mount_fresh_sign_in(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth/sign-in"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Signed in.",
            "access_token": FRESH_TOKEN,
            "token_type": "Bearer",
            "user": profile_json()
        })))
        .expect(1)
        .mount(server)
        .await;
}

pub fn sign_in_request() -> SignInRequest {
    SignInRequest::new("2201010001", SecretString::from("rahasia".to_string()))
}

pub fn stored_token(store: &MemoryStore) -> Option<String> {
    store.get(AUTH_TOKEN_KEY).expect("read")
}
