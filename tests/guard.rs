mod common;

use anyhow::Result;
use common::{
    can_bind_localhost, context, me_json, mount_fresh_sign_in, session_is_empty, sign_in_request,
    signed_in_store, stored_token, FRESH_TOKEN, TOKEN,
};
use dasbor::{
    features::auth::{Navigation, RouteGuard},
    routes::{self, RouteName, RouteTarget},
    session::store::MemoryStore,
};
use serde_json::json;
use std::{sync::Arc, time::Duration};
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

async fn mount_me(server: &MockServer, status: u16, expected: u64) {
    let response = if status == 200 {
        ResponseTemplate::new(200).set_body_json(me_json())
    } else {
        ResponseTemplate::new(status).set_body_json(json!({ "message": "Unauthenticated." }))
    };
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(response)
        .expect(expected)
        .mount(server)
        .await;
}

#[tokio::test]
async fn protected_route_without_token_redirects_without_request() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_me(&server, 200, 0).await;

    let auth = context(&server, Arc::new(MemoryStore::new()));
    let target = routes::follow("/dashboard/users?page=2");
    let navigation = RouteGuard::new(&auth).before_each(&target).await;

    assert_eq!(
        navigation,
        Navigation::RedirectToLogin {
            redirect: "/dashboard/users?page=2".to_string()
        }
    );
    assert_eq!(
        navigation.location().as_deref(),
        Some("/auth/login?redirect=%2Fdashboard%2Fusers%3Fpage%3D2")
    );
    Ok(())
}

#[tokio::test]
async fn protected_route_with_valid_token_is_allowed() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_me(&server, 200, 1).await;

    let store = signed_in_store();
    let auth = context(&server, Arc::clone(&store));
    let navigation = RouteGuard::new(&auth)
        .before_each(&RouteTarget::named(RouteName::News))
        .await;

    assert_eq!(navigation, Navigation::Allow);
    assert!(auth.is_loaded());
    assert!(!session_is_empty(&store));
    Ok(())
}

#[tokio::test]
async fn protected_route_with_rejected_token_clears_session() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_me(&server, 401, 1).await;

    let store = signed_in_store();
    let auth = context(&server, Arc::clone(&store));
    let navigation = RouteGuard::new(&auth)
        .before_each(&RouteTarget::named(RouteName::Dashboard))
        .await;

    assert_eq!(
        navigation,
        Navigation::RedirectToLogin {
            redirect: "/dashboard".to_string()
        }
    );
    assert!(session_is_empty(&store));
    assert!(!auth.is_loaded());
    Ok(())
}

#[tokio::test]
async fn every_protected_visit_revalidates() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_me(&server, 200, 2).await;

    let auth = context(&server, signed_in_store());
    let guard = RouteGuard::new(&auth);
    assert_eq!(
        guard.before_each(&RouteTarget::named(RouteName::Users)).await,
        Navigation::Allow
    );
    assert_eq!(
        guard.before_each(&RouteTarget::named(RouteName::Roles)).await,
        Navigation::Allow
    );
    Ok(())
}

#[tokio::test]
async fn login_with_valid_token_goes_to_dashboard() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_me(&server, 200, 1).await;

    let auth = context(&server, signed_in_store());
    let navigation = RouteGuard::new(&auth)
        .before_each(&RouteTarget::named(RouteName::Login))
        .await;

    assert_eq!(navigation, Navigation::RedirectToDashboard);
    assert_eq!(navigation.location().as_deref(), Some("/dashboard"));
    Ok(())
}

#[tokio::test]
async fn login_with_rejected_token_shows_form_and_clears_session() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_me(&server, 403, 1).await;

    let store = signed_in_store();
    let auth = context(&server, Arc::clone(&store));
    let navigation = RouteGuard::new(&auth)
        .before_each(&routes::follow("/auth"))
        .await;

    assert_eq!(navigation, Navigation::Allow);
    assert!(session_is_empty(&store));
    Ok(())
}

#[tokio::test]
async fn public_routes_never_touch_the_backend() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_me(&server, 200, 0).await;

    let auth = context(&server, signed_in_store());
    let guard = RouteGuard::new(&auth);
    for name in [RouteName::Welcome, RouteName::Pengurus, RouteName::Pendaftaran, RouteName::NotFound] {
        assert_eq!(
            guard.before_each(&RouteTarget::named(name)).await,
            Navigation::Allow,
            "{name:?}"
        );
    }
    Ok(())
}

async fn mount_me_for(server: &MockServer, token: &str, delay: Duration) {
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("Authorization", format!("Bearer {token}").as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(me_json())
                .set_delay(delay),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn sign_in_during_guarded_navigation_keeps_new_session() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_me_for(&server, TOKEN, Duration::from_millis(400)).await;
    mount_me_for(&server, FRESH_TOKEN, Duration::ZERO).await;
    mount_fresh_sign_in(&server).await;

    let store = signed_in_store();
    let auth = Arc::new(context(&server, Arc::clone(&store)));
    let navigation = {
        let auth = Arc::clone(&auth);
        tokio::spawn(async move {
            RouteGuard::new(&auth)
                .before_each(&RouteTarget::named(RouteName::Dashboard))
                .await
        })
    };

    tokio::time::sleep(Duration::from_millis(100)).await;
    auth.sign_in(&sign_in_request()).await?;

    assert_eq!(navigation.await?, Navigation::Allow);
    assert_eq!(stored_token(&store).as_deref(), Some(FRESH_TOKEN));
    assert!(auth.is_loaded());
    Ok(())
}

#[tokio::test]
async fn invalidate_during_guarded_navigation_redirects_to_login() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_me_for(&server, TOKEN, Duration::from_millis(300)).await;

    let store = signed_in_store();
    let auth = Arc::new(context(&server, Arc::clone(&store)));
    let navigation = {
        let auth = Arc::clone(&auth);
        tokio::spawn(async move {
            RouteGuard::new(&auth)
                .before_each(&RouteTarget::named(RouteName::Users))
                .await
        })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    auth.invalidate()?;

    assert_eq!(
        navigation.await?,
        Navigation::RedirectToLogin {
            redirect: "/dashboard/users".to_string()
        }
    );
    assert!(session_is_empty(&store));
    assert!(!auth.is_loaded());
    Ok(())
}
