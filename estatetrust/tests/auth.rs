use estatetrust::storage::{MemoryStorage, Storage};
use estatetrust::store::Store;
use estatetrust::view::{self, Dashboard, LoginView, RegisterView, Route, Ui, ERROR_CLEAR_DELAY};
use estatetrust::AccountType;
use reqwest::Method;
use serde_json::json;
use std::time::{Duration, Instant};

mod common;

#[tokio::test]
async fn login_navigates_to_dashboard() {
    let transport = common::MockTransport::new();
    transport.respond(
        200,
        json!({ "access_token": "tok", "token_type": "bearer", "id": "g1" }),
    );
    let mut client = common::client(&transport, MemoryStorage::default());
    let mut store = Store::default();
    let mut ui = Ui::new(Route::Login);
    let mut view = LoginView {
        username: "alice".to_owned(),
        password: "password123".to_owned(),
        ..LoginView::default()
    };

    let session = view
        .submit(&mut ui, &mut store, &mut client, Instant::now())
        .await
        .unwrap();
    assert_eq!(session.id, "g1");
    assert_eq!(ui.route(), &Route::Dashboard);
    assert_eq!(client.storage().token().await.unwrap(), Some("tok".to_owned()));
    assert_eq!(
        client.storage().account_type().await.unwrap(),
        Some(AccountType::Grantor)
    );
    assert!(view.password.is_empty());
}

#[tokio::test]
async fn login_failure_banner_clears_after_delay() {
    let transport = common::MockTransport::new();
    transport.respond(401, json!({ "detail": "Invalid credentials" }));
    let mut client = common::client(&transport, MemoryStorage::default());
    let mut store = Store::default();
    let mut ui = Ui::new(Route::Login);
    let mut view = LoginView {
        username: "alice".to_owned(),
        password: "password123".to_owned(),
        ..LoginView::default()
    };

    let start = Instant::now();
    view.submit(&mut ui, &mut store, &mut client, start)
        .await
        .unwrap_err();
    assert_eq!(view.banner(&store), Some("Invalid credentials"));
    assert_eq!(ui.route(), &Route::Login);
    assert_eq!(view.error_banner.deadline(), Some(start + ERROR_CLEAR_DELAY));

    view.tick(&mut store, start + Duration::from_secs(3));
    view.tick(&mut store, start + Duration::from_secs(9));
    assert_eq!(view.banner(&store), Some("Invalid credentials"));
    assert_eq!(view.error_banner.deadline(), Some(start + ERROR_CLEAR_DELAY));

    view.tick(&mut store, start + ERROR_CLEAR_DELAY);
    assert_eq!(view.banner(&store), None);
    assert!(!view.error_banner.is_armed());
}

#[tokio::test]
async fn teardown_cancels_banner() {
    let transport = common::MockTransport::new();
    transport.respond(401, json!({ "detail": "Invalid credentials" }));
    let mut client = common::client(&transport, MemoryStorage::default());
    let mut store = Store::default();
    let mut ui = Ui::new(Route::Login);
    let mut view = LoginView {
        username: "alice".to_owned(),
        password: "password123".to_owned(),
        ..LoginView::default()
    };

    let start = Instant::now();
    view.submit(&mut ui, &mut store, &mut client, start)
        .await
        .unwrap_err();
    view.teardown();
    assert!(!view.error_banner.is_armed());
    assert_eq!(store.auth.error(), Some("Invalid credentials"));
}

#[tokio::test]
async fn failed_relogin_forgets_previous_session() {
    let transport = common::MockTransport::new();
    transport
        .respond(
            200,
            json!({ "access_token": common::TOKEN, "token_type": "bearer", "id": "g1" }),
        )
        .respond(401, json!({ "detail": "Invalid credentials" }));
    let mut client = common::client(&transport, MemoryStorage::default());
    let mut store = Store::default();
    let mut ui = Ui::new(Route::Login);
    let mut view = LoginView {
        username: "alice".to_owned(),
        password: "password123".to_owned(),
        ..LoginView::default()
    };
    view.submit(&mut ui, &mut store, &mut client, Instant::now())
        .await
        .unwrap();
    assert!(store.auth.session().is_some());

    view.password = "wrong-password".to_owned();
    view.submit(&mut ui, &mut store, &mut client, Instant::now())
        .await
        .unwrap_err();
    let storage = client.storage();
    assert_eq!(storage.token().await.unwrap(), None);
    assert_eq!(storage.session_id().await.unwrap(), None);
    assert_eq!(storage.account_type().await.unwrap(), None);
    assert_eq!(client.restore_session().await.unwrap(), None);
    assert!(store.auth.session().is_none());

    let mut dashboard = Dashboard::new();
    dashboard.mount(&mut store, &mut client).await.unwrap();
    assert_eq!(transport.request_count(), 2);
    assert!(dashboard.asset_rows(&store).is_empty());
}

#[tokio::test]
async fn register_navigates_to_login() {
    let transport = common::MockTransport::new();
    transport.respond(200, json!({ "message": "account created successfully" }));
    let mut client = common::client(&transport, MemoryStorage::default());
    let mut store = Store::default();
    let mut ui = Ui::new(Route::Register);
    let mut view = RegisterView {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        phone_number: "0123".to_owned(),
        date_of_birth: "1815-12-10".to_owned(),
        gender: "female".to_owned(),
        password: "analytical".to_owned(),
        ..RegisterView::default()
    };

    view.submit(&mut ui, &mut store, &mut client, Instant::now())
        .await
        .unwrap();
    let request = transport.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.url.as_str(), common::url("grantors/account/create"));
    let body = request.body.unwrap();
    assert_eq!(body["date_of_birth"], "1815-12-10");
    assert_eq!(body["gender"], "female");
    assert_eq!(ui.route(), &Route::Login);
    assert_eq!(ui.drain_toasts()[0].title, "Registration Successful");
    assert_eq!(store.registration.message(), Some("account created successfully"));
    assert_eq!(view, RegisterView::default());
}

#[tokio::test]
async fn register_failure_banner() {
    let transport = common::MockTransport::new();
    transport.respond(400, json!({ "detail": "Error creating account." }));
    let mut client = common::client(&transport, MemoryStorage::default());
    let mut store = Store::default();
    let mut ui = Ui::new(Route::Register);
    let mut view = RegisterView {
        first_name: "Ada".to_owned(),
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        phone_number: "0123".to_owned(),
        date_of_birth: "1815-12-10".to_owned(),
        gender: "female".to_owned(),
        password: "analytical".to_owned(),
        ..RegisterView::default()
    };

    let start = Instant::now();
    view.submit(&mut ui, &mut store, &mut client, start)
        .await
        .unwrap_err();
    assert_eq!(view.banner(&store), Some("Error creating account."));
    assert_eq!(view.first_name, "Ada");
    view.tick(&mut store, start + ERROR_CLEAR_DELAY);
    assert_eq!(view.banner(&store), None);
}

#[tokio::test]
async fn logout_returns_to_login() {
    let transport = common::MockTransport::new();
    let mut client = common::client(&transport, common::grantor_storage());
    let mut store = Store::default();
    let mut ui = Ui::new(Route::Dashboard);

    view::logout(&mut ui, &mut store, &mut client).await.unwrap();
    assert_eq!(ui.route(), &Route::Login);
    assert_eq!(client.storage().token().await.unwrap(), None);
    assert_eq!(client.storage().session_id().await.unwrap(), None);
}
