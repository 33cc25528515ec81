use estatetrust::storage::MemoryStorage;
use estatetrust::store::Store;
use estatetrust::view::{Dashboard, DeleteError, Route, RowKind, ToastKind, Ui};
use reqwest::Method;
use serde_json::json;

mod common;

fn profile() -> serde_json::Value {
    common::profile_json(
        vec![
            common::asset_json("a1", "Watch", "b1"),
            common::asset_json("a2", "Car", "b-gone"),
        ],
        vec![common::beneficiary_json("b1", "Ada", "Byron")],
        vec![common::trustee_json("T1", "tom")],
    )
}

#[tokio::test]
async fn mount_without_session_does_nothing() {
    let transport = common::MockTransport::new();
    let mut client = common::client(&transport, MemoryStorage::with_token("abc"));
    let mut store = Store::default();
    let mut dashboard = Dashboard::new();

    dashboard.mount(&mut store, &mut client).await.unwrap();
    assert_eq!(transport.request_count(), 0);
    assert!(dashboard.asset_rows(&store).is_empty());
    assert_eq!(store.profile.error(), None);
}

#[tokio::test]
async fn mount_fetches_profile_and_resolves_beneficiaries() {
    let transport = common::MockTransport::new();
    transport.respond(200, profile());
    let mut client = common::client(&transport, common::grantor_storage());
    let mut store = Store::default();
    let mut dashboard = Dashboard::new();

    dashboard.mount(&mut store, &mut client).await.unwrap();
    assert_eq!(
        transport.last_request().url.as_str(),
        common::url("grantors/account/dashboard/g1")
    );

    let assets = dashboard.asset_rows(&store);
    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].will_to, "Ada Byron");
    assert_eq!(assets[1].will_to, "b-gone");
    assert_eq!(dashboard.trustee_rows(&store)[0].name, "Tom Trust");
    assert_eq!(dashboard.beneficiary_rows(&store)[0].relation, "daughter");
    assert!(dashboard.monetary_rows(&store).is_empty());
    assert!(dashboard.can_delete());
}

#[tokio::test]
async fn trustee_cannot_delete_rows() {
    let transport = common::MockTransport::new();
    transport.respond(200, common::trustee_json("t1", "tom"));
    let mut client = common::client(&transport, common::trustee_storage());
    let mut store = Store::default();
    let mut ui = Ui::new(Route::Dashboard);
    let mut dashboard = Dashboard::new();

    dashboard.mount(&mut store, &mut client).await.unwrap();
    assert_eq!(
        transport.last_request().url.as_str(),
        common::url("trustees/account/trustee/t1/dashboard")
    );
    assert_eq!(store.profile.trustee().map(|v| v.username.as_str()), Some("tom"));
    assert!(!dashboard.can_delete());

    let error = dashboard
        .delete(&mut ui, &mut store, &mut client, RowKind::Trustee, "T1")
        .await
        .unwrap_err();
    assert!(matches!(error, DeleteError::Disabled));
    assert_eq!(transport.request_count(), 1);
    assert_eq!(ui.toasts().count(), 0);
}

#[tokio::test]
async fn delete_targets_row_then_refetches_profile() {
    let transport = common::MockTransport::new();
    transport
        .respond(200, profile())
        .respond_empty(204)
        .respond(
            200,
            common::profile_json(
                vec![common::asset_json("a1", "Watch", "b1")],
                vec![common::beneficiary_json("b1", "Ada", "Byron")],
                vec![common::trustee_json("T1", "tom")],
            ),
        );
    let mut client = common::client(&transport, common::grantor_storage());
    let mut store = Store::default();
    let mut ui = Ui::new(Route::Dashboard);
    let mut dashboard = Dashboard::new();
    dashboard.mount(&mut store, &mut client).await.unwrap();

    let row = dashboard.asset_rows(&store)[1].clone();
    dashboard
        .delete(&mut ui, &mut store, &mut client, RowKind::Asset, &row.id)
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[1].method, Method::DELETE);
    assert_eq!(requests[1].url.as_str(), common::url("assets/g1/assets/a2/delete"));
    assert_eq!(requests[2].method, Method::GET);
    assert_eq!(requests[2].url.as_str(), common::url("grantors/account/dashboard/g1"));

    let ids: Vec<_> = dashboard.asset_rows(&store).into_iter().map(|v| v.id).collect();
    assert_eq!(ids, vec!["a1"]);
    let toasts = ui.drain_toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Success);
    assert_eq!(toasts[0].title, "Asset Deleted");
}

#[tokio::test]
async fn delete_drops_row_when_refresh_fails() {
    let transport = common::MockTransport::new();
    transport
        .respond(200, profile())
        .respond_empty(204)
        .respond(500, json!({}));
    let mut client = common::client(&transport, common::grantor_storage());
    let mut store = Store::default();
    let mut ui = Ui::new(Route::Dashboard);
    let mut dashboard = Dashboard::new();
    dashboard.mount(&mut store, &mut client).await.unwrap();

    dashboard
        .delete(&mut ui, &mut store, &mut client, RowKind::Asset, "a1")
        .await
        .unwrap();

    assert_eq!(transport.request_count(), 3);
    let ids: Vec<_> = dashboard.asset_rows(&store).into_iter().map(|v| v.id).collect();
    assert_eq!(ids, vec!["a2"]);
    assert_eq!(
        store.profile.error(),
        Some("Request failed with status code 500")
    );
    let toasts = ui.drain_toasts();
    assert_eq!(toasts.len(), 2);
    assert_eq!(toasts[0].kind, ToastKind::Success);
    assert_eq!(toasts[0].title, "Asset Deleted");
    assert_eq!(toasts[1].kind, ToastKind::Error);
    assert_eq!(
        toasts[1].description,
        "An error occurred while refreshing the dashboard."
    );
}

#[tokio::test]
async fn failed_delete_shows_error_and_skips_refetch() {
    let transport = common::MockTransport::new();
    transport
        .respond(200, profile())
        .respond(403, json!({ "detail": "Access denied" }));
    let mut client = common::client(&transport, common::grantor_storage());
    let mut store = Store::default();
    let mut ui = Ui::new(Route::Dashboard);
    let mut dashboard = Dashboard::new();
    dashboard.mount(&mut store, &mut client).await.unwrap();

    let error = dashboard
        .delete(&mut ui, &mut store, &mut client, RowKind::Trustee, "T1")
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "Access denied");
    assert_eq!(
        transport.last_request().url.as_str(),
        common::url("trustees/account/g1/trustees/T1/delete")
    );
    assert_eq!(transport.request_count(), 2);
    assert_eq!(store.trustees.error(), Some("Access denied"));
    assert_eq!(ui.drain_toasts()[0].kind, ToastKind::Error);
    assert_eq!(dashboard.trustee_rows(&store).len(), 1);
}
