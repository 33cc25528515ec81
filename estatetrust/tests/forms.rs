use estatetrust::storage::MemoryStorage;
use estatetrust::store::Store;
use estatetrust::view::{
    self, AssetForm, BeneficiaryForm, CreateForm, LoginView, MonetaryForm, Route, SubmitError,
    ToastKind, TrusteeForm, Ui,
};
use estatetrust::lifecycle::AddStatus;
use reqwest::Method;
use serde_json::json;
use std::time::Instant;

mod common;

fn watch_form() -> AssetForm {
    AssetForm {
        name: "Watch".to_owned(),
        location: "Safe".to_owned(),
        will_to: "b1".to_owned(),
        note: "Gift".to_owned(),
    }
}

#[tokio::test]
async fn asset_form_submits_and_navigates() {
    let transport = common::MockTransport::new();
    transport.respond(200, json!({ "uuid_pk": "a1", "message": "asset created" }));
    let mut client = common::client(&transport, common::grantor_storage());
    let mut store = Store::default();
    let mut ui = Ui::new(AssetForm::ROUTE);
    let mut form = watch_form();

    let response = view::submit(&mut form, &mut ui, &mut store, &mut client, common::GRANTOR_ID)
        .await
        .unwrap();
    assert_eq!(response.uuid_pk.as_deref(), Some("a1"));

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].url.as_str(), common::url("assets/g1/create/asset"));
    assert_eq!(
        requests[0].body,
        Some(json!({ "name": "Watch", "location": "Safe", "note": "Gift", "will_to": "b1" }))
    );

    assert_eq!(ui.route(), &Route::Dashboard);
    assert_eq!(form, AssetForm::default());
    let toasts = ui.drain_toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Success);
    assert_eq!(toasts[0].title, "Asset Added");
    assert_eq!(store.assets.add_status(), AddStatus::Succeeded);
}

#[tokio::test]
async fn failed_submission_keeps_fields() {
    let transport = common::MockTransport::new();
    transport.respond(400, json!({ "detail": "Beneficiary does not exist" }));
    let mut client = common::client(&transport, common::grantor_storage());
    let mut store = Store::default();
    let mut ui = Ui::new(Route::AddPhysicalAsset);
    let mut form = watch_form();

    let error = view::submit(&mut form, &mut ui, &mut store, &mut client, common::GRANTOR_ID)
        .await
        .unwrap_err();
    assert!(matches!(error, SubmitError::Rejected(_)));
    assert_eq!(error.to_string(), "Beneficiary does not exist");
    assert_eq!(form, watch_form());
    assert_eq!(ui.route(), &Route::AddPhysicalAsset);
    let toasts = ui.drain_toasts();
    assert_eq!(toasts[0].kind, ToastKind::Error);
    assert_eq!(
        toasts[0].description,
        "An error occurred while adding the asset."
    );
    assert_eq!(store.assets.error(), Some("Beneficiary does not exist"));
}

#[tokio::test]
async fn invalid_form_issues_no_request() {
    let transport = common::MockTransport::new();
    let mut client = common::client(&transport, common::grantor_storage());
    let mut store = Store::default();
    let mut ui = Ui::new(Route::AddMonetaryAsset);
    let mut form = MonetaryForm {
        acc_name: "Savings".to_owned(),
        ..MonetaryForm::default()
    };

    let error = view::submit(&mut form, &mut ui, &mut store, &mut client, common::GRANTOR_ID)
        .await
        .unwrap_err();
    match error {
        SubmitError::Invalid(errors) => assert_eq!(errors.len(), 5),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(transport.request_count(), 0);
    assert_eq!(ui.toasts().count(), 0);
}

#[tokio::test]
async fn trustee_session_cannot_add() {
    let transport = common::MockTransport::new();
    let mut client = common::client(&transport, common::trustee_storage());
    let mut store = Store::default();
    let mut ui = Ui::new(Route::AddBeneficiary);
    let mut form = BeneficiaryForm {
        first_name: "Ada".to_owned(),
        relation: "daughter".to_owned(),
        ..BeneficiaryForm::default()
    };

    let error = view::submit(&mut form, &mut ui, &mut store, &mut client, "g1")
        .await
        .unwrap_err();
    assert!(matches!(error, SubmitError::NotPermitted));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn trustee_form_posts_draft() {
    let transport = common::MockTransport::new();
    transport.respond(200, json!({ "message": "trustee created" }));
    let mut client = common::client(&transport, common::grantor_storage());
    let mut store = Store::default();
    let mut ui = Ui::new(Route::AddTrustee);
    let mut form = TrusteeForm {
        first_name: "Tom".to_owned(),
        username: "tom".to_owned(),
        email: "tom@example.com".to_owned(),
        phone_number: "0456".to_owned(),
        password: "secret".to_owned(),
        relation: "Lawyer".to_owned(),
        ..TrusteeForm::default()
    };

    view::submit(&mut form, &mut ui, &mut store, &mut client, common::GRANTOR_ID)
        .await
        .unwrap();
    let request = transport.last_request();
    assert_eq!(request.url.as_str(), common::url("trustees/account/g1/create/trustee"));
    let body = request.body.unwrap();
    assert_eq!(body["relation"], "lawyer");
    assert_eq!(body["password"], "secret");
    assert_eq!(body["middle_name"], "");
    assert_eq!(ui.route(), &Route::Dashboard);
    assert_eq!(ui.drain_toasts()[0].title, "Trustee Added");
}

#[tokio::test]
async fn login_with_short_password_issues_no_request() {
    let transport = common::MockTransport::new();
    let mut client = common::client(&transport, MemoryStorage::default());
    let mut store = Store::default();
    let mut ui = Ui::new(Route::Login);
    let mut view = LoginView {
        username: "alice".to_owned(),
        password: "1234567".to_owned(),
        ..LoginView::default()
    };

    let error = view
        .submit(&mut ui, &mut store, &mut client, Instant::now())
        .await
        .unwrap_err();
    match error {
        SubmitError::Invalid(errors) => assert!(errors.get("password").is_some()),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(transport.request_count(), 0);
    assert_eq!(ui.route(), &Route::Login);
}
