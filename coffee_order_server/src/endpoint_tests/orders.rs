use actix_web::{http::StatusCode, test::TestRequest, web, web::ServiceConfig};
use coffee_order_engine::{
    db_types::Order,
    test_utils::prepare_env::{create_test_store, prepare_test_env, TestStore, TEST_CATALOG},
    DeliveryError,
    JsonFileCatalog,
    JsonFileLedger,
    Notifier,
    OrderFlowApi,
    OrderLedger,
};
use serde_json::json;

use super::{
    helpers::{assert_cors_headers, send_request},
    mocks::MockRelayMailer,
};
use crate::routes::OrderRoute;

const OPERATOR: &str = "owner@example.com";

fn configure(store: &TestStore, mailer: MockRelayMailer) -> impl FnOnce(&mut ServiceConfig) {
    let api = OrderFlowApi::new(
        store.catalog.clone(),
        store.ledger.clone(),
        Notifier::new(mailer, "shop@example.com"),
        OPERATOR,
    );
    move |cfg| {
        cfg.service(OrderRoute::<JsonFileCatalog, JsonFileLedger, MockRelayMailer>::new())
            .app_data(web::Data::new(api));
    }
}

fn post_order(body: &str) -> TestRequest {
    TestRequest::post().uri("/order").insert_header(("Content-Type", "application/json")).set_payload(body.to_string())
}

#[actix_web::test]
async fn order_with_email_notifies_both() {
    prepare_test_env();
    let store = create_test_store(TEST_CATALOG);
    let mut mailer = MockRelayMailer::new();
    mailer
        .expect_send()
        .withf(|m| m.to == OPERATOR && m.body == "Name: Ada\nCoffee: Latte\nNotes: oat\nCustomer Email: ada@example.com")
        .times(1)
        .returning(|_| Ok(()));
    mailer
        .expect_send()
        .withf(|m| m.to == "ada@example.com" && m.subject == "Your Coffee Order Confirmation")
        .times(1)
        .returning(|_| Ok(()));
    let body = r#"{"name":"Ada","coffeeId":1,"notes":"oat","email":"ada@example.com"}"#;
    let (status, headers, body) = send_request(post_order(body), configure(&store, mailer)).await;
    assert_eq!(status, StatusCode::OK);
    assert_cors_headers(&headers);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        body,
        json!({"status": "ok", "adminEmailSent": true, "customerEmailSent": true, "orderSaved": true})
    );
    let ledger = store.ledger.load().await.unwrap();
    assert_eq!(ledger, vec![Order::new("Ada", 1).with_notes("oat").with_email("ada@example.com")]);
}

#[actix_web::test]
async fn order_without_email_skips_confirmation() {
    prepare_test_env();
    let store = create_test_store(TEST_CATALOG);
    let mut mailer = MockRelayMailer::new();
    mailer.expect_send().withf(|m| m.to == OPERATOR).times(1).returning(|_| Ok(()));
    let (status, _, body) =
        send_request(post_order(r#"{"name":"Bob","coffeeId":2,"notes":""}"#), configure(&store, mailer)).await;
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["customerEmailSent"], json!(false));
    assert!(body.get("customerError").is_none());
    assert_eq!(body["adminEmailSent"], json!(true));
}

#[actix_web::test]
async fn unknown_item_is_reported_as_unknown() {
    prepare_test_env();
    let store = create_test_store(TEST_CATALOG);
    let mut mailer = MockRelayMailer::new();
    mailer.expect_send().withf(|m| m.body.contains("Coffee: Unknown")).times(1).returning(|_| Ok(()));
    let (status, _, _) =
        send_request(post_order(r#"{"name":"Bob","coffeeId":999,"notes":""}"#), configure(&store, mailer)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(store.ledger.load().await.unwrap()[0].coffee_id, 999);
}

#[actix_web::test]
async fn relay_failure_does_not_fail_the_request() {
    prepare_test_env();
    let store = create_test_store(TEST_CATALOG);
    let mut mailer = MockRelayMailer::new();
    mailer.expect_send().times(2).returning(|_| Err(DeliveryError::Relay("Connection refused".to_string())));
    let body = r#"{"name":"Ada","coffeeId":1,"notes":"","email":"ada@example.com"}"#;
    let (status, _, body) = send_request(post_order(body), configure(&store, mailer)).await;
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["adminEmailSent"], json!(false));
    assert_eq!(body["customerEmailSent"], json!(false));
    assert!(body["adminError"].as_str().unwrap().contains("Connection refused"));
    assert!(body["customerError"].as_str().unwrap().contains("Connection refused"));
    assert_eq!(body["orderSaved"], json!(true));
}

#[actix_web::test]
async fn malformed_order_is_rejected() {
    prepare_test_env();
    let store = create_test_store(TEST_CATALOG);
    for payload in ["", "{not json", r#"{"name":"Ada","coffeeId":"latte"}"#, r#"{"coffeeId":1}"#] {
        let mut mailer = MockRelayMailer::new();
        mailer.expect_send().never();
        let (status, headers, body) = send_request(post_order(payload), configure(&store, mailer)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
        assert_cors_headers(&headers);
        assert!(body.contains("Invalid order"));
    }
    assert!(!store.ledger.path().exists());
}

#[actix_web::test]
async fn ledger_failure_is_surfaced() {
    prepare_test_env();
    let store = create_test_store(TEST_CATALOG);
    let mut mailer = MockRelayMailer::new();
    mailer.expect_send().times(1).returning(|_| Ok(()));
    let ledger = JsonFileLedger::new(store.dir.path().join("missing_dir").join("orders.json"));
    let api = OrderFlowApi::new(store.catalog.clone(), ledger, Notifier::new(mailer, "shop@example.com"), OPERATOR);
    let configure = move |cfg: &mut ServiceConfig| {
        cfg.service(OrderRoute::<JsonFileCatalog, JsonFileLedger, MockRelayMailer>::new())
            .app_data(web::Data::new(api));
    };
    let (status, _, body) = send_request(post_order(r#"{"name":"Ada","coffeeId":1}"#), configure).await;
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["orderSaved"], json!(false));
    assert!(body["ledgerError"].as_str().is_some());
    assert_eq!(body["adminEmailSent"], json!(true));
}

#[actix_web::test]
async fn sequential_orders_are_recorded_in_order() {
    prepare_test_env();
    let store = create_test_store(TEST_CATALOG);
    for i in 0..5 {
        let mut mailer = MockRelayMailer::new();
        mailer.expect_send().times(1).returning(|_| Ok(()));
        let payload = format!(r#"{{"name":"customer-{i}","coffeeId":{i},"notes":"order {i}"}}"#);
        let (status, _, _) = send_request(post_order(&payload), configure(&store, mailer)).await;
        assert_eq!(status, StatusCode::OK);
    }
    let names = store.ledger.load().await.unwrap().into_iter().map(|o| o.name).collect::<Vec<_>>();
    assert_eq!(names, (0..5).map(|i| format!("customer-{i}")).collect::<Vec<_>>());
}
