use actix_web::{http::StatusCode, test::TestRequest, web, web::ServiceConfig};
use coffee_order_engine::{
    test_utils::prepare_env::{create_test_store, prepare_test_env, TEST_CATALOG},
    JsonFileCatalog,
};

use super::helpers::{assert_cors_headers, send_request};
use crate::routes::{health, CoffeesRoute};

fn configure(catalog: JsonFileCatalog) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        cfg.service(health).service(CoffeesRoute::<JsonFileCatalog>::new()).app_data(web::Data::new(catalog));
    }
}

#[actix_web::test]
async fn fetch_coffees() {
    prepare_test_env();
    let store = create_test_store(TEST_CATALOG);
    let (status, headers, body) =
        send_request(TestRequest::get().uri("/coffees"), configure(store.catalog.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_cors_headers(&headers);
    let body: serde_json::Value = serde_json::from_str(&body).expect("body should be JSON");
    assert_eq!(body, serde_json::from_str::<serde_json::Value>(TEST_CATALOG).unwrap());
}

#[actix_web::test]
async fn missing_catalog_is_a_server_error() {
    prepare_test_env();
    let store = create_test_store(TEST_CATALOG);
    let catalog = JsonFileCatalog::new(store.dir.path().join("missing.json"));
    let (status, headers, body) = send_request(TestRequest::get().uri("/coffees"), configure(catalog)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors_headers(&headers);
    assert!(body.contains("Could not read coffees"));
}

#[actix_web::test]
async fn health_check() {
    prepare_test_env();
    let store = create_test_store(TEST_CATALOG);
    let (status, _, _) = send_request(TestRequest::get().uri("/health"), configure(store.catalog.clone())).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn preflight_on_any_path() {
    prepare_test_env();
    let store = create_test_store(TEST_CATALOG);
    for path in ["/coffees", "/order", "/not/a/route"] {
        let req = TestRequest::default().method(actix_web::http::Method::OPTIONS).uri(path);
        let (status, headers, body) = send_request(req, configure(store.catalog.clone())).await;
        assert_eq!(status, StatusCode::OK, "preflight for {path}");
        assert_cors_headers(&headers);
        assert!(body.is_empty());
    }
}
