use actix_web::{
    http::{header::HeaderMap, StatusCode},
    test,
    test::TestRequest,
    web::ServiceConfig,
    App,
};
use log::debug;

use crate::middleware::CorsMiddlewareFactory;

/// Sends a single request through an app built with `configure`, wrapped in the CORS middleware like the real server.
pub async fn send_request<F>(req: TestRequest, configure: F) -> (StatusCode, HeaderMap, String)
where F: FnOnce(&mut ServiceConfig) {
    let app = App::new().wrap(CorsMiddlewareFactory::permissive()).configure(configure);
    let service = test::init_service(app).await;
    debug!("Making request");
    let res = test::call_service(&service, req.to_request()).await;
    let status = res.status();
    let headers = res.headers().clone();
    let body = test::read_body(res).await;
    (status, headers, String::from_utf8_lossy(&body).into_owned())
}

pub fn assert_cors_headers(headers: &HeaderMap) {
    assert_eq!(headers.get("Access-Control-Allow-Origin").and_then(|v| v.to_str().ok()), Some("*"));
    assert_eq!(headers.get("Access-Control-Allow-Headers").and_then(|v| v.to_str().ok()), Some("Content-Type"));
}
