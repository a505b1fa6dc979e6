//! Cross-origin middleware for the coffee order server.
//! This middleware is placed on the whole app.
//!
//! Every response gets `Access-Control-Allow-Origin` and `Access-Control-Allow-Headers` headers. `OPTIONS` requests on
//! any path are preflight checks: they are answered immediately with an empty 200 response and never reach a route.

use std::{pin::Pin, rc::Rc};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::{
        header::{HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN},
        Method,
    },
    Error,
    HttpResponse,
};
use futures::{
    future::{ok, Ready},
    Future,
};
use log::trace;

#[derive(Clone)]
pub struct CorsMiddlewareFactory {
    allow_origin: HeaderValue,
    allow_headers: HeaderValue,
}

impl CorsMiddlewareFactory {
    /// Allow requests from any origin that send a `Content-Type` header.
    pub fn permissive() -> Self {
        CorsMiddlewareFactory {
            allow_origin: HeaderValue::from_static("*"),
            allow_headers: HeaderValue::from_static("Content-Type"),
        }
    }

    fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone());
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, self.allow_headers.clone());
    }
}

impl<S, B> Transform<S, ServiceRequest> for CorsMiddlewareFactory
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = CorsMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(CorsMiddlewareService { cors: self.clone(), service: Rc::new(service) })
    }
}

pub struct CorsMiddlewareService<S> {
    cors: CorsMiddlewareFactory,
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for CorsMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let cors = self.cors.clone();
        if req.method() == Method::OPTIONS {
            trace!("💻️ Answering preflight request for {}", req.path());
            let mut res = req.into_response(HttpResponse::Ok().finish());
            cors.apply(res.headers_mut());
            return Box::pin(async move { Ok(res.map_into_right_body()) });
        }
        let service = Rc::clone(&self.service);
        Box::pin(async move {
            let mut res = service.call(req).await?;
            cors.apply(res.headers_mut());
            Ok(res.map_into_left_body())
        })
    }
}
