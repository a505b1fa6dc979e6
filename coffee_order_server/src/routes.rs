//! Request handler definitions
//!
//! Define each route and it handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! A note about performance:
//! Since each worker thread processes its requests sequentially, handlers which block the current thread will cause the
//! current worker to stop processing new requests. Sending email and touching the ledger are both I/O, so every
//! handler here is async and awaits that work rather than blocking on it.
use actix_web::{get, web, HttpResponse, Responder};
use coffee_order_engine::{Mailer, OrderCatalog, OrderFlowApi, OrderLedger};
use log::*;

use crate::{data_objects::OrderResponse, errors::ServerError};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Catalog  ----------------------------------------------------
route!(coffees => Get "/coffees" impl OrderCatalog);
/// Route handler for the catalog endpoint
///
/// Returns the full catalog as a JSON array of `{"id": .., "name": ..}` objects. If the catalog cannot be read, a 500
/// error is returned.
pub async fn coffees<C: OrderCatalog>(catalog: web::Data<C>) -> Result<HttpResponse, ServerError> {
    trace!("💻️ Received catalog request");
    let items = catalog.fetch_catalog().await.map_err(|e| {
        error!("💻️ Could not fetch the catalog. {e}");
        ServerError::CatalogUnavailable(e.to_string())
    })?;
    Ok(HttpResponse::Ok().json(items))
}

//----------------------------------------------   Orders  ----------------------------------------------------
route!(order => Post "/order" impl OrderCatalog, OrderLedger, Mailer);
/// Route handler for new orders
///
/// The body is a JSON object: `{"name": "Ada", "coffeeId": 1, "notes": "oat milk", "email": "ada@example.com"}`.
/// `notes` and `email` are optional. The content type of the request is not checked.
///
/// A body that cannot be decoded results in a 400 response, and the order is neither recorded nor announced.
/// Otherwise the response is always 200 with `status: "ok"`, along with flags describing which emails went out, and
/// whether the order was saved. When something failed, the reason is given in `adminError`, `customerError` or
/// `ledgerError`. `customerEmailSent` is false and `customerError` is absent when no email address was given.
pub async fn order<C, L, M>(body: web::Bytes, api: web::Data<OrderFlowApi<C, L, M>>) -> Result<HttpResponse, ServerError>
where
    C: OrderCatalog,
    L: OrderLedger,
    M: Mailer,
{
    trace!("💻️ Received new order ({} bytes)", body.len());
    let result = api.submit_raw(&body).await.map_err(|e| {
        debug!("💻️ Could not decode order. {e}");
        ServerError::from(e)
    })?;
    Ok(HttpResponse::Ok().json(OrderResponse::from(result)))
}
