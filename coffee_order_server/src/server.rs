use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use coffee_order_engine::{JsonFileCatalog, JsonFileLedger, Notifier, OrderFlowApi, SmtpMailer};
use log::info;

use crate::{
    config::ServerConfig,
    errors::ServerError,
    middleware::CorsMiddlewareFactory,
    routes::{health, CoffeesRoute, OrderRoute},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let mailer = SmtpMailer::new(&config.smtp).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = create_server_instance(config, mailer)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(config: ServerConfig, mailer: SmtpMailer) -> Result<Server, ServerError> {
    let sender = config
        .smtp
        .sender()
        .ok_or_else(|| ServerError::InitializeError("No sender address. Set SMTP_FROM or SMTP_USER.".to_string()))?
        .to_string();
    info!("📋️ Serving the catalog from {}", config.catalog_path.display());
    info!("📒️ Recording orders in {}", config.ledger_path.display());
    let catalog = JsonFileCatalog::new(&config.catalog_path);
    // One ledger for the whole server. Every worker gets a clone, and clones share the append lock.
    let ledger = JsonFileLedger::new(&config.ledger_path);
    let contact_email = config.contact_email.clone();
    let srv = HttpServer::new(move || {
        let notifier = Notifier::new(mailer.clone(), sender.as_str());
        let orders_api = OrderFlowApi::new(catalog.clone(), ledger.clone(), notifier, contact_email.as_str());
        App::new()
            .wrap(CorsMiddlewareFactory::permissive())
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("coffee::access_log"))
            .app_data(web::Data::new(orders_api))
            .app_data(web::Data::new(catalog.clone()))
            .service(health)
            .service(CoffeesRoute::<JsonFileCatalog>::new())
            .service(OrderRoute::<JsonFileCatalog, JsonFileLedger, SmtpMailer>::new())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
