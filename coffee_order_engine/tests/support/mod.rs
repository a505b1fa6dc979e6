use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use coffee_order_engine::{DeliveryError, JsonFileCatalog, JsonFileLedger, MailMessage, Mailer, Notifier, OrderFlowApi};
use log::*;
use tempfile::TempDir;

pub type TestApi = OrderFlowApi<JsonFileCatalog, JsonFileLedger, CountingMailer>;

pub fn prepare_test_env() {
    dotenvy::from_filename(".env.test").ok();
    let _ = env_logger::try_init();
    debug!("🚀️ Logging initialised");
}

/// Counts delivery attempts and accepts every message.
#[derive(Clone, Default)]
pub struct CountingMailer {
    count: Arc<AtomicUsize>,
}

impl CountingMailer {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl Mailer for CountingMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), DeliveryError> {
        trace!("📧️ Test mailer accepting message for {}", message.to);
        self.count.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        Ok(())
    }
}

pub fn setup() -> (TempDir, TestApi, CountingMailer) {
    prepare_test_env();
    let dir = tempfile::tempdir().expect("Error creating temporary directory");
    let catalog_path = dir.path().join("coffees.json");
    std::fs::write(&catalog_path, r#"[{"id":1,"name":"Latte"},{"id":2,"name":"Mocha"}]"#)
        .expect("Error writing catalog");
    let mailer = CountingMailer::default();
    let api = OrderFlowApi::new(
        JsonFileCatalog::new(catalog_path),
        JsonFileLedger::new(dir.path().join("orders.json")),
        Notifier::new(mailer.clone(), "shop@example.com"),
        "owner@example.com",
    );
    (dir, api, mailer)
}
