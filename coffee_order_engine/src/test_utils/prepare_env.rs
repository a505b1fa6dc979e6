use log::*;
use tempfile::TempDir;

use crate::{JsonFileCatalog, JsonFileLedger};

pub const TEST_CATALOG: &str =
    r#"[{"id":1,"name":"Latte"},{"id":2,"name":"Cappuccino"},{"id":3,"name":"Flat White"}]"#;

pub fn prepare_test_env() {
    dotenvy::from_filename(".env.test").ok();
    let _ = env_logger::try_init();
    debug!("🚀️ Logging initialised");
}

/// A catalog and an empty ledger living in a temporary directory. The directory is removed when this is dropped.
pub struct TestStore {
    pub dir: TempDir,
    pub catalog: JsonFileCatalog,
    pub ledger: JsonFileLedger,
}

pub fn create_test_store(catalog_json: &str) -> TestStore {
    let dir = tempfile::tempdir().expect("Error creating temporary directory");
    let catalog_path = dir.path().join("coffees.json");
    std::fs::write(&catalog_path, catalog_json).expect("Error writing test catalog");
    let catalog = JsonFileCatalog::new(catalog_path);
    let ledger = JsonFileLedger::new(dir.path().join("orders.json"));
    info!("🚀️ Created test store in {}", dir.path().display());
    TestStore { dir, catalog, ledger }
}
