use std::{env, path::PathBuf};

use coffee_order_engine::SmtpConfig;
use log::*;

const DEFAULT_COFFEE_HOST: &str = "0.0.0.0";
const DEFAULT_COFFEE_PORT: u16 = 8080;
const DEFAULT_CATALOG_PATH: &str = "coffees.json";
const DEFAULT_LEDGER_PATH: &str = "orders.json";

/// Process-wide configuration. It is read once at startup and handed to the components that need it.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// The JSON file holding the list of items that can be ordered.
    pub catalog_path: PathBuf,
    /// The JSON file that every order is appended to.
    pub ledger_path: PathBuf,
    /// The shop's address. Every order is sent here.
    pub contact_email: String,
    pub smtp: SmtpConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_COFFEE_HOST.to_string(),
            port: DEFAULT_COFFEE_PORT,
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            ledger_path: PathBuf::from(DEFAULT_LEDGER_PATH),
            contact_email: String::default(),
            smtp: SmtpConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("COFFEE_HOST").ok().unwrap_or_else(|| DEFAULT_COFFEE_HOST.into());
        let port = env::var("COFFEE_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for COFFEE_PORT. {e} Using the default, {DEFAULT_COFFEE_PORT}, \
                         instead."
                    );
                    DEFAULT_COFFEE_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_COFFEE_PORT);
        let catalog_path = env::var("COFFEE_CATALOG_PATH").map(PathBuf::from).unwrap_or_else(|_| {
            info!("🪛️ COFFEE_CATALOG_PATH is not set. Using {DEFAULT_CATALOG_PATH}");
            PathBuf::from(DEFAULT_CATALOG_PATH)
        });
        let ledger_path = env::var("COFFEE_LEDGER_PATH").map(PathBuf::from).unwrap_or_else(|_| {
            info!("🪛️ COFFEE_LEDGER_PATH is not set. Using {DEFAULT_LEDGER_PATH}");
            PathBuf::from(DEFAULT_LEDGER_PATH)
        });
        let contact_email = env::var("CONTACT_EMAIL").ok().unwrap_or_else(|| {
            error!("🪛️ CONTACT_EMAIL is not set. Please set it to the address that should receive new orders.");
            String::default()
        });
        let smtp = SmtpConfig::new_from_env_or_default();
        Self { host, port, catalog_path, ledger_path, contact_email, smtp }
    }
}
