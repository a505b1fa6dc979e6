use std::{env, time::Duration};

use coffee_common::{non_blank, parse_boolean_flag, parse_duration_secs, Secret};
use log::*;

const DEFAULT_SMTP_HOST: &str = "localhost";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_SMTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection parameters for the SMTP relay.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    /// The account used to log in to the relay. Leave blank for relays that do not require authentication.
    pub user: String,
    pub password: Secret<String>,
    /// The `From` address of every email. Falls back to `user` when blank.
    pub from: String,
    /// Upper bound on a single delivery attempt, including connecting and authenticating.
    pub timeout: Duration,
    /// When true, refuse to send unless the relay supports STARTTLS. Otherwise TLS is used opportunistically.
    pub require_tls: bool,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SMTP_HOST.to_string(),
            port: DEFAULT_SMTP_PORT,
            user: String::default(),
            password: Secret::default(),
            from: String::default(),
            timeout: DEFAULT_SMTP_TIMEOUT,
            require_tls: false,
        }
    }
}

impl SmtpConfig {
    pub fn new_from_env_or_default() -> Self {
        let host = env::var("SMTP_HOST").unwrap_or_else(|_| {
            warn!("📧️ SMTP_HOST not set, using {DEFAULT_SMTP_HOST} as default");
            DEFAULT_SMTP_HOST.to_string()
        });
        let port = env::var("SMTP_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!("📧️ {s} is not a valid port for SMTP_PORT. {e} Using the default, {DEFAULT_SMTP_PORT}.");
                    DEFAULT_SMTP_PORT
                })
            })
            .unwrap_or(DEFAULT_SMTP_PORT);
        let user = env::var("SMTP_USER").unwrap_or_else(|_| {
            warn!("📧️ SMTP_USER is not set. The relay will be used without authentication.");
            String::default()
        });
        let password = Secret::new(env::var("SMTP_PASSWORD").unwrap_or_default());
        let from = env::var("SMTP_FROM").unwrap_or_default();
        let timeout = env::var("SMTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| {
                parse_duration_secs(&s)
                    .map_err(|e| warn!("📧️ {s} is not a valid value for SMTP_TIMEOUT_SECS. {e}"))
                    .ok()
            })
            .unwrap_or(DEFAULT_SMTP_TIMEOUT);
        let require_tls = parse_boolean_flag(env::var("SMTP_REQUIRE_TLS").ok(), false);
        let config = Self { host, port, user, password, from, timeout, require_tls };
        if config.sender().is_none() {
            error!("📧️ Neither SMTP_FROM nor SMTP_USER is set. Emails cannot be sent without a sender address.");
        }
        config
    }

    /// The address every email is sent from: `from` if set, otherwise the login `user`.
    pub fn sender(&self) -> Option<&str> {
        non_blank(Some(self.from.as_str())).or_else(|| non_blank(Some(self.user.as_str())))
    }

    /// True when a login is configured for the relay.
    pub fn has_credentials(&self) -> bool {
        non_blank(Some(self.user.as_str())).is_some()
    }
}
