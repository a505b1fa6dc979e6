use std::{net::IpAddr, time::Duration};

use lettre::{
    message::{header::ContentType, Mailbox, Message},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
};
use log::*;

use crate::notifier::{DeliveryError, MailMessage, Mailer, SmtpConfig};

/// A [`Mailer`] that delivers through an SMTP relay.
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    timeout: Duration,
}

impl SmtpMailer {
    /// Builds the relay transport. No connection is made until the first message is sent.
    ///
    /// Credentials are never sent to a remote relay in the clear: when a login is configured and the relay is not on
    /// this machine, STARTTLS is required even if `require_tls` is off.
    pub fn new(config: &SmtpConfig) -> Result<Self, DeliveryError> {
        let tls_parameters =
            TlsParameters::new(config.host.clone()).map_err(|e| DeliveryError::Configuration(e.to_string()))?;
        let tls = if requires_tls(config) { Tls::Required(tls_parameters) } else { Tls::Opportunistic(tls_parameters) };
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(config.host.as_str())
            .port(config.port)
            .tls(tls)
            .timeout(Some(config.timeout));
        if config.has_credentials() {
            builder = builder.credentials(Credentials::new(config.user.clone(), config.password.reveal().clone()));
        } else {
            debug!("📧️ No SMTP user configured. Connecting to {}:{} without credentials", config.host, config.port);
        }
        Ok(Self { transport: builder.build(), timeout: config.timeout })
    }
}

fn requires_tls(config: &SmtpConfig) -> bool {
    if config.require_tls {
        return true;
    }
    let remote_login = config.has_credentials() && !is_loopback(&config.host);
    if remote_login {
        info!("📧️ {} is not a local relay. STARTTLS is required before logging in.", config.host);
    }
    remote_login
}

fn is_loopback(host: &str) -> bool {
    host.eq_ignore_ascii_case("localhost")
        || host.trim_start_matches('[').trim_end_matches(']').parse::<IpAddr>().is_ok_and(|ip| ip.is_loopback())
}

impl Mailer for SmtpMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), DeliveryError> {
        let email = build_email(message)?;
        trace!("📧️ Handing message for {} to the relay", message.to);
        match tokio::time::timeout(self.timeout, self.transport.send(email)).await {
            Ok(Ok(response)) => {
                debug!("📧️ Relay accepted message for {} ({})", message.to, response.code());
                Ok(())
            },
            Ok(Err(e)) => Err(DeliveryError::Relay(e.to_string())),
            Err(_) => Err(DeliveryError::Timeout(self.timeout)),
        }
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, DeliveryError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| DeliveryError::InvalidAddress { address: address.to_string(), reason: e.to_string() })
}

fn build_email(message: &MailMessage) -> Result<Message, DeliveryError> {
    Message::builder()
        .from(parse_mailbox(&message.from)?)
        .to(parse_mailbox(&message.to)?)
        .subject(message.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(message.body.clone())
        .map_err(|e| DeliveryError::MessageBuild(e.to_string()))
}
