use std::fmt::Display;

use crate::notifier::DeliveryError;

/// A plain-text email with a single recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailMessage {
    pub fn new<S1, S2, S3, S4>(from: S1, to: S2, subject: S3, body: S4) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
        S4: Into<String>,
    {
        Self { from: from.into(), to: to.into(), subject: subject.into(), body: body.into() }
    }
}

impl Display for MailMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "From: {}\nTo: {}\nSubject: {}\n\n{}", self.from, self.to, self.subject, self.body)
    }
}

/// The `Mailer` trait hands a fully composed message to a mail relay.
///
/// Implementations make exactly one delivery attempt per call. Retries, if wanted, are the caller's business.
#[allow(async_fn_in_trait)]
pub trait Mailer {
    async fn send(&self, message: &MailMessage) -> Result<(), DeliveryError>;
}
