//! # Order notifications
//!
//! Every order produces up to two emails: an [`Notice::OperatorNotice`] to the shop, and a
//! [`Notice::CustomerConfirmation`] to the customer when they left an address. Both go through the single
//! [`Notifier::notify`] call, which never fails: the result of each attempt is captured in a [`NotificationOutcome`]
//! so that one failed email cannot prevent the other, or the response to the customer.
//!
//! The actual delivery is delegated to a [`Mailer`]. [`SmtpMailer`] is the production implementation.
mod config;
mod errors;
mod mailer;
mod smtp;
mod templates;

use coffee_common::non_blank;
pub use config::SmtpConfig;
pub use errors::DeliveryError;
use log::*;
pub use mailer::{MailMessage, Mailer};
pub use smtp::SmtpMailer;
pub use templates::Notice;

use crate::db_types::Order;

/// The result of a single notification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    /// There was no recipient, so no attempt was made.
    Skipped,
    Sent,
    /// The attempt was made and failed, with the reason.
    Failed(String),
}

impl NotificationOutcome {
    pub fn attempted(&self) -> bool {
        !matches!(self, Self::Skipped)
    }

    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Sent)
    }

    pub fn error_detail(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason.as_str()),
            _ => None,
        }
    }
}

pub struct Notifier<M> {
    mailer: M,
    sender: String,
}

impl<M> Notifier<M> {
    /// Create a new notifier. `sender` is used as the `From` address of every message.
    pub fn new<S: Into<String>>(mailer: M, sender: S) -> Self {
        Self { mailer, sender: sender.into() }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }
}

impl<M: Mailer> Notifier<M> {
    /// Compose the given notice for the order and send it to `recipient`.
    ///
    /// A missing or blank recipient yields [`NotificationOutcome::Skipped`] without contacting the mailer.
    pub async fn notify(
        &self,
        recipient: Option<&str>,
        notice: Notice,
        order: &Order,
        item_name: &str,
    ) -> NotificationOutcome {
        let Some(to) = non_blank(recipient) else {
            debug!("📧️ No recipient for the {notice}. Skipping it.");
            return NotificationOutcome::Skipped;
        };
        let message = MailMessage::new(self.sender.as_str(), to, notice.subject(), notice.body(order, item_name));
        match self.mailer.send(&message).await {
            Ok(()) => {
                info!("📧️ Sent {notice} to {to}");
                NotificationOutcome::Sent
            },
            Err(e) => {
                warn!("📧️ Failed to send {notice} to {to}. {e}");
                NotificationOutcome::Failed(e.to_string())
            },
        }
    }
}
