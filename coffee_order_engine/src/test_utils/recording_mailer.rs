use std::sync::{Arc, Mutex};

use crate::notifier::{DeliveryError, MailMessage, Mailer};

/// An in-memory [`Mailer`] that records every message it is asked to send.
///
/// Clones share the same record, so keep a clone around to inspect what a notifier sent.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    attempts: Arc<Mutex<Vec<MailMessage>>>,
    failure: Option<String>,
    failing_recipient: Option<String>,
}

impl RecordingMailer {
    /// A mailer whose relay rejects every message with the given reason.
    pub fn failing<S: Into<String>>(reason: S) -> Self {
        Self { failure: Some(reason.into()), ..Self::default() }
    }

    /// A mailer whose relay rejects messages for `recipient` only.
    pub fn failing_for<S1: Into<String>, S2: Into<String>>(recipient: S1, reason: S2) -> Self {
        Self { failure: Some(reason.into()), failing_recipient: Some(recipient.into()), ..Self::default() }
    }

    /// Every message handed to this mailer, whether or not delivery succeeded.
    pub fn attempts(&self) -> Vec<MailMessage> {
        self.attempts.lock().map(|m| m.clone()).unwrap_or_default()
    }

    /// The messages that were delivered.
    pub fn sent(&self) -> Vec<MailMessage> {
        self.attempts().into_iter().filter(|m| self.rejection_for(m).is_none()).collect()
    }

    fn rejection_for(&self, message: &MailMessage) -> Option<&str> {
        match (&self.failure, &self.failing_recipient) {
            (Some(reason), None) => Some(reason.as_str()),
            (Some(reason), Some(recipient)) if *recipient == message.to => Some(reason.as_str()),
            _ => None,
        }
    }
}

impl Mailer for RecordingMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), DeliveryError> {
        if let Ok(mut attempts) = self.attempts.lock() {
            attempts.push(message.clone());
        }
        match self.rejection_for(message) {
            Some(reason) => Err(DeliveryError::Relay(reason.to_string())),
            None => Ok(()),
        }
    }
}
