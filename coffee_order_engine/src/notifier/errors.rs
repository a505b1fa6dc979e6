use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum DeliveryError {
    #[error("Invalid mail relay configuration. {0}")]
    Configuration(String),
    #[error("'{address}' is not a valid email address. {reason}")]
    InvalidAddress { address: String, reason: String },
    #[error("Could not build the email message. {0}")]
    MessageBuild(String),
    #[error("The mail relay did not accept the message. {0}")]
    Relay(String),
    #[error("The mail relay did not respond within {0:?}")]
    Timeout(Duration),
}
