use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderFlowError {
    #[error("Invalid order. {0}")]
    InvalidOrder(#[from] serde_json::Error),
}
