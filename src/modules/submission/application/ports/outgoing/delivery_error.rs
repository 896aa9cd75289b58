// src/modules/submission/application/ports/outgoing/delivery_error.rs

use thiserror::Error;

use crate::shared::fetch::FetchError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// The destination answered but refused the payload.
    #[error("rejected: {0}")]
    Rejected(String),

    #[error("unreachable: {0}")]
    Unavailable(String),
}

impl From<FetchError> for DeliveryError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Http { status } if (400..500).contains(&status) => {
                DeliveryError::Rejected(err.to_string())
            }
            other => DeliveryError::Unavailable(other.to_string()),
        }
    }
}
