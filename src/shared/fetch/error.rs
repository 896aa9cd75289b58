// src/shared/fetch/error.rs

/// Failure of a single request issued by a [`JsonFetcher`](super::JsonFetcher).
///
/// Cloneable so one outcome can be handed to every caller sharing an
/// in-flight request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid JSON payload: {0}")]
    Decode(String),
}

impl FetchError {
    /// 404-class responses mean "nothing published here", not a transient fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Http { status: 404 | 410 })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status } => Some(*status),
            _ => None,
        }
    }
}
