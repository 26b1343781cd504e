use thiserror::Error;

/// Error type that captures the failures the trip core can surface.
///
/// Remote-store failures are normally absorbed by the persistence gateway
/// and never reach callers; the variants here cover the local fallback path
/// and the one user-facing outcome, an unknown join code.
#[derive(Debug, Error)]
pub enum TripError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Remote(#[from] mongodb::error::Error),
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
    #[error("Trip \"{0}\" not found")]
    TripNotFound(String),
}

pub type Result<T> = std::result::Result<T, TripError>;
