use thiserror::Error;

use crate::domain::ResolutionKey;

/// Errors raised by a [`VendorBackend`](crate::backend::VendorBackend) call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BackendError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            BackendError::Decode(error.to_string())
        } else {
            BackendError::Transport(error.to_string())
        }
    }
}

/// Errors surfaced to callers of
/// [`VendorProductResolver::resolve`](crate::resolver::VendorProductResolver::resolve).
///
/// Cloned to every caller coalesced onto the same resolution.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResolveError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("Creation response carried no vendor product id: {response}")]
    MissingVendorProductId { response: String },
    #[error("Resolution for {0} ended without an outcome")]
    Abandoned(ResolutionKey),
}

/// Errors raised while loading [`ResolverConfig`](crate::app_system::ResolverConfig).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
