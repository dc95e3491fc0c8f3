//! Error types for the OpenXBL client
//!
//! Every failure the library can produce is an [`XblError`]. Errors are
//! `Clone` so the outcome of the background profile fetch can be handed to
//! every caller that asks for it.

use crate::resource::HttpMethod;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XblError {
    /// A resource type, header, base URL or runtime was not set up correctly.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("HTTP method {0} is not supported")]
    UnsupportedOperation(HttpMethod),

    /// Network failure or non-success status. `status` is set for HTTP errors.
    #[error("Transport error: {message}")]
    Transport { status: Option<u16>, message: String },

    #[error("Failed to parse response: {0}")]
    Deserialization(String),

    /// The background profile fetch has not completed yet.
    #[error("Default profile is still being fetched")]
    PrefetchNotReady,

    /// The background profile fetch stopped without producing a result.
    #[error("Default profile fetch ended without a result")]
    PrefetchAborted,
}

impl XblError {
    pub(crate) fn transport(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Transport {
            status,
            message: message.into(),
        }
    }

    /// HTTP status of a failed request, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, XblError>;
