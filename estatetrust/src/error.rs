use crate::{response, transport::TransportError};
use std::{error::Error as StdError, fmt};
use thiserror::Error as ThisError;

/// Message stored when a failure carries no text of its own.
pub const FALLBACK_MESSAGE: &str = "An unknown error occurred.";

/// Error that can occur while interacting with the EstateTrust API.
#[derive(Debug)]
pub enum Error<TStorageError> {
    /// Failed to send request.
    Transport(TransportError),
    /// Failed to decode the response body.
    Decode(serde_json::Error),
    /// Server returned an error.
    Response(response::Error),
    /// Failed to build the request URL.
    Url(url::ParseError),
    /// Failed to read or write storage.
    Storage(TStorageError),
}

impl<TStorageError: fmt::Display> Error<TStorageError> {
    /// Returns the human-readable message that is shown to the user.
    ///
    /// Server errors are surfaced verbatim; everything else is described by the error itself.
    pub fn message(&self) -> String {
        let message = match self {
            Self::Response(e) => e.message().to_owned(),
            Self::Transport(e) => e.to_string(),
            Self::Decode(e) => format!("invalid response from server: {}", e),
            Self::Url(e) => e.to_string(),
            Self::Storage(e) => e.to_string(),
        };
        if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_owned()
        } else {
            message
        }
    }

    /// Returns the HTTP status of a server error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.status()),
            _ => None,
        }
    }
}

impl<TStorageError> fmt::Display for Error<TStorageError> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(_) => f.write_str("failed to send request"),
            Self::Decode(_) => f.write_str("failed to decode response"),
            Self::Response(_) => f.write_str("server returned an error"),
            Self::Url(_) => f.write_str("failed to build request URL"),
            Self::Storage(_) => f.write_str("failed to read or write storage"),
        }
    }
}

impl<TStorageError: StdError + 'static> StdError for Error<TStorageError> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(match self {
            Self::Transport(e) => e,
            Self::Decode(e) => e,
            Self::Response(e) => e,
            Self::Url(e) => e,
            Self::Storage(e) => e,
        })
    }
}

impl<TStorageError> From<TransportError> for Error<TStorageError> {
    fn from(error: TransportError) -> Self {
        Self::Transport(error)
    }
}

impl<TStorageError> From<serde_json::Error> for Error<TStorageError> {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error)
    }
}

impl<TStorageError> From<response::Error> for Error<TStorageError> {
    fn from(error: response::Error) -> Self {
        Self::Response(error)
    }
}

impl<TStorageError> From<url::ParseError> for Error<TStorageError> {
    fn from(error: url::ParseError) -> Self {
        Self::Url(error)
    }
}

/// Error type for requests and server responses.
#[derive(Debug, ThisError)]
pub enum RequestResponseError {
    /// Failed to send request.
    #[error("failed to send request")]
    Transport(#[from] TransportError),
    /// Failed to decode the response body.
    #[error("failed to decode response")]
    Decode(#[from] serde_json::Error),
    /// Server returned an error.
    #[error("server returned an error")]
    Response(#[from] response::Error),
}

impl<TStorageError> From<RequestResponseError> for Error<TStorageError> {
    fn from(error: RequestResponseError) -> Self {
        match error {
            RequestResponseError::Transport(e) => Self::Transport(e),
            RequestResponseError::Decode(e) => Self::Decode(e),
            RequestResponseError::Response(e) => Self::Response(e),
        }
    }
}
