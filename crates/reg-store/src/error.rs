use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures against the local key-value slot store.
///
/// Always fatal to the enclosing operation: the local store is the
/// authority for success or failure of a mutation.
#[derive(Error, Debug)]
pub enum LocalStoreError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Record serialization failed: {source} {location}")]
    Serialization {
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for LocalStoreError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for LocalStoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type LocalResult<T> = std::result::Result<T, LocalStoreError>;

/// Failures against the remote document collection.
///
/// Never fatal to local success: callers log these and carry on, or
/// surface them as a secondary warning on the operation outcome.
#[derive(Error, Debug)]
pub enum RemoteStoreError {
    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
    },

    #[error("Permission denied by remote store (status {status}) {location}")]
    Permission { status: u16, location: ErrorLocation },

    #[error("Document not found: {id} {location}")]
    NotFound { id: String, location: ErrorLocation },

    #[error("Unexpected remote status {status}: {body} {location}")]
    UnexpectedStatus {
        status: u16,
        body: String,
        location: ErrorLocation,
    },

    #[error("Remote response decode failed: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl RemoteStoreError {
    #[track_caller]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for RemoteStoreError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Network {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type RemoteResult<T> = std::result::Result<T, RemoteStoreError>;
