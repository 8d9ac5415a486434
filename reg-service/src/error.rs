use reg_auth::AuthError;
use reg_config::ConfigError;
use reg_core::FieldError;
use reg_store::{LocalStoreError, RemoteStoreError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// One or more form fields failed validation. Recoverable;
    /// blocks submission until fixed.
    #[error("Validation failed for {} field(s) {location}", .errors.len())]
    Validation {
        errors: Vec<FieldError>,
        location: ErrorLocation,
    },

    #[error("Record not found: {id} {location}")]
    NotFound { id: String, location: ErrorLocation },

    #[error("Email already registered: {email} {location}")]
    AlreadyExists {
        email: String,
        location: ErrorLocation,
    },

    /// Refusal to delete the record belonging to the signed-in
    /// session. No state changes.
    #[error("Cannot delete the account you are signed in with ({email}) {location}")]
    SelfDeleteForbidden {
        email: String,
        location: ErrorLocation,
    },

    /// Local persistence failed. Always fatal to the operation.
    #[error("Local store error: {source} {location}")]
    Local {
        #[source]
        source: LocalStoreError,
        location: ErrorLocation,
    },

    /// Remote failure on a flow that has nothing local to fall back
    /// on (the directory listing). Mutations never raise this.
    #[error("Remote store error: {source} {location}")]
    Remote {
        #[source]
        source: RemoteStoreError,
        location: ErrorLocation,
    },

    #[error("Auth error: {source} {location}")]
    Auth {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    #[error("Config error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("Logger initialization failed: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation {
            errors,
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
    pub fn already_exists(email: impl Into<String>) -> Self {
        Self::AlreadyExists {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn self_delete_forbidden(email: impl Into<String>) -> Self {
        Self::SelfDeleteForbidden {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The failing fields when this is a validation error.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation { errors, .. } => errors,
            _ => &[],
        }
    }
}

impl From<LocalStoreError> for ServiceError {
    #[track_caller]
    fn from(source: LocalStoreError) -> Self {
        Self::Local {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<RemoteStoreError> for ServiceError {
    #[track_caller]
    fn from(source: RemoteStoreError) -> Self {
        Self::Remote {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for ServiceError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for ServiceError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
