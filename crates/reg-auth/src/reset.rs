//! Password reset request flow.

use crate::{AuthError, Result};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::info;
use thiserror::Error;

/// Why the external mail collaborator refused to send a reset link.
#[derive(Error, Debug)]
pub enum ResetMailerError {
    #[error("no account for this email")]
    UserNotFound,
    #[error("email rejected as invalid")]
    InvalidEmail,
    #[error("too many requests")]
    TooManyRequests,
    #[error("{0}")]
    Other(String),
}

/// External collaborator that delivers the reset link.
#[async_trait]
pub trait ResetMailer: Send + Sync {
    async fn send_reset_email(&self, email: &str) -> std::result::Result<(), ResetMailerError>;
}

/// Validate the email and ask the mailer to send a reset link.
///
/// The mailer's refusal codes are translated into the auth error
/// taxonomy so the caller can show a specific message for each.
pub async fn request_password_reset(mailer: &dyn ResetMailer, email: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(AuthError::EmailRequired {
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if !reg_core::validate::valid_email(email) {
        return Err(AuthError::InvalidEmail {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    match mailer.send_reset_email(email).await {
        Ok(()) => {
            info!("password reset email sent to {email}");
            Ok(())
        }
        Err(ResetMailerError::UserNotFound) => Err(AuthError::UserNotFound {
            email: email.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
        Err(ResetMailerError::InvalidEmail) => Err(AuthError::InvalidEmail {
            location: ErrorLocation::from(Location::caller()),
        }),
        Err(ResetMailerError::TooManyRequests) => Err(AuthError::TooManyRequests {
            location: ErrorLocation::from(Location::caller()),
        }),
        Err(ResetMailerError::Other(message)) => Err(AuthError::ResetDelivery {
            message,
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
