use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No users registered {location}")]
    NoUsersRegistered { location: ErrorLocation },

    #[error("User not found: {email} {location}")]
    UserNotFound {
        email: String,
        location: ErrorLocation,
    },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Email is required {location}")]
    EmailRequired { location: ErrorLocation },

    #[error("Email is not valid {location}")]
    InvalidEmail { location: ErrorLocation },

    #[error("Too many reset attempts, try again later {location}")]
    TooManyRequests { location: ErrorLocation },

    #[error("Reset email delivery failed: {message} {location}")]
    ResetDelivery {
        message: String,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    Hash {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
