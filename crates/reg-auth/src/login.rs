use crate::{AuthError, Result, Session, password};

use reg_core::UserRecord;

use std::panic::Location;

use error_location::ErrorLocation;
use log::info;

/// Authenticate against the locally registered records.
///
/// Only records that carry a password hash can authenticate; remote
/// seeds without one fail as invalid credentials rather than being
/// waved through on email alone. On success the session is signed in
/// and the matching record is returned.
pub fn login(
    records: &[UserRecord],
    email: &str,
    password_input: &str,
    session: &Session,
) -> Result<UserRecord> {
    if records.is_empty() {
        return Err(AuthError::NoUsersRegistered {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let user = records
        .iter()
        .find(|r| r.email == email)
        .ok_or_else(|| AuthError::UserNotFound {
            email: email.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let Some(stored_hash) = user.password_hash.as_deref() else {
        return Err(AuthError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        });
    };

    if !password::verify_password(password_input, stored_hash)? {
        return Err(AuthError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    session.sign_in(&user.email);
    info!("login succeeded for {}", user.name);
    Ok(user.clone())
}
