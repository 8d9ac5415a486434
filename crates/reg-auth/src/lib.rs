pub mod error;
pub mod login;
pub mod password;
pub mod reset;
pub mod session;

pub use error::{AuthError, Result};
pub use login::login;
pub use password::{hash_password, verify_password};
pub use reset::{ResetMailer, ResetMailerError, request_password_reset};
pub use session::Session;
