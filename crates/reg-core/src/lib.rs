pub mod models;
pub mod reconcile;
pub mod validate;

pub use models::directory_user::DirectoryUser;
pub use models::new_registration::NewRegistration;
pub use models::record_edit::RecordEdit;
pub use models::user_record::UserRecord;
pub use reconcile::merge_records;
pub use validate::{AgeBounds, FieldError};

#[cfg(test)]
mod tests;
