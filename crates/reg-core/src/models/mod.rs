pub mod directory_user;
pub mod new_registration;
pub mod record_edit;
pub mod user_record;
