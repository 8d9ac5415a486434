/// Raw registration form input, exactly as typed.
///
/// Everything is a string at this point; validation and normalization
/// happen in the lifecycle controller before a `UserRecord` exists.
#[derive(Debug, Clone, Default)]
pub struct NewRegistration {
    pub name: String,
    pub age: String,
    pub phone: String,
    pub tax_id: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}
