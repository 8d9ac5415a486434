//! Field validators and input formatters.
//!
//! Every function here is pure: string in, verdict or formatted string
//! out. The lifecycle controller composes them into form-level checks
//! that report all failing fields at once.

pub mod age_bounds;
pub mod field_error;

pub use age_bounds::AgeBounds;
pub use field_error::FieldError;

use crate::{NewRegistration, RecordEdit};

/// Digit-only projection of an input string.
pub fn digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// A name is valid when its trimmed length is at least 3.
pub fn valid_name(input: &str) -> bool {
    input.trim().chars().count() >= 3
}

/// Single-level structural email check: `local@domain.tld` where no
/// part is empty or contains whitespace or `@`. Deliberately not RFC
/// 5322.
pub fn valid_email(input: &str) -> bool {
    let part_ok = |s: &str| !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '@');

    let Some((local, rest)) = input.split_once('@') else {
        return false;
    };
    let Some(dot) = rest.rfind('.') else {
        return false;
    };
    part_ok(local) && part_ok(&rest[..dot]) && part_ok(&rest[dot + 1..])
}

/// An age is valid when it parses as an integer inside the given
/// bounds. Registration and edit use different lower bounds; see
/// [`AgeBounds`].
pub fn valid_age(input: &str, bounds: AgeBounds) -> bool {
    match input.trim().parse::<i64>() {
        Ok(age) => age >= bounds.min() && age <= bounds.max(),
        Err(_) => false,
    }
}

/// A phone is valid when its digit projection has exactly 11 digits.
pub fn valid_phone(input: &str) -> bool {
    digits(input).len() == 11
}

/// A tax id is valid when its digit projection has exactly 11 digits.
pub fn valid_tax_id(input: &str) -> bool {
    digits(input).len() == 11
}

/// Progressive phone mask: `(DD`, `(DD) DDDDD`, `(DD) DDDDD-DDDD`.
///
/// Strips non-digits first, so it is idempotent on already-formatted
/// input, and ignores anything past the 11th digit.
pub fn format_phone(input: &str) -> String {
    let d: String = input.chars().filter(char::is_ascii_digit).take(11).collect();

    match d.len() {
        0 => String::new(),
        1..=2 => format!("({d}"),
        3..=7 => format!("({}) {}", &d[..2], &d[2..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}

/// Progressive tax-id mask: `DDD`, `DDD.DDD`, `DDD.DDD.DDD`,
/// `DDD.DDD.DDD-DD`. Idempotent, truncates past 11 digits.
pub fn format_tax_id(input: &str) -> String {
    let d: String = input.chars().filter(char::is_ascii_digit).take(11).collect();

    match d.len() {
        0 => String::new(),
        1..=3 => d,
        4..=6 => format!("{}.{}", &d[..3], &d[3..]),
        7..=9 => format!("{}.{}.{}", &d[..3], &d[3..6], &d[6..]),
        _ => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
    }
}

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validate a registration form, collecting every failing field.
///
/// Registration uses the 13-120 age bounds, unlike the edit flow.
pub fn validate_registration(input: &NewRegistration) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let required = [
        ("name", &input.name),
        ("age", &input.age),
        ("phone", &input.phone),
        ("taxId", &input.tax_id),
        ("email", &input.email),
        ("password", &input.password),
        ("confirmPassword", &input.confirm_password),
    ];
    for (field, value) in required {
        if value.is_empty() {
            errors.push(FieldError::new(field, "field is required"));
        }
    }
    if !errors.is_empty() {
        return errors;
    }

    if !valid_age(&input.age, AgeBounds::Registration) {
        errors.push(FieldError::new("age", "age must be between 13 and 120"));
    }
    if !valid_tax_id(&input.tax_id) {
        errors.push(FieldError::new("taxId", "tax id must have 11 digits"));
    }
    if input.password != input.confirm_password {
        errors.push(FieldError::new("confirmPassword", "passwords do not match"));
    }
    if input.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            "password must have at least 6 characters",
        ));
    }

    errors
}

/// Validate an edit form, collecting every failing field.
///
/// The edit flow checks name, email, age and phone, with the stricter
/// 18-120 age bounds. The tax id is passed through unchecked, as it
/// always has been on this form.
pub fn validate_edit(input: &RecordEdit) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !valid_name(&input.name) {
        errors.push(FieldError::new(
            "name",
            "name must have at least 3 characters",
        ));
    }
    if !valid_email(&input.email) {
        errors.push(FieldError::new("email", "email is not valid"));
    }
    if !valid_age(&input.age, AgeBounds::Edit) {
        errors.push(FieldError::new("age", "age must be between 18 and 120"));
    }
    if !valid_phone(&input.phone) {
        errors.push(FieldError::new("phone", "phone must have 11 digits"));
    }

    errors
}
