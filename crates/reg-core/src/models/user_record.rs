//! User record - the profile entry held in both stores.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A user's profile entry.
///
/// Serialized field names match the wire format of both stores: the
/// local slot and the remote `usuarios` collection use the Portuguese
/// names (`nome`, `idade`, `telefone`, `cpf`, `data`).
///
/// `email` is the de-duplication key across the two stores: the merged
/// view never contains two records with the same email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Millisecond-timestamp string for locally created records,
    /// server-generated document id for remote records.
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    /// String-encoded integer. Optional because remote seeds may omit it.
    #[serde(rename = "idade", default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    /// Stored in display format `(DD) DDDDD-DDDD`.
    #[serde(rename = "telefone")]
    pub phone: String,
    /// Digit-only projection, exactly 11 digits when valid.
    #[serde(rename = "cpf", default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    /// ISO-8601 timestamp. Older records carried this as `dataCriacao`.
    #[serde(
        rename = "data",
        alias = "dataCriacao",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
    /// Argon2 PHC string. Present only on locally registered records.
    #[serde(rename = "senhaHash", default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// Remote auth account id, when the record has been synced to one.
    #[serde(rename = "uid", default, skip_serializing_if = "Option::is_none")]
    pub auth_uid: Option<String>,
}

impl UserRecord {
    /// Create a locally registered record. The id is derived from the
    /// current time in milliseconds, matching how local records have
    /// always been keyed.
    pub fn new_local(
        name: String,
        email: String,
        age: String,
        phone: String,
        tax_id: String,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            name,
            email,
            age: Some(age),
            phone,
            tax_id: Some(tax_id),
            created_at: Some(now.to_rfc3339()),
            password_hash: Some(password_hash),
            auth_uid: None,
        }
    }
}
