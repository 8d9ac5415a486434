use serde::{Deserialize, Serialize};

/// Entry in the secondary `users` directory collection.
///
/// That collection predates the main one and uses English field names,
/// except for `idade` which was never renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "idade", default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    pub phone: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
