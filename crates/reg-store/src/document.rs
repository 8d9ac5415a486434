use crate::{RemoteResult, RemoteStoreError};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A stored document: the server-generated id plus its fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub fields: Value,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Value) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Decode into a typed record, folding the document id into the
    /// field object first (records carry their id inline).
    pub fn decode<T: DeserializeOwned>(self) -> RemoteResult<T> {
        let mut value = self.fields;
        let Some(map) = value.as_object_mut() else {
            return Err(RemoteStoreError::decode(format!(
                "document {} fields are not an object",
                self.id
            )));
        };
        map.insert("id".to_string(), Value::String(self.id));

        serde_json::from_value(value).map_err(|e| RemoteStoreError::decode(e.to_string()))
    }
}
