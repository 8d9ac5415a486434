use crate::{Document, RemoteResult};

use async_trait::async_trait;
use serde_json::Value;

/// Capability interface over a document collection.
///
/// Both the production HTTP client and the in-memory doubles used in
/// tests implement this; the lifecycle controller only ever sees the
/// trait. Every operation is independently fallible and callers must
/// treat remote failure as non-fatal to local-store success.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Create a document. The server assigns the creation timestamp
    /// and the id; a client-supplied `createdAt` is discarded.
    async fn create(&self, fields: Value) -> RemoteResult<String>;

    /// Read a single document. Absent ids are `None`, not an error.
    async fn read(&self, id: &str) -> RemoteResult<Option<Document>>;

    /// Partial field overwrite. Fails with `NotFound` if the id is
    /// absent.
    async fn update(&self, id: &str, fields: Value) -> RemoteResult<()>;

    /// Delete a document. Idempotent: deleting an absent id succeeds.
    async fn delete(&self, id: &str) -> RemoteResult<()>;

    /// List every document, ordered by creation timestamp descending.
    async fn list_all(&self) -> RemoteResult<Vec<Document>>;
}
