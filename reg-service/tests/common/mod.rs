#![allow(dead_code)]

use reg_auth::Session;
use reg_core::NewRegistration;
use reg_service::RecordService;
use reg_store::{
    Document, KeyValueStore, LocalRecordStore, RecordStore, RemoteResult, RemoteStoreError,
};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};
use uuid::Uuid;

pub const SLOT: &str = "usuarios";

/// In-memory document collection standing in for the remote store.
#[derive(Default)]
pub struct InMemoryRemote {
    documents: Mutex<Vec<(u64, Document)>>,
    seq: AtomicU64,
}

impl InMemoryRemote {
    /// Seed a document under a caller-chosen id, the way records that
    /// were synced once would exist remotely.
    pub fn insert_with_id(&self, id: &str, fields: Value) {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        self.documents
            .lock()
            .unwrap()
            .push((seq, Document::new(id, fields)));
    }

    pub fn contains(&self, id: &str) -> bool {
        self.documents
            .lock()
            .unwrap()
            .iter()
            .any(|(_, d)| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }
}

#[async_trait]
impl RecordStore for InMemoryRemote {
    async fn create(&self, fields: Value) -> RemoteResult<String> {
        let id = Uuid::new_v4().to_string();
        let seq = self.seq.fetch_add(1, Ordering::SeqCst);

        let mut fields = fields;
        if let Some(map) = fields.as_object_mut() {
            map.remove("createdAt");
            map.insert("createdAt".to_string(), json!(seq));
        }

        self.documents
            .lock()
            .unwrap()
            .push((seq, Document::new(id.clone(), fields)));
        Ok(id)
    }

    async fn read(&self, id: &str) -> RemoteResult<Option<Document>> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .find(|(_, d)| d.id == id)
            .map(|(_, d)| d.clone()))
    }

    async fn update(&self, id: &str, fields: Value) -> RemoteResult<()> {
        let mut documents = self.documents.lock().unwrap();
        let Some((_, document)) = documents.iter_mut().find(|(_, d)| d.id == id) else {
            return Err(RemoteStoreError::not_found(id));
        };

        if let (Some(target), Some(patch)) = (document.fields.as_object_mut(), fields.as_object())
        {
            for (key, value) in patch {
                target.insert(key.clone(), value.clone());
            }
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> RemoteResult<()> {
        self.documents.lock().unwrap().retain(|(_, d)| d.id != id);
        Ok(())
    }

    async fn list_all(&self) -> RemoteResult<Vec<Document>> {
        let mut documents = self.documents.lock().unwrap().clone();
        documents.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(documents.into_iter().map(|(_, d)| d).collect())
    }
}

/// Remote double where every operation fails at the network layer.
pub struct FailingRemote;

#[async_trait]
impl RecordStore for FailingRemote {
    async fn create(&self, _fields: Value) -> RemoteResult<String> {
        Err(RemoteStoreError::network("connection refused"))
    }

    async fn read(&self, _id: &str) -> RemoteResult<Option<Document>> {
        Err(RemoteStoreError::network("connection refused"))
    }

    async fn update(&self, _id: &str, _fields: Value) -> RemoteResult<()> {
        Err(RemoteStoreError::network("connection refused"))
    }

    async fn delete(&self, _id: &str) -> RemoteResult<()> {
        Err(RemoteStoreError::network("connection refused"))
    }

    async fn list_all(&self) -> RemoteResult<Vec<Document>> {
        Err(RemoteStoreError::network("connection refused"))
    }
}

/// Service over an in-memory local store and the given remote double.
/// The returned `KeyValueStore` shares state with the service's local
/// store, for raw slot inspection.
pub async fn service_with(
    remote: Arc<dyn RecordStore>,
) -> (RecordService, KeyValueStore, Session) {
    let slots = KeyValueStore::open_in_memory().await.unwrap();
    let local = LocalRecordStore::new(slots.clone(), SLOT);
    let session = Session::new();
    let service = RecordService::new(local, remote.clone(), remote, session.clone());
    (service, slots, session)
}

pub fn registration(name: &str, email: &str) -> NewRegistration {
    NewRegistration {
        name: name.to_string(),
        age: "30".to_string(),
        phone: "11999999999".to_string(),
        tax_id: "123.456.789-09".to_string(),
        email: email.to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
    }
}

pub fn remote_user_fields(name: &str, email: &str) -> Value {
    json!({
        "nome": name,
        "email": email,
        "telefone": "(21) 98888-7777",
    })
}
