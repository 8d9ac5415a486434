pub mod document;
pub mod error;
pub mod local;
pub mod record_store;
pub mod remote;

pub use document::Document;
pub use error::{LocalResult, LocalStoreError, RemoteResult, RemoteStoreError};
pub use local::key_value_store::KeyValueStore;
pub use local::local_record_store::LocalRecordStore;
pub use record_store::RecordStore;
pub use remote::remote_collection::RemoteCollection;
