pub mod error;
pub mod logger;
pub mod outcome;
pub mod service;

pub use error::{Result, ServiceError};
pub use outcome::{DualWriteOutcome, MutationPhase, RemoteOutcome};
pub use service::RecordService;
