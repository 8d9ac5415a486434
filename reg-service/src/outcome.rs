use reg_core::UserRecord;
use reg_store::RemoteStoreError;

use std::fmt;

/// Phases a mutation passes through. Logged at debug level as the
/// controller advances; a returned outcome is always settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationPhase {
    Idle,
    Validating,
    Persisting,
    Settled,
}

impl fmt::Display for MutationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Persisting => "persisting",
            Self::Settled => "settled",
        };
        f.write_str(name)
    }
}

/// How the remote side of a dual write ended.
///
/// `Failed` never fails the enclosing operation; it is the warning a
/// caller may surface after the local write already won.
#[derive(Debug)]
pub enum RemoteOutcome {
    Applied,
    /// The flow does not push to the remote store (registration is
    /// local-only).
    Skipped,
    Failed(RemoteStoreError),
}

impl RemoteOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Result of a mutation across both stores.
///
/// Local success is implied by receiving this at all; the remote
/// outcome is carried separately so callers and tests can assert on
/// both independently instead of losing the remote side to a log line.
#[derive(Debug)]
pub struct DualWriteOutcome {
    /// The record as persisted locally (or, for delete, as removed).
    pub record: UserRecord,
    pub remote: RemoteOutcome,
}

impl DualWriteOutcome {
    /// The secondary warning to show, if the remote side failed.
    pub fn remote_warning(&self) -> Option<&RemoteStoreError> {
        match &self.remote {
            RemoteOutcome::Failed(error) => Some(error),
            _ => None,
        }
    }
}
