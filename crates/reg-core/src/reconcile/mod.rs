//! Reconciliation of the local and remote record sets.

use crate::UserRecord;

use std::collections::HashSet;

/// Merge the two record sets into one display list.
///
/// Local records come first, in their original order, and always win
/// on email collision. Remote records whose email is not present
/// locally are appended afterwards in remote order; there is no
/// interleaving by timestamp. The merge is recomputed on every load
/// and never written back to either store.
pub fn merge_records(local: Vec<UserRecord>, remote: Vec<UserRecord>) -> Vec<UserRecord> {
    let local_emails: HashSet<String> = local.iter().map(|r| r.email.clone()).collect();

    let mut merged = local;
    merged.extend(
        remote
            .into_iter()
            .filter(|r| !local_emails.contains(&r.email)),
    );
    merged
}
