use crate::{KeyValueStore, LocalResult};

use reg_core::UserRecord;

use log::{debug, warn};

/// The local record set: one named slot holding the full record array
/// as a single JSON blob, rewritten wholesale on every mutation.
#[derive(Debug, Clone)]
pub struct LocalRecordStore {
    slots: KeyValueStore,
    slot: String,
}

impl LocalRecordStore {
    pub fn new(slots: KeyValueStore, slot: impl Into<String>) -> Self {
        Self {
            slots,
            slot: slot.into(),
        }
    }

    /// Load every locally stored record.
    ///
    /// An absent slot yields an empty list. So does malformed JSON:
    /// the parse failure is logged and swallowed rather than surfaced,
    /// matching how this slot has always been read.
    pub async fn load_all(&self) -> LocalResult<Vec<UserRecord>> {
        let Some(raw) = self.slots.get(&self.slot).await? else {
            debug!("slot \"{}\" is empty", self.slot);
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<UserRecord>>(&raw) {
            Ok(records) => {
                debug!("loaded {} records from slot \"{}\"", records.len(), self.slot);
                Ok(records)
            }
            Err(e) => {
                warn!(
                    "slot \"{}\" holds malformed JSON, treating as empty: {e}",
                    self.slot
                );
                Ok(Vec::new())
            }
        }
    }

    /// Serialize and overwrite the whole slot in a single write.
    pub async fn save_all(&self, records: &[UserRecord]) -> LocalResult<()> {
        let raw = serde_json::to_string(records)?;
        self.slots.set(&self.slot, &raw).await?;
        debug!("saved {} records to slot \"{}\"", records.len(), self.slot);
        Ok(())
    }

    /// Drop the slot entirely (the "clear all" flow).
    pub async fn clear(&self) -> LocalResult<()> {
        self.slots.remove(&self.slot).await
    }
}
