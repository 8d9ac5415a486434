//! Record lifecycle controller.
//!
//! Orchestrates create/update/delete across the local slot store and
//! the remote collection. The local store is the authority: its
//! failures abort an operation, while remote failures are recorded on
//! the outcome and never roll back a local write that already
//! succeeded. There is no retry queue; a dropped remote write stays
//! dropped until the next full edit of the same record.

use crate::outcome::{DualWriteOutcome, MutationPhase, RemoteOutcome};
use crate::{Result, ServiceError};

use reg_auth::Session;
use reg_core::{DirectoryUser, NewRegistration, RecordEdit, UserRecord, merge_records, validate};
use reg_store::{KeyValueStore, LocalRecordStore, RecordStore, RemoteCollection};

use std::sync::Arc;

use log::{debug, info, warn};
use serde_json::json;

pub struct RecordService {
    local: LocalRecordStore,
    remote: Arc<dyn RecordStore>,
    directory: Arc<dyn RecordStore>,
    session: Session,
}

impl RecordService {
    pub fn new(
        local: LocalRecordStore,
        remote: Arc<dyn RecordStore>,
        directory: Arc<dyn RecordStore>,
        session: Session,
    ) -> Self {
        Self {
            local,
            remote,
            directory,
            session,
        }
    }

    /// Wire up the production stores from configuration.
    pub async fn from_config(config: &reg_config::Config, session: Session) -> Result<Self> {
        let db_path = config.local_db_path()?;
        let slots = KeyValueStore::open(&db_path).await?;
        let local = LocalRecordStore::new(slots, config.local.slot.clone());

        let remote = Arc::new(RemoteCollection::new(
            &config.remote.base_url,
            &config.remote.collection,
        ));
        let directory = Arc::new(RemoteCollection::new(
            &config.remote.base_url,
            &config.remote.directory_collection,
        ));

        Ok(Self::new(local, remote, directory, session))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Register a new record. Local-only: registration never pushes
    /// to the remote collection.
    ///
    /// All failing fields are reported at once. A duplicate email is
    /// refused before anything is written.
    pub async fn register(&self, input: NewRegistration) -> Result<DualWriteOutcome> {
        debug!("register: {}", MutationPhase::Validating);
        let errors = validate::validate_registration(&input);
        if !errors.is_empty() {
            return Err(ServiceError::validation(errors));
        }

        let password_hash = reg_auth::hash_password(&input.password)?;

        debug!("register: {}", MutationPhase::Persisting);
        let mut records = self.local.load_all().await?;
        if records.iter().any(|r| r.email == input.email) {
            return Err(ServiceError::already_exists(input.email));
        }

        // Validation guarantees the parse; normalization drops
        // leading zeroes and surrounding whitespace.
        let age = match input.age.trim().parse::<i64>() {
            Ok(n) => n.to_string(),
            Err(_) => input.age.clone(),
        };

        let record = UserRecord::new_local(
            input.name,
            input.email,
            age,
            validate::format_phone(&input.phone),
            validate::digits(&input.tax_id),
            password_hash,
        );

        records.push(record.clone());
        self.local.save_all(&records).await?;

        info!(
            "registered {} ({} records in local store)",
            record.name,
            records.len()
        );
        debug!("register: {}", MutationPhase::Settled);
        Ok(DualWriteOutcome {
            record,
            remote: RemoteOutcome::Skipped,
        })
    }

    /// Update an existing record in place.
    ///
    /// The local write must succeed; the remote update is then
    /// attempted best-effort and a failure there becomes a secondary
    /// warning on the outcome, never a rollback.
    pub async fn update(&self, edit: RecordEdit) -> Result<DualWriteOutcome> {
        debug!("update {}: {}", edit.id, MutationPhase::Validating);
        let errors = validate::validate_edit(&edit);
        if !errors.is_empty() {
            return Err(ServiceError::validation(errors));
        }

        debug!("update {}: {}", edit.id, MutationPhase::Persisting);
        let mut records = self.local.load_all().await?;
        let Some(index) = records.iter().position(|r| r.id == edit.id) else {
            warn!("update target {} not in local store", edit.id);
            return Err(ServiceError::not_found(edit.id));
        };

        let existing = &records[index];
        let tax_id = match validate::digits(&edit.tax_id) {
            d if d.is_empty() => None,
            d => Some(d),
        };
        let updated = UserRecord {
            id: existing.id.clone(),
            name: edit.name,
            email: edit.email,
            age: Some(edit.age),
            phone: validate::format_phone(&edit.phone),
            tax_id,
            // Creation time, credentials and auth linkage survive edits.
            created_at: existing.created_at.clone(),
            password_hash: existing.password_hash.clone(),
            auth_uid: existing.auth_uid.clone(),
        };

        records[index] = updated.clone();
        self.local.save_all(&records).await?;

        let fields = json!({
            "nome": updated.name,
            "email": updated.email,
            "idade": updated.age,
            "telefone": updated.phone,
            "cpf": updated.tax_id,
        });
        let remote = match self.remote.update(&updated.id, fields).await {
            Ok(()) => RemoteOutcome::Applied,
            Err(e) => {
                warn!("remote update of {} failed, local result stands: {e}", updated.id);
                RemoteOutcome::Failed(e)
            }
        };

        debug!("update {}: {}", updated.id, MutationPhase::Settled);
        Ok(DualWriteOutcome {
            record: updated,
            remote,
        })
    }

    /// Delete a record from the merged view.
    ///
    /// The remote delete is attempted first, best-effort. Deleting
    /// the record of the signed-in session is refused, leaving the
    /// local store untouched (the remote attempt has already
    /// happened by then, as it always has in this flow).
    pub async fn delete(&self, id: &str) -> Result<DualWriteOutcome> {
        let target = self
            .load_merged()
            .await?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| ServiceError::not_found(id))?;

        let remote = match self.remote.delete(id).await {
            Ok(()) => RemoteOutcome::Applied,
            Err(e) => {
                warn!("remote delete of {id} failed: {e}");
                RemoteOutcome::Failed(e)
            }
        };

        if self.session.current_email().as_deref() == Some(target.email.as_str()) {
            return Err(ServiceError::self_delete_forbidden(target.email));
        }

        if let Some(uid) = &target.auth_uid {
            // Deleting the remote auth account requires that account's
            // own credentials; recorded here and left to an operator.
            info!("record {} is linked to auth account {uid}; account not deleted", target.id);
        }

        debug!("delete {id}: {}", MutationPhase::Persisting);
        let mut records = self.local.load_all().await?;
        records.retain(|r| r.id != id);
        self.local.save_all(&records).await?;

        info!("deleted record {id}");
        Ok(DualWriteOutcome {
            record: target,
            remote,
        })
    }

    /// Load the merged display list: local records first, then remote
    /// records whose email is not present locally.
    ///
    /// A remote failure yields an empty remote set; the merge then
    /// proceeds with local data only.
    pub async fn load_merged(&self) -> Result<Vec<UserRecord>> {
        let local = self.local.load_all().await?;

        let remote = match self.remote.list_all().await {
            Ok(documents) => documents
                .into_iter()
                .filter_map(|d| {
                    let id = d.id.clone();
                    match d.decode::<UserRecord>() {
                        Ok(record) => Some(record),
                        Err(e) => {
                            warn!("skipping undecodable document {id}: {e}");
                            None
                        }
                    }
                })
                .collect(),
            Err(e) => {
                warn!("remote list failed, showing local records only: {e}");
                Vec::new()
            }
        };

        Ok(merge_records(local, remote))
    }

    /// List the secondary read-only directory collection.
    ///
    /// Purely remote: unlike [`load_merged`](Self::load_merged) there
    /// is no local fallback, so a remote failure surfaces.
    pub async fn list_directory(&self) -> Result<Vec<DirectoryUser>> {
        let documents = self.directory.list_all().await?;
        let users = documents
            .into_iter()
            .map(|d| d.decode::<DirectoryUser>())
            .collect::<std::result::Result<Vec<_>, _>>()?;

        info!("directory listing returned {} users", users.len());
        Ok(users)
    }

    /// Drop every locally stored record.
    pub async fn clear_all(&self) -> Result<()> {
        self.local.clear().await?;
        info!("cleared local record store");
        Ok(())
    }

    /// Authenticate against locally registered records and sign the
    /// session in.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserRecord> {
        let records = self.local.load_all().await?;
        Ok(reg_auth::login(&records, email, password, &self.session)?)
    }

    pub fn logout(&self) {
        info!("signing out");
        self.session.sign_out();
    }
}
