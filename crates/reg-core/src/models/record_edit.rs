/// Edited fields for an existing record, keyed by its id.
///
/// Carries the editable subset only; creation timestamp, password hash
/// and auth uid are preserved from the stored record during the update.
#[derive(Debug, Clone, Default)]
pub struct RecordEdit {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: String,
    pub phone: String,
    pub tax_id: String,
}
