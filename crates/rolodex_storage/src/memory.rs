#![forbid(unsafe_code)]

use rolodex_contracts::contact::{Column, ColumnValue, ContactId, DataRow};
use rolodex_contracts::group::ContactGroup;
use rolodex_contracts::save::{WriteRecord, WriteTarget};

use crate::store::{ContactStore, StorageError};

/// In-memory reference store: one flat row table plus a group table. Write
/// batches are applied by expanding each record into a tagged row, stamping
/// every row of the contact with the display-name projection the way the
/// device store denormalizes it.
#[derive(Debug, Default, Clone)]
pub struct MemoryContactStore {
    rows: Vec<DataRow>,
    groups: Vec<ContactGroup>,
    next_contact_seq: u64,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test/seeding hook: place a raw row directly into the table.
    pub fn insert_row(&mut self, row: DataRow) {
        self.rows.push(row);
    }

    pub fn insert_group(&mut self, group: ContactGroup) {
        self.groups.push(group);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn allocate_contact_id(&mut self) -> Result<ContactId, StorageError> {
        self.next_contact_seq += 1;
        Ok(ContactId::new(self.next_contact_seq.to_string())?)
    }

    fn contains_contact(&self, id: &ContactId) -> bool {
        self.rows
            .iter()
            .any(|row| row.contact_id.as_ref() == Some(id))
    }
}

impl ContactStore for MemoryContactStore {
    fn query_rows(&self, kinds: &[&str]) -> Result<Vec<DataRow>, StorageError> {
        Ok(self
            .rows
            .iter()
            .filter(|row| kinds.contains(&row.mime_kind.as_str()))
            .cloned()
            .collect())
    }

    fn query_groups(&self) -> Result<Vec<ContactGroup>, StorageError> {
        Ok(self.groups.clone())
    }

    fn insert_or_update(
        &mut self,
        target: &WriteTarget,
        records: &[WriteRecord],
    ) -> Result<ContactId, StorageError> {
        let contact_id = match target {
            WriteTarget::NewContact => self.allocate_contact_id()?,
            WriteTarget::ExistingContact(id) => {
                if !self.contains_contact(id) {
                    return Err(StorageError::MissingRow {
                        table: "contact_data",
                        key: id.as_str().to_string(),
                    });
                }
                id.clone()
            }
        };

        // One contact's full field set replaces whatever was there before.
        self.rows
            .retain(|row| row.contact_id.as_ref() != Some(&contact_id));

        let display_name = display_name_projection(records);
        for record in records {
            let mut row = DataRow::new(record.kind.mime_kind(), Some(contact_id.clone()));
            row.columns = record.fields.clone();
            if let Some(name) = &display_name {
                row.columns
                    .insert(Column::DisplayName, ColumnValue::Text(name.clone()));
            }
            self.rows.push(row);
        }

        Ok(contact_id)
    }

    fn delete(&mut self, id: &ContactId) -> Result<(), StorageError> {
        if !self.contains_contact(id) {
            return Err(StorageError::MissingRow {
                table: "contact_data",
                key: id.as_str().to_string(),
            });
        }
        self.rows.retain(|row| row.contact_id.as_ref() != Some(id));
        Ok(())
    }
}

/// The store-side denormalization: given name + family name, trimmed.
fn display_name_projection(records: &[WriteRecord]) -> Option<String> {
    let name = records
        .iter()
        .find(|r| matches!(r.kind, rolodex_contracts::save::RecordKind::StructuredName))?;
    let given = name.text(Column::GivenName).unwrap_or_default();
    let family = name.text(Column::FamilyName).unwrap_or_default();
    let joined = format!("{given} {family}");
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_contracts::contact::mime;
    use rolodex_contracts::save::RecordKind;

    fn name_record(given: &str, family: &str) -> WriteRecord {
        WriteRecord::new(RecordKind::StructuredName)
            .put_text(Column::GivenName, given)
            .put_text(Column::FamilyName, family)
    }

    #[test]
    fn at_mem_01_new_contact_write_assigns_an_identifier_and_stamps_rows() {
        let mut store = MemoryContactStore::new();
        let records = vec![
            name_record("Ada", "Lovelace"),
            WriteRecord::new(RecordKind::Phone).put_text(Column::Data, "555"),
        ];
        let id = store
            .insert_or_update(&WriteTarget::NewContact, &records)
            .unwrap();

        let rows = store.query_rows(&[mime::NAME, mime::PHONE]).unwrap();
        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.contact_id.as_ref(), Some(&id));
            assert_eq!(row.text(Column::DisplayName), Some("Ada Lovelace"));
        }
    }

    #[test]
    fn at_mem_02_update_against_missing_identifier_is_a_storage_error() {
        let mut store = MemoryContactStore::new();
        let target = WriteTarget::ExistingContact(ContactId::new("404").unwrap());
        let err = store
            .insert_or_update(&target, &[name_record("A", "B")])
            .unwrap_err();
        assert!(matches!(err, StorageError::MissingRow { .. }));
    }

    #[test]
    fn at_mem_03_update_replaces_the_full_field_set() {
        let mut store = MemoryContactStore::new();
        let id = store
            .insert_or_update(
                &WriteTarget::NewContact,
                &[
                    name_record("Ada", "Lovelace"),
                    WriteRecord::new(RecordKind::Phone).put_text(Column::Data, "111"),
                    WriteRecord::new(RecordKind::Phone).put_text(Column::Data, "222"),
                ],
            )
            .unwrap();

        store
            .insert_or_update(
                &WriteTarget::ExistingContact(id.clone()),
                &[
                    name_record("Ada", "King"),
                    WriteRecord::new(RecordKind::Phone).put_text(Column::Data, "333"),
                ],
            )
            .unwrap();

        let phones = store.query_rows(&[mime::PHONE]).unwrap();
        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].text(Column::Data), Some("333"));
        assert_eq!(phones[0].text(Column::DisplayName), Some("Ada King"));
    }

    #[test]
    fn at_mem_04_delete_removes_every_row_for_the_identifier() {
        let mut store = MemoryContactStore::new();
        let id = store
            .insert_or_update(
                &WriteTarget::NewContact,
                &[
                    name_record("Ada", "Lovelace"),
                    WriteRecord::new(RecordKind::Phone).put_text(Column::Data, "111"),
                ],
            )
            .unwrap();
        store.delete(&id).unwrap();
        assert_eq!(store.row_count(), 0);
        assert!(matches!(
            store.delete(&id),
            Err(StorageError::MissingRow { .. })
        ));
    }

    #[test]
    fn at_mem_05_query_filters_by_kind_discriminator() {
        let mut store = MemoryContactStore::new();
        store.insert_row(
            DataRow::new(mime::PHONE, ContactId::new("1").ok()).with_text(Column::Data, "555"),
        );
        store.insert_row(
            DataRow::new(mime::EMAIL, ContactId::new("1").ok()).with_text(Column::Data, "a@b.c"),
        );
        let rows = store.query_rows(&[mime::EMAIL]).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].mime_kind, mime::EMAIL);
    }
}
