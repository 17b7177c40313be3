#![forbid(unsafe_code)]

use rolodex_contracts::contact::{ContactId, DataRow};
use rolodex_contracts::group::ContactGroup;
use rolodex_contracts::save::{WriteRecord, WriteTarget};
use rolodex_contracts::ContractViolation;

#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    MissingRow { table: &'static str, key: String },
    ContractViolation(ContractViolation),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRow { table, key } => write!(f, "no row in {table} for key {key}"),
            Self::ContractViolation(ContractViolation::InvalidValue { field, reason }) => {
                write!(f, "invalid {field}: {reason}")
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<ContractViolation> for StorageError {
    fn from(v: ContractViolation) -> Self {
        StorageError::ContractViolation(v)
    }
}

/// Narrow interface the aggregation and persistence layers call through.
/// The store is a fallible external resource; every operation may fail and a
/// failure is fatal to the calling operation.
pub trait ContactStore {
    /// Rows whose kind discriminator is in `kinds`, with the projection
    /// columns the store holds for them. Order is the store's own.
    fn query_rows(&self, kinds: &[&str]) -> Result<Vec<DataRow>, StorageError>;

    fn query_groups(&self) -> Result<Vec<ContactGroup>, StorageError>;

    /// Atomically replaces the target contact's field set with `records`.
    /// Returns the identifier the write landed on (assigned for new
    /// contacts).
    fn insert_or_update(
        &mut self,
        target: &WriteTarget,
        records: &[WriteRecord],
    ) -> Result<ContactId, StorageError>;

    fn delete(&mut self, id: &ContactId) -> Result<(), StorageError>;
}
